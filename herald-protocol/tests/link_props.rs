//! Property tests for the sentence link
//!
//! Host-side checks that the checksummed framer holds its invariants for
//! arbitrary input streams.

use herald_core::registry::{Command, Registry};
use herald_core::traits::{ByteSink, ByteSource};
use herald_core::Outcome;
use herald_protocol::{LinkConfig, SentenceLink};
use proptest::prelude::*;

struct PipeIo {
    rx: Vec<u8>,
    pos: usize,
    tx: Vec<u8>,
}

impl PipeIo {
    fn new(input: &[u8]) -> Self {
        Self {
            rx: input.to_vec(),
            pos: 0,
            tx: Vec::new(),
        }
    }
}

impl ByteSource for PipeIo {
    fn has_data(&self) -> bool {
        self.pos < self.rx.len()
    }

    fn read(&mut self) -> Option<u8> {
        let byte = *self.rx.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

impl ByteSink for PipeIo {
    fn write(&mut self, bytes: &[u8]) {
        self.tx.extend_from_slice(bytes);
    }
}

fn noop(_out: &mut dyn ByteSink, _args: &[&str]) {}

const TABLE: &[Command] = &[Command {
    name: "SET",
    handler: noop,
    min_args: 1,
    max_args: 4,
    description: "Set a register",
    parameters: "reg[,value]",
    hidden: false,
}];

fn link() -> SentenceLink<'static> {
    let config = LinkConfig {
        silent: true,
        newline: "\n",
        max_len: 64,
        ..Default::default()
    };
    SentenceLink::new(Registry::new(TABLE).unwrap(), config)
}

proptest! {
    /// Arbitrary byte streams never panic and the link keeps accepting
    /// well-formed sentences afterwards.
    #[test]
    fn arbitrary_input_is_always_recoverable(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut link = link();
        let mut io = PipeIo::new(&data);
        let _ = link.poll(&mut io);

        let mut io = PipeIo::new(b"\nSET,1*00\n");
        prop_assert_eq!(link.poll(&mut io), Some(Outcome::Dispatched));
    }

    /// A frame with no `*` marker is always MissingChecksum, whatever the
    /// command name, and the check precedes registry lookup.
    #[test]
    fn no_marker_means_missing_checksum(body in "[A-Z,0-9]{0,40}") {
        let mut link = link();
        let mut frame = body.into_bytes();
        frame.push(b'\n');
        let mut io = PipeIo::new(&frame);
        prop_assert_eq!(link.poll(&mut io), Some(Outcome::MissingChecksum));
        prop_assert!(io.tx.starts_with(b"$PXERR,Missing checksum"));
    }
}
