//! Command registry
//!
//! A fixed, ordered table of command descriptors built once at startup and
//! immutable thereafter. This replaces the classic sentinel-terminated
//! function-pointer table with a length-known slice whose invariants are
//! validated at construction.

use crate::traits::ByteSink;

/// Command handler function
///
/// Receives the output sink and the argument tokens (command name
/// excluded). Handlers report their own internal failures through the
/// sink; the dispatcher validates shape, never semantics.
pub type Handler = fn(out: &mut dyn ByteSink, args: &[&str]);

/// One command table entry
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Command name as typed on the wire
    pub name: &'static str,
    /// Handler invoked on a successful dispatch
    pub handler: Handler,
    /// Inclusive minimum argument count
    pub min_args: usize,
    /// Inclusive maximum argument count
    pub max_args: usize,
    /// One-line description for help listings
    pub description: &'static str,
    /// Parameter help shown by the `?` query
    pub parameters: &'static str,
    /// Skip this entry in help listings
    pub hidden: bool,
}

/// Errors raised while building a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Two entries share the same name
    DuplicateName(&'static str),
    /// An entry's `min_args` exceeds its `max_args`
    InvalidArity(&'static str),
}

/// Immutable command table
///
/// Lookup is a first-match linear scan in table order. Names are unique,
/// so table order never affects resolution.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'t> {
    commands: &'t [Command],
}

impl<'t> Registry<'t> {
    /// Build a registry, validating descriptor invariants
    pub fn new(commands: &'t [Command]) -> Result<Self, RegistryError> {
        for (i, cmd) in commands.iter().enumerate() {
            if cmd.min_args > cmd.max_args {
                return Err(RegistryError::InvalidArity(cmd.name));
            }
            if commands[..i].iter().any(|c| c.name == cmd.name) {
                return Err(RegistryError::DuplicateName(cmd.name));
            }
        }
        Ok(Self { commands })
    }

    /// Look up a command by name
    pub fn find(&self, name: &str) -> Option<&'t Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Iterate over all descriptors in table order
    pub fn iter(&self) -> impl Iterator<Item = &'t Command> {
        self.commands.iter()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_out: &mut dyn ByteSink, _args: &[&str]) {}

    fn entry(name: &'static str) -> Command {
        Command {
            name,
            handler: noop,
            min_args: 0,
            max_args: 2,
            description: "",
            parameters: "",
            hidden: false,
        }
    }

    #[test]
    fn find_matches_by_name() {
        let table = [entry("led"), entry("sysinfo")];
        let registry = Registry::new(&table).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("sysinfo").unwrap().name, "sysinfo");
        assert!(registry.find("reboot").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let table = [entry("led"), entry("led")];
        assert_eq!(
            Registry::new(&table).map(|_| ()),
            Err(RegistryError::DuplicateName("led"))
        );
    }

    #[test]
    fn inverted_arity_bounds_rejected() {
        let mut bad = entry("led");
        bad.min_args = 3;
        bad.max_args = 1;
        let table = [bad];
        assert_eq!(
            Registry::new(&table).map(|_| ()),
            Err(RegistryError::InvalidArity("led"))
        );
    }

    #[test]
    fn iter_preserves_table_order() {
        let table = [entry("b"), entry("a"), entry("c")];
        let registry = Registry::new(&table).unwrap();
        let names: heapless::Vec<&str, 4> = registry.iter().map(|c| c.name).collect();
        assert_eq!(names.as_slice(), &["b", "a", "c"]);
    }

    #[test]
    fn empty_table_is_valid() {
        let registry = Registry::new(&[]).unwrap();
        assert!(registry.is_empty());
        assert!(registry.find("anything").is_none());
    }
}
