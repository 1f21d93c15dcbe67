//! Insertion-ordered command registry.
//!
//! Populated once during start-up (registration phase) and read-only for the
//! rest of the process (dispatch phase). The phase separation is a usage
//! contract, not a runtime guarantee: everything is single-threaded and
//! synchronous, so no lock is involved.

use std::collections::HashMap;

use crate::command::CommandSpec;
use crate::error::{DispatchError, RegistrationError};

/// Holds every registered command, preserving registration order so the
/// help listing is deterministic.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a command, preserving arrival order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCommand` if a command with the same name is already
    /// registered; the registry is left unchanged in that case.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), RegistrationError> {
        if self.index.contains_key(spec.name()) {
            return Err(RegistrationError::DuplicateCommand(spec.name().to_string()));
        }
        self.index.insert(spec.name().to_string(), self.commands.len());
        self.commands.push(spec);
        Ok(())
    }

    /// Look up a command by name.
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` if no command with that name is registered.
    pub fn resolve(&self, name: &str) -> Result<&CommandSpec, DispatchError> {
        self.index
            .get(name)
            .map(|&i| &self.commands[i])
            .ok_or_else(|| DispatchError::CommandNotFound(name.to_string()))
    }

    /// All commands in registration order; used by the help listing and
    /// the inspection output.
    #[must_use]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::command::CommandSpec;

    fn command(name: &str) -> CommandSpec {
        CommandSpec::builder(name).build(|_| Ok(None)).unwrap()
    }

    #[test]
    fn test_register_preserves_arrival_order() {
        let mut registry = CommandRegistry::new();
        for name in ["build", "test", "deploy"] {
            registry.register(command(name)).unwrap();
        }
        let names: Vec<&str> = registry.commands().iter().map(CommandSpec::name).collect();
        assert_eq!(names, ["build", "test", "deploy"]);
    }

    #[test]
    fn test_duplicate_registration_rejected_and_registry_unchanged() {
        let mut registry = CommandRegistry::new();
        registry.register(command("build")).unwrap();
        let err = registry.register(command("build")).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateCommand("build".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let mut registry = CommandRegistry::new();
        registry.register(command("build")).unwrap();
        assert_eq!(registry.resolve("build").unwrap().name(), "build");

        let err = registry.resolve("ship").unwrap_err();
        assert!(err.to_string().contains("ship"));
    }

    #[test]
    fn test_contains_and_is_empty() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());
        registry.register(command("build")).unwrap();
        assert!(registry.contains("build"));
        assert!(!registry.contains("deploy"));
        assert!(!registry.is_empty());
    }
}
