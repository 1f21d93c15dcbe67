//! Error types for registration, argument binding, and dispatch.
//!
//! Registration errors indicate programming mistakes in the command
//! definitions and abort start-up. Binding and dispatch errors are user
//! conditions: they are caught at the dispatcher boundary and rendered as
//! one-line diagnostics, never as an unhandled panic.

use std::fmt;

use crate::command::CoercionKind;

/// Registration-time errors raised while declaring or registering commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Two commands registered under the same name.
    DuplicateCommand(String),
    /// A required parameter declared after a defaulted one.
    RequiredAfterDefault { command: String, parameter: String },
    /// Two parameters of one command share a name.
    DuplicateParameter { command: String, parameter: String },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::DuplicateCommand(name) => {
                write!(f, "duplicate definition for command '{name}'")
            }
            RegistrationError::RequiredAfterDefault { command, parameter } => {
                write!(
                    f,
                    "command '{command}': required parameter '{parameter}' declared after a defaulted parameter"
                )
            }
            RegistrationError::DuplicateParameter { command, parameter } => {
                write!(f, "command '{command}': duplicate parameter '{parameter}'")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Argument-binding failures for a single dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    /// Fewer tokens than required parameters; names the first unfilled one.
    MissingArgument { parameter: String },
    /// Tokens left over after every parameter was filled.
    TooManyArguments { surplus: usize },
    /// A defaulted parameter bound more than once.
    DuplicateAssignment { parameter: String },
    /// A token could not be converted to its parameter's coercion type.
    InvalidValue {
        parameter: String,
        token: String,
        expected: CoercionKind,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingArgument { parameter } => {
                write!(f, "missing required argument '{parameter}'")
            }
            BindError::TooManyArguments { surplus } => {
                write!(f, "too many arguments ({surplus} unexpected)")
            }
            BindError::DuplicateAssignment { parameter } => {
                write!(f, "argument '{parameter}' bound more than once")
            }
            BindError::InvalidValue {
                parameter,
                token,
                expected,
            } => {
                write!(
                    f,
                    "invalid value '{token}' for argument '{parameter}': expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for BindError {}

/// Dispatch-time failures, each rendered as a single diagnostic line.
#[derive(Debug)]
pub enum DispatchError {
    /// The requested command name is not registered.
    CommandNotFound(String),
    /// Argument binding failed for the named command.
    Binding { command: String, source: BindError },
    /// The command body itself failed.
    Execution { command: String, message: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::CommandNotFound(name) => {
                write!(f, "command '{name}' not found")
            }
            DispatchError::Binding { command, source } => {
                write!(f, "command '{command}': {source}")
            }
            DispatchError::Execution { command, message } => {
                write!(f, "command '{command}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Binding { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_messages_name_the_offender() {
        let err = BindError::InvalidValue {
            parameter: "kw".to_string(),
            token: "five".to_string(),
            expected: CoercionKind::Integer,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("kw"), "parameter missing in: {rendered}");
        assert!(rendered.contains("five"), "token missing in: {rendered}");
        assert!(rendered.contains("integer"), "type missing in: {rendered}");
    }

    #[test]
    fn test_dispatch_error_includes_command_name() {
        let err = DispatchError::Binding {
            command: "add".to_string(),
            source: BindError::MissingArgument {
                parameter: "b".to_string(),
            },
        };
        let rendered = err.to_string();
        assert!(rendered.contains("add"), "command missing in: {rendered}");
        assert!(rendered.contains("b"), "parameter missing in: {rendered}");
    }

    #[test]
    fn test_dispatch_error_exposes_bind_source() {
        let err = DispatchError::Binding {
            command: "add".to_string(),
            source: BindError::TooManyArguments { surplus: 2 },
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(
            std::error::Error::source(&DispatchError::CommandNotFound("x".to_string())).is_none()
        );
    }
}
