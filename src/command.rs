//! Command descriptors: typed scalar values, parameter specifications, and
//! the builder used to declare a command's signature and documentation.
//!
//! A `CommandSpec` is built once at registration time via `CommandSpec::builder`
//! and is immutable afterwards. The builder is the explicit substitute for
//! runtime signature reflection: the caller states each parameter's name and
//! default, and the coercion kind is inferred from the default's variant.

use std::fmt;

use crate::binder::BoundArguments;
use crate::error::RegistrationError;

/// A typed scalar: a parameter default, a bound argument value, or the
/// printable result of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The coercion kind matching this value's variant.
    #[must_use]
    pub fn kind(&self) -> CoercionKind {
        match self {
            Value::Text(_) => CoercionKind::Text,
            Value::Integer(_) => CoercionKind::Integer,
            Value::Float(_) => CoercionKind::Float,
            Value::Boolean(_) => CoercionKind::Boolean,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The scalar type a parameter's explicit value is converted to.
///
/// Stored per parameter as an explicit tag rather than inspected at call
/// time. Required parameters are always `Text`: their values pass through
/// unconverted and the command body performs any conversion itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionKind {
    Text,
    Integer,
    Float,
    Boolean,
}

impl CoercionKind {
    /// User-facing name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CoercionKind::Text => "text",
            CoercionKind::Integer => "integer",
            CoercionKind::Float => "float",
            CoercionKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for CoercionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One declared parameter of a command.
///
/// Position is the index in the command's parameter list. A parameter with
/// no default is required and must be supplied positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    name: String,
    coercion: CoercionKind,
    default: Option<Value>,
}

impl ParameterSpec {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn coercion(&self) -> CoercionKind {
        self.coercion
    }

    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

/// Result of invoking a command body. `Ok(None)` means there is nothing to
/// print on the output stream.
pub type CommandResult = Result<Option<String>, Box<dyn std::error::Error>>;

/// The callable backing a command. Receives the bound arguments, which
/// preserve declaration order.
pub type CommandFn = Box<dyn Fn(&BoundArguments) -> CommandResult>;

/// A registered command: unique name, ordered parameters, documentation
/// lines, and the underlying callable.
pub struct CommandSpec {
    name: String,
    params: Vec<ParameterSpec>,
    doc: Vec<String>,
    callable: CommandFn,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    /// Start declaring a new command.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CommandBuilder {
        CommandBuilder {
            name: name.into(),
            params: Vec::new(),
            doc: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    /// Documentation lines; the first line is the one-line summary.
    #[must_use]
    pub fn doc(&self) -> &[String] {
        &self.doc
    }

    /// Number of required parameters. Required parameters always precede
    /// defaulted ones, so this is also the index of the first defaulted one.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.required()).count()
    }

    /// Render the signature summary shown in the help listing:
    /// required parameters as `<name>`, defaulted ones as `[name=default]`.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut parts = vec![self.name.clone()];
        for param in &self.params {
            match param.default() {
                None => parts.push(format!("<{}>", param.name())),
                Some(default) => parts.push(format!("[{}={}]", param.name(), default)),
            }
        }
        parts.join(" ")
    }

    /// Invoke the underlying callable with fully bound arguments.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the command body returns.
    pub fn invoke(&self, args: &BoundArguments) -> CommandResult {
        (self.callable)(args)
    }
}

/// Builder for `CommandSpec`. Parameters are declared in call order, which
/// becomes their declaration order.
pub struct CommandBuilder {
    name: String,
    params: Vec<ParameterSpec>,
    doc: Vec<String>,
}

impl CommandBuilder {
    /// Attach documentation. The text is split into lines; each line is
    /// trimmed of surrounding indentation but otherwise kept verbatim.
    #[must_use]
    pub fn doc(mut self, text: &str) -> Self {
        self.doc = text.lines().map(|line| line.trim().to_string()).collect();
        self
    }

    /// Declare a required parameter. Its value passes through as text.
    #[must_use]
    pub fn required(mut self, name: &str) -> Self {
        self.params.push(ParameterSpec {
            name: name.to_string(),
            coercion: CoercionKind::Text,
            default: None,
        });
        self
    }

    /// Declare a defaulted parameter. The coercion kind is inferred from
    /// the default value's variant.
    #[must_use]
    pub fn defaulted(mut self, name: &str, default: Value) -> Self {
        self.params.push(ParameterSpec {
            name: name.to_string(),
            coercion: default.kind(),
            default: Some(default),
        });
        self
    }

    /// Finish the declaration, validating the parameter list.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - two parameters share a name (`DuplicateParameter`)
    /// - a required parameter is declared after a defaulted one
    ///   (`RequiredAfterDefault`)
    pub fn build<F>(self, callable: F) -> Result<CommandSpec, RegistrationError>
    where
        F: Fn(&BoundArguments) -> CommandResult + 'static,
    {
        let mut seen_default = false;
        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name() == param.name()) {
                return Err(RegistrationError::DuplicateParameter {
                    command: self.name,
                    parameter: param.name().to_string(),
                });
            }
            if param.required() {
                if seen_default {
                    return Err(RegistrationError::RequiredAfterDefault {
                        command: self.name,
                        parameter: param.name().to_string(),
                    });
                }
            } else {
                seen_default = true;
            }
        }

        Ok(CommandSpec {
            name: self.name,
            params: self.params,
            doc: self.doc,
            callable: Box::new(callable),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn noop(_: &BoundArguments) -> CommandResult {
        Ok(None)
    }

    #[test]
    fn test_value_display_textual_forms() {
        assert_eq!(Value::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_coercion_kind_inferred_from_default() {
        assert_eq!(Value::Integer(1).kind(), CoercionKind::Integer);
        assert_eq!(Value::Float(0.5).kind(), CoercionKind::Float);
        assert_eq!(Value::Boolean(true).kind(), CoercionKind::Boolean);
        assert_eq!(Value::Text(String::new()).kind(), CoercionKind::Text);
    }

    #[test]
    fn test_signature_required_and_defaulted() {
        let spec = CommandSpec::builder("deploy")
            .required("env")
            .defaulted("version", Value::Text("latest".to_string()))
            .defaulted("replicas", Value::Integer(1))
            .build(noop)
            .unwrap();
        assert_eq!(spec.signature(), "deploy <env> [version=latest] [replicas=1]");
    }

    #[test]
    fn test_signature_no_params() {
        let spec = CommandSpec::builder("status").build(noop).unwrap();
        assert_eq!(spec.signature(), "status");
    }

    #[test]
    fn test_doc_split_into_trimmed_lines() {
        let spec = CommandSpec::builder("x")
            .doc("First line\n    indented detail\nlast line")
            .build(noop)
            .unwrap();
        assert_eq!(spec.doc(), ["First line", "indented detail", "last line"]);
    }

    #[test]
    fn test_required_after_default_rejected() {
        let err = CommandSpec::builder("bad")
            .defaulted("opt", Value::Integer(0))
            .required("pos")
            .build(noop)
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::RequiredAfterDefault {
                command: "bad".to_string(),
                parameter: "pos".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let err = CommandSpec::builder("bad")
            .required("a")
            .defaulted("a", Value::Boolean(true))
            .build(noop)
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateParameter {
                command: "bad".to_string(),
                parameter: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_required_count() {
        let spec = CommandSpec::builder("add")
            .required("a")
            .required("b")
            .defaulted("kw", Value::Integer(1))
            .build(noop)
            .unwrap();
        assert_eq!(spec.required_count(), 2);
    }
}
