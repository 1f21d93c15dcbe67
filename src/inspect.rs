//! JSON schema inspection of the registered command set.
//!
//! Produces a machine-readable description of every command: name, one-line
//! summary, and per-parameter type, required flag, and default text. Useful
//! for tooling that wants to discover a program's commands without scraping
//! its help output.

use serde::{Deserialize, Serialize};

use crate::command::{CoercionKind, CommandSpec, ParameterSpec};
use crate::registry::CommandRegistry;

/// Schema for one command parameter.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParameterSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Schema for one registered command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandSchema {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterSchema>,
}

/// Root structure for inspection output.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectOutput {
    pub commands: Vec<CommandSchema>,
}

/// Map a coercion kind to its JSON schema type name.
fn json_type(kind: CoercionKind) -> &'static str {
    match kind {
        CoercionKind::Text => "string",
        CoercionKind::Integer => "integer",
        CoercionKind::Float => "number",
        CoercionKind::Boolean => "boolean",
    }
}

fn parameter_schema(param: &ParameterSpec) -> ParameterSchema {
    ParameterSchema {
        name: param.name().to_string(),
        param_type: json_type(param.coercion()).to_string(),
        required: param.required(),
        default: param.default().map(ToString::to_string),
    }
}

fn command_schema(spec: &CommandSpec) -> CommandSchema {
    CommandSchema {
        name: spec.name().to_string(),
        description: spec.doc().first().cloned().unwrap_or_default(),
        parameters: spec.params().iter().map(parameter_schema).collect(),
    }
}

/// Build the inspection structure for every registered command, in
/// registration order.
#[must_use]
pub fn inspect(registry: &CommandRegistry) -> InspectOutput {
    InspectOutput {
        commands: registry.commands().iter().map(command_schema).collect(),
    }
}

/// Render the inspection output as pretty-printed JSON.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn render(registry: &CommandRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&inspect(registry))
}
