//! Argument binding: matching raw command-line tokens against a command's
//! parameter list.
//!
//! The first R tokens fill the R required parameters positionally, as plain
//! text. Remaining tokens either override a defaulted parameter by name
//! (`identifier=value`) or fill the next unbound defaulted parameter in
//! declaration order. Explicit values for non-text parameters are coerced;
//! defaults are used as declared, without conversion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::{CoercionKind, CommandSpec, ParameterSpec, Value};
use crate::error::BindError;

/// Static regex for named-override tokens (compiled once).
#[allow(clippy::expect_used)]
static NAMED_OVERRIDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("named override pattern is valid")
});

/// Argument values bound for one dispatch, in declaration order.
///
/// Produced fresh per dispatch and discarded after the call.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArguments {
    values: Vec<(String, Value)>,
}

impl BoundArguments {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    #[must_use]
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_boolean)
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split a token into `(identifier, value)` if it has named-override shape.
fn split_named_override(token: &str) -> Option<(&str, &str)> {
    let caps = NAMED_OVERRIDE.captures(token)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Convert an explicit token to the parameter's coercion type.
fn coerce(param: &ParameterSpec, raw: &str) -> Result<Value, BindError> {
    let invalid = || BindError::InvalidValue {
        parameter: param.name().to_string(),
        token: raw.to_string(),
        expected: param.coercion(),
    };
    match param.coercion() {
        CoercionKind::Text => Ok(Value::Text(raw.to_string())),
        CoercionKind::Integer => raw.parse::<i64>().map(Value::Integer).map_err(|_| invalid()),
        CoercionKind::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
        CoercionKind::Boolean => parse_boolean(raw).map(Value::Boolean).ok_or_else(invalid),
    }
}

/// Case-insensitive boolean forms: `true`/`false`/`1`/`0`.
fn parse_boolean(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Bind `tokens` against the command's parameter list.
///
/// # Errors
///
/// Returns `Err` if:
/// - fewer tokens than required parameters (`MissingArgument`, naming the
///   first unfilled one)
/// - a defaulted parameter is bound more than once (`DuplicateAssignment`)
/// - tokens remain after every parameter is filled (`TooManyArguments`)
/// - an explicit value cannot be converted to its parameter's type
///   (`InvalidValue`)
pub fn bind(spec: &CommandSpec, tokens: &[String]) -> Result<BoundArguments, BindError> {
    let params = spec.params();
    let required = spec.required_count();

    if tokens.len() < required {
        return Err(BindError::MissingArgument {
            parameter: params[tokens.len()].name().to_string(),
        });
    }

    // One slot per parameter; None means not yet bound.
    let mut slots: Vec<Option<Value>> = vec![None; params.len()];

    // Required parameters consume the first R tokens positionally, as text.
    for (slot, token) in slots.iter_mut().zip(&tokens[..required]) {
        *slot = Some(Value::Text(token.clone()));
    }

    // Remaining tokens: named overrides or positional default-fills.
    let surplus_tokens = &tokens[required..];
    for (i, token) in surplus_tokens.iter().enumerate() {
        if let Some((name, raw)) = split_named_override(token) {
            let named_slot = params
                .iter()
                .position(|p| !p.required() && p.name() == name);
            if let Some(idx) = named_slot {
                if slots[idx].is_some() {
                    return Err(BindError::DuplicateAssignment {
                        parameter: name.to_string(),
                    });
                }
                slots[idx] = Some(coerce(&params[idx], raw)?);
                continue;
            }
        }

        // Positional default-fill: next unbound defaulted parameter.
        let next_unbound = (required..params.len()).find(|&idx| slots[idx].is_none());
        match next_unbound {
            Some(idx) => slots[idx] = Some(coerce(&params[idx], token)?),
            None => {
                return Err(BindError::TooManyArguments {
                    surplus: surplus_tokens.len() - i,
                });
            }
        }
    }

    // Unbound defaulted parameters take their declared default, already of
    // the correct type.
    let mut values = Vec::with_capacity(params.len());
    for (param, slot) in params.iter().zip(slots) {
        let value = match (slot, param.default()) {
            (Some(v), _) => v,
            (None, Some(default)) => default.clone(),
            (None, None) => {
                return Err(BindError::MissingArgument {
                    parameter: param.name().to_string(),
                });
            }
        };
        values.push((param.name().to_string(), value));
    }

    Ok(BoundArguments { values })
}
