//! Top-level dispatch: resolve the requested command, bind its arguments,
//! invoke it, and report the outcome.

use crate::binder;
use crate::error::DispatchError;
use crate::help;
use crate::registry::CommandRegistry;

/// Resolve and run one command invocation.
///
/// An empty token list, or a first token of `help`, renders the full help
/// listing (any tokens after `help` are ignored). Otherwise the first token
/// is the command name and the rest are its arguments.
///
/// Returns the text to print on the output stream, if any.
///
/// # Errors
///
/// Returns `Err` if:
/// - the command name is not registered (`CommandNotFound`; the help
///   listing is not rendered on this path)
/// - argument binding fails (`Binding`, wrapping the `BindError`)
/// - the command body itself fails (`Execution`)
pub fn run(
    registry: &CommandRegistry,
    program: &str,
    tokens: &[String],
) -> Result<Option<String>, DispatchError> {
    if tokens.is_empty() || tokens[0] == "help" {
        return Ok(Some(help::render(registry, program)));
    }

    let name = tokens[0].as_str();
    let spec = registry.resolve(name)?;

    let args = binder::bind(spec, &tokens[1..]).map_err(|source| DispatchError::Binding {
        command: name.to_string(),
        source,
    })?;

    spec.invoke(&args).map_err(|e| DispatchError::Execution {
        command: name.to_string(),
        message: e.to_string(),
    })
}

/// Dispatch one invocation, printing the result or a one-line diagnostic.
///
/// Returns the process exit code: 0 on success (including a help
/// rendering), 1 for every failure kind.
#[must_use]
pub fn dispatch(registry: &CommandRegistry, program: &str, tokens: &[String]) -> i32 {
    match run(registry, program, tokens) {
        Ok(Some(output)) => {
            println!("{output}");
            0
        }
        Ok(None) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
