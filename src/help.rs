//! Help text rendering for the registered command set.
//!
//! The listing is deterministic: a fixed usage banner, the implicit `help`
//! command first, then every registered command in registration order with
//! its signature summary and `?`-prefixed documentation lines.

use crate::registry::CommandRegistry;

/// One-line description shown for the implicit `help` command.
const HELP_SUMMARY: &str = "Show usage information for the available commands";

/// Render the full help listing. The result carries no trailing newline.
#[must_use]
pub fn render(registry: &CommandRegistry, program: &str) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Usage: {program} [command]"));
    lines.push(String::new());
    lines.push("Available commands:".to_string());

    // The implicit help command is always listed first.
    lines.push("  * help".to_string());
    lines.push(format!("    ? {HELP_SUMMARY}"));

    for spec in registry.commands() {
        lines.push(format!("  * {}", spec.signature()));
        for doc_line in spec.doc() {
            lines.push(format!("    ? {doc_line}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::command::{CommandSpec, Value};

    fn sample_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                CommandSpec::builder("deploy")
                    .doc("Deploy a version to an environment\nDefaults to the latest version.")
                    .required("env")
                    .defaulted("version", Value::Text("latest".to_string()))
                    .build(|_| Ok(None))
                    .unwrap(),
            )
            .unwrap();
        registry
            .register(
                CommandSpec::builder("build")
                    .doc("Build the project")
                    .build(|_| Ok(None))
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_banner_and_implicit_help_first() {
        let text = render(&sample_registry(), "manage");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Usage: manage [command]"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Available commands:"));
        assert_eq!(lines.next(), Some("  * help"));
    }

    #[test]
    fn test_commands_listed_in_registration_order() {
        let text = render(&sample_registry(), "manage");
        let deploy = text.find("* deploy").unwrap();
        let build = text.find("* build").unwrap();
        assert!(deploy < build, "registration order not preserved:\n{text}");
    }

    #[test]
    fn test_signature_and_doc_lines_rendered() {
        let text = render(&sample_registry(), "manage");
        assert!(text.contains("  * deploy <env> [version=latest]"));
        assert!(text.contains("    ? Deploy a version to an environment"));
        assert!(text.contains("    ? Defaults to the latest version."));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let registry = sample_registry();
        let first = render(&registry, "manage");
        let second = render(&registry, "manage");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_registry_still_lists_help() {
        let text = render(&CommandRegistry::new(), "manage");
        assert!(text.contains("  * help"));
    }
}
