//! # fncli
//!
//! Demo manage-script built on the fncli framework. Registers a handful of
//! commands at start-up, then dispatches the process arguments through them.
//!
//! ## Usage
//!
//! - List commands: `fncli` or `fncli help`
//! - Call a command: `fncli xor 6 3`
//! - Override a default by name: `fncli greet Alice shout=true`
//! - Dump command schemas: `fncli --inspect`

use clap::Parser as ClapParser;
use fncli::command::{CommandSpec, Value};
use fncli::error::RegistrationError;
use fncli::registry::CommandRegistry;
use fncli::{dispatch, fatal_error, inspect};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROGRAM: &str = "fncli";

/// CLI arguments for the demo binary. Clap only collects the raw tokens;
/// all command and argument interpretation happens in the framework.
#[derive(ClapParser)]
#[command(name = PROGRAM)]
#[command(version = PKG_VERSION)]
#[command(about = "Plain functions as command-line subcommands", long_about = None)]
struct Cli {
    /// Command name to dispatch (omit for the help listing)
    #[arg(value_name = "COMMAND")]
    command: Option<String>,

    /// Command arguments: positional tokens and name=value overrides
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Print a JSON schema describing all registered commands
    #[arg(long)]
    inspect: bool,
}

/// Register the demo commands. Runs once, before any dispatch.
fn build_registry() -> Result<CommandRegistry, RegistrationError> {
    let mut registry = CommandRegistry::new();

    registry.register(
        CommandSpec::builder("xor")
            .doc("Bitwise XOR of two integers\nBoth arguments are converted by the command body itself.")
            .required("a")
            .required("b")
            .build(|args| {
                let a: i64 = args.text("a").ok_or("missing argument 'a'")?.parse()?;
                let b: i64 = args.text("b").ok_or("missing argument 'b'")?.parse()?;
                Ok(Some((a ^ b).to_string()))
            })?,
    )?;

    registry.register(
        CommandSpec::builder("greet")
            .doc("Greet someone by name\nPass shout=true to print the greeting in capitals.\nPass times=N to repeat the greeting.")
            .required("name")
            .defaulted("shout", Value::Boolean(false))
            .defaulted("times", Value::Integer(1))
            .build(|args| {
                let name = args.text("name").ok_or("missing argument 'name'")?;
                let mut greeting = format!("Hello, {name}!");
                if args.boolean("shout").unwrap_or(false) {
                    greeting = greeting.to_uppercase();
                }
                let times = usize::try_from(args.integer("times").unwrap_or(1)).unwrap_or(0);
                if times == 0 {
                    return Ok(None);
                }
                Ok(Some(vec![greeting; times].join("\n")))
            })?,
    )?;

    registry.register(
        CommandSpec::builder("div")
            .doc("Divide two numbers\nThe result is rounded to `precision` decimal places.")
            .required("a")
            .required("b")
            .defaulted("precision", Value::Integer(2))
            .build(|args| {
                let a: f64 = args.text("a").ok_or("missing argument 'a'")?.parse()?;
                let b: f64 = args.text("b").ok_or("missing argument 'b'")?.parse()?;
                if b == 0.0 {
                    return Err("division by zero".into());
                }
                let precision = usize::try_from(args.integer("precision").unwrap_or(2)).unwrap_or(0);
                Ok(Some(format!("{:.precision$}", a / b)))
            })?,
    )?;

    Ok(registry)
}

/// Entry point for the demo binary.
fn main() {
    let cli = Cli::parse();

    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(e) => fatal_error(&format!("Error: {e}")),
    };

    if cli.inspect {
        match inspect::render(&registry) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal_error(&format!("Error serialising output: {e}")),
        }
        return;
    }

    let mut tokens = Vec::new();
    if let Some(command) = cli.command {
        tokens.push(command);
    }
    tokens.extend(cli.args);

    std::process::exit(dispatch::dispatch(&registry, PROGRAM, &tokens));
}
