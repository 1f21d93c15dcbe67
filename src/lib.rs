//! # fncli
//!
//! A micro-framework that turns plain functions into subcommands of a
//! command-line program. A command is registered with an explicit parameter
//! descriptor and documentation; the help listing and the argument binder
//! are derived from the descriptor, so no per-command parsing code is
//! needed.
//!
//! ```no_run
//! use fncli::command::CommandSpec;
//! use fncli::registry::CommandRegistry;
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(
//!     CommandSpec::builder("xor")
//!         .doc("Bitwise XOR of two integers")
//!         .required("a")
//!         .required("b")
//!         .build(|args| {
//!             let a: i64 = args.text("a").ok_or("missing argument 'a'")?.parse()?;
//!             let b: i64 = args.text("b").ok_or("missing argument 'b'")?.parse()?;
//!             Ok(Some((a ^ b).to_string()))
//!         })?,
//! )?;
//!
//! let tokens: Vec<String> = std::env::args().skip(1).collect();
//! let exit_code = fncli::dispatch::dispatch(&registry, "myprog", &tokens);
//! # let _ = exit_code;
//! # Ok::<(), fncli::error::RegistrationError>(())
//! ```

pub mod binder;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod inspect;
pub mod registry;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
