//! Genlaunch library crate
//!
//! This crate provides the core functionality for the `genlaunch` CLI, a thin
//! launcher that starts the protocol code generator script with its module
//! search path prepared. It is organized into small modules: `args`
//! (command-line parsing and the known-args splitter), `spawn` (child
//! environment construction and process launch), and `error` (launch error
//! kinds). The binary `src/main.rs` calls `genlaunch_lib::run()` to execute
//! the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `args::parse()` / `spawn::launch()` — the two pipeline stages, exposed
//!   so tests can drive them directly.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod args;
pub mod error;
pub mod spawn;

/// Run the genlaunch CLI.
///
/// Parses the launcher's options out of the process arguments, then starts
/// the generator with everything unrecognized forwarded verbatim and waits
/// for it, exiting with the generator's own exit status.
///
/// Failure behavior:
/// - argument problems print `Failed to parse command-line arguments: ...`
///   to stderr (followed by a blank line) and exit 1 without spawning;
/// - launch problems (missing script, spawn failure) print `error: ...` to
///   stderr and exit 1.
pub fn run() {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let inv = match args::parse(&argv) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Failed to parse command-line arguments: {}\n", e);
            std::process::exit(1);
        }
    };

    let mut child = spawn::launch(&inv).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match child.wait() {
        // A signal-killed child has no code; report generic failure.
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("error: failed to wait for generator: {}", e);
            std::process::exit(1);
        }
    }
}
