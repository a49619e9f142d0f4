use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the launcher can hit between argument parsing and handing off to
/// the generator. All of them are fatal; `run()` reports once and exits.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A required option was absent or given an empty value.
    #[error("{0} must be specified")]
    MissingArgument(&'static str),

    /// A recognized option was malformed (for example, a flag with no value).
    #[error("{0}")]
    InvalidArguments(String),

    /// The generator script path does not exist. Checked before spawning so
    /// the user gets a clear message instead of an interpreter stack trace.
    #[error("generator script not found: {}", .0.display())]
    GeneratorNotFound(PathBuf),

    /// The spawn call itself failed (interpreter missing, permissions, ...).
    #[error("failed to start {script}: {source}")]
    Spawn {
        script: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_message_names_the_option() {
        let e = LaunchError::MissingArgument("generator script");
        assert_eq!(e.to_string(), "generator script must be specified");
    }

    #[test]
    fn not_found_message_includes_path() {
        let e = LaunchError::GeneratorNotFound(PathBuf::from("/no/such/gen.py"));
        assert!(e.to_string().contains("/no/such/gen.py"));
    }
}
