//! Invocation Request parsing.
//!
//! The launcher must tolerate options it does not recognize and forward them,
//! in order, to the generator. clap rejects unknown flags, so parsing happens
//! in two steps: `split_known_args` partitions the raw argument vector into
//! the launcher's own options and the passthrough remainder, then the known
//! half goes through a clap `Parser` for value handling and help/version.

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::LaunchError;

/// The launcher's own options, as parsed from the command line. Built once by
/// [`parse`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path to the generator script the child will run.
    pub generator_script: String,
    /// Directory appended to the child's `PYTHONPATH`.
    pub markupsafe_dir: String,
    /// Interpreter used to run the generator script.
    pub python: String,
    /// Unrecognized arguments, forwarded to the generator in original order.
    pub passthrough: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "genlaunch", version, about, long_about = None)]
struct Cli {
    /// Path to the generator script to invoke
    #[arg(long = "generator_script")]
    generator_script: Option<String>,

    /// Directory added to the generator's PYTHONPATH
    #[arg(long = "markupsafe_dir")]
    markupsafe_dir: Option<String>,

    /// Interpreter used to run the generator script
    #[arg(long = "python", default_value = "python3")]
    python: String,
}

/// Options the splitter claims for the launcher. Each takes one value, either
/// as `--opt value` or `--opt=value`.
const VALUE_OPTS: [&str; 3] = ["--generator_script", "--markupsafe_dir", "--python"];

/// Valueless options routed to clap so `-h`/`-V` behave as usual instead of
/// being forwarded to the generator.
const BARE_OPTS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Partition `argv` into the launcher's own options and the passthrough
/// remainder, preserving the remainder's original order. Known options are
/// picked up wherever they appear, so extras may interleave with them.
pub fn split_known_args(argv: &[String]) -> (Vec<String>, Vec<String>) {
    let mut known = Vec::new();
    let mut passthrough = Vec::new();
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        if VALUE_OPTS.contains(&arg.as_str()) {
            known.push(arg.clone());
            if let Some(value) = iter.next() {
                known.push(value.clone());
            }
        } else if BARE_OPTS.contains(&arg.as_str()) {
            known.push(arg.clone());
        } else if let Some((name, _)) = arg.split_once('=')
            && VALUE_OPTS.contains(&name)
        {
            known.push(arg.clone());
        } else {
            passthrough.push(arg.clone());
        }
    }
    (known, passthrough)
}

/// Parse `argv` (the argument vector without the program name) into an
/// [`Invocation`].
///
/// Both `--generator_script` and `--markupsafe_dir` must be present and
/// non-empty; either missing is [`LaunchError::MissingArgument`]. A malformed
/// known option (a flag with no value) is [`LaunchError::InvalidArguments`].
/// Help and version requests print and exit here.
pub fn parse(argv: &[String]) -> Result<Invocation, LaunchError> {
    let (known, passthrough) = split_known_args(argv);

    let mut cmdline = Vec::with_capacity(known.len() + 1);
    cmdline.push("genlaunch".to_string());
    cmdline.extend(known);

    let cli = match Cli::try_parse_from(&cmdline) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(LaunchError::InvalidArguments(e.to_string())),
    };

    let generator_script = match cli.generator_script {
        Some(s) if !s.is_empty() => s,
        _ => return Err(LaunchError::MissingArgument("generator script")),
    };
    let markupsafe_dir = match cli.markupsafe_dir {
        Some(s) if !s.is_empty() => s,
        _ => return Err(LaunchError::MissingArgument("markupsafe directory")),
    };

    Ok(Invocation {
        generator_script,
        markupsafe_dir,
        python: cli.python,
        passthrough,
    })
}
