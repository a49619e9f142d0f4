//! Child Environment construction and process launch.
//!
//! The child gets a snapshot of the parent's environment with one change: the
//! absolute path of the markupsafe directory is appended to `PYTHONPATH` so
//! the generator script can import its helper library. The snapshot is built
//! as an explicit map and handed to the spawn call; the parent's own
//! environment is never touched.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{self, Path};
use std::process::{Child, Command};

use crate::args::Invocation;
use crate::error::LaunchError;

/// Module-search-path variable rewritten in the child's environment.
pub const MODULE_PATH_VAR: &str = "PYTHONPATH";

/// Path-list separator for `PYTHONPATH` entries.
pub const PATH_LIST_SEP: &str = if cfg!(windows) { ";" } else { ":" };

/// Append `abs_helper` to the current module search path value.
///
/// The separator is only inserted when the current value is non-empty, so an
/// unset parent `PYTHONPATH` yields just the helper path with no leading
/// separator.
pub fn append_module_path(current: Option<&OsStr>, abs_helper: &Path) -> OsString {
    match current {
        Some(cur) if !cur.is_empty() => {
            let mut value = cur.to_os_string();
            value.push(PATH_LIST_SEP);
            value.push(abs_helper.as_os_str());
            value
        }
        _ => abs_helper.as_os_str().to_os_string(),
    }
}

/// Snapshot the parent's environment and extend `PYTHONPATH` with the
/// absolute form of `markupsafe_dir`.
///
/// The directory is absolutized lexically (no symlink resolution, no
/// existence requirement), so a relative path given on the command line stays
/// valid regardless of the child's working directory.
pub fn build_child_env(markupsafe_dir: &Path) -> io::Result<HashMap<OsString, OsString>> {
    let abs = path::absolute(markupsafe_dir)?;
    let mut env_map: HashMap<OsString, OsString> = env::vars_os().collect();
    let appended = append_module_path(
        env_map.get(OsStr::new(MODULE_PATH_VAR)).map(|v| v.as_os_str()),
        &abs,
    );
    env_map.insert(OsString::from(MODULE_PATH_VAR), appended);
    Ok(env_map)
}

/// Start the generator as a child process and return its handle.
///
/// The child runs `python generator_script <passthrough...>` with the
/// environment from [`build_child_env`]. The script path is checked before
/// spawning so a typo fails with a clear message instead of an interpreter
/// error. The caller decides whether to wait on the returned [`Child`].
pub fn launch(inv: &Invocation) -> Result<Child, LaunchError> {
    let script = Path::new(&inv.generator_script);
    if !script.exists() {
        return Err(LaunchError::GeneratorNotFound(script.to_path_buf()));
    }

    let env_map = build_child_env(Path::new(&inv.markupsafe_dir)).map_err(|e| {
        LaunchError::InvalidArguments(format!(
            "bad markupsafe directory {}: {}",
            inv.markupsafe_dir, e
        ))
    })?;

    Command::new(&inv.python)
        .arg(&inv.generator_script)
        .args(&inv.passthrough)
        .env_clear()
        .envs(&env_map)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            script: inv.generator_script.clone(),
            source,
        })
}
