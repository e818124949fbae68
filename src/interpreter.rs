use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::error::LookupError;
use crate::package_name::PackageName;

/// Answers where a package lives on disk, by whatever means the host
/// runtime provides.
pub trait PackageResolver {
    /// Resolves `package` to the directory containing its installed files.
    ///
    /// Resolution imports the package, so its module-level initialization
    /// code runs with whatever side effects it has; that is the accepted
    /// cost of answering through the runtime's own import machinery.
    fn installation_dir(&self, package: &PackageName) -> Result<PathBuf, LookupError>;
}

/// Environment variable naming the interpreter executable to use.
const PYTHON_VAR: &str = "PKGFIND_PYTHON";

const DEFAULT_PYTHON: &str = if cfg!(windows) { "python" } else { "python3" };

/// Exit status the probe program reserves for an unresolvable prefix.
const NOT_FOUND_STATUS: i32 = 3;

/// Probe run by the interpreter with the package name as its argument.
///
/// Checks every dotted prefix with `find_spec`, imports the full package
/// and prints the resolved parent directory of its backing file. Importing
/// shares the probe's stdout with the package's own initialization code,
/// so the directory is printed last and only the final stdout line is the
/// answer. Builtin and namespace modules have no backing file;
/// `inspect.getfile` raising on them is surfaced as an access error by
/// the caller.
fn probe_program() -> String {
    format!(
        r#"
import importlib, importlib.util, inspect, sys
from pathlib import Path

name = sys.argv[1]
parts = name.split(".")
for idx in range(len(parts)):
    try:
        spec = importlib.util.find_spec(".".join(parts[: idx + 1]))
    except (ImportError, ValueError):
        spec = None
    if spec is None:
        sys.exit({NOT_FOUND_STATUS})
module = importlib.import_module(name)
print(Path(inspect.getfile(module)).parent.resolve())
"#
    )
}

/// The host Python interpreter, addressed as a subprocess.
pub struct PythonInterpreter {
    executable: String,
}

impl PythonInterpreter {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Uses `$PKGFIND_PYTHON` when set, the platform default otherwise.
    pub fn from_env() -> Self {
        let executable = env::var(PYTHON_VAR).unwrap_or_else(|_| DEFAULT_PYTHON.to_string());
        Self::new(executable)
    }
}

impl PackageResolver for PythonInterpreter {
    fn installation_dir(&self, package: &PackageName) -> Result<PathBuf, LookupError> {
        let access = |reason: String| LookupError::Access {
            package: package.as_str(),
            reason,
        };

        let output = Command::new(&self.executable)
            .arg("-c")
            .arg(probe_program())
            .arg(package.as_str())
            .output()
            .map_err(|e| access(e.to_string()))?;

        if output.status.code() == Some(NOT_FOUND_STATUS) {
            return Err(LookupError::PackageNotFound(package.as_str()));
        }
        if !output.status.success() {
            return Err(access(failure_reason(&output.stderr, &output.status)));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| access("interpreter reported a non-UTF-8 location".to_string()))?;
        // Anything the package printed while importing precedes the probe's
        // own print, so the location is the last non-empty line.
        let dir = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| line.trim())
            .unwrap_or_default();
        if dir.is_empty() {
            return Err(access("interpreter reported no location".to_string()));
        }
        Ok(PathBuf::from(dir))
    }
}

/// Condenses a failed probe into one line: the last line of the traceback
/// when there is one, the exit status otherwise.
fn failure_reason(stderr: &[u8], status: &std::process::ExitStatus) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| format!("interpreter exited with {status}"))
}
