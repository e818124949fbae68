use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A per-package lookup failure.
///
/// Each failure produces one diagnostic line on stderr and increments the
/// error tally; none of them aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Some prefix of the dotted name does not resolve to an importable
    /// module, or the name itself is malformed.
    PackageNotFound(String),
    /// The package resolved and its directory was walked fully, but no file
    /// with the requested name was found.
    FileNotFound { file: String, package: String },
    /// Inspecting the package's file location or walking its directory
    /// failed unexpectedly.
    Access { package: String, reason: String },
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackageNotFound(package) => write!(f, "Package {package} not found."),
            Self::FileNotFound { file, package } => {
                write!(f, "File {file} not found in Package {package}.")
            }
            Self::Access { package, reason } => {
                write!(f, "Error accessing {package}: {reason}.")
            }
        }
    }
}

impl Error for LookupError {}
