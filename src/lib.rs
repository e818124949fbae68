mod error;
mod interpreter;
mod lookup;
mod package_name;
#[cfg(test)]
mod test_helpers;
mod walk;

pub use error::LookupError;
pub use interpreter::{PackageResolver, PythonInterpreter};
pub use lookup::{run_lookup, LookupReport, LookupRequest, ResultDocument};
pub use package_name::PackageName;
pub use walk::find_file;
