#![cfg(test)]

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LookupError;
use crate::interpreter::PackageResolver;
use crate::package_name::PackageName;

/// Resolver backed by a fixed name-to-directory table, for exercising the
/// batch driver without a host interpreter.
#[derive(Default)]
pub struct StubResolver {
    dirs: HashMap<String, PathBuf>,
}

impl StubResolver {
    pub fn with_package(name: &str, dir: &Path) -> Self {
        let mut resolver = Self::default();
        resolver.dirs.insert(name.to_string(), dir.to_path_buf());
        resolver
    }
}

impl PackageResolver for StubResolver {
    fn installation_dir(&self, package: &PackageName) -> Result<PathBuf, LookupError> {
        self.dirs
            .get(&package.as_str())
            .cloned()
            .ok_or_else(|| LookupError::PackageNotFound(package.as_str()))
    }
}

pub fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut file = std::fs::File::create(path).unwrap();
    write!(file, "{}", content).unwrap();
}
