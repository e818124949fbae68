use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::LookupError;
use crate::interpreter::PackageResolver;
use crate::package_name::PackageName;
use crate::walk::find_file;

/// One invocation's input: the file to search for and the packages to
/// search it in, in the order they were supplied.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub file_name: String,
    pub packages: Vec<String>,
}

/// The document written to stdout: package name to absolute file path.
///
/// Keys are sorted; entry order carries no meaning for consumers.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultDocument(BTreeMap<String, PathBuf>);

impl ResultDocument {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, package: &str) -> Option<&PathBuf> {
        self.0.get(package)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn insert(&mut self, package: String, path: PathBuf) {
        self.0.insert(package, path);
    }
}

/// Outcome of one batch: the matches and the per-package failures, the
/// latter in processing order.
#[derive(Debug)]
pub struct LookupReport {
    pub matches: ResultDocument,
    pub failures: Vec<LookupError>,
}

impl LookupReport {
    /// True when nothing was found and at least one package failed; the
    /// process exits non-zero in that case.
    pub fn failed_entirely(&self) -> bool {
        self.matches.is_empty() && !self.failures.is_empty()
    }
}

/// Processes every requested package in order. A failure is recorded and
/// the next package is tried; nothing aborts the batch.
pub fn run_lookup<R: PackageResolver>(resolver: &R, request: &LookupRequest) -> LookupReport {
    let mut matches = ResultDocument::default();
    let mut failures = Vec::new();
    for package in &request.packages {
        match lookup_package(resolver, package, &request.file_name) {
            Ok(path) => matches.insert(package.clone(), path),
            Err(e) => failures.push(e),
        }
    }
    LookupReport { matches, failures }
}

fn lookup_package<R: PackageResolver>(
    resolver: &R,
    package: &str,
    file_name: &str,
) -> Result<PathBuf, LookupError> {
    let name = PackageName::parse(package)
        .ok_or_else(|| LookupError::PackageNotFound(package.to_string()))?;
    let dir = resolver.installation_dir(&name)?;
    // Canonicalized so every reported path is absolute even when a resolver
    // hands back a relative or symlinked directory.
    let dir = fs::canonicalize(&dir).map_err(|e| LookupError::Access {
        package: package.to_string(),
        reason: e.to_string(),
    })?;
    match find_file(&dir, file_name) {
        Ok(Some(path)) => Ok(path),
        Ok(None) => Err(LookupError::FileNotFound {
            file: file_name.to_string(),
            package: package.to_string(),
        }),
        Err(e) => Err(LookupError::Access {
            package: package.to_string(),
            reason: e.to_string(),
        }),
    }
}
