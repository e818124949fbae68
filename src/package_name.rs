use std::fmt::{self, Display, Formatter};

/// A dotted Python package name such as `taipy.gui`.
///
/// Always absolute and non-empty; every segment is non-empty. Built once at
/// the invocation boundary and passed around by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(Vec<String>);

impl PackageName {
    /// Parses a dotted name, rejecting empty names and empty segments
    /// (`""`, `"a..b"`, `".a"`, `"a."`).
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        let segments: Vec<String> = name.split('.').map(|s| s.to_string()).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self(segments))
    }

    pub fn as_str(&self) -> String {
        self.0.join(".")
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Display for PackageName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        let name = PackageName::parse("taipy").unwrap();

        assert_eq!(name.segments(), ["taipy"]);
        assert_eq!(name.as_str(), "taipy");
    }

    #[test]
    fn nested_segments() {
        let name = PackageName::parse("taipy.gui.builder").unwrap();

        assert_eq!(name.segments(), ["taipy", "gui", "builder"]);
        assert_eq!(name.to_string(), "taipy.gui.builder");
    }

    #[test]
    fn empty_name() {
        assert!(PackageName::parse("").is_none());
    }

    #[test]
    fn empty_segments() {
        assert!(PackageName::parse(".").is_none());
        assert!(PackageName::parse("a..b").is_none());
        assert!(PackageName::parse(".a").is_none());
        assert!(PackageName::parse("a.").is_none());
    }
}
