//! Call-site identity for header deduplication.

use std::fmt;

/// The `(file, line)` location a debug helper was invoked from.
///
/// Captured at the macro expansion site via `file!()`/`line!()`; consecutive
/// calls from the same site share one location header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Create a call site.
    pub fn new(file: &'static str, line: u32) -> Self {
        CallSite { file, line }
    }

    /// Deduplication key, `"file:line"`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_joins_file_and_line() {
        assert_eq!(CallSite::new("a.rs", 10).key(), "a.rs:10");
    }

    #[test]
    fn test_display_uses_parens() {
        assert_eq!(CallSite::new("a.rs", 10).to_string(), "a.rs(10)");
    }

    #[test]
    fn test_same_site_same_key() {
        assert_eq!(CallSite::new("a.rs", 1).key(), CallSite::new("a.rs", 1).key());
        assert_ne!(CallSite::new("a.rs", 1).key(), CallSite::new("a.rs", 2).key());
    }
}
