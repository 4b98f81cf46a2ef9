//! Compiled LIKE patterns.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::cache::LikeCache;
use crate::error::Result;
use crate::translate::{CaseSensitivity, translate};

/// A LIKE pattern together with its compiled regular expression.
#[derive(Clone)]
pub struct LikePattern {
    pattern: String,
    case: CaseSensitivity,
    regex: Arc<Regex>,
}

impl LikePattern {
    /// Translate and compile a LIKE pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the translated expression fails to compile.
    pub fn new(pattern: impl Into<String>, case: impl Into<CaseSensitivity>) -> Result<Self> {
        let pattern = pattern.into();
        let case = case.into();
        let regex = Arc::new(translate(&pattern, case)?);
        Ok(Self {
            pattern,
            case,
            regex,
        })
    }

    /// Build a pattern through a cache, sharing its compiled expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the translated expression fails to compile.
    pub fn cached(
        cache: &LikeCache,
        pattern: impl Into<String>,
        case: impl Into<CaseSensitivity>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let case = case.into();
        let regex = cache.lookup(&pattern, case, None)?;
        Ok(Self {
            pattern,
            case,
            regex,
        })
    }

    /// Get the source LIKE pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the translated regular expression text.
    #[must_use]
    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }

    /// Get the case sensitivity the pattern was compiled with.
    #[must_use]
    pub const fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Get the compiled regular expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Check whether `text` matches the pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Debug for LikePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LikePattern")
            .field("pattern", &self.pattern)
            .field("expression", &self.expression())
            .field("case", &self.case)
            .finish()
    }
}

impl fmt::Display for LikePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_matches() {
        let pattern = LikePattern::new("test%ing", false).unwrap();
        assert!(pattern.is_match("testing"));
        assert!(pattern.is_match("test-driven thing"));
        assert!(!pattern.is_match("a testing"));
        assert_eq!(pattern.expression(), "^test.*ing$");
        assert_eq!(pattern.pattern(), "test%ing");
        assert_eq!(pattern.to_string(), "test%ing");
    }

    #[test]
    fn like_pattern_case() {
        let pattern = LikePattern::new("ABC", true).unwrap();
        assert_eq!(pattern.case(), CaseSensitivity::Insensitive);
        assert!(pattern.is_match("abc"));
    }

    #[test]
    fn like_pattern_through_cache() {
        let cache = LikeCache::bounded(4);
        let first = LikePattern::cached(&cache, "a_c", false).unwrap();
        let second = LikePattern::cached(&cache, "a_c", false).unwrap();
        assert!(Arc::ptr_eq(&first.regex, &second.regex));
        assert_eq!(cache.len(), 1);
        assert!(first.is_match("abc"));
    }

    #[test]
    fn like_pattern_debug_shows_expression() {
        let pattern = LikePattern::new("a%", false).unwrap();
        let debug = format!("{pattern:?}");
        assert!(debug.contains("^a"));
    }
}
