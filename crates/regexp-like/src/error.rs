//! Error types for regexp-like.
//!
//! Translation itself never fails: every LIKE pattern yields some expression
//! text. Errors arise only when that text cannot be compiled by the regex
//! engine, or when configuration values cannot be read.

use thiserror::Error;

/// Maximum length of an expression to display in error messages.
const MAX_EXPRESSION_DISPLAY: usize = 200;

/// Format an expression for display, truncating if necessary.
fn format_expression_snippet(expression: &str) -> String {
    if expression.chars().count() <= MAX_EXPRESSION_DISPLAY {
        return expression.to_string();
    }

    let head: String = expression.chars().take(MAX_EXPRESSION_DISPLAY).collect();
    let hidden = expression.chars().count() - MAX_EXPRESSION_DISPLAY;
    format!("{head}... ({hidden} chars hidden)")
}

/// Format a compilation failure with the pattern, expression and cause.
fn format_compilation_error(pattern: &str, expression: &str, source: &regex::Error) -> String {
    let expression = format_expression_snippet(expression);

    format!(
        "LIKE pattern could not be compiled\n\
         \n\
         Pattern:    '{pattern}'\n\
         Expression: '{expression}'\n\
         \n\
         {source}"
    )
}

/// The main error type for regexp-like operations.
#[derive(Debug, Error)]
pub enum LikeError {
    /// The expression assembled from a LIKE pattern was rejected by the
    /// regex engine (for example a reversed range such as `[z-a]`).
    #[error("{}", format_compilation_error(pattern, expression, source))]
    InvalidPatternCompilation {
        /// The LIKE pattern that was translated.
        pattern: String,
        /// The regular expression text produced by translation.
        expression: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for regexp-like operations.
pub type Result<T> = std::result::Result<T, LikeError>;

impl LikeError {
    /// Create a compilation failure error.
    pub fn compilation_failure(
        pattern: impl Into<String>,
        expression: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPatternCompilation {
            pattern: pattern.into(),
            expression: expression.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a compilation failure.
    #[must_use]
    pub const fn is_compilation_failure(&self) -> bool {
        matches!(self, Self::InvalidPatternCompilation { .. })
    }

    /// Get the LIKE pattern if this error concerns one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPatternCompilation { pattern, .. } => Some(pattern),
            Self::Config { .. } => None,
        }
    }

    /// Get the translated expression if this error concerns one.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::InvalidPatternCompilation { expression, .. } => Some(expression),
            Self::Config { .. } => None,
        }
    }
}
