//! LIKE pattern translation.
//!
//! A LIKE pattern is lexed into alternating literal and token segments.
//! Literal text is escaped, tokens are mapped to their regex equivalents,
//! and the result is anchored at each end unless a `%` already makes that
//! end open:
//!
//! | LIKE       | regex    |
//! |------------|----------|
//! | `%`        | `.*`     |
//! | `_`        | `.`      |
//! | `[abc]`    | `[abc]`  |
//! | `[^abc]`   | `[abc]`  |
//! | `[a-e]`    | `[a-e]`  |
//! | `[^a-e]`   | `[a-e]`  |
//!
//! Negated sets and ranges translate to the same class as their plain
//! forms; the `^` is recognized and then dropped.

mod escape;
mod lexer;

use regex::{Regex, RegexBuilder};

use crate::error::{LikeError, Result};

pub use escape::{CLASS_RESERVED, RESERVED, escape, escape_into};
pub use lexer::{LIKE_WILDCARD, LIKE_WILDCHAR, Segment, Segments, Token};

/// Regex equivalent of `%`.
pub const REGEX_WILDCARD: &str = ".*";

/// Regex equivalent of `_`.
pub const REGEX_WILDCHAR: &str = ".";

/// Whether a translated pattern matches case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    /// Match case exactly.
    #[default]
    Sensitive,
    /// Ignore case.
    Insensitive,
}

impl CaseSensitivity {
    /// Check whether case is ignored.
    #[must_use]
    pub const fn ignores_case(self) -> bool {
        matches!(self, Self::Insensitive)
    }

    /// One-character tag distinguishing cache keys.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Sensitive => 'c',
            Self::Insensitive => 'i',
        }
    }
}

/// `true` means ignore case.
impl From<bool> for CaseSensitivity {
    fn from(ignore_case: bool) -> Self {
        if ignore_case {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }
}

/// Parse a LIKE pattern into its segment sequence.
#[must_use]
pub fn segments(pattern: &str) -> Segments {
    lexer::lex(pattern)
}

/// Translate a LIKE pattern into uncompiled regular expression text.
///
/// # Example
///
/// ```
/// use regexp_like::translate::expression;
///
/// assert_eq!(expression("test%ing"), "^test.*ing$");
/// assert_eq!(expression("%testing%"), "testing");
/// assert_eq!(expression("_testing"), "^.testing$");
/// ```
#[must_use]
pub fn expression(pattern: &str) -> String {
    let segments = segments(pattern);
    let mut body = String::with_capacity(pattern.len() * 2 + 2);

    for segment in segments.iter() {
        match segment {
            Segment::Literal(text) => escape_into(&mut body, text, RESERVED),
            Segment::Token(token) => push_token(&mut body, token),
        }
    }

    anchor(&body)
}

/// Translate a LIKE pattern and compile it.
///
/// `case` accepts a [`CaseSensitivity`] or a `bool` meaning "ignore case".
///
/// # Errors
///
/// Returns [`LikeError::InvalidPatternCompilation`] if the regex engine
/// rejects the translated expression, e.g. for a reversed range `[z-a]`.
///
/// # Example
///
/// ```
/// use regexp_like::translate;
///
/// let regex = translate("te[xs]ting", false)?;
/// assert!(regex.is_match("texting"));
/// assert!(regex.is_match("testing"));
/// assert!(!regex.is_match("TESTING"));
/// # Ok::<(), regexp_like::LikeError>(())
/// ```
pub fn translate(pattern: &str, case: impl Into<CaseSensitivity>) -> Result<Regex> {
    let case = case.into();
    let expression = expression(pattern);
    tracing::trace!(pattern, %expression, ignore_case = case.ignores_case(), "translated LIKE pattern");

    RegexBuilder::new(&expression)
        .case_insensitive(case.ignores_case())
        .build()
        .map_err(|source| {
            tracing::warn!(pattern, %expression, error = %source, "LIKE expression failed to compile");
            LikeError::compilation_failure(pattern, expression.clone(), source)
        })
}

/// Append the regex form of a token.
fn push_token(out: &mut String, token: &Token) {
    match token {
        Token::Wildcard => out.push_str(REGEX_WILDCARD),
        Token::WildChar => out.push_str(REGEX_WILDCHAR),
        Token::Set { members, .. } => {
            out.push('[');
            escape_into(out, members, CLASS_RESERVED);
            out.push(']');
        }
        Token::Range { start, end, .. } => {
            out.push('[');
            escape::push_escaped(out, *start, CLASS_RESERVED);
            out.push('-');
            escape::push_escaped(out, *end, CLASS_RESERVED);
            out.push(']');
        }
    }
}

/// Anchor both ends, dropping a wildcard that already opens an end.
fn anchor(body: &str) -> String {
    let mut anchored = match body.strip_prefix(REGEX_WILDCARD) {
        Some(rest) => rest.to_string(),
        None => format!("^{body}"),
    };

    let open_end = anchored.strip_suffix(REGEX_WILDCARD).map(str::len);
    match open_end {
        Some(len) => anchored.truncate(len),
        None => anchored.push('$'),
    }
    anchored
}
