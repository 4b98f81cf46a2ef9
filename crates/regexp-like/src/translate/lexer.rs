//! Single-pass lexer for LIKE patterns.
//!
//! The lexer walks the pattern once, accumulating literal text and cutting a
//! new segment whenever it recognizes a LIKE token. The result always
//! alternates literal, token, literal, ..., literal, so `k` tokens produce
//! `2k + 1` segments.
//!
//! Bracket rules:
//!
//! - A body starting with `^` is read as negated when the rest forms a valid
//!   set or range.
//! - `[^-x]` cannot be a negated range, so the `^` is still dropped as a
//!   negation marker and the rest becomes the set `-x`.
//! - `[^]` is the set holding `^`. Dropping the `^` would leave an empty
//!   class, which the regex engine rejects.
//! - Anything else after `[` that is not a set or range keeps the `[` literal.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// LIKE any-length wildcard.
pub const LIKE_WILDCARD: char = '%';

/// LIKE single-character wildcard.
pub const LIKE_WILDCHAR: char = '_';

const SET_OPEN: char = '[';
const SET_CLOSE: char = ']';
const SET_NEGATE: char = '^';
const RANGE_DASH: char = '-';

/// A recognized LIKE token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `%`: zero or more arbitrary characters.
    Wildcard,
    /// `_`: exactly one arbitrary character.
    WildChar,
    /// `[abc]` or `[^abc]`: one character from a list.
    Set {
        /// Whether the set was written with a leading `^`.
        negated: bool,
        /// The listed characters, never empty and never containing `]`.
        ///
        /// Only the `[^-x]` form puts a `-` here.
        members: String,
    },
    /// `[a-e]` or `[^a-e]`: one character from an ordered range.
    Range {
        /// Whether the range was written with a leading `^`.
        negated: bool,
        /// First character of the range.
        start: char,
        /// Last character of the range.
        end: char,
    },
}

impl Token {
    /// Whether the token was written in negated (`[^...]`) form.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        match self {
            Self::Set { negated, .. } | Self::Range { negated, .. } => *negated,
            Self::Wildcard | Self::WildChar => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negation = if self.is_negated() { "^" } else { "" };
        match self {
            Self::Wildcard => write!(f, "{LIKE_WILDCARD}"),
            Self::WildChar => write!(f, "{LIKE_WILDCHAR}"),
            Self::Set { members, .. } => write!(f, "[{negation}{members}]"),
            Self::Range { start, end, .. } => write!(f, "[{negation}{start}-{end}]"),
        }
    }
}

/// One element of a [`Segments`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, possibly empty.
    Literal(&'a str),
    /// A LIKE token.
    Token(&'a Token),
}

/// A parsed LIKE pattern: literal text interleaved with tokens.
///
/// There is always exactly one more literal than there are tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    literals: Vec<String>,
    tokens: Vec<Token>,
}

impl Segments {
    /// Number of segments, literals and tokens together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len() + self.tokens.len()
    }

    /// Always false: even an empty pattern has one (empty) literal.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The tokens in pattern order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The literal runs in pattern order.
    #[must_use]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Iterate segments in order, starting and ending with a literal.
    pub fn iter(&self) -> impl Iterator<Item = Segment<'_>> {
        let head = std::iter::once(Segment::Literal(self.literals[0].as_str()));
        let rest = self
            .tokens
            .iter()
            .zip(&self.literals[1..])
            .flat_map(|(token, literal)| {
                [Segment::Token(token), Segment::Literal(literal.as_str())]
            });
        head.chain(rest)
    }
}

/// Split a LIKE pattern into its segment sequence.
///
/// Never fails: a `[` that does not open a well-formed set or range is kept
/// as literal text.
#[must_use]
pub fn lex(pattern: &str) -> Segments {
    let mut literals = Vec::new();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            LIKE_WILDCARD => Some(Token::Wildcard),
            LIKE_WILDCHAR => Some(Token::WildChar),
            SET_OPEN => lex_bracket(&mut chars),
            _ => None,
        };

        match token {
            Some(token) => {
                literals.push(std::mem::take(&mut literal));
                tokens.push(token);
            }
            None => literal.push(c),
        }
    }
    literals.push(literal);

    Segments { literals, tokens }
}

/// Try to read a set or range body after an opening `[`.
///
/// The iterator is only advanced when a token is recognized.
fn lex_bracket(chars: &mut Peekable<Chars<'_>>) -> Option<Token> {
    let rest = chars.clone();

    let negated = {
        let mut probe = rest.clone();
        if probe.next() == Some(SET_NEGATE) {
            lex_body(&mut probe, true).map(|token| (token, probe))
        } else {
            None
        }
    };

    let (token, advanced) = negated.or_else(|| {
        let mut probe = rest;
        lex_body(&mut probe, false).map(|token| (caret_range_as_set(token), probe))
    })?;

    *chars = advanced;
    Some(token)
}

/// `[^-x]` keeps the leading `^` as a negation marker, leaving the set `-x`.
fn caret_range_as_set(token: Token) -> Token {
    match token {
        Token::Range {
            start: SET_NEGATE,
            end,
            ..
        } => Token::Set {
            negated: true,
            members: [RANGE_DASH, end].into_iter().collect(),
        },
        token => token,
    }
}

/// Read `c]`-terminated set members or a `a-b]` range.
fn lex_body(chars: &mut Peekable<Chars<'_>>, negated: bool) -> Option<Token> {
    let start = chars.next().filter(|&c| c != RANGE_DASH && c != SET_CLOSE)?;

    if chars.peek() == Some(&RANGE_DASH) {
        chars.next();
        let end = chars.next().filter(|&c| c != SET_CLOSE)?;
        return (chars.next() == Some(SET_CLOSE)).then_some(Token::Range {
            negated,
            start,
            end,
        });
    }

    let mut members = String::from(start);
    loop {
        match chars.next()? {
            SET_CLOSE => return Some(Token::Set { negated, members }),
            RANGE_DASH => return None,
            c => members.push(c),
        }
    }
}
