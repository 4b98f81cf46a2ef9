//! Reserved-character escaping.
//!
//! The escaper is driven by an explicit character table so that literal text
//! and character-class bodies can use different reserved sets.

/// Characters escaped in literal text.
pub const RESERVED: &[char] = &[
    '.', '\\', '+', '*', '?', '^', '$', '(', ')', '{', '}', '=', '!', '<', '>', '|', ':', '[',
    ']',
];

/// Characters escaped inside a character class.
///
/// Adds the class set operators (`&&`, `--`, `~~`) on top of [`RESERVED`].
pub const CLASS_RESERVED: &[char] = &[
    '.', '\\', '+', '*', '?', '^', '$', '(', ')', '{', '}', '=', '!', '<', '>', '|', ':', '[',
    ']', '&', '~', '-',
];

/// Append `text` to `out`, escaping every character found in `reserved`.
///
/// A reserved character is prefixed with a backslash only when the regex
/// dialect reads the escape as that literal character. `<` and `>` are
/// word-boundary assertions when escaped, so they are written bare; they are
/// already literal in that form.
pub fn escape_into(out: &mut String, text: &str, reserved: &[char]) {
    for c in text.chars() {
        push_escaped(out, c, reserved);
    }
}

/// Append a single character to `out`, escaping it if reserved.
pub fn push_escaped(out: &mut String, c: char, reserved: &[char]) {
    if reserved.contains(&c) && regex_syntax::is_escapeable_character(c) {
        out.push('\\');
    }
    out.push(c);
}

/// Escape `text` into a new string.
#[must_use]
pub fn escape(text: &str, reserved: &[char]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    escape_into(&mut out, text, reserved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape("testing 123", RESERVED), "testing 123");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            escape(r".\+*?^$(){}=!|:[]", RESERVED),
            r"\.\\\+\*\?\^\$\(\)\{\}\=\!\|\:\[\]"
        );
    }

    #[test]
    fn angle_brackets_stay_bare() {
        assert_eq!(escape("<a>", RESERVED), "<a>");
    }

    #[test]
    fn class_operators_only_escaped_in_classes() {
        assert_eq!(escape("a&&b~~c-d", RESERVED), "a&&b~~c-d");
        assert_eq!(escape("a&&b~~c-d", CLASS_RESERVED), r"a\&\&b\~\~c\-d");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape("¢é日本", CLASS_RESERVED), "¢é日本");
    }

    #[test]
    fn every_escaped_literal_compiles_to_itself() {
        for &c in CLASS_RESERVED {
            let text = c.to_string();
            let expression = format!("^{}$", escape(&text, CLASS_RESERVED));
            let regex = regex::Regex::new(&expression).unwrap();
            assert!(regex.is_match(&text), "{expression} should match {text:?}");
        }
    }
}
