//! Property tests for LIKE translation and caching.

use proptest::prelude::*;
use regexp_like::LikeCache;
use regexp_like::translate::{expression, segments, translate};

/// Characters that never form a LIKE token on their own.
const LITERAL_CHARS: &[char] = &[
    'a', 'b', 'z', 'A', 'Z', '0', '9', ' ', '.', '\\', '+', '*', '?', '^', '$', '(', ')', '{',
    '}', '=', '!', '<', '>', '|', ':', ']', '&', '~', '-', '#', '¢', 'é',
];

/// Regex-reserved characters only.
const RESERVED_CHARS: &[char] = &[
    '.', '\\', '+', '*', '?', '^', '$', '(', ')', '{', '}', '=', '!', '<', '>', '|', ':', ']',
];

fn text_from(chars: &'static [char], max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(chars), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn literal_text() -> impl Strategy<Value = String> {
    text_from(LITERAL_CHARS, 16)
}

proptest! {
    #[test]
    fn literal_patterns_are_anchored_and_match_themselves(text in literal_text()) {
        let regex = translate(&text, false).unwrap();
        let source = regex.as_str();
        prop_assert!(source.starts_with('^'));
        prop_assert!(source.ends_with('$'));
        prop_assert!(regex.is_match(&text));
        let longer = format!("{text}x");
        prop_assert!(!regex.is_match(&longer));
    }

    #[test]
    fn reserved_only_patterns_match_exactly(text in text_from(RESERVED_CHARS, 12)) {
        let regex = translate(&text, false).unwrap();
        prop_assert!(regex.is_match(&text));
        let prefixed = format!("_{text}");
        let suffixed = format!("{text}_");
        prop_assert!(!regex.is_match(&prefixed));
        prop_assert!(!regex.is_match(&suffixed));
    }

    #[test]
    fn wildcard_matches_any_middle(
        head in literal_text(),
        tail in literal_text(),
        middle in "[a-z0-9 ]{0,10}",
    ) {
        let regex = translate(&format!("{head}%{tail}"), false).unwrap();
        let text = format!("{head}{middle}{tail}");
        prop_assert!(regex.is_match(&text));
    }

    #[test]
    fn wildchar_matches_exactly_one(
        head in literal_text(),
        tail in literal_text(),
        c in "[a-z0-9é]",
    ) {
        let regex = translate(&format!("{head}_{tail}"), false).unwrap();
        let one = format!("{head}{c}{tail}");
        let two = format!("{head}{c}{c}{tail}");
        prop_assert!(regex.is_match(&one));
        prop_assert!(!regex.is_match(&two));
    }

    #[test]
    fn leading_and_trailing_wildcards_drop_anchors(text in "[a-z0-9]{1,12}") {
        let leading = expression(&format!("%{text}"));
        let trailing = expression(&format!("{text}%"));
        prop_assert!(!leading.starts_with('^'));
        prop_assert!(leading.ends_with('$'));
        prop_assert!(trailing.starts_with('^'));
        prop_assert!(!trailing.ends_with('$'));
    }

    #[test]
    fn segment_sequence_alternates(pattern in "[a-c%_\\[\\]\\^-]{0,24}") {
        let parsed = segments(&pattern);
        prop_assert_eq!(parsed.len(), 2 * parsed.tokens().len() + 1);
        prop_assert_eq!(parsed.literals().len(), parsed.tokens().len() + 1);
    }

    #[test]
    fn translation_never_panics(pattern in "\\PC{0,32}") {
        // Reversed ranges may fail to compile; anything else must succeed.
        let _ = translate(&pattern, true);
    }

    #[test]
    fn sets_match_their_members(members in "[a-z]{1,6}") {
        let plain = translate(&format!("[{members}]"), false).unwrap();
        let negated = translate(&format!("[^{members}]"), false).unwrap();
        for member in members.chars() {
            let member = member.to_string();
            prop_assert!(plain.is_match(&member));
            prop_assert!(negated.is_match(&member));
        }
        prop_assert!(!plain.is_match("#"));
    }

    #[test]
    fn bounded_cache_never_exceeds_bound(
        max in 1usize..30,
        lookups in prop::collection::vec(0usize..60, 1..200),
    ) {
        let cache = LikeCache::bounded(max);
        for i in lookups {
            cache.lookup(&format!("p{i}%"), false, None).unwrap();
            prop_assert!(cache.len() <= max);
        }
    }

    #[test]
    fn repeated_lookup_does_not_grow(pattern in literal_text()) {
        let cache = LikeCache::unbounded();
        let first = cache.lookup(&pattern, false, None).unwrap();
        let second = cache.lookup(&pattern, false, None).unwrap();
        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert_eq!(cache.len(), 1);
    }
}
