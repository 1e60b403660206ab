//! Safe names — the restricted character set used for path segments and
//! string tag values.
//!
//! A safe name consists only of Unicode letters and numbers plus the hyphen
//! (`-`), underscore (`_`) and colon (`:`). Letters and numbers are the
//! Unicode general categories `L` and `N`, not ASCII ranges: `niño`,
//! `garçon` and `你好` are all safe, while symbols such as `Ⓐ` and
//! combining marks are not. Logs can be written in any human language while
//! staying easy to split and grep.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static SAFE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}_:-]*$").expect("safe name pattern must compile")
});

/// One disallowed character per match.
static UNSAFE_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_:-]").expect("unsafe char pattern must compile")
});

/// Returns `true` if every character of `name` is a letter, a number, or one
/// of `-`, `_`, `:`. The empty string is safe.
pub fn is_safe_name(name: &str) -> bool {
    SAFE_NAME.is_match(name)
}

/// Transforms `name` into a safe name, borrowing it when no change is needed.
///
/// Leading and trailing whitespace is stripped, interior whitespace becomes
/// `_`, and any other disallowed character becomes `-`.
pub fn make_safe_name(name: &str) -> Cow<'_, str> {
    if is_safe_name(name) {
        return Cow::Borrowed(name);
    }
    let replaced = UNSAFE_CHAR.replace_all(name.trim(), |caps: &regex::Captures<'_>| {
        if caps[0].chars().all(char::is_whitespace) {
            "_"
        } else {
            "-"
        }
    });
    Cow::Owned(replaced.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::word("one")]
    #[case::digit("1")]
    #[case::mixed("1one")]
    #[case::tilde("niño")]
    #[case::cedilla("garçon")]
    #[case::hyphen("alice-bob")]
    #[case::underscore("alice_bob")]
    #[case::colon("alice:bob")]
    #[case::cjk("你好")]
    #[case::empty("")]
    fn safe_names(#[case] name: &str) {
        assert!(is_safe_name(name), "{name:?} should be safe");
        assert!(matches!(make_safe_name(name), Cow::Borrowed(n) if n == name));
    }

    #[rstest]
    #[case::leading_space(" one")]
    #[case::trailing_space("one ")]
    #[case::slash("alice/bob")]
    #[case::inner_space("alice bob")]
    #[case::dot("zombo.com")]
    #[case::circled_letter("\u{24B6}")]
    #[case::combining_vowel_sign("\u{0947}")]
    #[case::combining_ypogegrammeni("\u{0345}")]
    fn unsafe_names(#[case] name: &str) {
        assert!(!is_safe_name(name), "{name:?} should be unsafe");
    }

    #[rstest]
    #[case(" dave ", "dave")]
    #[case("alice bob", "alice_bob")]
    #[case("alice/bob", "alice-bob")]
    #[case("a\tb", "a_b")]
    #[case("zombo.com", "zombo-com")]
    #[case("x-y/z", "x-y-z")]
    #[case("   ", "")]
    #[case("\u{24B6}bc", "-bc")]
    #[case("\u{0928}\u{0947}", "\u{0928}-")]
    fn transformations(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(make_safe_name(input), expected);
    }

    proptest! {
        #[test]
        fn output_is_always_safe(name in ".*") {
            prop_assert!(is_safe_name(&make_safe_name(&name)));
        }

        #[test]
        fn safe_input_is_unchanged(name in "[a-zA-Z0-9_:-]*") {
            prop_assert_eq!(make_safe_name(&name), name.as_str());
        }

        #[test]
        fn sanitizing_twice_is_sanitizing_once(name in ".*") {
            let once = make_safe_name(&name).into_owned();
            prop_assert_eq!(make_safe_name(&once), once.as_str());
        }
    }
}
