//! Locale-sensitive string comparison.
//!
//! Names are ordered by the Unicode Collation Algorithm with the CLDR root tailoring, which is what
//! a browser's default `localeCompare` does as well. Base letters decide first (`ł` sorts with `l`,
//! `ß` like `ss`, `æ` like `ae`), accents only break ties, and case only breaks ties after accents
//! (lowercase first). Punctuation and whitespace are not ignored, they sort before digits and
//! letters.
use core::cell::RefCell;
use core::cmp::Ordering;
use feruca::{Collator, Locale, Tailoring};

thread_local! {
    /// The collator keeps per-instance caches and needs `&mut self` to compare
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, false));
}

/// Compares two strings by collation order. Strings that only differ in ways collation does not
/// look at (e.g. canonically equivalent forms) compare as [`Ordering::Equal`].
#[inline]
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    COLLATOR.with_borrow_mut(|collator| collator.collate(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_does_not_dominate_letters() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "adam"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("McDonald", "Mcdonald"), Ordering::Greater);
    }

    #[test]
    fn test_accents_only_break_ties() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "rf"), Ordering::Less);
        assert_eq!(locale_compare("Émile", "Emile"), Ordering::Greater);
    }

    #[test]
    fn test_acute_before_grave() {
        assert_eq!(locale_compare("Adéle", "Adèle"), Ordering::Less);
    }

    #[test]
    fn test_letters_without_decomposition_sort_with_their_base() {
        assert_eq!(locale_compare("Łukasz", "Zed"), Ordering::Less);
        assert_eq!(locale_compare("Søren", "Sz"), Ordering::Less);
        assert_eq!(locale_compare("Strauß", "Strausz"), Ordering::Less);
        assert_eq!(locale_compare("Æsir", "Bob"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("", "Sr."), Ordering::Less);
        assert_eq!(locale_compare("Doe", "Doe John"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(locale_compare("Ann Smith", "Anna"), Ordering::Less);
        assert_eq!(locale_compare("O'Brien", "Oa"), Ordering::Less);
        assert_eq!(locale_compare("2nd", "a"), Ordering::Less);
    }

    #[test]
    fn test_equivalent_forms_are_equal() {
        assert_eq!(locale_compare("Doe", "Doe"), Ordering::Equal);
        assert_eq!(locale_compare("Jos\u{e9}", "Jose\u{301}"), Ordering::Equal);
        assert_eq!(locale_compare("", ""), Ordering::Equal);
    }
}
