//! Honorific titles and generational suffixes recognised in full names.
use log::warn;
use regex::Regex;
use std::sync::LazyLock;

/// Honorifics, only recognised as the first token of a name with at least two tokens.
pub const TITLES: [&str; 11] = [
    "Mr.", "Mrs.", "Ms.", "Miss", "Dr.", "Prof.", "Rev.", "Capt.", "Lt.", "Sir", "Madam",
];

/// Generational and regnal markers.
pub const SUFFIXES: [&str; 6] = ["Jr.", "Sr.", "II", "III", "IV", "V"];

/// Suffix anchored at the end of a token but not at its start, so it also finds suffixes glued
/// onto a surname such as `SmithIII`.
const TRAILING_SUFFIX_PATTERN: &str = r"(Jr\.|Sr\.|II|III|IV|V)$";

static TRAILING_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| match Regex::new(TRAILING_SUFFIX_PATTERN) {
        Ok(re) => Some(re),
        Err(error) => {
            warn!("Failed to construct suffix regex, suffixes will not be detected: {error}");
            None
        }
    });

/// Exact, case-sensitive match of a whole token against [`TITLES`].
#[inline]
#[must_use]
pub fn is_title(token: &str) -> bool {
    TITLES.contains(&token)
}

/// Exact, case-sensitive match of a whole token against [`SUFFIXES`].
#[inline]
#[must_use]
pub fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(&token)
}

/// Splits a token into the part before a trailing suffix and the suffix itself. The earliest
/// starting match wins, which makes `III` win over `II` and `IV` over `V`.
#[inline]
#[must_use]
pub fn split_trailing_suffix(token: &str) -> Option<(&str, &str)> {
    let found = TRAILING_SUFFIX.as_ref()?.find(token)?;
    Some((&token[..found.start()], found.as_str()))
}
