use crate::directory::types::User;
use crate::names::affixes::{is_title, split_trailing_suffix};

/// A full name split into the parts used for display.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    /// Leading honorific, e.g. `Dr.`
    pub title: Option<String>,
    /// All given names, space-joined
    pub first_name: String,
    /// The final name token, without a suffix glued onto it
    pub last_name: String,
    /// Suffix found at the end of the name
    pub suffix: Option<String>,
    /// Suffix that was glued onto the last name, e.g. the `III` of `SmithIII`
    pub roman_suffix: String,
}

impl ParsedName {
    /// Splits a full name into its parts:
    ///
    /// 1. a leading title, only if the name has at least two tokens
    /// 2. a suffix at the end of the last token, the whole token is dropped
    /// 3. the next token from the end is the last name, minus any suffix glued onto it
    /// 4. everything else is the first name
    #[must_use]
    #[allow(clippy::missing_inline_in_public_items, reason = "Large function")]
    pub fn parse(name: &str) -> Self {
        let words: Vec<&str> = name.split(' ').collect();

        let (title, mut words) = match words.split_first() {
            Some((first, rest)) if !rest.is_empty() && is_title(first) => (Some(*first), rest),
            _ => (None, words.as_slice()),
        };

        let mut suffix = None;
        if let Some((last, rest)) = words.split_last() {
            if let Some((_, found)) = split_trailing_suffix(last) {
                suffix = Some(found);
                words = rest;
            }
        }

        let (last_name_raw, first_names) = match words.split_last() {
            Some((last, rest)) => (*last, rest),
            None => ("", words),
        };

        let last_name = split_trailing_suffix(last_name_raw)
            .map_or(last_name_raw, |(before, _)| before)
            .trim();
        let roman_suffix = last_name_raw.replacen(last_name, "", 1).trim().to_owned();

        Self {
            title: title.map(str::to_owned),
            first_name: first_names.join(" "),
            last_name: last_name.to_owned(),
            suffix: suffix.map(str::to_owned),
            roman_suffix,
        }
    }

    /// Display form `Last Suffix, First[RomanSuffix] (Title)`, trimmed.
    #[must_use]
    #[inline]
    pub fn render(&self) -> String {
        let mut formatted = match &self.suffix {
            Some(suffix) => format!("{} {suffix}, {}", self.last_name, self.first_name),
            None => format!("{}, {}", self.last_name, self.first_name),
        };
        formatted.push_str(&self.roman_suffix);
        if let Some(title) = &self.title {
            formatted = format!("{formatted} ({title})");
        }

        formatted.trim().to_owned()
    }
}

/// Formats a full name for display, see [`ParsedName::render`].
#[must_use]
#[inline]
pub fn format_name(name: &str) -> String {
    ParsedName::parse(name).render()
}

/// Display label of a user, used for both the option list and the details table.
#[must_use]
#[inline]
pub fn format_user_name(user: &User) -> String {
    format_name(&user.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::types::Address;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_firstname_lastname() {
        let names = ["Leanne Graham", "Ervin Howell", "Clementina DuBuque"];

        let results: Vec<String> = names.iter().map(|name| format_name(name)).collect();

        let expected = vec![
            String::from("Graham, Leanne"),
            String::from("Howell, Ervin"),
            String::from("DuBuque, Clementina"),
        ];

        assert_eq!(results, expected);
    }

    #[test]
    fn test_titles_and_suffixes() {
        let names = [
            "Dr. John Smith Jr.",
            "Mrs. Dennis Schulist",
            "Nicholas Runolfsdottir V",
            "Prof. Mary Ann Smith III",
            "Sir Elton John",
        ];

        let results: Vec<String> = names.iter().map(|name| format_name(name)).collect();

        let expected = vec![
            String::from("Smith Jr., John (Dr.)"),
            String::from("Schulist, Dennis (Mrs.)"),
            String::from("Runolfsdottir V, Nicholas"),
            String::from("Smith III, Mary Ann (Prof.)"),
            String::from("John, Elton (Sir)"),
        ];

        assert_eq!(results, expected);
    }

    #[test]
    fn test_single_token_keeps_trailing_comma() {
        assert_eq!(format_name("Smith"), "Smith,");
        assert_eq!(format_name("Dr."), "Dr.,");
        assert_eq!(format_name(""), ",");
    }

    #[test]
    fn test_title_is_case_sensitive_and_leading_only() {
        assert_eq!(format_name("dr. John Smith"), "Smith, dr. John");
        assert_eq!(format_name("John Dr. Smith"), "Smith, John Dr.");
    }

    #[test]
    fn test_glued_suffix_on_last_name() {
        let parsed = ParsedName::parse("Sam SmithIII Jr.");

        let expected = ParsedName {
            title: None,
            first_name: String::from("Sam"),
            last_name: String::from("Smith"),
            suffix: Some(String::from("Jr.")),
            roman_suffix: String::from("III"),
        };

        assert_eq!(parsed, expected);
        assert_eq!(parsed.render(), "Smith Jr., SamIII");
    }

    #[test]
    fn test_glued_suffix_on_final_token_drops_the_token() {
        assert_eq!(format_name("John SmithIII"), "John III,");
    }

    #[test]
    fn test_degenerate_names_do_not_fail() {
        assert_eq!(format_name("Mr. V"), "V,  (Mr.)");
        assert_eq!(format_name("  Smith"), "Smith,");
        assert_eq!(format_name("John III Jr."), "Jr., JohnIII");
    }

    #[test]
    fn test_format_user_name() {
        let user = User::new(7, String::from("Ms. Ada Lovelace"), Address::default());
        assert_eq!(format_user_name(&user), "Lovelace, Ada (Ms.)");
    }
}
