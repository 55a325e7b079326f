use crate::directory::types::User;
use crate::names::affixes::is_suffix;
use crate::names::collation::locale_compare;
use core::cmp::Ordering;

/// Sort key of a user, only used to compare two names.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameKey {
    /// Every token of the name that is not the trailing suffix, joined by single spaces
    pub last_name: String,
    /// Trailing generational suffix, empty if there is none
    pub suffix: String,
}

impl NameKey {
    #[must_use]
    #[inline]
    pub const fn new(last_name: String, suffix: String) -> Self {
        Self { last_name, suffix }
    }

    /// Orders by last name first and uses the suffix only to break ties, both by collation order.
    #[must_use]
    #[inline]
    pub fn collate(&self, other: &Self) -> Ordering {
        locale_compare(&self.last_name, &other.last_name)
            .then_with(|| locale_compare(&self.suffix, &other.suffix))
    }
}

/// Derives the sort key of a full name.
///
/// Only an exact trailing suffix token is split off. All other tokens stay in `last_name`, there is
/// no attempt to tell given names from the surname here:
/// `John Smith Jr.` -> (`John Smith`, `Jr.`)
#[must_use]
#[inline]
pub fn extract_name_key(name: &str) -> NameKey {
    let mut words: Vec<&str> = name.split(' ').collect();
    let suffix = if words.last().is_some_and(|last| is_suffix(last)) {
        words.pop().unwrap_or_default()
    } else {
        ""
    };
    let last_name = words.join(" ");

    NameKey::new(last_name.trim().to_owned(), suffix.to_owned())
}

/// Comparator over two users by their name keys.
#[must_use]
#[inline]
pub fn compare_users(left: &User, right: &User) -> Ordering {
    extract_name_key(&left.name).collate(&extract_name_key(&right.name))
}

/// Returns a sorted copy of `users`, the input is left untouched. The sort is stable, users with
/// equal keys keep their relative order.
#[must_use]
#[allow(clippy::missing_inline_in_public_items, reason = "Called once per fetch")]
pub fn sort_users(users: &[User]) -> Vec<User> {
    let mut keyed: Vec<(NameKey, User)> = users
        .iter()
        .map(|user| (extract_name_key(&user.name), user.clone()))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| left.collate(right));
    keyed.into_iter().map(|(_, user)| user).collect()
}
