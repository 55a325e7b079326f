use crate::directory::types::User;

/// Returns the users whose name contains `query`, ignoring case, in the order of `users`. An empty
/// query matches everything.
#[must_use]
#[allow(clippy::missing_inline_in_public_items, reason = "Called once per input change")]
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let query = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::types::Address;
    use pretty_assertions::assert_eq;

    fn users() -> Vec<User> {
        ["John Smith", "Jane Doe", "Mrs. Dennis Schulist", "Anna Smithson"]
            .iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, (*name).to_owned(), Address::default()))
            .collect()
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|user| user.id).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let all = users();
        assert_eq!(filter_users(&all, ""), all);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert_eq!(ids(&filter_users(&users(), "SMI")), vec![1, 4]);
        assert_eq!(ids(&filter_users(&users(), "mrs.")), vec![3]);
    }

    #[test]
    fn test_query_matches_inside_words() {
        assert_eq!(ids(&filter_users(&users(), "e d")), vec![2]);
        assert_eq!(ids(&filter_users(&users(), "son")), vec![4]);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(filter_users(&users(), "xyz").is_empty());
    }
}
