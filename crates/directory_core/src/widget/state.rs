use crate::directory::types::User;
use crate::names::filtering::filter_users;
use crate::names::formatting::format_user_name;
use crate::widget::details::DetailsTable;
use log::info;

#[non_exhaustive]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("option {index} does not exist, there are {available} options")]
    OutOfRange { index: usize, available: usize },
}

/// State of the picker: the canonical user list, the options currently offered and the selected
/// user. Each event replaces the affected slot as a whole.
#[derive(Debug, Default, Clone)]
pub struct PickerState {
    users: Vec<User>,
    options: Vec<User>,
    selected: Option<User>,
}

impl PickerState {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a freshly loaded, already sorted user list as both the canonical list and the
    /// options.
    #[inline]
    pub fn fetch_succeeded(&mut self, users: Vec<User>) {
        info!("Publishing {} users", users.len());
        self.options.clone_from(&users);
        self.users = users;
    }

    /// Narrows the options to the users matching `query`. The selection is not touched.
    #[inline]
    pub fn filter_changed(&mut self, query: &str) {
        self.options = filter_users(&self.users, query);
    }

    /// Selects the option at `index` of the current options, or clears the selection for `None`.
    /// # Errors
    /// Fails if `index` does not refer to a current option, the state is left unchanged then
    #[inline]
    pub fn selection_changed(&mut self, index: Option<usize>) -> Result<(), SelectionError> {
        self.selected = match index {
            None => None,
            Some(index) => Some(self.options.get(index).cloned().ok_or(
                SelectionError::OutOfRange {
                    index,
                    available: self.options.len(),
                },
            )?),
        };
        Ok(())
    }

    /// The canonical, sorted user list
    #[must_use]
    #[inline]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    #[inline]
    pub fn options(&self) -> &[User] {
        &self.options
    }

    #[must_use]
    #[inline]
    pub const fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Display labels of the current options, in option order
    #[must_use]
    #[inline]
    pub fn option_labels(&self) -> Vec<String> {
        self.options.iter().map(format_user_name).collect()
    }

    /// Details table of the selection, `None` while nothing is selected
    #[must_use]
    #[inline]
    pub fn details(&self) -> Option<DetailsTable> {
        self.selected.as_ref().map(DetailsTable::from_user)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use crate::directory::types::Address;
    use crate::names::sorting::sort_users;
    use pretty_assertions::assert_eq;

    fn loaded() -> PickerState {
        let users: Vec<User> = ["Leanne Graham", "Mrs. Dennis Schulist", "Ervin Howell"]
            .iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, (*name).to_owned(), Address::default()))
            .collect();
        let mut state = PickerState::new();
        state.fetch_succeeded(sort_users(&users));
        state
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = PickerState::new();
        assert!(state.users().is_empty());
        assert!(state.options().is_empty());
        assert!(state.selected().is_none());
        assert!(state.details().is_none());
    }

    #[test]
    fn test_fetch_publishes_both_lists() {
        let state = loaded();
        assert_eq!(state.users(), state.options());
        assert_eq!(
            state.option_labels(),
            vec![
                String::from("Howell, Ervin"),
                String::from("Graham, Leanne"),
                String::from("Schulist, Dennis (Mrs.)"),
            ]
        );
    }

    #[test]
    fn test_filter_replaces_options_only() {
        let mut state = loaded();
        state.filter_changed("LE");

        assert_eq!(state.users().len(), 3);
        assert_eq!(
            state.option_labels(),
            vec![String::from("Graham, Leanne")]
        );

        state.filter_changed("");
        assert_eq!(state.options(), state.users());
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut state = loaded();
        state.filter_changed("ervin");
        state.selection_changed(Some(0)).unwrap();
        state.filter_changed("nobody");

        assert!(state.options().is_empty());
        assert_eq!(state.selected().map(|user| user.id), Some(3));
        assert_eq!(
            state.details().map(|details| details.name),
            Some(String::from("Howell, Ervin"))
        );
    }

    #[test]
    fn test_out_of_range_selection_keeps_state() {
        let mut state = loaded();
        state.selection_changed(Some(1)).unwrap();

        let result = state.selection_changed(Some(3));

        assert_eq!(
            result,
            Err(SelectionError::OutOfRange {
                index: 3,
                available: 3
            })
        );
        assert_eq!(state.selected().map(|user| user.id), Some(1));
    }

    #[test]
    fn test_clearing_selection() {
        let mut state = loaded();
        state.selection_changed(Some(2)).unwrap();
        state.selection_changed(None).unwrap();
        assert!(state.details().is_none());
    }
}
