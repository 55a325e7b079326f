use directory_core::widget::state::PickerState;
use std::io::{self, Write};

/// Label of the filter field, also used as input prompt
const PROMPT: &str = "Name> ";

/// Writes the option list, followed by the details table if a user is selected.
pub fn render<W: Write>(out: &mut W, state: &PickerState, notice: Option<&str>) -> io::Result<()> {
    if let Some(notice) = notice {
        writeln!(out, "{notice}")?;
    }

    let labels = state.option_labels();
    if labels.is_empty() {
        writeln!(out, "(no users)")?;
    }
    for (position, label) in labels.iter().enumerate() {
        writeln!(out, "{:>3}. {label}", position.saturating_add(1))?;
    }

    if let Some(details) = state.details() {
        writeln!(out)?;
        writeln!(out, "User Details:")?;
        writeln!(out, "{details}")?;
    }

    Ok(())
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Writing into a Vec<u8> does not fail"
)]
mod tests {
    use super::*;
    use directory_core::directory::types::{Address, User};
    use pretty_assertions::assert_eq;

    fn rendered(state: &PickerState, notice: Option<&str>) -> String {
        let mut out = Vec::new();
        render(&mut out, state, notice).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn state() -> PickerState {
        let mut state = PickerState::new();
        state.fetch_succeeded(vec![
            User::new(
                5,
                String::from("Chelsey Dietrich"),
                Address::new(
                    String::from("Skiles Walks"),
                    String::from("Suite 351"),
                    String::from("Roscoeview"),
                    String::from("33263"),
                ),
            ),
            User::new(6, String::from("Mrs. Dennis Schulist"), Address::default()),
        ]);
        state
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(rendered(&PickerState::new(), None), "(no users)\n");
    }

    #[test]
    fn test_options_are_numbered() {
        assert_eq!(
            rendered(&state(), Some("option 7 is not listed")),
            "option 7 is not listed\n  1. Dietrich, Chelsey\n  2. Schulist, Dennis (Mrs.)\n"
        );
    }

    #[test]
    fn test_selection_shows_details() {
        let mut state = state();
        state.selection_changed(Some(0)).unwrap();

        let expected = [
            "  1. Dietrich, Chelsey",
            "  2. Schulist, Dennis (Mrs.)",
            "",
            "User Details:",
            "Name              | Street       | Suite     | City       | Zipcode",
            "------------------+--------------+-----------+------------+--------",
            "Dietrich, Chelsey | Skiles Walks | Suite 351 | Roscoeview | 33263",
            "",
        ]
        .join("\n");

        assert_eq!(rendered(&state, None), expected);
    }

    #[test]
    fn test_prompt() {
        let mut out = Vec::new();
        prompt(&mut out).unwrap();
        assert_eq!(out, b"Name> ");
    }
}
