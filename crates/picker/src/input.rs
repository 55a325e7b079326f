use directory_core::widget::state::PickerState;
use log::warn;

/// One input event of the picker. Every line typed by the user is exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New contents of the filter field
    Filter(String),
    /// Select the option at this zero-based position
    Select(usize),
    ClearSelection,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("options are numbered from 1, use :1 for the first one")]
    ZeroOption,
    #[error("unknown command `:{0}`, use :<number>, :clear or :q")]
    Unknown(String),
}

/// What the input loop should do after an event has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render the state again, optionally preceded by a notice for the user
    Continue(Option<String>),
    Quit,
}

/// Parses one input line. Lines starting with `:` are commands, anything else (including an empty
/// line) replaces the filter text.
pub fn parse_event(line: &str) -> Result<Event, CommandError> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Event::Filter(line.to_owned()));
    };

    match command.trim() {
        "q" | "quit" => Ok(Event::Quit),
        "clear" => Ok(Event::ClearSelection),
        other => match other.parse::<usize>() {
            Ok(0) => Err(CommandError::ZeroOption),
            Ok(position) => Ok(Event::Select(position.saturating_sub(1))),
            Err(_) => Err(CommandError::Unknown(other.to_owned())),
        },
    }
}

/// Parses `line` and feeds the resulting event into `state`.
pub fn apply_line(state: &mut PickerState, line: &str) -> Outcome {
    let event = match parse_event(line) {
        Ok(event) => event,
        Err(err) => return Outcome::Continue(Some(err.to_string())),
    };

    match event {
        Event::Quit => Outcome::Quit,
        Event::Filter(query) => {
            state.filter_changed(&query);
            Outcome::Continue(None)
        }
        Event::Select(index) => match state.selection_changed(Some(index)) {
            Ok(()) => Outcome::Continue(None),
            Err(err) => {
                warn!("Ignoring selection: {err}");
                Outcome::Continue(Some(format!(
                    "option {} is not listed",
                    index.saturating_add(1)
                )))
            }
        },
        Event::ClearSelection => match state.selection_changed(None) {
            Ok(()) => Outcome::Continue(None),
            Err(err) => Outcome::Continue(Some(err.to_string())),
        },
    }
}
