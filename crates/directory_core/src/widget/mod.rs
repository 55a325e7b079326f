//! Picker widget
//!
//! Presentation-independent state of the autocomplete picker and the details table shown for the
//! selected user.
pub mod details;
pub mod state;
