//! Name handling
//!
//! Parsing of free-form full names into their parts, the locale-aware ordering used for the
//! canonical user list, the display form shown to the user and the autocomplete filter.
pub mod affixes;
pub mod collation;
pub mod filtering;
pub mod formatting;
pub mod sorting;
