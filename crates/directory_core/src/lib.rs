//! `directory_core`
//!
//! Core library of the user directory picker. It holds everything that does not depend on how the
//! picker is presented: fetching the user records, parsing and ordering names, narrowing the option
//! list and assembling the details of the selected user.

pub mod directory;

pub mod names;

pub mod widget;
