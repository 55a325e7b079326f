//! User directory
//!
//! Retrieval of user records from the remote user-directory endpoint.
pub mod client;
pub mod errors;
pub mod loader;
pub mod types;
