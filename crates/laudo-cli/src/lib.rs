//! laudo-cli library root.
//!
//! The session, configuration and export plumbing behind the `laudo`
//! binary, exposed so integration tests and the demo can drive them
//! without going through argument parsing.

pub mod config;
pub mod export;
pub mod session;
pub mod workspace;
