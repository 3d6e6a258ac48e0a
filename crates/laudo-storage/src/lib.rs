//! laudo-storage
//!
//! Local persistence for clinic settings and the report history. Objects are
//! JSON files under one data directory, laid out by `laudo_core::paths`.

pub mod error;
pub mod history;
pub mod objects;
pub mod settings;
pub mod state;

pub use history::HistoryStore;
pub use settings::SettingsStore;
