//! Configuration module for Hylle.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{BooksSettings, ChatSettings, GeneralSettings, Settings};
