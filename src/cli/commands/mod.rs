//! CLI command implementations.

mod ask;
mod author;
mod book;
mod chat;
mod config;
mod doctor;
mod similar;

pub use ask::run_ask;
pub use author::run_author;
pub use book::run_book;
pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use similar::run_similar;
