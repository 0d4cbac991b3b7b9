//! Core types for webshelf
//!
//! Domain types shared by the storage, HTTP and CLI crates.

mod book;
mod color;
pub mod constants;
mod env_config;
mod error;
mod history;
mod ids;
pub mod timestamp;

pub use book::*;
pub use color::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use history::*;
pub use ids::*;
