//! Common error types shared across archaudit crates.

pub mod error;

pub use error::{Error, Result};
