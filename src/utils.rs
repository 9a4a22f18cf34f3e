//! Utility functions and helpers.

pub mod settings;

pub use settings::{Settings, DATA_DIR_ENV};
