//! One-shot rendering of a fixed region to an image file.

pub mod config;
pub mod controller;

pub use config::BatchConfig;
pub use controller::{BatchController, BatchError};
