pub mod algorithm;
pub mod engine;
pub mod errors;
