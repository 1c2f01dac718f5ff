pub mod batch;
pub mod interactive;
pub mod ports;
