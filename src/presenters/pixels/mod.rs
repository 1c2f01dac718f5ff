pub mod adapter;
pub mod presenter;
