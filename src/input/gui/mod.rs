//! Windowed viewer: winit for the window and input, pixels for the framebuffer.

mod app;
pub mod events;
pub mod wheel;

pub use app::run_gui;
