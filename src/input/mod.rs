//! Input shells that turn user gestures into viewport and render calls.

pub mod gui;
