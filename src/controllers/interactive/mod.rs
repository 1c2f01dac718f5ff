//! Interactive controller for real-time rendering.
//!
//! Render requests are computed on a background worker and the results are
//! pushed to the presentation layer through the [`FrameSink`] port. Region
//! bookkeeping stays in [`crate::core::viewport::ViewportController`]; this
//! layer only schedules renders.

pub mod config;
mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use config::ViewerConfig;
pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use events::{FrameError, RenderEvent};
pub use ports::frame_sink::FrameSink;
