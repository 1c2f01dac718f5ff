pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::batch::{BatchConfig, BatchController, BatchError};
pub use controllers::interactive::{InteractiveController, RenderRequest, ViewerConfig};
pub use core::data::complex::Complex;
pub use core::data::complex_region::ComplexRegion;
pub use core::data::iteration_grid::IterationGrid;
pub use core::data::pixel_size::PixelSize;
pub use core::data::point::Point;
pub use core::fractals::mandelbrot::engine::render;
pub use core::viewport::{ViewportController, ViewportError, ZoomGesture};
pub use presenters::file::presenter_for_path;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
