pub mod controller;
pub mod errors;
pub mod gesture;

pub use controller::ViewportController;
pub use errors::ViewportError;
pub use gesture::ZoomGesture;
