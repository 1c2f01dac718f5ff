pub mod complex;
pub mod complex_region;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod pixel_size;
pub mod point;
