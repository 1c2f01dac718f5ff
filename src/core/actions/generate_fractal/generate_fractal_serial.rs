use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Single-threaded reference generator; results are row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    size: PixelSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = size.width() as i32;
    let height = size.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
