use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to treat cancellation as control flow rather than a failure to report.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates `algorithm` for every pixel of `size` on rayon's work-stealing pool.
///
/// The output is allocated once and split into one row slice per task, so each
/// pixel's result is written exactly once into its own slot. The result is
/// row-major and independent of scheduling.
pub fn generate_fractal_parallel_rayon<Alg>(
    size: PixelSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Default + Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(size, algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start of
/// each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    size: PixelSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Default + Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let row_width = size.width() as usize;
    let mut results = vec![Alg::Success::default(); size.pixel_count()];

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<(), GenerateFractalError<Alg::Failure>> {
            for (x, slot) in row.iter_mut().enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let pixel = Point {
                    x: x as i32,
                    y: y as i32,
                };
                *slot = algorithm
                    .compute(pixel)
                    .map_err(GenerateFractalError::Algorithm)?;
            }

            Ok(())
        })?;

    Ok(results)
}
