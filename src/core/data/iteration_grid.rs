use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    BoundsMismatch { pixel_count: usize, counts_len: usize },
    CountOutOfRange { index: usize, count: u32, max_cycles: u32 },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_count,
                counts_len,
            } => write!(
                f,
                "grid of {} pixels cannot hold {} iteration counts",
                pixel_count, counts_len
            ),
            Self::CountOutOfRange {
                index,
                count,
                max_cycles,
            } => write!(
                f,
                "iteration count {} at index {} exceeds max cycles {}",
                count, index, max_cycles
            ),
        }
    }
}

impl Error for IterationGridError {}

/// Escape-time counts for every pixel of a render, stored row-major.
///
/// Every count lies in `0..=max_cycles`; a count equal to `max_cycles` means
/// the sample never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    size: PixelSize,
    max_cycles: u32,
    counts: Vec<u32>,
}

impl IterationGrid {
    pub fn new(
        size: PixelSize,
        max_cycles: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationGridError> {
        if counts.len() != size.pixel_count() {
            return Err(IterationGridError::BoundsMismatch {
                pixel_count: size.pixel_count(),
                counts_len: counts.len(),
            });
        }

        if let Some((index, &count)) = counts.iter().enumerate().find(|(_, c)| **c > max_cycles) {
            return Err(IterationGridError::CountOutOfRange {
                index,
                count,
                max_cycles,
            });
        }

        Ok(Self {
            size,
            max_cycles,
            counts,
        })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn max_cycles(&self) -> u32 {
        self.max_cycles
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        self.size.index_of(point).map(|index| self.counts[index])
    }

    #[must_use]
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let size = PixelSize::new(2, 2).unwrap();

        let result = IterationGrid::new(size, 10, vec![0; 3]);

        assert_eq!(
            result,
            Err(IterationGridError::BoundsMismatch {
                pixel_count: 4,
                counts_len: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_counts_above_max_cycles() {
        let size = PixelSize::new(2, 1).unwrap();

        let result = IterationGrid::new(size, 10, vec![10, 11]);

        assert_eq!(
            result,
            Err(IterationGridError::CountOutOfRange {
                index: 1,
                count: 11,
                max_cycles: 10
            })
        );
    }

    #[test]
    fn test_get_reads_row_major() {
        let size = PixelSize::new(3, 2).unwrap();
        let grid = IterationGrid::new(size, 9, vec![0, 1, 2, 3, 4, 5]).unwrap();

        assert_eq!(grid.get(Point { x: 0, y: 0 }), Some(0));
        assert_eq!(grid.get(Point { x: 2, y: 0 }), Some(2));
        assert_eq!(grid.get(Point { x: 0, y: 1 }), Some(3));
        assert_eq!(grid.get(Point { x: 2, y: 1 }), Some(5));
        assert_eq!(grid.get(Point { x: 3, y: 1 }), None);
    }
}
