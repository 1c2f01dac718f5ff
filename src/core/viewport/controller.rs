use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::gesture::ZoomGesture;

/// Owns the visible complex region and turns pan/zoom gestures into new regions.
///
/// The controller never renders. After each mutation the owning shell renders
/// [`ViewportController::region`] at [`ViewportController::size`].
///
/// Pixel row 0 maps to the bottom edge of the region, so the imaginary axis
/// grows downwards on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    region: ComplexRegion,
    size: PixelSize,
    start: Point,
    stop: Point,
}

impl ViewportController {
    #[must_use]
    pub fn new(size: PixelSize, region: ComplexRegion) -> Self {
        Self {
            region,
            size,
            start: Point::default(),
            stop: size.far_corner(),
        }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRegion {
        self.region
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Pending selection endpoints; the full frame when no drag is in progress.
    #[must_use]
    pub fn pending_selection(&self) -> (Point, Point) {
        (self.start, self.stop)
    }

    /// Records where a rectangle drag begins.
    pub fn press(&mut self, point: Point) {
        self.start = point;
    }

    /// Completes the drag begun by [`ViewportController::press`] and zooms into it.
    pub fn release(&mut self, point: Point) -> Result<(), ViewportError> {
        self.stop = point;
        self.apply_rectangle_zoom(self.start, self.stop)
    }

    pub fn apply(&mut self, gesture: ZoomGesture) -> Result<(), ViewportError> {
        match gesture {
            ZoomGesture::Rectangle { start, stop } => self.apply_rectangle_zoom(start, stop),
            ZoomGesture::Wheel { delta, anchor } => self.apply_wheel_zoom(delta, anchor),
        }
    }

    /// Zooms into the box spanned by `start` and `stop`.
    ///
    /// Both axes are scaled by the selection's horizontal extent, and the
    /// imaginary extent is derived from the real width and the pixel aspect
    /// ratio. A selection with no horizontal extent (a click without drag)
    /// leaves the region untouched.
    pub fn apply_rectangle_zoom(&mut self, start: Point, stop: Point) -> Result<(), ViewportError> {
        let result = self.rectangle_zoom_region(start, stop);
        self.reset_selection();

        match result? {
            Some(region) => {
                debug!(
                    "rectangle zoom ({}, {})-({}, {}) -> {:?}",
                    start.x, start.y, stop.x, stop.y, region
                );
                self.region = region;
            }
            None => debug!("ignoring zero-width selection at x = {}", start.x),
        }

        Ok(())
    }

    /// Scales the region about its centre by a factor derived from `delta`.
    ///
    /// Positive deltas scale by `delta / 100`, negative ones by `100 / -delta`,
    /// so `100` is the identity and `200` doubles the visible extent. `anchor`
    /// does not influence the result. A zero delta leaves the region untouched.
    pub fn apply_wheel_zoom(&mut self, delta: i32, anchor: Point) -> Result<(), ViewportError> {
        let result = self.wheel_zoom_region(delta);
        self.reset_selection();

        match result? {
            Some(region) => {
                debug!(
                    "wheel zoom delta {} at ({}, {}) -> {:?}",
                    delta, anchor.x, anchor.y, region
                );
                self.region = region;
            }
            None => debug!("ignoring zero wheel delta"),
        }

        Ok(())
    }

    /// Adopts a new pixel size. The region is kept as is, so it is resampled
    /// to the new aspect ratio on the next render.
    pub fn on_resize(&mut self, size: PixelSize) {
        self.size = size;
        self.reset_selection();
    }

    fn rectangle_zoom_region(
        &self,
        start: Point,
        stop: Point,
    ) -> Result<Option<ComplexRegion>, ViewportError> {
        let selection_width = (i64::from(start.x) - i64::from(stop.x)).abs() as f64;

        if selection_width == 0.0 {
            return Ok(None);
        }

        let bottom_left = self.region.bottom_left();
        let width_px = f64::from(self.size.width());
        let height_px = f64::from(self.size.height());

        let real_width = self.region.width();
        let new_real_width = real_width * selection_width / width_px;
        let center_x_px = midpoint_px(start.x, stop.x);
        let center_real = real_width * center_x_px / width_px + bottom_left.real;

        let imag_height = real_width * height_px / width_px;
        let new_imag_height = imag_height * selection_width / width_px;
        let center_y_px = midpoint_px(start.y, stop.y);
        let center_imag = imag_height * center_y_px / height_px + bottom_left.imag;

        let region = ComplexRegion::new(
            Complex {
                real: center_real - new_real_width / 2.0,
                imag: center_imag - new_imag_height / 2.0,
            },
            Complex {
                real: center_real + new_real_width / 2.0,
                imag: center_imag + new_imag_height / 2.0,
            },
        )?;

        Ok(Some(region))
    }

    fn wheel_zoom_region(&self, delta: i32) -> Result<Option<ComplexRegion>, ViewportError> {
        if delta == 0 {
            return Ok(None);
        }

        let zoom_factor = if delta < 0 {
            100.0 / -f64::from(delta)
        } else {
            f64::from(delta) / 100.0
        };

        let center = self.region.center();
        let real_width = self.region.width();
        let imag_height =
            real_width * f64::from(self.size.height()) / f64::from(self.size.width());

        let region = ComplexRegion::new(
            Complex {
                real: center.real - zoom_factor * real_width / 2.0,
                imag: center.imag - zoom_factor * imag_height / 2.0,
            },
            Complex {
                real: center.real + zoom_factor * real_width / 2.0,
                imag: center.imag + zoom_factor * imag_height / 2.0,
            },
        )?;

        Ok(Some(region))
    }

    fn reset_selection(&mut self) {
        self.start = Point::default();
        self.stop = self.size.far_corner();
    }
}

/// Whole-pixel midpoint of two coordinates, truncated toward zero.
fn midpoint_px(a: i32, b: i32) -> f64 {
    ((i64::from(a) + i64::from(b)) / 2) as f64
}
