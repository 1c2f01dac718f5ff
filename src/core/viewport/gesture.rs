use crate::core::data::point::Point;

/// A user request to change the visible region, consumed as soon as it is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomGesture {
    /// Selection box dragged from `start` (press) to `stop` (release).
    Rectangle { start: Point, stop: Point },
    /// Wheel step. `anchor` is the cursor position; the zoom itself is always
    /// centred on the current region.
    Wheel { delta: i32, anchor: Point },
}
