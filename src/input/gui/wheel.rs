use winit::event::MouseScrollDelta;

/// Wheel units reported for a single detent of a line-based mouse wheel.
pub const WHEEL_DELTA_PER_LINE: f32 = 120.0;

/// Converts a winit scroll into a signed wheel delta. Positive values mean the
/// wheel was rolled away from the user.
#[must_use]
pub fn wheel_delta(delta: MouseScrollDelta) -> i32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => (lines * WHEEL_DELTA_PER_LINE).round() as i32,
        MouseScrollDelta::PixelDelta(position) => position.y.round() as i32,
    }
}
