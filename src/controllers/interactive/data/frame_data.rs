use std::time::Duration;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub request: RenderRequest,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
