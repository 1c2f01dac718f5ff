use std::sync::Arc;

use log::warn;
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_gray_to_rgba;
use crate::controllers::interactive::{FrameData, FrameSink, RenderEvent};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Displays rendered frames in a window through a `pixels` framebuffer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    pub fn frame_sink(&self) -> Arc<dyn FrameSink> {
        Arc::clone(&self.adapter) as Arc<dyn FrameSink>
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.has_frame = false;
        Ok(())
    }

    /// Copies the newest pending frame into the framebuffer. Returns true when
    /// the window needs to be redrawn.
    pub fn poll_frame(&mut self) -> bool {
        match self.adapter.take_render_event() {
            Some(RenderEvent::Frame(frame)) => {
                let size = frame.pixel_buffer.size();

                // frames for a previous window size are dropped; a newer one is on its way
                if frame.generation <= self.last_presented_generation
                    || size.width() != self.width
                    || size.height() != self.height
                {
                    return false;
                }

                self.copy_frame(&frame);
                self.has_frame = true;
                self.last_presented_generation = frame.generation;
                true
            }
            Some(RenderEvent::Error(error)) => {
                warn!("render {} failed: {}", error.generation, error.message);
                false
            }
            None => false,
        }
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[255, 255, 255, 255]);
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        copy_gray_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut());
    }
}
