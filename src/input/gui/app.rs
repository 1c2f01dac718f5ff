//! Main GUI application loop.

use std::error::Error;

use log::{debug, error, info, warn};
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{InteractiveController, RenderRequest, ViewerConfig};
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::viewport::ViewportController;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::wheel::wheel_delta;
use crate::presenters::pixels::presenter::PixelsPresenter;

struct GuiApp {
    viewport: ViewportController,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    max_cycles: u32,
    cursor: Point,
    last_request: Option<RenderRequest>,
    /// False while the window is minimised; no renders are requested then.
    visible: bool,
}

impl GuiApp {
    fn submit_render_request(&mut self) {
        if !self.visible {
            return;
        }

        let request = RenderRequest {
            region: self.viewport.region(),
            size: self.viewport.size(),
            max_cycles: self.max_cycles,
        };

        if self.last_request == Some(request) {
            return;
        }

        let generation = self.controller.submit_request(request);
        debug!(
            "submitted generation {} for region {:?}",
            generation, request.region
        );
        self.last_request = Some(request);
    }

    fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Point::new(position.x as i32, position.y as i32);
    }

    fn on_left_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => self.viewport.press(self.cursor),
            ElementState::Released => {
                if let Err(e) = self.viewport.release(self.cursor) {
                    warn!("rectangle zoom rejected: {}", e);
                }
                self.submit_render_request();
            }
        }
    }

    fn on_wheel(&mut self, delta: i32) {
        if let Err(e) = self.viewport.apply_wheel_zoom(delta, self.cursor) {
            warn!("wheel zoom rejected: {}", e);
        }
        self.submit_render_request();
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        let size = match PixelSize::new(width, height) {
            Ok(size) => size,
            Err(e) => {
                debug!("pausing renders: {}", e);
                self.visible = false;
                return Ok(());
            }
        };

        self.visible = true;
        self.presenter.resize(width, height)?;
        self.viewport.on_resize(size);
        self.submit_render_request();
        Ok(())
    }
}

/// Opens the viewer window and runs the event loop until the window is closed.
pub fn run_gui(config: ViewerConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .with_min_inner_size(LogicalSize::new(100.0, 100.0))
            .build(&event_loop)?,
    ));

    let inner_size = window.inner_size();
    let size = PixelSize::new(inner_size.width, inner_size.height)?;

    let presenter = PixelsPresenter::new(window, event_loop.create_proxy())?;
    let controller = InteractiveController::new(presenter.frame_sink());

    let mut app = GuiApp {
        viewport: ViewportController::new(size, config.initial_region),
        presenter,
        controller,
        max_cycles: config.max_cycles,
        cursor: Point::default(),
        last_request: None,
        visible: true,
    };

    info!(
        "viewer started at {}x{} with {} max cycles",
        size.width(),
        size.height(),
        config.max_cycles
    );
    app.submit_render_request();

    event_loop.run(move |event, elwt| match event {
        Event::UserEvent(GuiEvent::Wake) => {
            if app.presenter.poll_frame() {
                window.request_redraw();
            }
        }
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                app.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.presenter.render() {
                    error!("render error: {}", e);
                    elwt.exit();
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Err(e) = app.on_resize(new_size.width, new_size.height) {
                    error!("resize error: {}", e);
                    elwt.exit();
                }
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => app.on_cursor_moved(position),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.on_left_button(state),
            WindowEvent::MouseWheel { delta, .. } => app.on_wheel(wheel_delta(delta)),
            _ => {}
        },
        _ => {}
    })?;

    Ok(())
}
