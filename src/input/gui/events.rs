/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker delivered a frame or an error. The handler polls the
    /// presenter and requests a redraw only when a frame was accepted.
    Wake,
}
