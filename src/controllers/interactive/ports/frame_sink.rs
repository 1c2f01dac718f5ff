use crate::controllers::interactive::events::RenderEvent;

/// Receives finished frames from the render worker thread.
pub trait FrameSink: Send + Sync {
    fn submit(&self, event: RenderEvent);
}
