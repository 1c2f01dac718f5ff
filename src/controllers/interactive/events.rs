use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameError {
    pub generation: u64,
    pub message: String,
}

/// Outcome of one completed (not cancelled) render job.
#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(FrameError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(error) => error.generation,
        }
    }
}
