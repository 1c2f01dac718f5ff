use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::{FrameError, RenderEvent};
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::engine::{RenderError, render_cancelable};
use log::{debug, trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type Job = (u64, RenderRequest);

/// State shared between the UI-side handle and the render worker.
struct RenderQueue {
    latest_generation: AtomicU64,
    last_completed_generation: AtomicU64,
    pending: Mutex<Option<Job>>,
    wake: Condvar,
    shutdown: AtomicBool,
    frame_sink: Arc<dyn FrameSink>,
}

impl RenderQueue {
    fn pending(&self) -> MutexGuard<'_, Option<Job>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until a job is queued. Returns `None` once shutdown is signalled.
    fn next_job(&self) -> Option<Job> {
        let mut pending = self.pending();
        loop {
            if self.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = pending.take() {
                return Some(job);
            }

            pending = self
                .wake
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn token(&self, generation: u64) -> GenerationToken<'_> {
        GenerationToken::new(generation, &self.latest_generation, &self.shutdown)
    }

    /// Hands `event` to the sink unless a newer generation was requested meanwhile.
    fn publish(&self, token: &GenerationToken<'_>, event: RenderEvent) {
        if !token.is_current() {
            trace!("dropping stale generation {}", token.generation());
            return;
        }

        self.frame_sink.submit(event);
        self.last_completed_generation
            .store(token.generation(), Ordering::Release);
    }
}

/// Renders requests on a background thread so the UI thread never blocks.
///
/// Only the most recent request is kept. Submitting a new request cancels the
/// render in flight, and a result is delivered to the [`FrameSink`] only if no
/// newer request arrived while it was being computed.
pub struct InteractiveController {
    queue: Arc<RenderQueue>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(frame_sink: Arc<dyn FrameSink>) -> Self {
        let queue = Arc::new(RenderQueue {
            latest_generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            pending: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            frame_sink,
        });

        let worker_queue = Arc::clone(&queue);
        let worker = thread::spawn(move || run_worker(&worker_queue));

        Self {
            queue,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request not yet picked up, and returns
    /// its generation number.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.queue.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.queue.pending() = Some((generation, request));
        self.queue.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.queue.shutdown.store(true, Ordering::Release);
        self.queue.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.queue.last_completed_generation.load(Ordering::Acquire)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(queue: &RenderQueue) {
    while let Some((generation, request)) = queue.next_job() {
        let token = queue.token(generation);

        let start = Instant::now();
        let result = render_request(&request, &token);
        let render_duration = start.elapsed();

        let event = match result {
            Ok(pixel_buffer) => {
                debug!(
                    "generation {} rendered {}x{} in {:?}",
                    generation,
                    request.size.width(),
                    request.size.height(),
                    render_duration
                );
                RenderEvent::Frame(FrameData {
                    generation,
                    request,
                    pixel_buffer,
                    render_duration,
                })
            }
            Err(WorkerFailure::Cancelled) => {
                trace!("generation {} cancelled", generation);
                continue;
            }
            Err(WorkerFailure::Invalid(message)) => {
                warn!("generation {} failed: {}", generation, message);
                RenderEvent::Error(FrameError {
                    generation,
                    message,
                })
            }
        };

        queue.publish(&token, event);
    }
}

enum WorkerFailure {
    Cancelled,
    Invalid(String),
}

fn render_request<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<PixelBuffer, WorkerFailure> {
    let grid = render_cancelable(request.region, request.size, request.max_cycles, cancel)
        .map_err(|e| match e {
            RenderError::Cancelled => WorkerFailure::Cancelled,
            RenderError::Invalid(err) => WorkerFailure::Invalid(err.to_string()),
        })?;

    generate_pixel_buffer_cancelable(&grid, cancel).map_err(|e| match e {
        GeneratePixelBufferError::Cancelled(_) => WorkerFailure::Cancelled,
        GeneratePixelBufferError::PixelBuffer(err) => WorkerFailure::Invalid(err.to_string()),
    })
}
