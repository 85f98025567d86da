use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use crate::controllers::pipeline::bounded_queue::{BoundedQueue, QueueClosed};
use crate::controllers::zoom_sequencer::ANIMATION_FRAMES;
use crate::core::actions::rasterize_frame::rasterize_frame;
use crate::core::data::frame::FractalFrame;

/// Capacity of the computation and display queues.
pub const QUEUE_CAPACITY: usize = 10;

struct PipelineShared {
    computation_queue: BoundedQueue<FractalFrame>,
    display_queue: BoundedQueue<FractalFrame>,
    frames_pending: AtomicUsize,
}

/// The two-stage frame pipeline: submitted frames queue for computation, a
/// single dispatcher thread rasterizes them one at a time, and completed
/// frames queue for display. Both queues are bounded, so producers are paced
/// by consumption and frames flow through in submission order.
pub struct ViewPipeline {
    shared: Arc<PipelineShared>,
    parallelism: NonZeroUsize,
    dispatcher: Option<JoinHandle<()>>,
}

impl ViewPipeline {
    #[must_use]
    pub fn new() -> Self {
        let parallelism = thread::available_parallelism()
            .unwrap_or_else(|_| NonZeroUsize::new(4).expect("4 is non-zero"));

        Self::with_parallelism(parallelism)
    }

    #[must_use]
    pub fn with_parallelism(parallelism: NonZeroUsize) -> Self {
        Self::with_queue_capacity(
            parallelism,
            NonZeroUsize::new(QUEUE_CAPACITY).expect("queue capacity is non-zero"),
        )
    }

    pub(crate) fn with_queue_capacity(
        parallelism: NonZeroUsize,
        queue_capacity: NonZeroUsize,
    ) -> Self {
        let shared = Arc::new(PipelineShared {
            computation_queue: BoundedQueue::new(queue_capacity),
            display_queue: BoundedQueue::new(queue_capacity),
            frames_pending: AtomicUsize::new(0),
        });

        let worker_shared = Arc::clone(&shared);
        let dispatcher = thread::spawn(move || {
            Self::dispatch_loop(&worker_shared, parallelism);
        });

        Self {
            shared,
            parallelism,
            dispatcher: Some(dispatcher),
        }
    }

    /// Admits a frame for computation, blocking while the computation queue
    /// is at capacity. The pending counter covers the frame from admission
    /// until it is drained from the display queue.
    pub fn submit(&self, frame: FractalFrame) -> Result<(), QueueClosed> {
        // Counting before admission keeps the counter non-negative under any
        // interleaving with a concurrent drain of this same frame.
        self.shared.frames_pending.fetch_add(1, Ordering::SeqCst);

        match self.shared.computation_queue.put(frame) {
            Ok(()) => Ok(()),
            Err(closed) => {
                self.shared.frames_pending.fetch_sub(1, Ordering::SeqCst);
                Err(closed)
            }
        }
    }

    /// Non-blocking drain of the next completed frame, in submission order.
    pub fn poll_completed(&self) -> Option<FractalFrame> {
        let frame = self.shared.display_queue.try_take()?;
        self.shared.frames_pending.fetch_sub(1, Ordering::SeqCst);

        Some(frame)
    }

    /// Blocking drain of the next completed frame, in submission order.
    pub fn take_completed(&self) -> Result<FractalFrame, QueueClosed> {
        let frame = self.shared.display_queue.take()?;
        self.shared.frames_pending.fetch_sub(1, Ordering::SeqCst);

        Ok(frame)
    }

    #[must_use]
    pub fn frames_pending(&self) -> usize {
        self.shared.frames_pending.load(Ordering::SeqCst)
    }

    /// Fraction of a zoom animation still awaiting display, clipped to [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        let pending = self.frames_pending() as f64;

        (pending / f64::from(ANIMATION_FRAMES - 1)).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn zooming_in_progress(&self) -> bool {
        self.frames_pending() > 0
    }

    #[must_use]
    pub fn parallelism(&self) -> NonZeroUsize {
        self.parallelism
    }

    /// Closes both queues and joins the dispatcher. A strip computation in
    /// flight finishes first; its frame is abandoned at the closed display
    /// queue.
    pub fn shutdown(&mut self) {
        self.shared.computation_queue.close();
        self.shared.display_queue.close();

        if let Some(handle) = self.dispatcher.take() {
            let _ = handle.join();
        }
    }

    fn dispatch_loop(shared: &PipelineShared, parallelism: NonZeroUsize) {
        while let Ok(mut frame) = shared.computation_queue.take() {
            rasterize_frame(&mut frame, parallelism);

            if shared.display_queue.put(frame).is_err() {
                break;
            }
        }
    }
}

impl Default for ViewPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}
