use std::error::Error;
use std::fmt;

use crate::controllers::julia_probe::probe_julia_set;
use crate::controllers::pipeline::bounded_queue::QueueClosed;
use crate::controllers::pipeline::view_pipeline::ViewPipeline;
use crate::controllers::zoom_sequencer::{ZoomError, sequence_zoom};
use crate::core::data::complex::Complex;
use crate::core::data::frame::{FractalFrame, MIN_ITERATIONS};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::kinds::FractalKind;
use crate::core::util::estimate_iterations::estimate_iterations;

pub const VIEW_WIDTH: u32 = 400;
pub const VIEW_HEIGHT: u32 = 400;

/// Default zoom factor for a plain zoom gesture; hosts divide by it to zoom
/// back out.
pub const ZOOM_FACTOR: f64 = 4.0;

const DEFAULT_CENTER: Complex = Complex {
    real: -0.5,
    imag: 0.0,
};
const DEFAULT_VIEW_SIZE: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionError {
    Pipeline(QueueClosed),
    Zoom(ZoomError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline(err) => write!(f, "pipeline error: {}", err),
            Self::Zoom(err) => write!(f, "zoom error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pipeline(err) => Some(err),
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<QueueClosed> for SessionError {
    fn from(err: QueueClosed) -> Self {
        Self::Pipeline(err)
    }
}

impl From<ZoomError> for SessionError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

/// The host-facing facade over the pipeline: tracks the currently displayed
/// viewport and cap, expands gestures into frame runs, and drains completed
/// frames in order.
///
/// The current viewport is single-writer state: it advances only when a
/// frame is drained through `next_frame` or `poll_frame` (both `&mut self`),
/// and `start_zoom` reads it. Keep draining and zooming on the thread that
/// owns the session; the exclusive borrow rules out concurrent writers.
pub struct ExplorerSession {
    pipeline: ViewPipeline,
    current_viewport: Viewport,
    current_max_iterations: u32,
}

impl ExplorerSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_pipeline(ViewPipeline::new())
    }

    #[must_use]
    pub fn with_pipeline(pipeline: ViewPipeline) -> Self {
        Self {
            pipeline,
            current_viewport: Self::default_viewport(),
            current_max_iterations: estimate_iterations(DEFAULT_VIEW_SIZE),
        }
    }

    fn default_viewport() -> Viewport {
        Viewport::from_center(
            DEFAULT_CENTER,
            DEFAULT_VIEW_SIZE,
            DEFAULT_VIEW_SIZE,
            VIEW_WIDTH,
            VIEW_HEIGHT,
        )
        .expect("default viewport dimensions are valid")
    }

    /// Submits one frame of the default view. The current viewport is left
    /// untouched until that frame is drained.
    pub fn reset(&self) -> Result<(), SessionError> {
        let frame = FractalFrame::new(
            FractalKind::Mandelbrot,
            Self::default_viewport(),
            estimate_iterations(DEFAULT_VIEW_SIZE),
        );

        self.pipeline.submit(frame)?;
        Ok(())
    }

    /// Expands a zoom gesture against the current viewport and submits the
    /// resulting frames in animation order. Blocks on the computation queue
    /// once it is full; that backpressure paces gesture expansion to the
    /// consumption rate.
    pub fn start_zoom(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        zoom_factor: f64,
        cap_override: Option<u32>,
    ) -> Result<(), SessionError> {
        let frames = sequence_zoom(
            &self.current_viewport,
            pixel_x,
            pixel_y,
            zoom_factor,
            cap_override,
        )?;

        for frame in frames {
            self.pipeline.submit(frame)?;
        }

        Ok(())
    }

    /// Re-submits the current viewport at a new cap, if the clamped cap
    /// differs from the one currently displayed.
    pub fn update_iteration_cap(&self, new_cap: u32) -> Result<(), SessionError> {
        let cap = new_cap.max(MIN_ITERATIONS);

        if cap == self.current_max_iterations {
            return Ok(());
        }

        let frame = FractalFrame::new(FractalKind::Mandelbrot, self.current_viewport, cap);
        self.pipeline.submit(frame)?;
        Ok(())
    }

    /// Fires a one-off Julia computation for parameter `(cx, cy)` over the
    /// fixed (-2, -2, 4, 4) view. The callback runs off this thread.
    pub fn probe_julia_set(
        &self,
        cx: f64,
        cy: f64,
        max_iterations: u32,
        on_done: impl FnOnce(FractalFrame) + Send + 'static,
    ) {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0, VIEW_WIDTH, VIEW_HEIGHT)
            .expect("julia probe viewport dimensions are valid");
        let c = Complex { real: cx, imag: cy };

        probe_julia_set(
            viewport,
            c,
            max_iterations,
            self.pipeline.parallelism(),
            on_done,
        );
    }

    /// Blocking drain of the next completed frame, which becomes the current
    /// view.
    pub fn next_frame(&mut self) -> Result<FractalFrame, QueueClosed> {
        let frame = self.pipeline.take_completed()?;
        self.record_current(&frame);
        Ok(frame)
    }

    /// Non-blocking drain for a render loop; returns `None` when no frame is
    /// ready yet.
    pub fn poll_frame(&mut self) -> Option<FractalFrame> {
        let frame = self.pipeline.poll_completed()?;
        self.record_current(&frame);
        Some(frame)
    }

    fn record_current(&mut self, frame: &FractalFrame) {
        self.current_viewport = frame.viewport();
        self.current_max_iterations = frame.max_iterations();
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current_viewport
    }

    #[must_use]
    pub fn current_max_iterations(&self) -> u32 {
        self.current_max_iterations
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.pipeline.progress()
    }

    #[must_use]
    pub fn zooming_in_progress(&self) -> bool {
        self.pipeline.zooming_in_progress()
    }

    #[must_use]
    pub fn frames_pending(&self) -> usize {
        self.pipeline.frames_pending()
    }

    pub fn shutdown(&mut self) {
        self.pipeline.shutdown();
    }
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self::new()
    }
}
