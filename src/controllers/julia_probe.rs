use std::num::NonZeroUsize;

use crate::core::actions::rasterize_frame::rasterize_frame;
use crate::core::data::complex::Complex;
use crate::core::data::frame::FractalFrame;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::kinds::FractalKind;

/// Computes a one-off Julia frame on the worker pool and hands it to the
/// callback exactly once. Fire-and-forget: the call returns immediately, the
/// callback runs off the submitting thread, and neither the frame queues nor
/// the pending counter are involved.
pub fn probe_julia_set(
    viewport: Viewport,
    c: Complex,
    max_iterations: u32,
    parallelism: NonZeroUsize,
    on_done: impl FnOnce(FractalFrame) + Send + 'static,
) {
    rayon::spawn(move || {
        let mut frame = FractalFrame::new(FractalKind::Julia { c }, viewport, max_iterations);
        rasterize_frame(&mut frame, parallelism);
        on_done(frame);
    });
}
