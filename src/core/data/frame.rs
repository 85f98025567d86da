use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::kinds::FractalKind;

/// Lowest iteration cap any frame is allowed to carry. Caps supplied from
/// outside are clamped here rather than rejected.
pub const MIN_ITERATIONS: u32 = 10;

/// Whole-frame escape-iteration statistics, merged across row strips with a
/// commutative min/max reduction so the result is independent of strip count
/// and scheduling order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct IterationStats {
    min_iterations: Option<u32>,
    max_escaped_iterations: Option<u32>,
}

impl IterationStats {
    pub fn observe(&mut self, iterations: u32, max_iterations: u32) {
        self.min_iterations = Some(match self.min_iterations {
            Some(current) => current.min(iterations),
            None => iterations,
        });

        if iterations < max_iterations {
            self.max_escaped_iterations = Some(match self.max_escaped_iterations {
                Some(current) => current.max(iterations),
                None => iterations,
            });
        }
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_iterations: merge_with(self.min_iterations, other.min_iterations, u32::min),
            max_escaped_iterations: merge_with(
                self.max_escaped_iterations,
                other.max_escaped_iterations,
                u32::max,
            ),
        }
    }

    /// Lowest iteration count observed over all points, or `None` before the
    /// frame has been computed.
    #[must_use]
    pub fn min_iterations(&self) -> Option<u32> {
        self.min_iterations
    }

    /// Highest iteration count observed over escaped points only, or `None`
    /// if no point escaped.
    #[must_use]
    pub fn max_escaped_iterations(&self) -> Option<u32> {
        self.max_escaped_iterations
    }
}

fn merge_with(a: Option<u32>, b: Option<u32>, pick: fn(u32, u32) -> u32) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// One unit of work travelling through the pipeline: a viewport to compute,
/// the iteration cap to compute it at, and the pixel buffer the rasterizer
/// fills exactly once. After computation completes the frame is handed off
/// by value and never written again.
#[derive(Debug)]
pub struct FractalFrame {
    kind: FractalKind,
    viewport: Viewport,
    max_iterations: u32,
    buffer: PixelBuffer,
    stats: IterationStats,
}

impl FractalFrame {
    #[must_use]
    pub fn new(kind: FractalKind, viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            kind,
            viewport,
            max_iterations: max_iterations.max(MIN_ITERATIONS),
            buffer: PixelBuffer::for_viewport(&viewport),
            stats: IterationStats::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn stats(&self) -> IterationStats {
        self.stats
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    pub(crate) fn set_stats(&mut self, stats: IterationStats) {
        self.stats = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn viewport() -> Viewport {
        Viewport::from_center(
            Complex {
                real: -0.5,
                imag: 0.0,
            },
            3.0,
            3.0,
            8,
            8,
        )
        .unwrap()
    }

    #[test]
    fn test_new_sizes_buffer_to_viewport() {
        let frame = FractalFrame::new(FractalKind::Mandelbrot, viewport(), 50);

        assert_eq!(frame.buffer().width(), 8);
        assert_eq!(frame.buffer().height(), 8);
        assert_eq!(frame.max_iterations(), 50);
    }

    #[test]
    fn test_new_clamps_cap_to_floor() {
        let frame = FractalFrame::new(FractalKind::Mandelbrot, viewport(), 3);

        assert_eq!(frame.max_iterations(), MIN_ITERATIONS);
    }

    #[test]
    fn test_stats_observe_tracks_min_over_all_points() {
        let mut stats = IterationStats::default();
        stats.observe(7, 50);
        stats.observe(3, 50);
        stats.observe(50, 50);

        assert_eq!(stats.min_iterations(), Some(3));
    }

    #[test]
    fn test_stats_observe_tracks_max_over_escaped_points_only() {
        let mut stats = IterationStats::default();
        stats.observe(7, 50);
        stats.observe(50, 50); // reached the cap: not an escape

        assert_eq!(stats.max_escaped_iterations(), Some(7));
    }

    #[test]
    fn test_stats_with_no_escaped_points() {
        let mut stats = IterationStats::default();
        stats.observe(50, 50);

        assert_eq!(stats.min_iterations(), Some(50));
        assert_eq!(stats.max_escaped_iterations(), None);
    }

    #[test]
    fn test_stats_merge_is_commutative() {
        let mut a = IterationStats::default();
        a.observe(5, 50);
        a.observe(20, 50);

        let mut b = IterationStats::default();
        b.observe(12, 50);

        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).min_iterations(), Some(5));
        assert_eq!(a.merge(b).max_escaped_iterations(), Some(20));
    }

    #[test]
    fn test_stats_merge_with_empty() {
        let mut a = IterationStats::default();
        a.observe(5, 50);

        let merged = a.merge(IterationStats::default());

        assert_eq!(merged, a);
    }
}
