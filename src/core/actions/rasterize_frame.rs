use std::num::NonZeroUsize;

use crate::core::data::frame::{FractalFrame, IterationStats};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::iteration::escape_iterations;
use crate::core::fractals::kinds::FractalKind;
use crate::core::fractals::palette::colour_for_iterations;
use crate::core::util::strip_boundaries::strip_boundaries;

/// Fills the frame's entire pixel buffer, splitting the rows into
/// `parallelism` contiguous strips computed concurrently on the rayon pool.
/// Blocks until every strip has finished.
///
/// Each strip writes an exclusive sub-slice of the buffer and the per-pixel
/// function is pure, so the result is bit-identical for any parallelism
/// degree. Per-strip statistics are combined with a commutative min/max
/// reduction for the same reason.
pub fn rasterize_frame(frame: &mut FractalFrame, parallelism: NonZeroUsize) {
    let kind = frame.kind();
    let viewport = frame.viewport();
    let max_iterations = frame.max_iterations();
    let row_width = viewport.pixel_width() as usize;

    let boundaries = strip_boundaries(viewport.pixel_height(), parallelism);
    let mut partials = vec![IterationStats::default(); boundaries.len() - 1];

    let mut remaining = frame.buffer_mut().pixels_mut();
    let mut strips = Vec::with_capacity(partials.len());
    for window in boundaries.windows(2) {
        let rows = (window[1] - window[0]) as usize;
        let (strip, rest) = std::mem::take(&mut remaining).split_at_mut(rows * row_width);
        strips.push((window[0], strip));
        remaining = rest;
    }

    rayon::scope(|scope| {
        for ((start_row, strip), partial) in strips.into_iter().zip(partials.iter_mut()) {
            scope.spawn(move |_| {
                rasterize_strip(kind, viewport, max_iterations, start_row, strip, partial);
            });
        }
    });

    let stats = partials
        .into_iter()
        .fold(IterationStats::default(), IterationStats::merge);
    frame.set_stats(stats);
}

fn rasterize_strip(
    kind: FractalKind,
    viewport: Viewport,
    max_iterations: u32,
    start_row: u32,
    strip: &mut [u32],
    stats: &mut IterationStats,
) {
    let row_width = viewport.pixel_width() as usize;

    for (row_index, row) in strip.chunks_exact_mut(row_width).enumerate() {
        let cy = viewport.imag_at_row(start_row + row_index as u32);

        for (column, pixel) in row.iter_mut().enumerate() {
            let cx = viewport.real_at_column(column as u32);
            let iterations = escape_iterations(kind, cx, cy, max_iterations);

            stats.observe(iterations, max_iterations);
            *pixel = colour_for_iterations(iterations, max_iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::palette::OPAQUE_BLACK;

    fn parallelism(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn default_frame() -> FractalFrame {
        let viewport = Viewport::from_center(
            Complex {
                real: -0.5,
                imag: 0.0,
            },
            3.0,
            3.0,
            64,
            64,
        )
        .unwrap();

        FractalFrame::new(FractalKind::Mandelbrot, viewport, 50)
    }

    #[test]
    fn test_buffer_is_bit_identical_for_any_parallelism() {
        let mut reference = default_frame();
        rasterize_frame(&mut reference, parallelism(1));

        for p in [2, 3, 7, 16] {
            let mut frame = default_frame();
            rasterize_frame(&mut frame, parallelism(p));

            assert_eq!(
                frame.buffer().pixels(),
                reference.buffer().pixels(),
                "buffer differs at parallelism {}",
                p
            );
            assert_eq!(frame.stats(), reference.stats(), "stats differ at {}", p);
        }
    }

    #[test]
    fn test_more_strips_than_rows() {
        let viewport = Viewport::from_center(
            Complex {
                real: -0.5,
                imag: 0.0,
            },
            3.0,
            3.0,
            8,
            2,
        )
        .unwrap();

        let mut reference = FractalFrame::new(FractalKind::Mandelbrot, viewport, 50);
        rasterize_frame(&mut reference, parallelism(1));

        let mut frame = FractalFrame::new(FractalKind::Mandelbrot, viewport, 50);
        rasterize_frame(&mut frame, parallelism(8));

        assert_eq!(frame.buffer().pixels(), reference.buffer().pixels());
    }

    #[test]
    fn test_default_view_contains_set_and_escaped_points() {
        let mut frame = default_frame();
        rasterize_frame(&mut frame, parallelism(4));

        let pixels = frame.buffer().pixels();
        assert!(pixels.iter().any(|&p| p == OPAQUE_BLACK));
        assert!(pixels.iter().any(|&p| p != OPAQUE_BLACK));
    }

    #[test]
    fn test_region_deep_inside_the_set_is_all_black() {
        let viewport = Viewport::from_center(
            Complex {
                real: -0.1,
                imag: 0.0,
            },
            0.01,
            0.01,
            16,
            16,
        )
        .unwrap();

        let mut frame = FractalFrame::new(FractalKind::Mandelbrot, viewport, 100);
        rasterize_frame(&mut frame, parallelism(4));

        assert!(frame.buffer().pixels().iter().all(|&p| p == OPAQUE_BLACK));
        assert_eq!(frame.stats().min_iterations(), Some(100));
        assert_eq!(frame.stats().max_escaped_iterations(), None);
    }

    #[test]
    fn test_region_far_outside_the_set_escapes_everywhere() {
        let viewport = Viewport::from_center(
            Complex {
                real: 10.0,
                imag: 10.0,
            },
            1.0,
            1.0,
            16,
            16,
        )
        .unwrap();

        let mut frame = FractalFrame::new(FractalKind::Mandelbrot, viewport, 100);
        rasterize_frame(&mut frame, parallelism(4));

        assert!(frame.buffer().pixels().iter().all(|&p| p != OPAQUE_BLACK));
        assert_eq!(frame.stats().min_iterations(), Some(0));
        assert_eq!(frame.stats().max_escaped_iterations(), Some(0));
    }

    #[test]
    fn test_stats_bound_each_other() {
        let mut frame = default_frame();
        rasterize_frame(&mut frame, parallelism(4));

        let stats = frame.stats();
        let min = stats.min_iterations().unwrap();
        let max_escaped = stats.max_escaped_iterations().unwrap();
        assert!(min <= max_escaped);
        assert!(max_escaped < 50);
    }

    #[test]
    fn test_julia_frame_rasterizes_deterministically() {
        let viewport = Viewport::from_center(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            4.0,
            4.0,
            32,
            32,
        )
        .unwrap();
        let kind = FractalKind::Julia {
            c: Complex {
                real: -0.7,
                imag: 0.27015,
            },
        };

        let mut reference = FractalFrame::new(kind, viewport, 50);
        rasterize_frame(&mut reference, parallelism(1));

        let mut frame = FractalFrame::new(kind, viewport, 50);
        rasterize_frame(&mut frame, parallelism(5));

        assert_eq!(frame.buffer().pixels(), reference.buffer().pixels());
        assert_eq!(frame.stats(), reference.stats());
    }
}
