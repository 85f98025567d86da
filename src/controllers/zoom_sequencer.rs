use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::frame::FractalFrame;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::kinds::FractalKind;
use crate::core::util::estimate_iterations::estimate_iterations;

/// Number of interpolated frames one zoom gesture expands into. The frames
/// play back in emission order, so this is also the animation length.
pub const ANIMATION_FRAMES: u32 = 15;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    NonPositiveZoomFactor { zoom_factor: f64 },
    Viewport(ViewportError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoomFactor { zoom_factor } => {
                write!(f, "zoom factor must be positive: {}", zoom_factor)
            }
            Self::Viewport(err) => write!(f, "zoom viewport error: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonPositiveZoomFactor { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Expands one zoom gesture into an ordered run of Mandelbrot frames.
///
/// The gesture names a pixel in the current view and a zoom factor; the
/// target viewport is centered on that pixel's complex coordinate with the
/// current size divided by the factor (`zoom_factor > 1` zooms in). Centers
/// and sizes are interpolated arithmetically, so the final frame lands on
/// the target exactly. Each frame's iteration cap is the supplied override
/// or the estimate for that frame's width.
pub fn sequence_zoom(
    current: &Viewport,
    pixel_x: f64,
    pixel_y: f64,
    zoom_factor: f64,
    cap_override: Option<u32>,
) -> Result<Vec<FractalFrame>, ZoomError> {
    if !(zoom_factor > 0.0) {
        return Err(ZoomError::NonPositiveZoomFactor { zoom_factor });
    }

    let current_center = current.center();
    let offset = current.pixel_offset_from_center(pixel_x, pixel_y);
    let delta_width = current.width() * (1.0 - zoom_factor) / zoom_factor;
    let delta_height = current.height() * (1.0 - zoom_factor) / zoom_factor;

    let mut frames = Vec::with_capacity(ANIMATION_FRAMES as usize);

    for i in 1..=ANIMATION_FRAMES {
        let t = f64::from(i) / f64::from(ANIMATION_FRAMES);
        let center = Complex {
            real: current_center.real + t * offset.real,
            imag: current_center.imag + t * offset.imag,
        };
        let width = current.width() + t * delta_width;
        let height = current.height() + t * delta_height;

        let viewport = Viewport::from_center(
            center,
            width,
            height,
            current.pixel_width(),
            current.pixel_height(),
        )?;
        let max_iterations = cap_override.unwrap_or_else(|| estimate_iterations(width));

        frames.push(FractalFrame::new(
            FractalKind::Mandelbrot,
            viewport,
            max_iterations,
        ));
    }

    Ok(frames)
}
