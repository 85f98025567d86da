use crate::core::data::complex::Complex;

/// Selects which escape-time function a frame is computed with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalKind {
    Mandelbrot,
    Julia { c: Complex },
}
