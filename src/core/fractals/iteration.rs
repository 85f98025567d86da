use crate::core::data::complex::Complex;
use crate::core::fractals::kinds::FractalKind;

/// Returns the first iteration index at which the orbit of the given point
/// leaves the escape radius 2, or `max_iterations` if it never does.
#[must_use]
pub fn escape_iterations(kind: FractalKind, x: f64, y: f64, max_iterations: u32) -> u32 {
    match kind {
        FractalKind::Mandelbrot => mandelbrot_iterations(x, y, max_iterations),
        FractalKind::Julia { c } => julia_iterations(x, y, c, max_iterations),
    }
}

fn mandelbrot_iterations(cx: f64, cy: f64, max_iterations: u32) -> u32 {
    // Exact membership tests for the two largest interior regions; points
    // inside never escape, so skip the orbit entirely.
    if inside_main_cardioid(cx, cy) || inside_period_two_bulb(cx, cy) {
        return max_iterations;
    }

    let mut x = cx;
    let mut y = cy;
    let mut iterations = 0;

    while iterations < max_iterations {
        let x2 = x * x;
        let y2 = y * y;
        if x2 + y2 >= 4.0 {
            break;
        }
        y = 2.0 * x * y + cy;
        x = x2 - y2 + cx;
        iterations += 1;
    }

    iterations
}

fn julia_iterations(x0: f64, y0: f64, c: Complex, max_iterations: u32) -> u32 {
    let mut x = x0;
    let mut y = y0;
    let mut iterations = 0;

    while iterations < max_iterations {
        let x2 = x * x;
        let y2 = y * y;
        if x2 + y2 >= 4.0 {
            break;
        }
        y = 2.0 * x * y + c.imag;
        x = x2 - y2 + c.real;
        iterations += 1;
    }

    iterations
}

/// The main cardioid in polar form around c = 1/4: with w = 1 - 4c,
/// membership is |w| < 2 + 2cos(arg w).
fn inside_main_cardioid(cx: f64, cy: f64) -> bool {
    let r = f64::hypot(1.0 - 4.0 * cx, -4.0 * cy);
    let cos_theta = (1.0 - 4.0 * cx) / r;

    r < 2.0 + 2.0 * cos_theta
}

/// The period-2 bulb: the disc of radius 1/4 centered on c = -1.
fn inside_period_two_bulb(cx: f64, cy: f64) -> bool {
    (1.0 + cx) * (1.0 + cx) + cy * cy < 0.0625
}
