pub mod estimate_iterations;
pub mod strip_boundaries;
