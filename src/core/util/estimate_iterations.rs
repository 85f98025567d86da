use crate::core::data::frame::MIN_ITERATIONS;

const UNZOOMED_VIEW_SIZE: f64 = 3.0;
const BASE_ITERATIONS: f64 = 50.0;
const ITERATIONS_PER_ZOOM_OCTAVE: f64 = 40.0;

/// Estimates an iteration cap for a viewport of the given complex-plane
/// size. The cap saturates at a modest base for unzoomed views and grows
/// with every halving of the viewport, so deeper zooms keep resolving
/// detail without paying for it on wide views.
#[must_use]
pub fn estimate_iterations(viewport_size: f64) -> u32 {
    if viewport_size >= UNZOOMED_VIEW_SIZE {
        return BASE_ITERATIONS as u32;
    }

    let zoom_octaves = (UNZOOMED_VIEW_SIZE / viewport_size).log2();
    let estimate = BASE_ITERATIONS + ITERATIONS_PER_ZOOM_OCTAVE * zoom_octaves;

    (estimate.round() as u32).max(MIN_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unzoomed_views_use_the_base_cap() {
        assert_eq!(estimate_iterations(3.0), 50);
        assert_eq!(estimate_iterations(10.0), 50);
        assert_eq!(estimate_iterations(1000.0), 50);
    }

    #[test]
    fn test_cap_is_continuous_at_the_base_boundary() {
        let just_below = estimate_iterations(2.999_999);

        assert!(just_below == 50 || just_below == 51);
    }

    #[test]
    fn test_cap_is_monotone_as_the_viewport_shrinks() {
        let sizes = [3.0, 1.5, 0.75, 0.1, 0.01, 1e-6, 1e-12];

        for pair in sizes.windows(2) {
            assert!(
                estimate_iterations(pair[1]) >= estimate_iterations(pair[0]),
                "cap shrank between sizes {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_cap_grows_one_octave_per_halving() {
        assert_eq!(estimate_iterations(1.5), 90);
        assert_eq!(estimate_iterations(0.75), 130);
    }

    #[test]
    fn test_cap_never_drops_below_the_floor() {
        assert!(estimate_iterations(f64::MIN_POSITIVE) >= MIN_ITERATIONS);
        assert!(estimate_iterations(1e300) >= MIN_ITERATIONS);
    }
}
