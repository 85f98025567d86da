use std::num::NonZeroUsize;

/// Row boundaries splitting `rows` into `strips` contiguous bands: boundary
/// `i` sits at `i * rows / strips`. Bands may be empty when there are more
/// strips than rows.
#[must_use]
pub fn strip_boundaries(rows: u32, strips: NonZeroUsize) -> Vec<u32> {
    (0..=strips.get())
        .map(|i| (i * rows as usize / strips.get()) as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strips(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_single_strip_covers_all_rows() {
        assert_eq!(strip_boundaries(400, strips(1)), vec![0, 400]);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(strip_boundaries(400, strips(4)), vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_uneven_split_still_covers_all_rows() {
        let boundaries = strip_boundaries(10, strips(3));

        assert_eq!(boundaries, vec![0, 3, 6, 10]);
        assert_eq!(*boundaries.first().unwrap(), 0);
        assert_eq!(*boundaries.last().unwrap(), 10);
    }

    #[test]
    fn test_bands_are_contiguous_and_non_overlapping() {
        let boundaries = strip_boundaries(123, strips(7));

        for window in boundaries.windows(2) {
            assert!(window[0] <= window[1]);
        }
        assert_eq!(*boundaries.last().unwrap(), 123);
    }

    #[test]
    fn test_more_strips_than_rows_produces_empty_bands() {
        let boundaries = strip_boundaries(2, strips(5));

        assert_eq!(boundaries.len(), 6);
        assert_eq!(*boundaries.last().unwrap(), 2);
        let total: u32 = boundaries.windows(2).map(|w| w[1] - w[0]).sum();
        assert_eq!(total, 2);
    }
}
