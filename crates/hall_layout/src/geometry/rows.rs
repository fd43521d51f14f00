use super::types::{ForcedHeights, Row};
use crate::error::{LayoutError, Result};

/// Stack rows from the front (y = 0) to `total_length`.
///
/// Row `i` takes `forced_heights[i]` when present, otherwise `default_height`.
/// The last row is clamped so that it ends exactly at `total_length`.
/// A non-positive `total_length` yields no rows.
///
/// # Errors
/// `InvalidConfiguration` when a resolved height is not a finite step past the
/// previous row end, or when `total_length` is not finite.
pub fn build_rows(
    total_length: f64,
    default_height: f64,
    forced_heights: &ForcedHeights,
) -> Result<Vec<Row>> {
    if !total_length.is_finite() {
        return Err(LayoutError::InvalidConfiguration(format!(
            "hall length must be finite, got {total_length}"
        )));
    }

    let mut rows = Vec::new();
    let mut cursor = 0.0_f64;
    let mut index = 1usize;

    while cursor < total_length {
        let (height, source) = match forced_heights.get(&index) {
            Some(&h) => (h, "forced"),
            None => (default_height, "default"),
        };
        // a zero or negative step would never reach the end
        if !(height.is_finite() && height > 0.0) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "row {index}: {source} height must be positive, got {height}"
            )));
        }

        let end = (cursor + height).min(total_length);
        // below half an ulp of the cursor the sum rounds back to it
        if end <= cursor {
            return Err(LayoutError::InvalidConfiguration(format!(
                "row {index}: {source} height {height} does not advance past {cursor}"
            )));
        }
        rows.push(Row::new(index, cursor, end));
        cursor = end;
        index += 1;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn forced(pairs: &[(usize, f64)]) -> ForcedHeights {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_default_height_with_clamped_last_row() {
        let rows = build_rows(5.0, 2.0, &ForcedHeights::new()).unwrap();
        assert_eq!(
            rows,
            vec![
                Row::new(1, 0.0, 2.0),
                Row::new(2, 2.0, 4.0),
                Row::new(3, 4.0, 5.0)
            ]
        );
        assert!((rows[2].height() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_forced_heights_are_honored() {
        let rows = build_rows(10.0, 2.0, &forced(&[(2, 0.5), (4, 3.0)])).unwrap();
        let heights: Vec<f64> = rows.iter().map(Row::height).collect();
        let expected = [2.0, 0.5, 2.0, 3.0, 2.0, 0.5];
        assert_eq!(heights.len(), expected.len());
        for (h, e) in heights.iter().zip(expected) {
            assert!((h - e).abs() < EPS, "{heights:?}");
        }
    }

    #[test]
    fn test_forced_height_larger_than_remaining_is_clamped() {
        let rows = build_rows(3.0, 1.0, &forced(&[(3, 10.0)])).unwrap();
        assert_eq!(rows.len(), 3);
        assert!((rows[2].end - 3.0).abs() < EPS);
        assert!((rows[2].height() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_negative_forced_height_fails() {
        let err = build_rows(5.0, 2.0, &forced(&[(2, -1.0)])).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)), "{err}");
    }

    #[test]
    fn test_zero_default_height_fails() {
        let err = build_rows(5.0, 0.0, &ForcedHeights::new()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));

        let err = build_rows(5.0, f64::NAN, &ForcedHeights::new()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_height_below_cursor_precision_fails() {
        // 1.0 + 1e-17 == 1.0
        let err = build_rows(2.0, 1.0, &forced(&[(2, 1e-17)])).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)), "{err}");

        // past 2^53 a unit default height no longer moves the cursor
        let big = 2f64.powi(53);
        let err = build_rows(big + 4.0, 1.0, &forced(&[(1, big)])).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)), "{err}");
        assert!(err.to_string().contains("row 2"), "{err}");
    }

    #[test]
    fn test_unreached_invalid_override_is_not_resolved() {
        let rows = build_rows(4.0, 2.0, &forced(&[(9, -1.0)])).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_non_positive_length_is_empty() {
        assert!(build_rows(0.0, 1.0, &ForcedHeights::new()).unwrap().is_empty());
        assert!(build_rows(-3.0, 1.0, &ForcedHeights::new()).unwrap().is_empty());
        // the height is never resolved for an empty hall
        assert!(build_rows(0.0, -1.0, &ForcedHeights::new()).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_length_fails() {
        assert!(build_rows(f64::INFINITY, 1.0, &ForcedHeights::new()).is_err());
        assert!(build_rows(f64::NAN, 1.0, &ForcedHeights::new()).is_err());
    }

    #[test]
    fn test_rows_are_contiguous_and_cover_length() {
        for &length in &[0.3, 1.0, 5.0, 16.15, 33.3] {
            for &height in &[0.25, 0.66, 1.0, 1.35, 7.0] {
                let rows =
                    build_rows(length, height, &forced(&[(3, 0.66), (7, 0.66)])).unwrap();
                assert!(!rows.is_empty());
                assert_eq!(rows[0].start, 0.0);
                assert_eq!(rows.last().unwrap().end, length);
                for (i, row) in rows.iter().enumerate() {
                    assert_eq!(row.index, i + 1);
                    assert!(row.start < row.end);
                }
                for pair in rows.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
            }
        }
    }
}
