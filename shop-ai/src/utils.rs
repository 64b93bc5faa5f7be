use std::cmp::Ordering;

/// Compares two `f32` values, treating `NaN` as the smallest value.
pub(crate) fn nan_safe_f32_cmp(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        // if `partial_cmp` returns None at least one of the values is NaN
        let rank = |f: &f32| if f.is_nan() { -1 } else { 1 };
        rank(a).cmp(&rank(b))
    })
}

/// `nan_safe_f32_cmp` with inverted arguments, for descending sorts.
pub(crate) fn nan_safe_f32_cmp_desc(a: &f32, b: &f32) -> Ordering {
    nan_safe_f32_cmp(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_safe_f32_cmp_sorts_nan_first() {
        let mut values = vec![1., f32::NAN, 0.5];
        values.sort_by(nan_safe_f32_cmp);
        assert!(values[0].is_nan());
        assert_eq!(&values[1..], &[0.5, 1.]);
    }

    #[test]
    fn test_nan_safe_f32_cmp_desc_sorts_nan_last() {
        let mut values = vec![f32::NAN, 1., 0.5];
        values.sort_by(nan_safe_f32_cmp_desc);
        assert_eq!(&values[..2], &[1., 0.5]);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_nan_safe_f32_cmp_equal_nans() {
        assert_eq!(nan_safe_f32_cmp(&f32::NAN, &f32::NAN), Ordering::Equal);
        assert_eq!(nan_safe_f32_cmp(&1., &1.), Ordering::Equal);
    }
}
