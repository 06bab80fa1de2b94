//! Utility functions for working with data slices

/// Sort finite data and return a new vector
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Median of already sorted data
///
/// An even number of elements yields the mean of the two central order
/// statistics. Returns `None` for empty input.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::median_sorted;
///
/// assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(median_sorted(&[]), None);
/// ```
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of unsorted data, consuming the buffer for in-place selection
///
/// Uses `select_nth_unstable_by`, so the buffer order is unspecified afterwards.
pub fn median_in_place(data: &mut [f64]) -> Option<f64> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    let (lower, upper_mid, _) = data.select_nth_unstable_by(mid, f64::total_cmp);
    let upper_mid = *upper_mid;
    if n % 2 == 0 {
        // Largest element of the lower partition is the other central statistic
        let lower_mid = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((lower_mid + upper_mid) / 2.0)
    } else {
        Some(upper_mid)
    }
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}
