/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
///
/// Values are summed in ascending order, so any permutation of the same
/// values yields a bit-identical mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sorted_sum(values) / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let deviations: Vec<f64> = values.iter().map(|v| (v - mean).powi(2)).collect();
    (sorted_sum(&deviations) / values.len() as f64).sqrt()
}

/// Unbiased sample variance (n - 1 denominator). Returns 0.0 below two values.
pub fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let deviations: Vec<f64> = values.iter().map(|v| (v - mean).powi(2)).collect();
    sorted_sum(&deviations) / (values.len() - 1) as f64
}

fn sorted_sum(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().sum()
}
