//! Price-series smoothing.

/// Trailing simple moving average.
///
/// The first `window - 1` positions have insufficient history and stay
/// `None`; position `i` (zero-based, `i >= window - 1`) averages
/// `values[i + 1 - window ..= i]`. Callers validate `window > 0`.
pub fn simple_moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return averages;
    }

    let mut sum: f64 = values[..window - 1].iter().sum();
    for i in window - 1..values.len() {
        sum += values[i];
        averages[i] = Some(sum / window as f64);
        sum -= values[i + 1 - window];
    }
    averages
}
