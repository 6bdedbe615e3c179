use serde::{Deserialize, Serialize};
use series::Sample;

// ============================================================================
// Linear model
// ============================================================================

/// Straight line `y = slope * x + intercept`.
///
/// The all-zero model is what a degenerate fit returns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub const FLAT: LinearModel = LinearModel {
        slope: 0.0,
        intercept: 0.0,
    };

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// ============================================================================
// Ordinary least squares
// ============================================================================

/// Fit a least-squares line through `(year, value)` of every sample.
///
/// Regression runs against the absolute calendar year, so a trend of 0.1 per
/// year starting at 0 in 1900 has an intercept of -190.
pub fn fit(samples: &[Sample]) -> LinearModel {
    fit_pairs(samples.iter().map(|s| (s.year as f64, s.value)))
}

/// Closed-form least squares over raw `(x, y)` pairs.
///
/// An empty input or one whose x values are all equal has a zero
/// denominator and yields [`LinearModel::FLAT`].
pub fn fit_pairs<I>(points: I) -> LinearModel
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut n = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (x, y) in points {
        n += 1;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    if n == 0 {
        return LinearModel::FLAT;
    }

    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return LinearModel::FLAT;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    LinearModel { slope, intercept }
}

/// Predicted `(year, value)` for every sample year, in sample order.
pub fn trend_line(samples: &[Sample], model: &LinearModel) -> Vec<(i64, f64)> {
    samples
        .iter()
        .map(|s| (s.year, model.predict(s.year as f64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(year: i64, value: f64) -> Sample {
        Sample { year, value }
    }

    #[test]
    fn test_empty_is_flat() {
        assert_eq!(fit(&[]), LinearModel::FLAT);
    }

    #[test]
    fn test_single_sample_is_flat() {
        assert_eq!(fit(&[sample(1950, 3.5)]), LinearModel::FLAT);
    }

    #[test]
    fn test_same_year_is_flat() {
        let samples = [sample(1900, 1.0), sample(1900, 2.0), sample(1900, -4.0)];
        assert_eq!(fit(&samples), LinearModel::FLAT);
    }

    #[test]
    fn test_exact_line() {
        let samples: Vec<Sample> = (0..20)
            .map(|i| sample(2000 + i, 2.0 * (2000 + i) as f64 - 5.0))
            .collect();
        let model = fit(&samples);
        assert!((model.slope - 2.0).abs() < 1e-9);
        assert!((model.intercept + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_concrete_scenario() {
        let samples = [sample(1900, 0.0), sample(1901, 0.1), sample(1902, 0.2)];
        let model = fit(&samples);
        assert!((model.slope - 0.1).abs() < 1e-9);
        assert!((model.intercept + 190.0).abs() < 1e-8);
    }

    #[test]
    fn test_symmetric_noise_cancels() {
        // residuals +1, -1, -1, +1 around y = x have zero covariance with x
        let samples = [
            sample(0, 1.0),
            sample(1, 0.0),
            sample(2, 1.0),
            sample(3, 4.0),
        ];
        let model = fit(&samples);
        assert!((model.slope - 1.0).abs() < 1e-12);
        assert!((model.intercept - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let samples = [sample(1900, 0.3), sample(1901, 0.9), sample(1902, 0.4), sample(1903, 1.2)];
        let mut reversed = samples;
        reversed.reverse();

        let a = fit(&samples);
        let b = fit(&reversed);
        assert!((a.slope - b.slope).abs() < 1e-9);
        assert!((a.intercept - b.intercept).abs() < 1e-6);
    }

    #[test]
    fn test_fit_pairs_matches_fit() {
        let samples = [sample(10, 1.0), sample(11, 3.0), sample(13, 2.0)];
        let pairs: Vec<(f64, f64)> = samples.iter().map(|s| (s.year as f64, s.value)).collect();
        assert_eq!(fit(&samples), fit_pairs(pairs));
    }

    #[test]
    fn test_predict_and_trend_line() {
        let model = LinearModel {
            slope: 0.5,
            intercept: -10.0,
        };
        assert_eq!(model.predict(20.0), 0.0);

        let samples = [sample(20, 9.0), sample(22, -3.0)];
        assert_eq!(trend_line(&samples, &model), vec![(20, 0.0), (22, 1.0)]);
    }

    #[test]
    fn test_flat_model_predicts_zero() {
        assert_eq!(LinearModel::FLAT.predict(1999.0), 0.0);
        assert_eq!(LinearModel::default(), LinearModel::FLAT);
    }
}
