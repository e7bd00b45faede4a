use num_traits::Float;

use crate::{Domain, Kbn, Model, Sample};

/// Returns the residual standard error of a fitted line
///
/// Residuals are paired by position, not by x coordinate: the `i`-th sample
/// is compared against the line evaluated at `domain.start + i`, the `i`-th
/// point the renderer traces. Samples beyond the end of the domain do not
/// contribute. The sum of squared residuals is divided by `n - 2`, so the
/// result is only meaningful for three or more samples; smaller sets yield
/// NaN or infinity and are passed through as-is.
///
/// # Arguments
///
/// * `model` - The fitted line
/// * `samples` - The recorded samples in arrival order
/// * `domain` - The span the line is traced over
///
/// # Returns
///
/// * `Option<T>` - The standard error, or `None` if `samples` is empty
///
/// # Examples
///
/// ```
/// use regression_engine::{Aggregates, Domain, Model, Sample, standard_error};
///
/// let samples = [Sample::new(0.0, -2.0), Sample::new(1.0, -1.0), Sample::new(2.0, 0.0)];
/// let model = Model::fit(&Aggregates::from_samples(&samples).unwrap()).unwrap();
///
/// // y = x - 2 is traced at -2, -1 and 0, each sample sits 2 above it there.
/// let se = standard_error(&model, &samples, Domain::new(-2.0, 100.0)).unwrap();
/// assert_eq!(se, 12.0_f64.sqrt());
/// ```
pub fn standard_error<T>(model: &Model<T>, samples: &[Sample<T>], domain: Domain<T>) -> Option<T>
where
    T: Default + Float,
{
    if samples.is_empty() {
        return None;
    }
    let n = T::from(samples.len())?;
    let _2 = T::from(2.0)?;

    let mut sum_sq = Kbn::<T>::default();
    for (sample, (_, fitted)) in samples.iter().zip(model.trace(domain)) {
        let residual = sample.y() - fitted;
        sum_sq += residual * residual;
    }

    Some((sum_sq.total() / (n - _2)).sqrt())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::Aggregates;

    fn fit(samples: &[Sample<f64>]) -> Model<f64> {
        Model::fit(&Aggregates::from_samples(samples).unwrap()).unwrap()
    }

    fn samples(points: &[(f64, f64)]) -> Vec<Sample<f64>> {
        points.iter().copied().map(Sample::from).collect()
    }

    #[test]
    fn empty_samples_have_no_error() {
        let model = fit(&samples(&[(1.0, 1.0), (2.0, 2.0)]));
        assert!(standard_error(&model, &[], Domain::new(-2.0, 10.0)).is_none());
    }

    #[test]
    fn pairs_by_position_not_by_x() {
        // y = x fits these perfectly, yet each sample is compared against the
        // line at its traced position -2, -1, 0, 1 instead of at its own x.
        let samples = samples(&[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0)]);
        let model = fit(&samples);
        let se = standard_error(&model, &samples, Domain::new(-2.0, 500.0)).unwrap();

        // residuals: 12, 21, 30, 39
        let expected = ((144.0 + 441.0 + 900.0 + 1521.0) / 2.0_f64).sqrt();
        assert_approx_eq!(se, expected, 1e-9);
    }

    #[test]
    fn zero_when_samples_sit_on_traced_positions() {
        let samples = samples(&[(-2.0, 1.0), (-1.0, 3.0), (0.0, 5.0)]);
        let model = fit(&samples);
        let se = standard_error(&model, &samples, Domain::new(-2.0, 800.0)).unwrap();
        assert_eq!(se, 0.0);
    }

    #[test]
    fn short_domain_limits_pairs() {
        let samples = samples(&[(-2.0, 0.0), (-1.0, 0.0), (0.0, 0.0), (1.0, 9.0)]);
        let model = Model::fit(&Aggregates::from_samples(&samples).unwrap()).unwrap();
        let domain = Domain::new(-2.0, -1.0);

        // only the first sample is paired
        let fitted = model.predict(-2.0);
        let expected = ((0.0 - fitted) * (0.0 - fitted) / 2.0).sqrt();
        assert_approx_eq!(standard_error(&model, &samples, domain).unwrap(), expected, 1e-12);
    }

    #[test]
    fn non_negative_for_three_or_more() {
        let samples = samples(&[
            (311.0, 87.0),
            (45.0, 402.0),
            (198.0, 256.5),
            (77.0, 13.0),
            (640.0, 300.0),
        ]);
        for n in 3..=samples.len() {
            let model = fit(&samples[..n]);
            let se = standard_error(&model, &samples[..n], Domain::new(-2.0, 1024.0)).unwrap();
            assert!(se >= 0.0);
        }
    }

    #[test]
    fn two_samples_are_degenerate() {
        let samples = samples(&[(0.0, 0.0), (5.0, 1.0)]);
        let model = fit(&samples);
        let se = standard_error(&model, &samples, Domain::new(-2.0, 100.0)).unwrap();
        assert!(se.is_infinite());
    }
}
