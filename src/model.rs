use alloc::string::String;

use core::cmp::Ordering;

use num_traits::Float;

use crate::{Aggregates, helper::to_fixed};

/// The horizontal span over which the fitted line is traced
///
/// The line is evaluated at `start`, `start + 1`, `start + 2`, ... for as long
/// as the position stays below `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<T> {
    /// First traced position
    pub start: T,
    /// Exclusive upper bound of traced positions
    pub width: T,
}

impl<T> Domain<T> {
    /// Creates a new domain
    pub const fn new(start: T, width: T) -> Self {
        Self { start, width }
    }
}

/// A least-squares line fitted to a set of samples
///
/// Holds the slope and intercept of `y = slope * x + intercept` together with
/// Pearson's correlation coefficient of the samples it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model<T> {
    slope: T,
    intercept: T,
    correlation: T,
}

impl<T: Float> Model<T> {
    /// Fits an ordinary least-squares line to the aggregates
    ///
    /// The slope is left unguarded: when every sample shares the same x the
    /// slope is infinite or NaN and the intercept follows. The correlation is
    /// replaced by `0` whenever it evaluates to NaN, which covers a single
    /// sample and any constant x or y.
    ///
    /// # Arguments
    ///
    /// * `agg` - The aggregates of the samples
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The fitted model, or `None` if the sample count can not be represented in `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use regression_engine::{Aggregates, Model, Sample};
    ///
    /// let samples = [Sample::new(0.0, 2.0), Sample::new(1.0, 0.0), Sample::new(2.0, -2.0)];
    /// let agg = Aggregates::from_samples(&samples).unwrap();
    /// let model = Model::fit(&agg).unwrap();
    ///
    /// assert_eq!(model.slope(), -2.0);
    /// assert_eq!(model.intercept(), 2.0);
    /// assert_eq!(model.correlation(), -1.0);
    /// ```
    pub fn fit(agg: &Aggregates<T>) -> Option<Self> {
        let n = T::from(agg.n())?;
        let (sum_x, sum_y) = (agg.sum_x(), agg.sum_y());

        let numerator = n * agg.sum_xy() - sum_x * sum_y;
        let spread_x = n * agg.sum_x_sq() - sum_x * sum_x;
        let spread_y = n * agg.sum_y_sq() - sum_y * sum_y;

        let slope = numerator / spread_x;
        let intercept = (sum_y - slope * sum_x) / n;

        let correlation = numerator / (spread_x * spread_y).sqrt();
        let correlation = if correlation.is_nan() {
            T::zero()
        } else {
            correlation
        };

        Some(Self {
            slope,
            intercept,
            correlation,
        })
    }

    /// Evaluates the fitted line at `x`
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Returns the points of the fitted line over the domain
    ///
    /// # Arguments
    ///
    /// * `domain` - The span to trace
    ///
    /// # Returns
    ///
    /// * `Trace<T>` - An iterator over `(x, y)` pairs in increasing `x`
    ///
    /// # Examples
    ///
    /// ```
    /// use regression_engine::{Aggregates, Domain, Model, Sample};
    ///
    /// let samples = [Sample::new(0.0, 1.0), Sample::new(1.0, 3.0)];
    /// let model = Model::fit(&Aggregates::from_samples(&samples).unwrap()).unwrap();
    /// let points: Vec<_> = model.trace(Domain::new(-2.0, 1.0)).collect();
    ///
    /// assert_eq!(points, vec![(-2.0, -3.0), (-1.0, -1.0), (0.0, 1.0)]);
    /// ```
    pub fn trace(&self, domain: Domain<T>) -> Trace<T> {
        Trace {
            model: *self,
            x: domain.start,
            end: domain.width,
        }
    }

    /// Renders the model as `Y = {slope}X + {intercept}`
    ///
    /// # Arguments
    ///
    /// * `precision` - The number of decimal digits for each coefficient
    ///
    /// # Returns
    ///
    /// * `String` - The equation text
    pub fn equation(&self, precision: usize) -> String {
        format!(
            "Y = {}X + {}",
            to_fixed(self.slope, precision),
            to_fixed(self.intercept, precision)
        )
    }
}

impl<T: Copy> Model<T> {
    /// Returns the slope of the fitted line
    pub const fn slope(&self) -> T {
        self.slope
    }

    /// Returns the intercept of the fitted line
    pub const fn intercept(&self) -> T {
        self.intercept
    }

    /// Returns Pearson's correlation coefficient, `0` when undefined
    pub const fn correlation(&self) -> T {
        self.correlation
    }
}

/// Iterator over the points of a fitted line, see [`Model::trace`]
#[derive(Debug, Clone)]
pub struct Trace<T> {
    model: Model<T>,
    x: T,
    end: T,
}

impl<T: Float> Iterator for Trace<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x.partial_cmp(&self.end) != Some(Ordering::Less) {
            return None;
        }
        let x = self.x;
        self.x = x + T::one();
        Some((x, self.model.predict(x)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::Sample;

    fn fit(points: &[(f64, f64)]) -> Model<f64> {
        let samples: Vec<Sample<f64>> = points.iter().copied().map(Sample::from).collect();
        Model::fit(&Aggregates::from_samples(&samples).unwrap()).unwrap()
    }

    #[test]
    fn perfect_positive_line() {
        let model = fit(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(model.slope(), 1.0);
        assert_eq!(model.intercept(), 0.0);
        assert_eq!(model.correlation(), 1.0);
    }

    #[test]
    fn perfect_negative_line() {
        let model = fit(&[(0.0, 2.0), (1.0, 0.0), (2.0, -2.0)]);
        assert_eq!(model.slope(), -2.0);
        assert_eq!(model.correlation(), -1.0);
    }

    #[test]
    fn single_sample_correlation_is_zero() {
        let model = fit(&[(120.0, 340.0)]);
        assert_eq!(model.correlation(), 0.0);
        assert!(model.slope().is_nan());
    }

    #[test]
    fn constant_y_correlation_is_zero() {
        let model = fit(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        assert_eq!(model.correlation(), 0.0);
        assert_eq!(model.slope(), 0.0);
        assert_eq!(model.intercept(), 5.0);
    }

    #[test]
    fn constant_x_slope_is_not_masked() {
        let model = fit(&[(4.0, 1.0), (4.0, 2.0), (4.0, 3.0)]);
        assert!(!model.slope().is_finite());
        assert_eq!(model.correlation(), 0.0);
    }

    #[test]
    fn satisfies_normal_equations() {
        let points = [
            (12.0, 410.0),
            (87.0, 352.5),
            (150.0, 300.0),
            (233.0, 310.0),
            (301.0, 205.25),
            (415.0, 180.0),
        ];
        let model = fit(&points);
        let (a, b) = (model.slope(), model.intercept());

        // d/db: sum(y - a*x - b) = 0
        let r0: f64 = points.iter().map(|(x, y)| y - a * x - b).sum();
        // d/da: sum(x * (y - a*x - b)) = 0
        let r1: f64 = points.iter().map(|(x, y)| x * (y - a * x - b)).sum();

        assert_approx_eq!(r0, 0.0, 1e-9);
        assert_approx_eq!(r1 / 1e5, 0.0, 1e-9);
    }

    #[test]
    fn correlation_matches_pearson() {
        let model = fit(&[(2.0, 1.0), (4.0, 3.0), (6.0, 2.0), (8.0, 5.0), (10.0, 7.0)]);
        // 140 / sqrt(200 * 116)
        assert_approx_eq!(model.correlation(), 0.919_145_03, 1e-8);
        assert_approx_eq!(model.slope(), 0.7, 1e-12);
        assert_approx_eq!(model.intercept(), -0.6, 1e-12);
    }

    #[test]
    fn equation_uses_fixed_precision() {
        let model = fit(&[(0.0, 2.0), (1.0, 0.0), (2.0, -2.0)]);
        assert_eq!(model.equation(4), "Y = -2.0000X + 2.0000");
        assert_eq!(model.equation(1), "Y = -2.0X + 2.0");

        let model = fit(&[(0.0, 0.0), (1.0, 3.0)]);
        assert_eq!(model.equation(2), "Y = 3.00X + 0.00");

        let model = fit(&[(1.0, 1.0)]);
        assert_eq!(model.equation(4), "Y = NaNX + NaN");
    }

    #[test]
    fn trace_stops_before_width() {
        let model = fit(&[(0.0, 0.0), (1.0, 2.0)]);
        let points: Vec<_> = model.trace(Domain::new(-2.0, 2.0)).collect();
        assert_eq!(
            points,
            vec![(-2.0, -4.0), (-1.0, -2.0), (0.0, 0.0), (1.0, 2.0)]
        );

        assert_eq!(model.trace(Domain::new(3.0, 3.0)).count(), 0);
        assert_eq!(model.trace(Domain::new(-2.0, 0.5)).count(), 3);
    }
}
