use num_traits::Float;

use crate::{Kbn, Sample};

/// The running sums consumed by the closed-form least-squares solution
///
/// Aggregates are rebuilt from the full sample set on every update rather than
/// maintained incrementally, so two passes over the same samples always yield
/// bit-identical sums. Each sum uses Kahan-Babuska-Neumaier compensated
/// summation to limit the error introduced by large device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates<T> {
    /// Number of samples
    n: usize,
    /// Sum of x
    sum_x: T,
    /// Sum of y
    sum_y: T,
    /// Sum of x * y
    sum_xy: T,
    /// Sum of x^2
    sum_x_sq: T,
    /// Sum of y^2
    sum_y_sq: T,
}

impl<T> Aggregates<T>
where
    T: Default + Float,
{
    /// Computes the aggregates over every sample in a single pass
    ///
    /// # Arguments
    ///
    /// * `samples` - The samples to aggregate
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The aggregates, or `None` if `samples` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use regression_engine::{Aggregates, Sample};
    ///
    /// let samples = [Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)];
    /// let agg = Aggregates::from_samples(&samples).unwrap();
    ///
    /// assert_eq!(agg.n(), 2);
    /// assert_eq!(agg.sum_x(), 4.0);
    /// assert_eq!(agg.sum_xy(), 14.0);
    /// assert_eq!(agg.sum_y_sq(), 20.0);
    /// ```
    pub fn from_samples(samples: &[Sample<T>]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sum_x = Kbn::<T>::default();
        let mut sum_y = Kbn::<T>::default();
        let mut sum_xy = Kbn::<T>::default();
        let mut sum_x_sq = Kbn::<T>::default();
        let mut sum_y_sq = Kbn::<T>::default();

        for sample in samples {
            let (x, y) = (sample.x(), sample.y());
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x_sq += x * x;
            sum_y_sq += y * y;
        }

        Some(Self {
            n: samples.len(),
            sum_x: sum_x.total(),
            sum_y: sum_y.total(),
            sum_xy: sum_xy.total(),
            sum_x_sq: sum_x_sq.total(),
            sum_y_sq: sum_y_sq.total(),
        })
    }
}

impl<T: Copy> Aggregates<T> {
    /// Returns the number of samples aggregated
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns the sum of x
    pub const fn sum_x(&self) -> T {
        self.sum_x
    }

    /// Returns the sum of y
    pub const fn sum_y(&self) -> T {
        self.sum_y
    }

    /// Returns the sum of the products x * y
    pub const fn sum_xy(&self) -> T {
        self.sum_xy
    }

    /// Returns the sum of squared x
    pub const fn sum_x_sq(&self) -> T {
        self.sum_x_sq
    }

    /// Returns the sum of squared y
    pub const fn sum_y_sq(&self) -> T {
        self.sum_y_sq
    }
}
