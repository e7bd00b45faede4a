use core::fmt;

use num_traits::Float;

/// Qualitative reading of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conclusion {
    /// Correlation of exactly 1
    PerfectPositive,
    /// Correlation of exactly -1
    PerfectNegative,
    /// Correlation in (-1, -0.5)
    StrongNegative,
    /// Correlation in (-0.5, 0)
    WeakNegative,
    /// Correlation in (0, 0.5)
    WeakPositive,
    /// Correlation in (0.5, 1)
    StrongPositive,
    /// Correlation of exactly 0
    NoRelationship,
}

impl Conclusion {
    /// Classifies a correlation coefficient
    ///
    /// The intervals are open, so a coefficient of exactly `0.5` or `-0.5`
    /// matches no label and `None` is returned. Callers keep their previous
    /// conclusion in that case. NaN and values outside `[-1, 1]` also yield
    /// `None`.
    ///
    /// # Arguments
    ///
    /// * `r` - The correlation coefficient
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The matching label, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use regression_engine::Conclusion;
    ///
    /// assert_eq!(Conclusion::classify(1.0), Some(Conclusion::PerfectPositive));
    /// assert_eq!(Conclusion::classify(-0.7), Some(Conclusion::StrongNegative));
    /// assert_eq!(Conclusion::classify(0.5), None);
    /// ```
    pub fn classify<T: Float>(r: T) -> Option<Self> {
        let one = T::one();
        let zero = T::zero();
        let half = T::from(0.5)?;

        if r == one {
            Some(Self::PerfectPositive)
        } else if r == -one {
            Some(Self::PerfectNegative)
        } else if -one < r && r < -half {
            Some(Self::StrongNegative)
        } else if -half < r && r < zero {
            Some(Self::WeakNegative)
        } else if zero < r && r < half {
            Some(Self::WeakPositive)
        } else if half < r && r < one {
            Some(Self::StrongPositive)
        } else if r == zero {
            Some(Self::NoRelationship)
        } else {
            None
        }
    }

    /// Returns the human readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PerfectPositive => "Perfect Positive linear and direct relationship",
            Self::PerfectNegative => "Perfect Negative linear but indirect relationship",
            Self::StrongNegative => "Strong negative linear relationship",
            Self::WeakNegative => "weak Negative linear relationship",
            Self::WeakPositive => "weak Positive linear relationship",
            Self::StrongPositive => "Strong positive linear relationship",
            Self::NoRelationship => "No relationship",
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
