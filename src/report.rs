use alloc::string::String;

use core::fmt;

use num_traits::Float;

use crate::{Conclusion, Model, helper::to_fixed};

/// The outcome of a single update, handed to the rendering collaborator
///
/// The `Display` implementation renders the four-line info panel:
///
/// ```text
/// Equation: Y = 1.0000X + 0.0000
/// Correlation: 1.0000
/// Standard Error: 0.0000
/// Conclusion: There is Perfect Positive linear and direct relationship in the sample
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report<T> {
    model: Model<T>,
    equation: String,
    standard_error: T,
    conclusion: Option<Conclusion>,
    precision: usize,
}

impl<T: Float> Report<T> {
    /// Creates a new report
    ///
    /// # Arguments
    ///
    /// * `model` - The fitted model
    /// * `standard_error` - The residual standard error
    /// * `conclusion` - The current conclusion, if any has been reached yet
    /// * `precision` - Decimal digits for displayed numbers
    ///
    /// # Returns
    ///
    /// * `Self` - The report
    pub fn new(
        model: Model<T>,
        standard_error: T,
        conclusion: Option<Conclusion>,
        precision: usize,
    ) -> Self {
        Self {
            equation: model.equation(precision),
            model,
            standard_error,
            conclusion,
            precision,
        }
    }

    /// Returns the fitted model
    pub const fn model(&self) -> &Model<T> {
        &self.model
    }

    /// Returns the slope of the fitted line
    pub fn slope(&self) -> T {
        self.model.slope()
    }

    /// Returns the intercept of the fitted line
    pub fn intercept(&self) -> T {
        self.model.intercept()
    }

    /// Returns the correlation coefficient
    pub fn correlation(&self) -> T {
        self.model.correlation()
    }

    /// Returns the equation text, `Y = {slope}X + {intercept}`
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Returns the residual standard error
    pub const fn standard_error(&self) -> T {
        self.standard_error
    }

    /// Returns the conclusion, `None` until a correlation has been classified
    pub const fn conclusion(&self) -> Option<Conclusion> {
        self.conclusion
    }
}

impl<T: Float> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conclusion = self.conclusion.map_or("", |c| c.label());
        writeln!(f, "Equation: {}", self.equation)?;
        writeln!(
            f,
            "Correlation: {}",
            to_fixed(self.model.correlation(), self.precision)
        )?;
        writeln!(
            f,
            "Standard Error: {}",
            to_fixed(self.standard_error, self.precision)
        )?;
        write!(f, "Conclusion: There is {conclusion} in the sample")
    }
}
