use num_traits::Float;

use crate::{ConfigError, Domain};

/// Number of decimal digits shown when none is configured
pub const DEFAULT_PRECISION: usize = 4;

/// Largest accepted number of decimal digits
pub const MAX_PRECISION: usize = 20;

/// Surface width used by [`EngineConfig::default`]
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;

/// Configuration of a [`RegressionEngine`](crate::RegressionEngine)
///
/// # Builder Pattern
///
/// ```
/// use regression_engine::EngineConfig;
///
/// let config = EngineConfig::new(1280.0)
///     .with_domain_start(0.0)
///     .with_precision(2);
///
/// assert!(config.validate().is_ok());
/// assert!(config.with_surface_width(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig<T> {
    /// First horizontal position the fitted line is traced at. Default: -2.
    pub domain_start: T,
    /// Width of the drawing surface, the exclusive end of the traced span.
    pub surface_width: T,
    /// Decimal digits used for displayed numbers. Default: 4.
    pub precision: usize,
}

impl<T: Float> EngineConfig<T> {
    /// Creates a config for a surface of the given width with default values
    pub fn new(surface_width: T) -> Self {
        Self {
            domain_start: -(T::one() + T::one()),
            surface_width,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the first traced position.
    pub fn with_domain_start(mut self, domain_start: T) -> Self {
        self.domain_start = domain_start;
        self
    }

    /// Set the surface width.
    pub fn with_surface_width(mut self, surface_width: T) -> Self {
        self.surface_width = surface_width;
        self
    }

    /// Set the number of displayed decimal digits.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the span the fitted line is traced over
    pub fn domain(&self) -> Domain<T> {
        Domain::new(self.domain_start, self.surface_width)
    }

    /// Checks that the config describes a traceable domain and a displayable precision
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - `Ok` if the config is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (start, width) = (self.domain_start, self.surface_width);
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        if !start.is_finite() || !width.is_finite() {
            return Err(ConfigError::NonFiniteDomain {
                start: as_f64(start),
                width: as_f64(width),
            });
        }
        if width <= start {
            return Err(ConfigError::EmptyDomain {
                start: as_f64(start),
                width: as_f64(width),
            });
        }
        let reach = start.abs().max(width.abs());
        if reach + T::one() == reach {
            return Err(ConfigError::DomainTooWide {
                start: as_f64(start),
                width: as_f64(width),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

impl<T: Float> Default for EngineConfig<T> {
    /// A surface of [`DEFAULT_SURFACE_WIDTH`] traced from -2 at four digits
    fn default() -> Self {
        Self::new(T::from(DEFAULT_SURFACE_WIDTH).unwrap_or_else(T::max_value))
    }
}
