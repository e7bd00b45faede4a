use thiserror::Error;

/// Errors raised while validating an [`EngineConfig`](crate::EngineConfig)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The domain start or the surface width is NaN or infinite
    #[error("rendering domain must be finite (start: {start}, width: {width})")]
    NonFiniteDomain {
        /// Domain start
        start: f64,
        /// Surface width
        width: f64,
    },
    /// The surface width does not exceed the domain start, so no position is traced
    #[error("rendering domain is empty (start: {start}, width: {width})")]
    EmptyDomain {
        /// Domain start
        start: f64,
        /// Surface width
        width: f64,
    },
    /// The domain reaches magnitudes where stepping by one is no longer exact
    #[error("rendering domain can not be traced in unit steps (start: {start}, width: {width})")]
    DomainTooWide {
        /// Domain start
        start: f64,
        /// Surface width
        width: f64,
    },
    /// More decimal digits were requested than numbers are displayed with
    #[error("precision {precision} exceeds the maximum of {max}")]
    PrecisionTooLarge {
        /// Requested precision
        precision: usize,
        /// Largest accepted precision
        max: usize,
    },
}
