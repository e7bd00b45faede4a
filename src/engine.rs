use core::fmt::Debug;

use num_traits::Float;

use crate::{
    Aggregates, Conclusion, ConfigError, EngineConfig, FrameSink, Model, Report, Sample,
    SampleStore, standard_error,
};

/// An interactive least-squares regression over pointer samples
///
/// `RegressionEngine<T>` owns the recorded samples and recomputes the fitted
/// line, the correlation coefficient, the residual standard error and the
/// conclusion from scratch whenever it is updated. The host feeds it samples
/// from its input callbacks and calls [`tick`](Self::tick) once per animation
/// frame.
///
/// The only state carried between updates besides the samples is the
/// conclusion, which is kept when the correlation sits exactly on `±0.5`.
#[derive(Debug, Clone)]
pub struct RegressionEngine<T> {
    /// Engine configuration
    config: EngineConfig<T>,
    /// Recorded samples in arrival order
    samples: SampleStore<T>,
    /// Latest standard error, negative infinity until the first update
    standard_error: T,
    /// Latest conclusion
    conclusion: Option<Conclusion>,
    /// Report of the latest update
    report: Option<Report<T>>,
}

impl<T> RegressionEngine<T>
where
    T: Default + Float + Debug,
{
    /// Creates a new engine with the given configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The engine configuration
    ///
    /// # Returns
    ///
    /// * `Result<Self, ConfigError>` - The engine, or the reason the config was rejected
    pub fn new(config: EngineConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "regression engine created: domain [{:?}, {:?}), precision {}",
            config.domain_start,
            config.surface_width,
            config.precision
        );
        Ok(Self {
            config,
            samples: SampleStore::new(),
            standard_error: T::neg_infinity(),
            conclusion: None,
            report: None,
        })
    }

    /// Creates a new engine for a surface of the given width with default settings
    ///
    /// # Arguments
    ///
    /// * `surface_width` - Width of the drawing surface
    ///
    /// # Returns
    ///
    /// * `Result<Self, ConfigError>` - The engine, or the reason the width was rejected
    pub fn with_surface_width(surface_width: T) -> Result<Self, ConfigError> {
        Self::new(EngineConfig::new(surface_width))
    }

    /// Returns the engine configuration
    pub const fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    /// Changes the surface width, e.g. after the host surface was resized
    ///
    /// The width is validated first; on error the engine is left unchanged.
    ///
    /// # Arguments
    ///
    /// * `surface_width` - The new width
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - `Ok` if the width was accepted
    pub fn set_surface_width(&mut self, surface_width: T) -> Result<(), ConfigError> {
        let config = self.config.with_surface_width(surface_width);
        config.validate()?;
        log::debug!("surface width changed to {surface_width:?}");
        self.config = config;
        Ok(())
    }

    /// Records a sample
    ///
    /// The sample is appended as-is, without validation or deduplication.
    /// It takes effect on the next update.
    ///
    /// # Arguments
    ///
    /// * `x` - The horizontal device coordinate
    /// * `y` - The vertical device coordinate
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine for method chaining
    pub fn add_sample(&mut self, x: T, y: T) -> &mut Self {
        self.samples.push(Sample::new(x, y));
        log::trace!("sample #{} recorded at ({x:?}, {y:?})", self.samples.len());
        self
    }

    /// Returns the recorded samples
    pub const fn samples(&self) -> &SampleStore<T> {
        &self.samples
    }

    /// Returns the standard error of the latest update, negative infinity before the first one
    pub const fn standard_error(&self) -> T {
        self.standard_error
    }

    /// Returns the conclusion of the latest update, `None` before the first classification
    pub const fn conclusion(&self) -> Option<Conclusion> {
        self.conclusion
    }

    /// Returns the report of the latest update
    pub const fn report(&self) -> Option<&Report<T>> {
        self.report.as_ref()
    }

    /// Recomputes the fit over every recorded sample
    ///
    /// Runs aggregation, fitting, error estimation and classification in that
    /// order. Without samples nothing is computed and the previous state is
    /// kept.
    ///
    /// # Returns
    ///
    /// * `Option<&Report<T>>` - The new report, or `None` if no sample has been recorded
    ///
    /// # Examples
    ///
    /// ```
    /// use regression_engine::{Conclusion, RegressionEngine};
    ///
    /// let mut engine = RegressionEngine::with_surface_width(800.0).unwrap();
    /// assert!(engine.update().is_none());
    ///
    /// engine.add_sample(0.0, 0.0).add_sample(1.0, 1.0).add_sample(2.0, 2.0);
    /// let report = engine.update().unwrap();
    ///
    /// assert_eq!(report.slope(), 1.0);
    /// assert_eq!(report.intercept(), 0.0);
    /// assert_eq!(report.correlation(), 1.0);
    /// assert_eq!(report.conclusion(), Some(Conclusion::PerfectPositive));
    /// ```
    pub fn update(&mut self) -> Option<&Report<T>> {
        let samples = self.samples.as_slice();
        let aggregates = Aggregates::from_samples(samples)?;
        let model = Model::fit(&aggregates)?;
        let standard_error = standard_error(&model, samples, self.config.domain())?;

        if let Some(conclusion) = Conclusion::classify(model.correlation()) {
            self.conclusion = Some(conclusion);
        }
        self.standard_error = standard_error;

        log::trace!(
            "fit over {} samples: slope {:?}, intercept {:?}, r {:?}, se {:?}",
            aggregates.n(),
            model.slope(),
            model.intercept(),
            model.correlation(),
            standard_error
        );
        if aggregates.n() > 1 && !model.slope().is_finite() {
            log::warn!(
                "slope is not finite ({:?}), every sample shares the same x",
                model.slope()
            );
        }
        if aggregates.n() > 2 && !standard_error.is_finite() {
            log::warn!("standard error is not finite ({standard_error:?})");
        }

        self.report = Some(Report::new(
            model,
            standard_error,
            self.conclusion,
            self.config.precision,
        ));
        self.report.as_ref()
    }

    /// Runs one animation tick
    ///
    /// Updates the fit and hands the result to `sink`: the traced points of
    /// the fitted line, every recorded sample and finally the report. Without
    /// samples only [`FrameSink::on_frame_start`] is called.
    ///
    /// # Arguments
    ///
    /// * `sink` - The rendering collaborator
    ///
    /// # Returns
    ///
    /// * `Option<&Report<T>>` - The new report, or `None` if no sample has been recorded
    pub fn tick<S>(&mut self, sink: &mut S) -> Option<&Report<T>>
    where
        S: FrameSink<T> + ?Sized,
    {
        sink.on_frame_start();
        self.update()?;

        let report = self.report.as_ref()?;
        for (x, y) in report.model().trace(self.config.domain()) {
            sink.on_line_point(x, y);
        }
        for sample in &self.samples {
            sink.on_sample(sample);
        }
        sink.on_report(report);

        Some(report)
    }
}
