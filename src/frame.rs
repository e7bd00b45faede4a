use crate::{Report, Sample};

/// Receives the output of one animation tick
///
/// Implement this trait to draw what the engine produces each frame: the
/// polyline of the fitted line, a marker for every recorded sample and the
/// info panel. All methods have default no-op implementations.
pub trait FrameSink<T> {
    /// Called first on every tick, before anything is drawn.
    fn on_frame_start(&mut self) {}

    /// Called for each traced point of the fitted line, left to right.
    fn on_line_point(&mut self, _x: T, _y: T) {}

    /// Called for each recorded sample in arrival order.
    fn on_sample(&mut self, _sample: &Sample<T>) {}

    /// Called last with the report of the tick.
    fn on_report(&mut self, _report: &Report<T>) {}
}

/// A sink that ignores everything. Use when only the report is of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFrameSink;

impl<T> FrameSink<T> for NoOpFrameSink {}
