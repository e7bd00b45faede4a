use alloc::vec::Vec;

use core::slice::Iter;

/// A single recorded point in device coordinates
///
/// Samples are immutable once created. Their order of arrival matters for
/// the standard error estimate but not for the fitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    x: T,
    y: T,
}

impl<T: Copy> Sample<T> {
    /// Creates a new sample from its coordinates
    ///
    /// # Arguments
    ///
    /// * `x` - The horizontal coordinate
    /// * `y` - The vertical coordinate
    ///
    /// # Returns
    ///
    /// * `Self` - The sample
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate
    pub const fn x(&self) -> T {
        self.x
    }

    /// Returns the vertical coordinate
    pub const fn y(&self) -> T {
        self.y
    }
}

impl<T> From<(T, T)> for Sample<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// An append-only, ordered collection of samples
///
/// Samples are kept in arrival order for the lifetime of the store. There is
/// no way to remove or modify a sample once it has been pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleStore<T> {
    buf: Vec<Sample<T>>,
}

impl<T> SampleStore<T> {
    /// Creates an empty store
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Appends a sample to the end of the store
    ///
    /// No validation or deduplication is applied.
    ///
    /// # Arguments
    ///
    /// * `sample` - The sample to append
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The store for method chaining
    pub fn push(&mut self, sample: Sample<T>) -> &mut Self {
        self.buf.push(sample);
        self
    }

    /// Returns the number of recorded samples
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no sample has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the sample at `index` in arrival order
    pub fn get(&self, index: usize) -> Option<&Sample<T>> {
        self.buf.get(index)
    }

    /// Returns the most recently recorded sample
    pub fn last(&self) -> Option<&Sample<T>> {
        self.buf.last()
    }

    /// Returns an iterator over the samples in arrival order
    pub fn iter(&self) -> Iter<'_, Sample<T>> {
        self.buf.iter()
    }

    /// Returns the samples as a slice in arrival order
    pub fn as_slice(&self) -> &[Sample<T>] {
        &self.buf
    }
}

impl<T> Extend<Sample<T>> for SampleStore<T> {
    fn extend<I: IntoIterator<Item = Sample<T>>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<T> FromIterator<Sample<T>> for SampleStore<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SampleStore<T> {
    type Item = &'a Sample<T>;
    type IntoIter = Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
