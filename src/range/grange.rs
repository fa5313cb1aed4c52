//! The generalized range type.
//!
//! This module provides [`GRange`], an immutable value describing a lazily
//! produced, possibly infinite ordered sequence: a starting point, an
//! optional exclusive stopping point, and a step. Unlike the built-in
//! integer ranges, `GRange` works over any type implementing
//! [`RangeItem`](super::RangeItem).
//!
//! A `GRange` is a restartable sequence descriptor, not an iterator: every
//! call to [`GRange::iter`] starts fresh from `start`.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::sync::OnceLock;

use super::error::{ConfigurationError, UnboundedError};
use super::item::RangeItem;

/// A generalized range over any orderable, addable type.
///
/// `GRange` describes the sequence `start, start + step, start + 2 * step,
/// ...` up to (but never including) `stop`. When `stop` is absent the
/// sequence is infinite and the caller must bound consumption externally
/// (for example with [`Iterator::take`]).
///
/// The direction of travel is fixed at construction: the range is
/// *descending* when `start + step` orders before `start`. For integers the
/// produced sequence and length match the built-in `Range` semantics
/// exactly, including for negative steps.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `Step` - The increment type; defaults to `T`
///
/// # Thread Safety
///
/// A `GRange` is immutable apart from the memoized length, which is a
/// write-once cell. Concurrent first computation races benignly: the
/// recomputation is pure and every writer produces the same value.
///
/// # Examples
///
/// ```rust
/// use toolshed::range::GRange;
///
/// let evens = GRange::new(0, 10, 2).unwrap();
/// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(evens.len(), Ok(5));
/// assert!(evens.contains(&4));
/// assert!(!evens.contains(&3)); // not on the step lattice
/// ```
///
/// Ranges over dates work the same way; see
/// [`RangeItem`](super::RangeItem) for a worked example.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "serde_support::RawGRange<T, Step>",
        try_from = "serde_support::RawGRange<T, Step>",
        bound(
            serialize = "T: serde::Serialize + Clone, Step: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de> + RangeItem<Step>, Step: serde::Deserialize<'de> + Clone"
        )
    )
)]
pub struct GRange<T, Step = T> {
    start: T,
    stop: Option<T>,
    step: Step,
    descending: bool,
    length: OnceLock<usize>,
}

impl<T, Step> GRange<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone,
{
    /// Creates a bounded range from `start` (inclusive) to `stop`
    /// (exclusive), advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DegenerateStep`] if `start + step`
    /// neither precedes nor follows `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// let range = GRange::new(0, 4, 1).unwrap();
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    pub fn new(start: T, stop: T, step: Step) -> Result<Self, ConfigurationError> {
        Self::from_parts(start, Some(stop), step)
    }

    /// Creates an unbounded range from `start`, advancing by `step`
    /// forever.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DegenerateStep`] if `start + step`
    /// neither precedes nor follows `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// let naturals = GRange::unbounded(0, 1).unwrap();
    /// let head: Vec<_> = naturals.iter().take(3).collect();
    /// assert_eq!(head, vec![0, 1, 2]);
    /// ```
    pub fn unbounded(start: T, step: Step) -> Result<Self, ConfigurationError> {
        Self::from_parts(start, None, step)
    }

    /// Returns a builder for assembling a range field by field.
    ///
    /// The builder is how "missing start" and "missing step" become
    /// observable: [`GRangeBuilder::build`] fails when a required field was
    /// never supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// let range = GRange::builder().start(1).stop(10).step(3).build().unwrap();
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 4, 7]);
    /// ```
    pub fn builder() -> GRangeBuilder<T, Step> {
        GRangeBuilder::default()
    }

    pub(crate) fn from_parts(
        start: T,
        stop: Option<T>,
        step: Step,
    ) -> Result<Self, ConfigurationError> {
        // Direction is derived exactly once and never recomputed. Reading
        // it off the step alone keeps a start at the type's extremes
        // constructible; only types without that hook step once from
        // `start`. A step that leaves `start` in place (or incomparable)
        // has no direction.
        let direction = T::step_direction(&step)
            .or_else(|| T::checked_step(&start, &step).and_then(|probe| probe.partial_cmp(&start)));
        let descending = match direction {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => return Err(ConfigurationError::DegenerateStep),
        };
        Ok(Self {
            start,
            stop,
            step,
            descending,
            length: OnceLock::new(),
        })
    }

    /// The first element of the sequence.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// The exclusive stopping point, if any.
    pub fn stop(&self) -> Option<&T> {
        self.stop.as_ref()
    }

    /// The increment applied each iteration.
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Whether the sequence travels downward (`start + step` orders before
    /// `start`).
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Whether the range has a stopping point.
    pub fn is_bounded(&self) -> bool {
        self.stop.is_some()
    }

    /// Whether the range produces no elements at all.
    ///
    /// An unbounded range always produces at least `start`, so this is
    /// computable without a length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// assert!(GRange::new(5, 5, 1).unwrap().is_empty());
    /// assert!(GRange::new(5, 0, 1).unwrap().is_empty());
    /// assert!(!GRange::unbounded(5, 1).unwrap().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.stop.as_ref().is_some_and(|stop| {
            if self.descending {
                self.start <= *stop
            } else {
                self.start >= *stop
            }
        })
    }

    /// The number of elements the range produces.
    ///
    /// Computed algebraically through [`RangeItem::steps_between`] when the
    /// element type supports it, otherwise by materializing the lazy
    /// sequence and counting. Either way the result is memoized: repeated
    /// calls return the cached value without recomputation.
    ///
    /// For integers this matches the built-in range length exactly.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundedError`] when the range has no stopping point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::{GRange, UnboundedError};
    ///
    /// assert_eq!(GRange::new(0, 4, 1).unwrap().len(), Ok(4));
    /// assert_eq!(GRange::new(4, 1, -1).unwrap().len(), Ok(3));
    /// assert_eq!(GRange::unbounded(1, 1).unwrap().len(), Err(UnboundedError));
    /// ```
    pub fn len(&self) -> Result<usize, UnboundedError> {
        let stop = self.stop.as_ref().ok_or(UnboundedError)?;
        if let Some(&cached) = self.length.get() {
            return Ok(cached);
        }
        // The iteration fallback terminates because `stop` is set here.
        let computed = T::steps_between(&self.start, stop, &self.step)
            .unwrap_or_else(|| self.iter().count());
        Ok(*self.length.get_or_init(|| computed))
    }

    /// Whether `value` is an element of the range.
    ///
    /// The bounds check runs first and is O(1): an ascending range requires
    /// `start <= value < stop`, a descending one `start >= value > stop`
    /// (with the `stop` half dropped for unbounded ranges). Values inside
    /// the bounds are then checked against the step lattice, either through
    /// [`RangeItem::on_lattice`] or, when unsupported, by scanning the
    /// sequence until it reaches or passes `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// let evens = GRange::new(0, 10, 2).unwrap();
    /// assert!(evens.contains(&4));
    /// assert!(!evens.contains(&3));  // inside the bounds, off the lattice
    /// assert!(!evens.contains(&10)); // exclusive stop
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let in_bounds = match (&self.stop, self.descending) {
            (Some(stop), true) => self.start >= *value && *value > *stop,
            (Some(stop), false) => self.start <= *value && *value < *stop,
            (None, true) => self.start >= *value,
            (None, false) => self.start <= *value,
        };
        if !in_bounds {
            return false;
        }

        if self.stop.is_some() {
            if let Some(hit) = T::on_lattice(&self.start, value, &self.step) {
                return hit;
            }
        }

        self.scan_for(value)
    }

    /// Iteration-based membership scan, stopping as soon as the sequence
    /// reaches or passes `value` in the direction of travel.
    fn scan_for(&self, value: &T) -> bool {
        for item in self.iter() {
            if item == *value {
                return true;
            }
            let passed = if self.descending {
                item < *value
            } else {
                item > *value
            };
            if passed {
                return false;
            }
        }
        false
    }

    /// Returns a fresh iterator over the range.
    ///
    /// Iteration is lazy and restartable: every call starts again from
    /// `start`, and two independent iterators produce identical sequences.
    /// When the range is unbounded the iterator only terminates once the
    /// element type runs out of representable successors, which for
    /// unbounded arithmetic never happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::range::GRange;
    ///
    /// let range = GRange::new(0, 6, 2).unwrap();
    /// let first: Vec<_> = range.iter().collect();
    /// let second: Vec<_> = range.iter().collect();
    /// assert_eq!(first, second);
    /// ```
    pub fn iter(&self) -> GRangeIter<T, Step> {
        GRangeIter {
            current: Some(self.start.clone()),
            stop: self.stop.clone(),
            step: self.step.clone(),
            descending: self.descending,
        }
    }
}

impl<T, Step> PartialEq for GRange<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone + PartialEq,
{
    /// Ranges compare by their defining fields; the memoized length is an
    /// optimization, not part of the value.
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.stop == other.stop && self.step == other.step
    }
}

impl<'a, T, Step> IntoIterator for &'a GRange<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone,
{
    type Item = T;
    type IntoIter = GRangeIter<T, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`GRange`].
///
/// Fields may be supplied in any order; [`GRangeBuilder::build`] fails with
/// a [`ConfigurationError`] when `step` or `start` was never provided.
///
/// # Examples
///
/// ```rust
/// use toolshed::range::{ConfigurationError, GRange};
///
/// let unbounded = GRange::builder().start(0).step(5).build().unwrap();
/// assert!(!unbounded.is_bounded());
///
/// let missing = GRange::<i32>::builder().step(1).build();
/// assert_eq!(missing.unwrap_err(), ConfigurationError::MissingStart);
/// ```
#[derive(Debug, Clone)]
pub struct GRangeBuilder<T, Step = T> {
    start: Option<T>,
    stop: Option<T>,
    step: Option<Step>,
}

impl<T, Step> Default for GRangeBuilder<T, Step> {
    fn default() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }
}

impl<T, Step> GRangeBuilder<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone,
{
    /// Sets the first element of the sequence.
    pub fn start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the exclusive stopping point. Omitting it makes the range
    /// unbounded.
    pub fn stop(mut self, stop: T) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the increment applied each iteration.
    pub fn step(mut self, step: Step) -> Self {
        self.step = Some(step);
        self
    }

    /// Builds the range.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingStep`] if no step was supplied
    /// - [`ConfigurationError::MissingStart`] if no start was supplied
    /// - [`ConfigurationError::DegenerateStep`] if the step does not move
    ///   the sequence
    pub fn build(self) -> Result<GRange<T, Step>, ConfigurationError> {
        let step = self.step.ok_or(ConfigurationError::MissingStep)?;
        let start = self.start.ok_or(ConfigurationError::MissingStart)?;
        GRange::from_parts(start, self.stop, step)
    }
}

/// Iterator over a [`GRange`].
///
/// Produced by [`GRange::iter`]; emits every element from `start`,
/// advancing by [`RangeItem::checked_step`], and stops before emitting any
/// value that is not strictly before `stop` (ascending) or not strictly
/// after `stop` (descending), or once the next element is not
/// representable. Fused after exhaustion.
#[derive(Debug, Clone)]
pub struct GRangeIter<T, Step = T> {
    current: Option<T>,
    stop: Option<T>,
    step: Step,
    descending: bool,
}

impl<T, Step> Iterator for GRangeIter<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;
        if let Some(stop) = &self.stop {
            let past = if self.descending {
                current <= *stop
            } else {
                current >= *stop
            };
            if past {
                return None;
            }
        }
        // An unrepresentable successor ends the sequence. For bounded
        // ranges this loses nothing: a successor past the type's extreme
        // is past `stop` too.
        self.current = T::checked_step(&current, &self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.current, &self.stop) {
            (None, _) => (0, Some(0)),
            (Some(current), Some(stop)) => T::steps_between(current, stop, &self.step)
                .map_or((0, None), |remaining| (remaining, Some(remaining))),
            (Some(_), None) => (0, None),
        }
    }
}

impl<T, Step> FusedIterator for GRangeIter<T, Step>
where
    T: RangeItem<Step>,
    Step: Clone,
{
}

/// Wire format for [`GRange`]: the defining fields only.
///
/// Direction and the memoized length are derived state, so serialization
/// drops them and deserialization goes back through the validating
/// constructor instead of trusting the wire.
#[cfg(feature = "serde")]
mod serde_support {
    use super::{ConfigurationError, GRange, RangeItem};

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename = "GRange")]
    pub(super) struct RawGRange<T, Step> {
        start: T,
        stop: Option<T>,
        step: Step,
    }

    impl<T, Step> From<GRange<T, Step>> for RawGRange<T, Step> {
        fn from(range: GRange<T, Step>) -> Self {
            Self {
                start: range.start,
                stop: range.stop,
                step: range.step,
            }
        }
    }

    impl<T, Step> TryFrom<RawGRange<T, Step>> for GRange<T, Step>
    where
        T: RangeItem<Step>,
        Step: Clone,
    {
        type Error = ConfigurationError;

        fn try_from(raw: RawGRange<T, Step>) -> Result<Self, Self::Error> {
            Self::from_parts(raw.start, raw.stop, raw.step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(GRange<i64>: Send, Sync, Clone);
    assert_impl_all!(GRange<f64>: Send, Sync);

    #[rstest]
    fn test_new_ascending() {
        let range = GRange::new(0, 4, 1).unwrap();
        assert!(!range.is_descending());
        assert!(range.is_bounded());
        assert_eq!(range.start(), &0);
        assert_eq!(range.stop(), Some(&4));
        assert_eq!(range.step(), &1);
    }

    #[rstest]
    fn test_new_descending() {
        let range = GRange::new(4, 1, -1).unwrap();
        assert!(range.is_descending());
    }

    #[rstest]
    fn test_degenerate_step_rejected() {
        assert_eq!(
            GRange::new(0, 4, 0).unwrap_err(),
            ConfigurationError::DegenerateStep
        );
        assert_eq!(
            GRange::unbounded(1.0, f64::NAN).unwrap_err(),
            ConfigurationError::DegenerateStep
        );
    }

    #[rstest]
    fn test_builder_missing_fields() {
        assert_eq!(
            GRange::<i32>::builder().build().unwrap_err(),
            ConfigurationError::MissingStep
        );
        assert_eq!(
            GRange::<i32>::builder().step(1).build().unwrap_err(),
            ConfigurationError::MissingStart
        );
    }

    #[rstest]
    fn test_iterate_exclusive_stop() {
        let range = GRange::new(0, 4, 1).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_iterator_is_fused() {
        let range = GRange::new(0, 2, 1).unwrap();
        let mut iterator = range.iter();
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_size_hint_exact_for_integers() {
        let range = GRange::new(0, 10, 3).unwrap();
        assert_eq!(range.iter().size_hint(), (4, Some(4)));

        let unbounded = GRange::unbounded(0, 1).unwrap();
        assert_eq!(unbounded.iter().size_hint(), (0, None));
    }

    #[rstest]
    fn test_for_loop_over_reference() {
        let range = GRange::new(0, 3, 1).unwrap();
        let mut seen = Vec::new();
        for value in &range {
            seen.push(value);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[rstest]
    fn test_equality_ignores_cached_length() {
        let left = GRange::new(0, 4, 1).unwrap();
        let right = GRange::new(0, 4, 1).unwrap();
        let _ = left.len();
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_is_empty() {
        assert!(GRange::new(5, 5, 1).unwrap().is_empty());
        assert!(GRange::new(1, 4, -1).unwrap().is_empty());
        assert!(!GRange::new(0, 1, 1).unwrap().is_empty());
        assert!(!GRange::unbounded(0, 1).unwrap().is_empty());
    }

    #[rstest]
    fn test_construction_at_type_extremes() {
        // The direction probe must not perform out-of-range arithmetic.
        let high = GRange::new(120i8, 127, 10).unwrap();
        assert!(!high.is_descending());

        let low = GRange::new(-120i8, -128, -10).unwrap();
        assert!(low.is_descending());
    }

    #[rstest]
    fn test_iteration_exhausts_at_type_extremes() {
        let high = GRange::new(120i8, 127, 10).unwrap();
        assert_eq!(high.iter().collect::<Vec<_>>(), vec![120]);
        assert_eq!(high.len(), Ok(1));

        let wide = GRange::new(0u8, 255, 100).unwrap();
        assert_eq!(wide.iter().collect::<Vec<_>>(), vec![0, 100, 200]);
        assert_eq!(wide.len(), Ok(3));

        let low = GRange::new(-120i8, -128, -10).unwrap();
        assert_eq!(low.iter().collect::<Vec<_>>(), vec![-120]);
        assert_eq!(low.len(), Ok(1));
    }

    #[rstest]
    fn test_membership_scan_stops_at_type_extreme() {
        let naturals = GRange::unbounded(100i8, 10).unwrap();
        assert!(naturals.contains(&120));
        assert!(!naturals.contains(&127));
    }

    #[rstest]
    fn test_float_range() {
        let range = GRange::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(range.len(), Ok(4));
        assert!(range.contains(&0.5));
        assert!(!range.contains(&1.0));
    }
}
