//! The element capability trait for generalized ranges.
//!
//! [`RangeItem`] names the minimal contract a type must satisfy to be ranged
//! over: ordering plus addition with a step type. On top of that contract it
//! exposes optional hooks: algebraic fast paths for length and membership
//! (defaulting to `None`, meaning "unsupported for this type", in which case
//! [`GRange`](super::GRange) falls back to materializing the lazy sequence)
//! and overflow-aware stepping for types whose arithmetic has edges.
//!
//! Primitive integers and floats come with fast paths built in. User types
//! only need an empty impl:
//!
//! ```rust
//! use std::ops::Add;
//! use toolshed::range::{GRange, RangeItem};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
//! struct Day(i64);
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Days(i64);
//!
//! impl Add<Days> for Day {
//!     type Output = Day;
//!     fn add(self, other: Days) -> Day {
//!         Day(self.0 + other.0)
//!     }
//! }
//!
//! // No fast paths: length and membership fall back to iteration.
//! impl RangeItem<Days> for Day {}
//!
//! let range = GRange::new(Day(1), Day(8), Days(2)).unwrap();
//! assert_eq!(range.len(), Ok(4));
//! ```

use std::cmp::Ordering;
use std::ops::Add;

/// An element of a generalized range.
///
/// Requires ordering and addition with the step type. The provided methods
/// are optional refinements: [`steps_between`](Self::steps_between) and
/// [`on_lattice`](Self::on_lattice) returning `None` makes
/// [`GRange`](super::GRange) fall back to full iteration, so an empty impl
/// is always correct (if potentially slow). Types whose addition can
/// overflow should also override [`checked_step`](Self::checked_step).
///
/// # Type Parameters
///
/// * `Step` - The increment type; defaults to `Self` (integers step by
///   integers, but dates step by durations)
pub trait RangeItem<Step = Self>: Clone + PartialOrd + Add<Step, Output = Self>
where
    Step: Clone,
{
    /// Fast-path element count of the range `[start, stop)` stepped by
    /// `step`, honoring exclusive-stop semantics in either direction.
    ///
    /// Returns `None` when the arithmetic is unsupported for this type,
    /// in which case the caller counts by iteration instead.
    fn steps_between(_start: &Self, _stop: &Self, _step: &Step) -> Option<usize> {
        None
    }

    /// Fast-path lattice membership: whether `value` is reachable from
    /// `start` by a whole number of `step` increments.
    ///
    /// Callers are expected to have bounds-checked `value` already; this
    /// only answers the lattice question. Returns `None` when the check is
    /// unsupported for this type, in which case the caller scans by
    /// iteration instead.
    fn on_lattice(_start: &Self, _value: &Self, _step: &Step) -> Option<bool> {
        None
    }

    /// The element one `step` past `current`, or `None` when that element
    /// is not representable.
    ///
    /// Iteration treats `None` as exhaustion, so a sequence running up
    /// against the type's extremes ends cleanly instead of wrapping or
    /// panicking. The default performs the addition unchecked; types whose
    /// `Add` can overflow should override it (the primitive integers do).
    fn checked_step(current: &Self, step: &Step) -> Option<Self> {
        Some(current.clone() + step.clone())
    }

    /// How `start + step` would order against `start`, answered from the
    /// step alone, without performing the addition.
    ///
    /// Lets a range starting at the type's extremes derive its direction
    /// even when the first addition is unrepresentable. Returns `None` when
    /// the direction cannot be read off the step, in which case the caller
    /// probes by stepping once from `start`.
    fn step_direction(_step: &Step) -> Option<Ordering> {
        None
    }
}

macro_rules! impl_range_item_signed {
    ($($int:ty),* $(,)?) => {$(
        impl RangeItem for $int {
            fn steps_between(start: &Self, stop: &Self, step: &Self) -> Option<usize> {
                if *step == 0 {
                    return None;
                }
                let (span, magnitude) = if *step < 0 {
                    (start.checked_sub(*stop)?, step.checked_neg()?)
                } else {
                    (stop.checked_sub(*start)?, *step)
                };
                if span <= 0 {
                    return Some(0);
                }
                usize::try_from((span - 1) / magnitude + 1).ok()
            }

            fn on_lattice(start: &Self, value: &Self, step: &Self) -> Option<bool> {
                if *step == 0 {
                    return None;
                }
                value.checked_sub(*start).map(|offset| offset % *step == 0)
            }

            fn checked_step(current: &Self, step: &Self) -> Option<Self> {
                current.checked_add(*step)
            }

            fn step_direction(step: &Self) -> Option<Ordering> {
                Some(step.cmp(&0))
            }
        }
    )*};
}

macro_rules! impl_range_item_unsigned {
    ($($int:ty),* $(,)?) => {$(
        impl RangeItem for $int {
            fn steps_between(start: &Self, stop: &Self, step: &Self) -> Option<usize> {
                if *step == 0 {
                    return None;
                }
                if stop <= start {
                    return Some(0);
                }
                let span = stop - start;
                usize::try_from((span - 1) / *step + 1).ok()
            }

            fn on_lattice(start: &Self, value: &Self, step: &Self) -> Option<bool> {
                if *step == 0 {
                    return None;
                }
                value.checked_sub(*start).map(|offset| offset % *step == 0)
            }

            fn checked_step(current: &Self, step: &Self) -> Option<Self> {
                current.checked_add(*step)
            }

            fn step_direction(step: &Self) -> Option<Ordering> {
                Some(if *step == 0 {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                })
            }
        }
    )*};
}

macro_rules! impl_range_item_float {
    ($($float:ty),* $(,)?) => {$(
        impl RangeItem for $float {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn steps_between(start: &Self, stop: &Self, step: &Self) -> Option<usize> {
                if *step == 0.0 || !step.is_finite() {
                    return None;
                }
                let span = if *step < 0.0 { start - stop } else { stop - start };
                if !span.is_finite() {
                    return None;
                }
                if span <= 0.0 {
                    return Some(0);
                }
                Some((span / step.abs()).ceil() as usize)
            }

            // Float modulo is too imprecise for an exact lattice answer;
            // membership scans by iteration instead. Float addition
            // saturates rather than panicking, so the default
            // `checked_step` stands.

            fn step_direction(step: &Self) -> Option<Ordering> {
                step.partial_cmp(&0.0)
            }
        }
    )*};
}

impl_range_item_signed!(i8, i16, i32, i64, i128, isize);
impl_range_item_unsigned!(u8, u16, u32, u64, u128, usize);
impl_range_item_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_between_ascending() {
        assert_eq!(i32::steps_between(&0, &4, &1), Some(4));
        assert_eq!(i32::steps_between(&0, &10, &3), Some(4));
        assert_eq!(i32::steps_between(&0, &9, &3), Some(3));
    }

    #[test]
    fn test_steps_between_descending() {
        assert_eq!(i32::steps_between(&4, &1, &-1), Some(3));
        assert_eq!(i32::steps_between(&10, &0, &-3), Some(4));
    }

    #[test]
    fn test_steps_between_empty_span() {
        assert_eq!(i32::steps_between(&5, &5, &1), Some(0));
        assert_eq!(i32::steps_between(&5, &0, &1), Some(0));
        assert_eq!(i32::steps_between(&0, &5, &-1), Some(0));
        assert_eq!(u8::steps_between(&5, &3, &1), Some(0));
    }

    #[test]
    fn test_steps_between_zero_step_unsupported() {
        assert_eq!(i32::steps_between(&0, &4, &0), None);
        assert_eq!(u32::steps_between(&0, &4, &0), None);
    }

    #[test]
    fn test_on_lattice() {
        assert_eq!(i32::on_lattice(&0, &4, &2), Some(true));
        assert_eq!(i32::on_lattice(&0, &3, &2), Some(false));
        assert_eq!(i32::on_lattice(&1, &7, &3), Some(true));
        assert_eq!(i32::on_lattice(&4, &2, &-1), Some(true));
    }

    #[test]
    fn test_float_steps_between() {
        assert_eq!(f64::steps_between(&0.0, &1.0, &0.25), Some(4));
        assert_eq!(f64::steps_between(&0.0, &1.1, &0.25), Some(5));
        assert_eq!(f64::steps_between(&1.0, &0.0, &-0.5), Some(2));
        assert_eq!(f64::steps_between(&0.0, &1.0, &0.0), None);
    }

    #[test]
    fn test_float_lattice_unsupported() {
        assert_eq!(f64::on_lattice(&0.0, &0.5, &0.25), None);
    }

    #[test]
    fn test_checked_step_exhausts_at_extremes() {
        assert_eq!(i8::checked_step(&120, &10), None);
        assert_eq!(i8::checked_step(&-120, &-10), None);
        assert_eq!(u8::checked_step(&200, &100), None);
        assert_eq!(i8::checked_step(&100, &10), Some(110));
    }

    #[test]
    fn test_step_direction() {
        assert_eq!(i32::step_direction(&3), Some(Ordering::Greater));
        assert_eq!(i32::step_direction(&-3), Some(Ordering::Less));
        assert_eq!(i32::step_direction(&0), Some(Ordering::Equal));
        assert_eq!(u8::step_direction(&1), Some(Ordering::Greater));
        assert_eq!(u8::step_direction(&0), Some(Ordering::Equal));
        assert_eq!(f64::step_direction(&-0.5), Some(Ordering::Less));
        assert_eq!(f64::step_direction(&f64::NAN), None);
    }
}
