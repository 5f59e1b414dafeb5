//! The [`times`](self) module contains the call counter every registered stub
//! uses to decide whether it still accepts calls and whether it was satisfied.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Number of calls a stub received, together with the number it expects.
#[derive(Default, Debug, Clone)]
pub struct Times {
    count: usize,
    range: TimesRange,
}

impl Times {
    /// Create a new [`Times`] instance from the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: 0,
            range: range.into(),
        }
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Expected number of calls.
    #[must_use]
    pub fn range(&self) -> &TimesRange {
        &self.range
    }

    /// Increment the call count and return the previous value.
    pub fn increment(&mut self) -> usize {
        let prev = self.count;
        self.count = self.count.saturating_add(1);

        prev
    }

    /// Return `true` if lower bound of the range is fulfilled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        match &self.range.lower {
            Bound::Unbounded => true,
            Bound::Included(x) => *x <= self.count,
            Bound::Excluded(x) => *x < self.count,
        }
    }

    /// Return `true` if upper bound of the range is reached, so no further
    /// call is accepted.
    #[must_use]
    pub fn is_done(&self) -> bool {
        match &self.range.upper {
            Bound::Unbounded => false,
            Bound::Included(x) => self.count >= *x,
            Bound::Excluded(x) => self.count + 1 >= *x,
        }
    }
}

/// Defines the range of expected calls with a lower and a upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimesRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl Default for TimesRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for TimesRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let lower = match self.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x + 1,
        };
        let upper = match self.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        };

        match (lower, upper) {
            (0, None) => write!(f, "any number of times"),
            (_, Some(0)) => write!(f, "never"),
            (x, Some(y)) if x == y => write!(f, "exactly {}", plural(x)),
            (0, Some(y)) => write!(f, "at most {}", plural(y)),
            (x, None) => write!(f, "at least {}", plural(x)),
            (x, Some(y)) => write!(f, "between {x} and {}", plural(y)),
        }
    }
}

fn plural(n: usize) -> String {
    if n == 1 {
        "one time".into()
    } else {
        format!("{n} times")
    }
}
