//! Summary statistics over numeric streams.

use crate::nums::{self, Number};
use crate::stream::Stream;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Count, total, bounds, and mean of a numeric stream.
///
/// `total` is accumulated in `N` itself and wraps around on integer overflow,
/// so it (and `average`) are only meaningful when the sum fits in `N`. For an empty stream `min` is `N::MAX`, `max` is `N::MIN`, and
/// `average` is `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryStats<N> {
    pub average: f64,
    pub size: usize,
    pub total: N,
    pub min: N,
    pub max: N,
}

impl<N: Number> Default for SummaryStats<N> {
    fn default() -> Self {
        Self {
            average: 0.0,
            size: 0,
            total: N::default(),
            min: N::MAX,
            max: N::MIN,
        }
    }
}

impl<N: Number> SummaryStats<N> {
    /// Fold one more value in. `average` is left untouched until
    /// [`finish`](Self::finish).
    pub fn add(&mut self, v: N) {
        self.size += 1;
        self.total = self.total.wrapping_add(v);
        self.min = nums::min(self.min, v);
        self.max = nums::max(self.max, v);
    }

    /// Compute `average`; stays `0.0` when nothing was added.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn finish(mut self) -> Self {
        if self.size > 0 {
            self.average = self.total.to_f64() / self.size as f64;
        }
        self
    }
}

impl<'a, N: Number + 'a> Stream<'a, N> {
    /// Size, total, min, max, and average in a single pass.
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// let s = Stream::from_vec(vec![1.0, 2.5, -10.0, 5.0]).stats();
    /// assert_eq!((s.size, s.total, s.min, s.max), (4, -1.5, -10.0, 5.0));
    /// assert_eq!(s.average, -0.375);
    /// ```
    pub fn stats(self) -> SummaryStats<N> {
        let mut stats = SummaryStats::default();
        self.each(|v| stats.add(v));
        stats.finish()
    }
}
