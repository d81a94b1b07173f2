//! Two-element pairs, the element type of key/value streams.

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair of two values.
///
/// Streams of `Pair<K, V>` get the key/value operators such as
/// [`map_key`](crate::Stream::map_key) and [`to_map`](crate::Stream::to_map).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Construct a pair.
    pub const fn of(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Unpack both components.
    pub fn get(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Borrow both components.
    pub const fn as_ref(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }
}

/// Shorthand for [`Pair::of`].
pub const fn pair_of<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::of(first, second)
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(p: Pair<A, B>) -> Self {
        (p.first, p.second)
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(`{}`, `{}`)", self.first, self.second)
    }
}
