//! Optional values.
//!
//! [`Opt<T>`] holds zero or one value. It is the "no value" signal used
//! throughout the stream layer: generators return one to say they're done,
//! and [`find`](crate::Stream::find) returns one to say nothing matched.
//!
//! ## Example
//! ```
//! use rillet::Opt;
//! use std::collections::HashMap;
//!
//! let ages = HashMap::from([("ada", 36)]);
//!
//! let known = Opt::map_get(&ages, &"ada").map(|age| age + 1);
//! assert_eq!(known.or_else(0), 37);
//!
//! let unknown = Opt::map_get(&ages, &"bob");
//! assert!(unknown.is_empty());
//! assert_eq!(unknown.or_else_compute(|| 18), 18);
//! ```

use crate::error::StreamError;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container holding either nothing or exactly one value.
///
/// Immutable once constructed; every combinator consumes the receiver and
/// returns a new optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Opt<T>(Option<T>);

impl<T> Opt<T> {
    /// An optional that holds `value`.
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// An optional with no value.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Adapt a standard `Option`: `None` becomes empty.
    pub fn of_nullable(value: Option<T>) -> Self {
        Self(value)
    }

    /// Adapt a nullable reference, cloning the referent when present.
    pub fn of_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self(value.cloned())
    }

    /// Adapt a value/flag return: empty iff `ok` is false.
    ///
    /// ```
    /// use rillet::Opt;
    ///
    /// let parsed = "42".parse::<u32>();
    /// let opt = Opt::of_flag(parsed.clone().unwrap_or_default(), parsed.is_ok());
    /// assert_eq!(opt, Opt::of(42));
    /// ```
    pub fn of_flag(value: T, ok: bool) -> Self {
        if ok { Self(Some(value)) } else { Self(None) }
    }

    /// Look `key` up in `map`, cloning the value if it is there.
    pub fn map_get<K, S>(map: &HashMap<K, T, S>, key: &K) -> Self
    where
        K: Eq + Hash,
        S: BuildHasher,
        T: Clone,
    {
        Self(map.get(key).cloned())
    }

    /// The element at `index`, or empty when the index is out of bounds.
    pub fn slice_get(slice: &[T], index: usize) -> Self
    where
        T: Clone,
    {
        Self(slice.get(index).cloned())
    }

    /// Whether a value is present.
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the optional is empty.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Return the value.
    ///
    /// # Panics
    ///
    /// Panics with [`StreamError::UnexpectedEmpty`] if the optional is empty.
    /// Prefer [`or_else`](Self::or_else), [`if_present`](Self::if_present), or
    /// [`try_get`](Self::try_get) where emptiness is possible.
    pub fn get(self) -> T {
        match self.0 {
            Some(v) => v,
            None => panic!("{}", StreamError::unexpected_empty("Opt::get")),
        }
    }

    /// Return the value, or [`StreamError::UnexpectedEmpty`] if there is none.
    pub fn try_get(self) -> Result<T, StreamError> {
        self.0.ok_or(StreamError::unexpected_empty("Opt::try_get"))
    }

    /// Borrow the contents.
    pub const fn as_ref(&self) -> Opt<&T> {
        Opt(self.0.as_ref())
    }

    /// Call `f` with the value if present. Returns itself for chaining.
    pub fn if_present<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Some(v) = &self.0 {
            f(v);
        }
        self
    }

    /// Call `f` if the optional is empty. Returns itself for chaining.
    pub fn if_empty<F: FnOnce()>(self, f: F) -> Self {
        if self.0.is_none() {
            f();
        }
        self
    }

    /// The value, or `default` if empty.
    pub fn or_else(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// The value, or the result of `supplier` if empty.
    ///
    /// `supplier` runs only when the optional is empty, so expensive defaults
    /// are never computed needlessly.
    pub fn or_else_compute<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.0.unwrap_or_else(supplier)
    }

    /// Wrap `f(value)`, or stay empty.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        Opt(self.0.map(f))
    }

    /// As [`map`](Self::map), but `f` itself returns an optional.
    pub fn flat_map<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        match self.0 {
            Some(v) => f(v),
            None => Opt(None),
        }
    }

    /// A zero- or one-element list.
    pub fn to_list(self) -> Vec<T> {
        self.0.into_iter().collect()
    }

    /// Convert into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Opt<Opt<T>> {
    /// Collapse a nested optional; empty if either layer is.
    pub fn flatten(self) -> Opt<T> {
        self.0.unwrap_or(Opt(None))
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.0
    }
}
