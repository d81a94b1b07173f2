//! Key/value operators for pair-streams.
//!
//! These are thin adapters over the generic operators: each one unpacks the
//! [`Pair`], calls the two-argument function, and repacks the result. There is
//! no pair-specific pipeline machinery.
//!
//! ## Example
//! ```
//! use rillet::{Pair, Stream};
//!
//! let out = Stream::from_vec(vec![Pair::of("a", 1), Pair::of("b", 5), Pair::of("c", 8)])
//!     .map_value(|_k, v| v * 2)
//!     .keep_pair(|_k, v| *v > 5)
//!     .to_vec();
//! assert_eq!(out, vec![Pair::of("b", 10), Pair::of("c", 16)]);
//! ```

use crate::error::StreamError;
use crate::opt::Opt;
use crate::pair::Pair;
use crate::stream::Stream;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

impl<'a, K: 'a, V: 'a> Stream<'a, Pair<K, V>> {
    /// Transform both halves of each pair.
    pub fn map_pair<K2, V2, F>(self, mut f: F) -> Stream<'a, Pair<K2, V2>>
    where
        K2: 'a,
        V2: 'a,
        F: FnMut(K, V) -> (K2, V2) + 'a,
    {
        self.map(move |p| {
            let (k, v) = p.get();
            Pair::from(f(k, v))
        })
    }

    /// Replace each key with `f(key, &value)`.
    pub fn map_key<K2, F>(self, mut f: F) -> Stream<'a, Pair<K2, V>>
    where
        K2: 'a,
        F: FnMut(K, &V) -> K2 + 'a,
    {
        self.map(move |p| {
            let (k, v) = p.get();
            let k2 = f(k, &v);
            Pair::of(k2, v)
        })
    }

    /// Replace each value with `f(&key, value)`.
    pub fn map_value<V2, F>(self, mut f: F) -> Stream<'a, Pair<K, V2>>
    where
        V2: 'a,
        F: FnMut(&K, V) -> V2 + 'a,
    {
        self.map(move |p| {
            let (k, v) = p.get();
            let v2 = f(&k, v);
            Pair::of(k, v2)
        })
    }

    /// Keep only the pairs for which `pred(&key, &value)` is true.
    pub fn keep_pair<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&K, &V) -> bool + 'a,
    {
        self.keep(move |p| pred(&p.first, &p.second))
    }

    /// Drop the pairs for which `pred(&key, &value)` is true.
    pub fn remove_pair<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&K, &V) -> bool + 'a,
    {
        self.remove(move |p| pred(&p.first, &p.second))
    }

    /// Observe each pair as it passes through.
    pub fn peek_pair<F>(self, mut f: F) -> Self
    where
        F: FnMut(&K, &V) + 'a,
    {
        self.peek(move |p| f(&p.first, &p.second))
    }

    /// Call `f(key, value)` on every pair.
    pub fn each_pair<F>(self, mut f: F)
    where
        F: FnMut(K, V),
    {
        self.each(|p| {
            let (k, v) = p.get();
            f(k, v);
        });
    }

    /// Fold every pair into `seed` with `combine(acc, key, value)`.
    pub fn reduce_pair<A, F>(self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, K, V) -> A,
    {
        self.reduce(seed, |acc, p| {
            let (k, v) = p.get();
            combine(acc, k, v)
        })
    }

    /// The first pair matching `pred(&key, &value)`.
    pub fn find_pair<P>(self, mut pred: P) -> Opt<Pair<K, V>>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.find(|p| pred(&p.first, &p.second))
    }

    /// Whether any pair matches; stops at the first that does.
    pub fn any_match_pair<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.any_match(|p| pred(&p.first, &p.second))
    }

    /// Whether every pair matches; stops at the first that doesn't.
    pub fn all_match_pair<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.all_match(|p| pred(&p.first, &p.second))
    }
}

impl<'a, K, V> Stream<'a, Pair<K, V>>
where
    K: Eq + Hash + Debug + 'a,
    V: Debug + 'a,
{
    /// Gather the pairs into a map.
    ///
    /// Traversal stops at the first duplicate key, which is reported as
    /// [`StreamError::DuplicateKey`] naming the key and both values. Use
    /// [`to_map_merge`](Self::to_map_merge) when collisions are expected.
    ///
    /// ```
    /// use rillet::{Pair, Stream, StreamError};
    ///
    /// let dup = Stream::from_vec(vec![Pair::of("a", 1), Pair::of("a", 2)]).to_map();
    /// assert!(matches!(dup, Err(StreamError::DuplicateKey { .. })));
    /// ```
    pub fn to_map(self) -> Result<HashMap<K, V>, StreamError> {
        let mut m = HashMap::new();
        let mut collision = None;
        self.each_until(|p| {
            let (k, v) = p.get();
            match m.entry(k) {
                Entry::Vacant(slot) => {
                    slot.insert(v);
                    true
                }
                Entry::Occupied(slot) => {
                    let err = StreamError::duplicate_key(slot.key(), slot.get(), &v);
                    tracing::debug!(error = %err, "to_map: duplicate key");
                    collision = Some(err);
                    false
                }
            }
        });
        match collision {
            Some(err) => Err(err),
            None => Ok(m),
        }
    }
}

impl<'a, K, V> Stream<'a, Pair<K, V>>
where
    K: Eq + Hash + 'a,
    V: 'a,
{
    /// Gather the pairs into a map, resolving duplicate keys with
    /// `merge(&key, existing, incoming)`.
    pub fn to_map_merge<F>(self, mut merge: F) -> HashMap<K, V>
    where
        F: FnMut(&K, V, V) -> V,
    {
        let mut m: HashMap<K, V> = HashMap::new();
        self.each(|p| {
            let (k, v) = p.get();
            match m.remove_entry(&k) {
                Some((key, existing)) => {
                    let merged = merge(&key, existing, v);
                    m.insert(key, merged);
                }
                None => {
                    m.insert(k, v);
                }
            }
        });
        m
    }
}
