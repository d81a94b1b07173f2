//! The push-based source protocol and its concrete adapters.
//!
//! This module provides:
//! - [`Source`]: the contract every stream is built on. A source drives a
//!   callback over its values and stops the moment the callback returns
//!   `false`.
//! - One adapter per backing shape: [`ListIter`], [`SliceIter`],
//!   [`IndexedListIter`], [`MapIter`], [`GeneratorIter`], [`FnIter`],
//!   [`RangeIter`], and [`ConcatIter`].
//!
//! Sources are push-style rather than pull-style. A transform composes by
//! wrapping the callback it hands to its parent, and an early stop travels
//! back out as a single `false` through every wrapping layer. Nothing is
//! buffered between layers.
//!
//! Adapters are normally reached through the [`Stream`] constructors
//! (`Stream::from_vec`, `Stream::from_map`, ...); implement [`Source`]
//! directly and pass it to [`Stream::new`] to plug in a custom backing shape.

use crate::opt::Opt;
use crate::pair::Pair;
use crate::stream::Stream;
use std::collections::{HashMap, hash_map};
use std::iter::Enumerate;
use std::ops::Range;
use std::{slice, vec};

/// A one-shot producer of `T` values driven by a callback.
///
/// `iterate` calls `next` once per value, in the source's order. When `next`
/// returns `false` the source must stop immediately and never call `next`
/// again.
///
/// The return value reports how the traversal ended: `true` if the source ran
/// out of values, `false` if it stopped because `next` asked it to.
/// Wrapping sources must relay a `false` from their parent unchanged.
pub trait Source<T> {
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool;
}

/// A pre-materialized, ordered list.
pub struct ListIter<T> {
    vals: vec::IntoIter<T>,
}

impl<T> ListIter<T> {
    pub fn new(vals: Vec<T>) -> Self {
        Self {
            vals: vals.into_iter(),
        }
    }
}

impl<T> Source<T> for ListIter<T> {
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        self.vals.all(|v| next(v))
    }
}

/// A borrowed slice, cloning each element as it is pushed.
///
/// The slice itself stays with the caller, so the same backing data can seed
/// any number of streams.
pub struct SliceIter<'a, T> {
    vals: slice::Iter<'a, T>,
}

impl<'a, T> SliceIter<'a, T> {
    pub fn new(vals: &'a [T]) -> Self {
        Self { vals: vals.iter() }
    }
}

impl<T: Clone> Source<T> for SliceIter<'_, T> {
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        self.vals.all(|v| next(v.clone()))
    }
}

/// A list whose elements are paired with their zero-based position.
pub struct IndexedListIter<T> {
    vals: Enumerate<vec::IntoIter<T>>,
}

impl<T> IndexedListIter<T> {
    pub fn new(vals: Vec<T>) -> Self {
        Self {
            vals: vals.into_iter().enumerate(),
        }
    }
}

impl<T> Source<Pair<usize, T>> for IndexedListIter<T> {
    fn iterate(&mut self, next: &mut dyn FnMut(Pair<usize, T>) -> bool) -> bool {
        self.vals.all(|(i, v)| next(Pair::of(i, v)))
    }
}

/// The entries of a hash map, as key/value pairs.
///
/// Entry order is unspecified and may differ between two maps holding the
/// same entries.
pub struct MapIter<K, V> {
    vals: hash_map::IntoIter<K, V>,
}

impl<K, V> MapIter<K, V> {
    pub fn new<S>(vals: HashMap<K, V, S>) -> Self {
        Self {
            vals: vals.into_iter(),
        }
    }
}

impl<K, V> Source<Pair<K, V>> for MapIter<K, V> {
    fn iterate(&mut self, next: &mut dyn FnMut(Pair<K, V>) -> bool) -> bool {
        self.vals.all(|(k, v)| next(Pair::of(k, v)))
    }
}

/// A zero-argument generator, called until it returns an empty [`Opt`].
pub struct GeneratorIter<F> {
    generator: F,
}

impl<F> GeneratorIter<F> {
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<T, F> Source<T> for GeneratorIter<F>
where
    F: FnMut() -> Opt<T>,
{
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        loop {
            match (self.generator)().into_option() {
                Some(v) => {
                    if !next(v) {
                        return false;
                    }
                }
                None => return true,
            }
        }
    }
}

/// A closure that drives the callback itself.
///
/// The closure has the same contract as [`Source::iterate`]: it must stop once
/// the callback returns `false`, and report whether it ran to completion.
pub struct FnIter<F> {
    drive: F,
}

impl<F> FnIter<F> {
    pub fn new(drive: F) -> Self {
        Self { drive }
    }
}

impl<T, F> Source<T> for FnIter<F>
where
    F: FnMut(&mut dyn FnMut(T) -> bool) -> bool,
{
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        (self.drive)(next)
    }
}

/// Integers from `start` (inclusive) up to `end` (exclusive).
pub struct RangeIter<I> {
    range: Range<I>,
}

impl<I> RangeIter<I> {
    pub fn new(start: I, end: I) -> Self {
        Self { range: start..end }
    }
}

impl<I> Source<I> for RangeIter<I>
where
    Range<I>: Iterator<Item = I>,
{
    fn iterate(&mut self, next: &mut dyn FnMut(I) -> bool) -> bool {
        self.range.all(|v| next(v))
    }
}

/// Several streams, one after the other.
///
/// An early stop inside any stream ends the whole concatenation; later
/// streams are never driven.
pub struct ConcatIter<'a, T> {
    streams: vec::IntoIter<Stream<'a, T>>,
}

impl<'a, T> ConcatIter<'a, T> {
    pub fn new(streams: Vec<Stream<'a, T>>) -> Self {
        Self {
            streams: streams.into_iter(),
        }
    }
}

impl<'a, T: 'a> Source<T> for ConcatIter<'a, T> {
    fn iterate(&mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        let remaining = self.streams.len();
        for (index, stream) in self.streams.by_ref().enumerate() {
            tracing::trace!(index, remaining, "concat: driving next stream");
            if !stream.drive(next) {
                return false;
            }
        }
        true
    }
}
