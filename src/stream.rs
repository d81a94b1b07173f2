//! The [`Stream`] handle, its constructors, and the [`Streamable`] entry point.
//!
//! A stream owns exactly one [`Source`]. Transforms consume the stream and
//! return a new one wrapping it, and terminal operations consume it for good:
//! once a stream has been driven there is nothing left to call. To iterate the
//! same data twice, build a second stream over it (e.g. with
//! [`Stream::from_slice`]).
//!
//! ## Example
//! ```
//! use rillet::{Opt, Stream, stream_of};
//!
//! let all = Stream::concat(vec![
//!     stream_of(vec![1, 2, 3]),
//!     stream_of(Opt::of(4)),
//!     Stream::once(5),
//! ]);
//! assert_eq!(all.to_vec(), vec![1, 2, 3, 4, 5]);
//! ```

use crate::opt::Opt;
use crate::pair::Pair;
use crate::source::{
    ConcatIter, FnIter, GeneratorIter, IndexedListIter, ListIter, MapIter, RangeIter, SliceIter,
    Source,
};
use std::collections::HashMap;
use std::ops::Range;

/// A lazily driven, one-shot sequence of `T` values.
///
/// The lifetime `'a` bounds whatever the stream's source and operators
/// borrow, so closures may capture local state by reference.
#[must_use = "streams do nothing until a terminal operation drives them"]
pub struct Stream<'a, T> {
    pub(crate) src: Box<dyn Source<T> + 'a>,
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Wrap a source.
    pub fn new<S>(src: S) -> Self
    where
        S: Source<T> + 'a,
    {
        Self { src: Box::new(src) }
    }

    /// A stream over the elements of `data`, in order.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(ListIter::new(data))
    }

    /// A stream that clones the elements of a borrowed slice.
    pub fn from_slice(data: &'a [T]) -> Self
    where
        T: Clone,
    {
        Self::new(SliceIter::new(data))
    }

    /// A stream driven by `generator` until it returns an empty [`Opt`].
    ///
    /// ```
    /// use rillet::{Opt, Stream};
    ///
    /// let mut n = 0;
    /// let evens = Stream::from_generator(|| {
    ///     n += 2;
    ///     if n <= 6 { Opt::of(n) } else { Opt::empty() }
    /// });
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn from_generator<F>(generator: F) -> Self
    where
        F: FnMut() -> Opt<T> + 'a,
    {
        Self::new(GeneratorIter::new(generator))
    }

    /// A stream whose source is a closure that pushes values itself.
    ///
    /// `drive` receives the downstream callback. It must stop calling it once
    /// it returns `false`, and return `false` in that case; `true` otherwise.
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// let squares = Stream::from_fn(|next: &mut dyn FnMut(u32) -> bool| {
    ///     (1..=4).all(|i| next(i * i))
    /// });
    /// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
    /// ```
    pub fn from_fn<F>(drive: F) -> Self
    where
        F: FnMut(&mut dyn FnMut(T) -> bool) -> bool + 'a,
    {
        Self::new(FnIter::new(drive))
    }

    /// A stream with no elements.
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// A stream of exactly one element.
    pub fn once(value: T) -> Self {
        Self::from_vec(vec![value])
    }

    /// Each stream in `streams`, one after the other.
    pub fn concat(streams: Vec<Stream<'a, T>>) -> Self {
        Self::new(ConcatIter::new(streams))
    }

    /// Drive the source with `next`, reporting whether it ran to completion.
    pub(crate) fn drive(mut self, next: &mut dyn FnMut(T) -> bool) -> bool {
        self.src.iterate(next)
    }

    /// Drive the stream, letting `f` decide whether to continue.
    ///
    /// Returns `true` if every element was visited, `false` if `f` stopped
    /// the traversal early.
    pub fn each_until<F>(self, mut f: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        let completed = self.drive(&mut f);
        tracing::trace!(completed, "each_until: traversal finished");
        completed
    }

    /// Call `f` on every element.
    pub fn each<F>(self, mut f: F)
    where
        F: FnMut(T),
    {
        self.drive(&mut |v| {
            f(v);
            true
        });
    }

    /// Gather every element into a `Vec`, in order.
    pub fn to_vec(self) -> Vec<T> {
        let mut out = Vec::new();
        self.each(|v| out.push(v));
        out
    }

    /// Alias for [`to_vec`](Self::to_vec).
    pub fn collect(self) -> Vec<T> {
        self.to_vec()
    }
}

/// A stream over any iterable.
///
/// The iterable is collected into a `Vec<T>` up front and then streamed like
/// [`Stream::from_vec`].
impl<'a, T: 'a> FromIterator<T> for Stream<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: 'a> Stream<'a, Pair<usize, T>> {
    /// A stream of `(index, element)` pairs over `data`.
    pub fn from_indexed_vec(data: Vec<T>) -> Self {
        Self::new(IndexedListIter::new(data))
    }
}

impl<'a, K: 'a, V: 'a> Stream<'a, Pair<K, V>> {
    /// A stream of the entries of `map`, in unspecified order.
    pub fn from_map<S>(map: HashMap<K, V, S>) -> Self {
        Self::new(MapIter::new(map))
    }
}

impl<'a, I: 'a> Stream<'a, I>
where
    Range<I>: Iterator<Item = I>,
{
    /// Integers from `start` (inclusive) to `end` (exclusive).
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// assert_eq!(Stream::range(2u8, 5).to_vec(), vec![2, 3, 4]);
    /// assert!(Stream::range(5, 2).to_vec().is_empty());
    /// ```
    pub fn range(start: I, end: I) -> Self {
        Self::new(RangeIter::new(start, end))
    }
}

impl<T> Opt<T> {
    /// A stream of zero or one element.
    pub fn stream<'a>(self) -> Stream<'a, T>
    where
        T: 'a,
    {
        Stream::from_vec(self.to_list())
    }
}

/// Every shape that can be turned into a [`Stream`].
///
/// Each shape converts through `From`, so [`stream_of`] accepts a `Vec`, an
/// [`Opt`], an `Option`, or an existing stream directly. Generators need the
/// [`Streamable::generator`] constructor.
pub enum Streamable<'a, T> {
    List(Vec<T>),
    Opt(Opt<T>),
    Stream(Stream<'a, T>),
    Generator(Box<dyn FnMut() -> Opt<T> + 'a>),
}

impl<'a, T: 'a> Streamable<'a, T> {
    /// Wrap a generator closure.
    pub fn generator<F>(f: F) -> Self
    where
        F: FnMut() -> Opt<T> + 'a,
    {
        Self::Generator(Box::new(f))
    }

    /// Convert into a stream.
    pub fn into_stream(self) -> Stream<'a, T> {
        match self {
            Self::List(vals) => Stream::from_vec(vals),
            Self::Opt(opt) => opt.stream(),
            Self::Stream(st) => st,
            Self::Generator(generator) => Stream::from_generator(generator),
        }
    }
}

impl<T> From<Vec<T>> for Streamable<'_, T> {
    fn from(value: Vec<T>) -> Self {
        Self::List(value)
    }
}

impl<T> From<Opt<T>> for Streamable<'_, T> {
    fn from(value: Opt<T>) -> Self {
        Self::Opt(value)
    }
}

impl<T> From<Option<T>> for Streamable<'_, T> {
    fn from(value: Option<T>) -> Self {
        Self::Opt(Opt::of_nullable(value))
    }
}

impl<'a, T> From<Stream<'a, T>> for Streamable<'a, T> {
    fn from(value: Stream<'a, T>) -> Self {
        Self::Stream(value)
    }
}

/// Build a stream from any [`Streamable`] shape.
pub fn stream_of<'a, T, S>(s: S) -> Stream<'a, T>
where
    T: 'a,
    S: Into<Streamable<'a, T>>,
{
    s.into().into_stream()
}
