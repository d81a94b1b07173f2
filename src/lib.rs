//! # Rillet
//!
//! **Lazy, push-based streams** for Rust, together with the small value types
//! that flow through them: [`Opt`] (maybe a value), [`Res`] (a value or an
//! error), and [`Pair`] (a key and a value).
//!
//! ## Key Features
//!
//! - **Push-based evaluation** - a stream is a source that pushes values into a
//!   callback; nothing runs until a terminal operation drives it
//! - **Early termination** - `find`, `any_match`, `all_match`, and friends stop
//!   the source as soon as the answer is known
//! - **One-shot by construction** - terminal operations consume the stream, so
//!   re-driving a spent stream does not compile
//! - **Pair-streams** - key/value operators and map collection for
//!   `Stream<Pair<K, V>>`
//! - **Summary statistics** - size, total, min, max, and average in one pass
//!
//! ## Quick Start
//!
//! ```
//! use rillet::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let words = vec!["apple", "bob", "avocado", "cat", "axe"];
//!
//! let lengths = Stream::from_vec(words)
//!     .keep(|w| w.starts_with('a'))
//!     .key_by(|w| w.len())
//!     .to_map()?;
//!
//! assert_eq!(lengths[&5], "apple");
//! assert_eq!(lengths.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Stream
//!
//! A [`Stream<T>`] owns one [`Source`]. Build one from a `Vec`, a slice, a map,
//! a range, an [`Opt`], a generator closure, or several other streams
//! ([`Stream::concat`]); [`stream_of`] accepts any [`Streamable`] shape.
//!
//! ### Transformations
//!
//! Every stream-to-stream operator is an instance of
//! [`transform`](Stream::transform):
//! - [`map`](Stream::map) - transform each element
//! - [`keep`](Stream::keep) / [`remove`](Stream::remove) - filter in or out
//! - [`peek`](Stream::peek) - observe elements as they pass
//! - [`flat_map`](Stream::flat_map) - one element into zero or more
//! - [`key_by`](Stream::key_by) / [`to_pairs`](Stream::to_pairs) - into a pair-stream
//!
//! ### Terminal operations
//!
//! - [`each`](Stream::each), [`each_until`](Stream::each_until), [`to_vec`](Stream::to_vec)
//! - [`reduce`](Stream::reduce), [`reduce_first`](Stream::reduce_first), [`count`](Stream::count)
//! - [`find`](Stream::find), [`first`](Stream::first), [`any_match`](Stream::any_match),
//!   [`all_match`](Stream::all_match)
//! - [`join_string`](Stream::join_string), [`stats`](Stream::stats),
//!   [`collect_fail_fast`](Stream::collect_fail_fast)
//! - [`to_map`](Stream::to_map) / [`to_map_merge`](Stream::to_map_merge) on pair-streams
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`Opt`], [`Pair`], and
//!   [`SummaryStats`]
//!
//! ## Logging
//!
//! Traversal milestones are emitted as [`tracing`] events at `trace` level,
//! duplicate keys in [`to_map`](Stream::to_map) at `debug`, and panics
//! recovered by [`Res::try_map`] at `warn`. Install any subscriber to see them.

pub mod error;
pub mod filters;
pub mod helpers;
pub mod nums;
pub mod opt;
pub mod pair;
pub mod res;
pub mod source;
pub mod stream;
pub mod testing;

pub use error::StreamError;
pub use helpers::SummaryStats;
pub use nums::Number;
pub use opt::Opt;
pub use pair::{Pair, pair_of};
pub use res::Res;
pub use source::Source;
pub use stream::{Stream, Streamable, stream_of};
