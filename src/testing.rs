//! Helpers for testing code that builds and consumes streams.
//!
//! - **Assertions**: drive a stream and compare what it produced
//! - **Call counting**: check how many elements an operation actually visited
//! - **Test data builders**: assemble input vectors fluently
//!
//! # Quick Start
//!
//! ```
//! use rillet::Stream;
//! use rillet::testing::*;
//!
//! let counter = CallCounter::new();
//! let found = counter
//!     .track(Stream::from_vec(vec![1, 2, 3, 4, 5]))
//!     .find(|v| *v == 3);
//!
//! assert_eq!(found.get(), 3);
//! assert_eq!(counter.count(), 3);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_stream_equal`]: exact, order-dependent comparison
//! - [`assert_stream_unordered_equal`]: order-independent comparison
//! - [`assert_pairs_unordered_equal`]: pair-streams compared by key
//! - [`assert_all`]: every element matches a predicate
//!
//! # Test Data Builders
//!
//! ```
//! use rillet::testing::TestDataBuilder;
//!
//! let data = TestDataBuilder::<i32>::new()
//!     .add_range(1..=10)
//!     .add_repeated(0, 2)
//!     .build();
//! assert_eq!(data.len(), 12);
//! ```

pub mod assertions;
pub mod builders;
pub mod counter;

pub use assertions::*;
pub use builders::*;
pub use counter::*;
