//! Ready-made predicates for [`keep`](crate::Stream::keep) and
//! [`remove`](crate::Stream::remove).
//!
//! ```
//! use rillet::{Stream, filters};
//!
//! let words = Stream::from_vec(vec!["ab", "", "c"])
//!     .remove(|s| filters::is_empty_str(s))
//!     .to_vec();
//! assert_eq!(words, vec!["ab", "c"]);
//! ```

use std::collections::HashMap;

pub fn is_empty_slice<T>(slice: &[T]) -> bool {
    slice.is_empty()
}

pub fn is_empty_str(s: &str) -> bool {
    s.is_empty()
}

pub fn is_empty_map<K, V, S>(map: &HashMap<K, V, S>) -> bool {
    map.is_empty()
}
