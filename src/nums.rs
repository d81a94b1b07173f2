//! Numeric helpers and the bounds contract used by [`stats`](crate::Stream::stats).

use std::fmt::Debug;
use std::ops::Add;

/// A primitive real number with known bounds.
///
/// `MIN` and `MAX` are the smallest and largest representable values; for
/// floats they are the infinities, so any finite sample replaces them.
/// `Default` must be the additive zero.
pub trait Number: Copy + PartialOrd + Add<Output = Self> + Default + Debug {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Lossy conversion used for averaging.
    fn to_f64(self) -> f64;

    /// Addition that wraps around at the type's bounds instead of
    /// overflowing. Plain `+` for floats.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_number_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const MIN: Self = <$t>::NEG_INFINITY;
                const MAX: Self = <$t>::INFINITY;

                #[allow(clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);

/// The lower of two values; `a` on ties.
pub fn min<N: PartialOrd>(a: N, b: N) -> N {
    if a <= b { a } else { b }
}

/// The higher of two values; `a` on ties.
pub fn max<N: PartialOrd>(a: N, b: N) -> N {
    if a >= b { a } else { b }
}

/// Return both values, lowest first.
pub fn order<N: PartialOrd>(a: N, b: N) -> (N, N) {
    if a < b { (a, b) } else { (b, a) }
}
