//! # Edge weights
//!
//! Every algorithm in this crate is generic over the numeric type carried by
//! an edge. The [`Weight`] trait collects what they need from it: a zero to
//! start accumulating from, a one for unweighted edges, addition for path
//! lengths (saturating for integers, see [`Weight::saturating_add`]), subtraction for the reduced costs of Edmonds' contraction, and an
//! ordering.
//!
//! Floating point weights are only partially ordered. [`Weight::weight_cmp`]
//! treats incomparable pairs (anything involving `NaN`) as equal, which keeps
//! the frontier and the edge sorts total without panicking.
//!
//! Implementations are provided for all primitive integer and float types.

use duplicate::duplicate;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Sub},
};

pub trait Weight:
    Copy + PartialOrd + Debug + Display + Add<Output = Self> + Sub<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    /// Lossy conversion used by geometric heuristics.
    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;

    /// Sum used for search distances. Integers clamp at their bounds instead
    /// of overflowing; floats add normally.
    fn saturating_add(self, other: Self) -> Self;

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    fn weight_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Sums weights starting from [`Weight::zero`].
pub fn sum_weights<W: Weight>(weights: impl IntoIterator<Item = W>) -> W {
    weights.into_iter().fold(W::zero(), |acc, w| acc + w)
}

duplicate! {
    [types zero_val one_val add_body;
        [f32] [0.0] [1.] [self + other];
        [f64] [0.0] [1.] [self + other];
        [i8] [0] [1] [self.saturating_add(other)];
        [i16] [0] [1] [self.saturating_add(other)];
        [i32] [0] [1] [self.saturating_add(other)];
        [i64] [0] [1] [self.saturating_add(other)];
        [i128] [0] [1] [self.saturating_add(other)];
        [isize] [0] [1] [self.saturating_add(other)];
        [u8] [0] [1] [self.saturating_add(other)];
        [u16] [0] [1] [self.saturating_add(other)];
        [u32] [0] [1] [self.saturating_add(other)];
        [u64] [0] [1] [self.saturating_add(other)];
        [u128] [0] [1] [self.saturating_add(other)];
        [usize] [0] [1] [self.saturating_add(other)];
        ]

    impl Weight for types {
        fn zero() -> Self {
            zero_val
        }

        fn one() -> Self {
            one_val
        }

        fn to_f64(self) -> f64 {
            self as f64
        }

        fn from_f64(value: f64) -> Self {
            value as types
        }

        fn saturating_add(self, other: Self) -> Self {
            add_body
        }
    }
}
