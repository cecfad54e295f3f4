//! Matrix storage and the basic operations built on it.
//!
//! [`Matrix`] owns a contiguous row-major buffer; [`MatrixView`] borrows a
//! window of one. The brute-force product here is the correctness baseline
//! the Strassen engine is checked against, and the elementwise add/subtract
//! are the helpers it combines partial products with.

use std::fmt::Debug;

use num_traits::{Num, NumAssign, WrappingAdd, WrappingMul, WrappingSub};

pub mod dense;
pub mod elementwise;
pub mod naive_ikj;
pub mod view;

pub use dense::Matrix;
pub use view::MatrixView;


/// Numeric element type: every primitive integer, `f32` and `f64`.
pub trait Element: Copy + Debug + Num + NumAssign {}

impl<T: Copy + Debug + Num + NumAssign> Element for T {}

/// Arithmetic Strassen's recursion runs in.
///
/// Operand sums like `a + d` can leave the range of a fixed-width integer
/// even when every entry of the true product fits, so integers wrap here.
/// The recursion is a ring identity, which makes the wrapped result exact
/// whenever the true product is representable. Floats use plain arithmetic.
pub trait RingElement: Element {
    /// Addition that never panics on overflow.
    fn ring_add(self, rhs: Self) -> Self;
    /// Subtraction that never panics on overflow.
    fn ring_sub(self, rhs: Self) -> Self;
    /// Multiplication that never panics on overflow.
    fn ring_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_ring_wrapping {
    ($($t:ty),*) => {$(
        impl RingElement for $t {
            #[inline]
            fn ring_add(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }
            #[inline]
            fn ring_sub(self, rhs: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &rhs)
            }
            #[inline]
            fn ring_mul(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
        }
    )*};
}

macro_rules! impl_ring_float {
    ($($t:ty),*) => {$(
        impl RingElement for $t {
            #[inline]
            fn ring_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn ring_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn ring_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    )*};
}

impl_ring_wrapping!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_ring_float!(f32, f64);
