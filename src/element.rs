use core::cmp::Ordering;
use core::fmt::Debug;

/// The numeric kind stored by a `DArray` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit signed integer
    Int32,
    /// Single-precision float
    Float32,
    /// Double-precision float
    Float64,
}

impl ElementKind {
    /// Width of one element in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            ElementKind::Int32 | ElementKind::Float32 => 4,
            ElementKind::Float64 => 8,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A value that can be stored in a `DArray`.
///
/// Implemented for `i32`, `f32` and `f64` only. Equality (`PartialEq`) drives
/// `find` and `remove_by_value`; `three_way` drives `sort` and `binary_search`.
pub trait Element: sealed::Sealed + Copy + PartialEq + Default + Debug {
    const KIND: ElementKind;

    /// Three-way comparison shared by sorting and binary search.
    fn three_way(&self, other: &Self) -> Ordering;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int32;

    fn three_way(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// NaN is unordered under `partial_cmp`; falling back to `total_cmp` for it
// keeps the comparator a total preorder while leaving -0.0 == 0.0.
macro_rules! float_element {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn three_way(&self, other: &Self) -> Ordering {
                self.partial_cmp(other)
                    .unwrap_or_else(|| self.total_cmp(other))
            }
        }
    };
}

float_element!(f32, ElementKind::Float32);
float_element!(f64, ElementKind::Float64);
