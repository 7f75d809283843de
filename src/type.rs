use std::fmt::{Debug, Display};

use num_traits::{NumCast, PrimInt};

/// A trait for types that can be used for indexed coordinates.
///
/// Only integer types are supported: the Hilbert mapper works on the bits of each coordinate,
/// and the paged store widens every coordinate to `i64`. This trait is sealed so both of those
/// stay lossless.
pub trait IndexableNum:
    private::Sealed + PrimInt + NumCast + Debug + Display + Send + Sync + 'static
{
    /// The type index stored in the header of a paged tree
    const TYPE_INDEX: u8;

    /// Widen to `i64`. Lossless for every implementor.
    fn widen(self) -> i64;

    /// Midpoint of `self` and `other`, truncating toward zero, computed without overflow.
    fn midpoint(self, other: Self) -> Self;
}

macro_rules! impl_indexable_num {
    ($t:ty, $type_index:expr) => {
        impl IndexableNum for $t {
            const TYPE_INDEX: u8 = $type_index;

            #[inline]
            fn widen(self) -> i64 {
                self as i64
            }

            #[inline]
            fn midpoint(self, other: Self) -> Self {
                // The mean of two values always fits back into their type.
                ((self as i128 + other as i128) / 2) as $t
            }
        }
    };
}

impl_indexable_num!(i16, 3);
impl_indexable_num!(u16, 4);
impl_indexable_num!(i32, 5);
impl_indexable_num!(u32, 6);
impl_indexable_num!(i64, 9);

mod private {
    pub trait Sealed {}

    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
}
