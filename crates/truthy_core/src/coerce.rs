//! The `ToBoolean` coercion for Rust types.
//!
//! Each implementation decides which of its values belong to the falsy set:
//!
//! | Rust type | falsy values |
//! |---|---|
//! | `bool` | `false` |
//! | integers | `0` |
//! | `f32`, `f64` | `0.0`, `-0.0`, NaN |
//! | `str`, `String` | `""` |
//! | `()`, `Option<T>` | `()`, `None` (and whatever `T` considers falsy) |
//! | `BigInt`, `BigUint` | zero |
//! | [`NaN`](crate::NaN) | itself |
//! | `char`, slices, arrays, `Vec`, maps, sets | none |
//!
//! References and smart pointers are transparent: `&T`, `Box<T>`, `Rc<T>` and `Arc<T>` coerce like `T`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::NaN;

/// Conversion of a value to a boolean, following ECMAScript `ToBoolean`.
///
/// This is the bound accepted by [`is_truthy`](crate::is_truthy), [`is_falsy`](crate::is_falsy) and
/// [`is_nan`](crate::is_nan).
pub trait ToBoolean {
    /// The value in boolean context.
    fn to_boolean(&self) -> bool;

    /// Whether the value is the numeric not-a-number. Only numeric types override this.
    fn is_nan(&self) -> bool {
        false
    }
}

impl ToBoolean for bool {
    #[inline]
    fn to_boolean(&self) -> bool {
        *self
    }
}

macro_rules! impl_to_boolean_int {
    ($($t:ty),*) => {
        $(
            impl ToBoolean for $t {
                #[inline]
                fn to_boolean(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_to_boolean_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_to_boolean_float {
    ($($t:ty),*) => {
        $(
            impl ToBoolean for $t {
                #[inline]
                fn to_boolean(&self) -> bool {
                    // `-0.0 == 0.0`, so both zeros land here.
                    !(*self == 0.0 || <$t>::is_nan(*self))
                }

                #[inline]
                fn is_nan(&self) -> bool {
                    <$t>::is_nan(*self)
                }
            }
        )*
    };
}

impl_to_boolean_float!(f32, f64);

impl ToBoolean for char {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl ToBoolean for str {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl ToBoolean for String {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl ToBoolean for () {
    #[inline]
    fn to_boolean(&self) -> bool {
        false
    }
}

impl<T: ToBoolean> ToBoolean for Option<T> {
    #[inline]
    fn to_boolean(&self) -> bool {
        self.as_ref().is_some_and(T::to_boolean)
    }

    #[inline]
    fn is_nan(&self) -> bool {
        self.as_ref().is_some_and(T::is_nan)
    }
}

impl ToBoolean for BigInt {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_zero()
    }
}

impl ToBoolean for BigUint {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_zero()
    }
}

impl ToBoolean for NaN {
    #[inline]
    fn to_boolean(&self) -> bool {
        false
    }

    #[inline]
    fn is_nan(&self) -> bool {
        true
    }
}

// --- Transparent wrappers ----------------------------------------------------------------------

impl<T: ToBoolean + ?Sized> ToBoolean for &T {
    #[inline]
    fn to_boolean(&self) -> bool {
        (**self).to_boolean()
    }

    #[inline]
    fn is_nan(&self) -> bool {
        (**self).is_nan()
    }
}

macro_rules! impl_to_boolean_pointer {
    ($($p:ident),*) => {
        $(
            impl<T: ToBoolean + ?Sized> ToBoolean for $p<T> {
                #[inline]
                fn to_boolean(&self) -> bool {
                    (**self).to_boolean()
                }

                #[inline]
                fn is_nan(&self) -> bool {
                    (**self).is_nan()
                }
            }
        )*
    };
}

impl_to_boolean_pointer!(Box, Rc, Arc);

// --- Composites: truthy even when empty ----------------------------------------------------

impl<T> ToBoolean for [T] {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<T, const N: usize> ToBoolean for [T; N] {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<T> ToBoolean for Vec<T> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<T> ToBoolean for VecDeque<T> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<K, V, S> ToBoolean for HashMap<K, V, S> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<K, V> ToBoolean for BTreeMap<K, V> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<T, S> ToBoolean for HashSet<T, S> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

impl<T> ToBoolean for BTreeSet<T> {
    #[inline]
    fn to_boolean(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Scalars
    // ========================================

    #[test]
    fn test_integer_zero_is_falsy() {
        assert!(!0_i8.to_boolean());
        assert!(!0_u64.to_boolean());
        assert!(!0_usize.to_boolean());
        assert!(1_u8.to_boolean());
        assert!((-1_i128).to_boolean());
        assert!(i64::MIN.to_boolean());
    }

    #[test]
    fn test_float_zeros_and_nan_are_falsy() {
        assert!(!0.0_f64.to_boolean());
        assert!(!(-0.0_f64).to_boolean());
        assert!(!f64::NAN.to_boolean());
        assert!(!(-0.0_f32).to_boolean());
        assert!(!f32::NAN.to_boolean());
    }

    #[test]
    fn test_float_nonzero_is_truthy() {
        assert!(f64::MIN_POSITIVE.to_boolean());
        assert!(f64::INFINITY.to_boolean());
        assert!(f64::NEG_INFINITY.to_boolean());
        assert!((-1.5_f32).to_boolean());
    }

    #[test]
    fn test_only_floats_report_nan() {
        assert!(ToBoolean::is_nan(&f64::NAN));
        assert!(ToBoolean::is_nan(&f32::NAN));
        assert!(!ToBoolean::is_nan(&0_i32));
        assert!(!ToBoolean::is_nan(&false));
        assert!(!ToBoolean::is_nan("NaN"));
    }

    #[test]
    fn test_char_is_always_truthy() {
        assert!('\0'.to_boolean());
        assert!(' '.to_boolean());
    }

    #[test]
    fn test_whitespace_string_is_truthy() {
        assert!(" ".to_boolean());
        assert!(String::from("\t").to_boolean());
        assert!(!String::new().to_boolean());
    }

    #[test]
    fn test_big_integers() {
        assert!(!BigInt::zero().to_boolean());
        assert!(BigInt::from(-1).to_boolean());
        assert!(!BigUint::zero().to_boolean());
        assert!(BigUint::from(7_u32).to_boolean());
    }

    // ========================================
    // Absent values and wrappers
    // ========================================

    #[test]
    fn test_unit_and_none_are_falsy() {
        assert!(!().to_boolean());
        assert!(!None::<bool>.to_boolean());
    }

    #[test]
    fn test_some_delegates_to_inner_value() {
        assert!(Some(1).to_boolean());
        assert!(!Some(0).to_boolean());
        assert!(!Some("").to_boolean());
        assert!(ToBoolean::is_nan(&Some(f64::NAN)));
        assert!(!ToBoolean::is_nan(&None::<f64>));
    }

    #[test]
    fn test_pointers_are_transparent() {
        assert!(!Box::new(0).to_boolean());
        assert!(Rc::new("x").to_boolean());
        assert!(!Arc::<str>::from("").to_boolean());
        assert!(ToBoolean::is_nan(&Box::new(f64::NAN)));
        assert!(!(&&0.0_f64).to_boolean());
    }

    // ========================================
    // Composites
    // ========================================

    #[test]
    fn test_empty_collections_are_truthy() {
        assert!(Vec::<i32>::new().to_boolean());
        assert!(VecDeque::<i32>::new().to_boolean());
        assert!(HashMap::<String, i32>::new().to_boolean());
        assert!(BTreeMap::<String, i32>::new().to_boolean());
        assert!(HashSet::<i32>::new().to_boolean());
        assert!(BTreeSet::<i32>::new().to_boolean());
        assert!([0_u8; 0].to_boolean());
        assert!(<[i32]>::to_boolean(&[]));
    }

    #[test]
    fn test_collections_of_falsy_values_are_truthy() {
        assert!(vec![0, 0].to_boolean());
        assert!([false].to_boolean());
    }
}
