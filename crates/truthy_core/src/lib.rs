#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Truthy/falsy coercion predicates.
//!
//! This crate answers one question about a value: what does it become in a boolean context? The rules are the
//! ECMAScript [`ToBoolean`](https://tc39.es/ecma262/#sec-toboolean) rules, applied to Rust values through the
//! [`ToBoolean`] trait or to dynamic values through [`Value`].
//!
//! A value is **falsy** when it is one of:
//!
//! - `false`
//! - numeric zero (`0` and `-0`)
//! - not-a-number ([`NaN`])
//! - the zero big integer (`0n`)
//! - the empty string
//! - `null` or `undefined` (in Rust: [`Value::Null`], [`Value::Undefined`], `None` and `()`)
//!
//! Every other value is **truthy**, including empty arrays, objects and maps. Only the top level of a value is
//! inspected; elements of a composite are never looked at.
//!
//! ## Examples
//!
//! ```rust
//! use truthy_core::{is_falsy, is_nan, is_truthy, toggle, NaN};
//!
//! assert!(is_truthy(&1));
//! assert!(is_falsy(&-0.0_f64));
//! assert!(is_falsy(""));
//! assert!(is_truthy(&Vec::<i32>::new()));
//! assert!(is_nan(&NaN));
//! assert!(!toggle(true));
//!
//! let kept: Vec<i32> = vec![0, 1, 2].into_iter().filter(is_truthy).collect();
//! assert_eq!(kept, [1, 2]);
//! ```

mod coerce;
mod falsy;
#[cfg(feature = "json")]
mod json;
mod value;

pub use coerce::ToBoolean;
pub use falsy::FalsyValue;
pub use value::{Value, ValueKind};

/// The reserved value `NaN`.
///
/// `NaN` is both a value and a type. As a value it stands for the IEEE 754 not-a-number; as a type it is what
/// [`Value::as_nan`] narrows to. Like the number it represents, it is unequal to everything, itself included.
///
/// ```rust
/// use truthy_core::NaN;
///
/// assert!(f64::from(NaN).is_nan());
/// assert_ne!(NaN, NaN);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NaN;

impl NaN {
    /// The sentinel as an `f64`.
    pub const VALUE: f64 = f64::NAN;
}

impl PartialEq for NaN {
    fn eq(&self, _other: &NaN) -> bool {
        false
    }
}

impl PartialEq<f64> for NaN {
    fn eq(&self, _other: &f64) -> bool {
        false
    }
}

impl From<NaN> for f64 {
    fn from(_: NaN) -> f64 {
        f64::NAN
    }
}

impl From<NaN> for f32 {
    fn from(_: NaN) -> f32 {
        f32::NAN
    }
}

impl std::fmt::Display for NaN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NaN")
    }
}

/// Returns `true` if `value` is the reserved value [`NaN`], `false` otherwise.
///
/// Only numeric values can be `NaN`: a string, an absent value or a collection is never `NaN`. This matches
/// [`Number.isNaN`](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Number/isNaN),
/// not the coercing global `isNaN`.
///
/// ```rust
/// use truthy_core::{is_nan, NaN, Value};
///
/// assert!(is_nan(&f64::NAN));
/// assert!(is_nan(&NaN));
/// assert!(is_nan(&Value::from(0.0 / 0.0)));
/// assert!(!is_nan(&1.5));
/// assert!(!is_nan("NaN"));
/// ```
pub fn is_nan<T: ToBoolean + ?Sized>(value: &T) -> bool {
    value.is_nan()
}

/// Returns whether `value` is considered "truthy" in boolean contexts.
///
/// This is `ToBoolean(value)`: `false` for the falsy values listed in the [crate docs](crate), `true` for
/// everything else. It is the inverse of [`is_falsy`] and is handy as an iterator filter.
///
/// ```rust
/// use truthy_core::{is_truthy, Value};
///
/// assert!(is_truthy(&true));
/// assert!(is_truthy(&-1));
/// assert!(is_truthy(" "));
/// assert!(!is_truthy(&0.0));
/// assert!(!is_truthy(&None::<i32>));
/// assert!(is_truthy(&Value::Array(Vec::new())));
///
/// let words: Vec<&str> = vec!["hello", "", "world"].into_iter().filter(is_truthy).collect();
/// assert_eq!(words, ["hello", "world"]);
/// ```
pub fn is_truthy<T: ToBoolean + ?Sized>(value: &T) -> bool {
    value.to_boolean()
}

/// Returns whether `value` is considered "falsy" in boolean contexts.
///
/// This is the logical NOT of the value's boolean coercion, and the inverse of [`is_truthy`]. For a [`Value`],
/// [`Value::as_falsy`] additionally tells which falsy value it is.
///
/// ```rust
/// use truthy_core::{is_falsy, Value};
///
/// assert!(is_falsy(&false));
/// assert!(is_falsy(&0));
/// assert!(is_falsy(&f64::NAN));
/// assert!(is_falsy(""));
/// assert!(is_falsy(&Value::Null));
/// assert!(!is_falsy(&Value::Object(Default::default())));
/// ```
pub fn is_falsy<T: ToBoolean + ?Sized>(value: &T) -> bool {
    !value.to_boolean()
}

/// Returns the logical opposite of `value`, cycling it between `true` and `false`.
///
/// Shares its implementation with [`is_falsy`], but only accepts a `bool`.
///
/// ```rust
/// use truthy_core::toggle;
///
/// let mut open = false;
/// open = toggle(open);
/// assert!(open);
/// assert!(!toggle(open));
/// ```
pub fn toggle(value: bool) -> bool {
    is_falsy(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_sentinel_is_self_unequal() {
        let (a, b) = (NaN, NaN);
        assert!(a != b);
        assert!(NaN != f64::NAN);
        assert!(NaN::VALUE.is_nan());
        assert!(f32::from(NaN).is_nan());
    }

    #[test]
    fn test_nan_sentinel_is_falsy() {
        assert!(is_nan(&NaN));
        assert!(is_falsy(&NaN));
        assert!(!is_truthy(&NaN));
    }

    #[test]
    fn test_nan_display() {
        assert_eq!(NaN.to_string(), "NaN");
    }

    #[test]
    fn test_toggle_flips_booleans() {
        assert!(!toggle(true));
        assert!(toggle(false));
        assert!(toggle(toggle(true)));
    }

    #[test]
    fn test_toggle_agrees_with_is_falsy() {
        for b in [true, false] {
            assert_eq!(toggle(b), is_falsy(&b));
        }
    }

    #[test]
    fn test_is_nan_only_for_numbers() {
        assert!(is_nan(&f32::NAN));
        assert!(!is_nan(&f64::INFINITY));
        assert!(!is_nan(&0));
        assert!(!is_nan(""));
        assert!(!is_nan(&Value::Undefined));
        assert!(!is_nan(&Value::from("NaN")));
    }
}
