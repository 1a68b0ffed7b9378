//! The closed set of falsy values.

use std::fmt;

use crate::coerce::ToBoolean;

/// A value that is considered false when encountered in a boolean context.
///
/// This enumerates the whole falsy set; any value not listed here is truthy. `-0` is kept apart from `0` and `NaN`
/// gets its own member, even though neither has a literal type of its own.
///
/// See <https://developer.mozilla.org/en-US/docs/Glossary/Falsy>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FalsyValue {
    /// `false`
    False,
    /// `0`
    Zero,
    /// `-0`
    NegativeZero,
    /// `NaN`
    NaN,
    /// `0n`
    ZeroBigInt,
    /// `""`
    EmptyString,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
}

impl FalsyValue {
    /// Every falsy value, in declaration order.
    pub const ALL: [FalsyValue; 8] = [
        FalsyValue::False,
        FalsyValue::Zero,
        FalsyValue::NegativeZero,
        FalsyValue::NaN,
        FalsyValue::ZeroBigInt,
        FalsyValue::EmptyString,
        FalsyValue::Null,
        FalsyValue::Undefined,
    ];

    /// A short, stable name for reports.
    pub fn name(self) -> &'static str {
        match self {
            FalsyValue::False => "false",
            FalsyValue::Zero => "zero",
            FalsyValue::NegativeZero => "negative zero",
            FalsyValue::NaN => "NaN",
            FalsyValue::ZeroBigInt => "zero bigint",
            FalsyValue::EmptyString => "empty string",
            FalsyValue::Null => "null",
            FalsyValue::Undefined => "undefined",
        }
    }

    /// The literal spelling of this value (`false`, `0`, `-0`, `NaN`, `0n`, `""`, `null`, `undefined`).
    pub fn literal(self) -> &'static str {
        match self {
            FalsyValue::False => "false",
            FalsyValue::Zero => "0",
            FalsyValue::NegativeZero => "-0",
            FalsyValue::NaN => "NaN",
            FalsyValue::ZeroBigInt => "0n",
            FalsyValue::EmptyString => "\"\"",
            FalsyValue::Null => "null",
            FalsyValue::Undefined => "undefined",
        }
    }

    /// Classifies a number, returning `None` when it is truthy.
    pub fn from_number(n: f64) -> Option<FalsyValue> {
        if n.is_nan() {
            Some(FalsyValue::NaN)
        } else if n == 0.0 {
            if n.is_sign_negative() {
                Some(FalsyValue::NegativeZero)
            } else {
                Some(FalsyValue::Zero)
            }
        } else {
            None
        }
    }
}

impl ToBoolean for FalsyValue {
    fn to_boolean(&self) -> bool {
        false
    }

    fn is_nan(&self) -> bool {
        *self == FalsyValue::NaN
    }
}

impl fmt::Display for FalsyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
