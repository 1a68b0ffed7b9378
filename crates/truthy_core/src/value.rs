//! A dynamically typed value.
//!
//! [`Value`] is the closed sum of everything a loosely typed caller can hand over: the two absent values,
//! booleans, IEEE numbers, big integers, strings, and the composite kinds. Its [`Display`](fmt::Display) writes
//! literal syntax (`undefined`, `-0`, `12n`, `"text"`, `[1, 2]`, `{ key: 1 }`, `new Map()`).

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use num_bigint::BigInt;
use num_traits::Zero;

use crate::NaN;
use crate::coerce::ToBoolean;
use crate::falsy::FalsyValue;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value `undefined`.
    #[default]
    Undefined,
    /// The absent value `null`.
    Null,
    Bool(bool),
    /// An IEEE 754 double, including `-0`, the infinities and NaN.
    Number(f64),
    BigInt(BigInt),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// A keyed collection whose keys are arbitrary values, in insertion order.
    Map(Vec<(Value, Value)>),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Array,
    Object,
    Map,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Map => "map",
        }
    }

    /// Whether values of this kind are containers.
    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object | ValueKind::Map)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// The `typeof` spelling for this value. `null` and every composite report `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self.kind() {
            ValueKind::Undefined => "undefined",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::String => "string",
            ValueKind::Null | ValueKind::Array | ValueKind::Object | ValueKind::Map => "object",
        }
    }

    /// Narrows a falsy value to the member of the falsy set it is.
    ///
    /// Returns `None` exactly when the value is truthy.
    ///
    /// ```rust
    /// use truthy_core::{FalsyValue, Value};
    ///
    /// assert_eq!(Value::from(-0.0).as_falsy(), Some(FalsyValue::NegativeZero));
    /// assert_eq!(Value::from("").as_falsy(), Some(FalsyValue::EmptyString));
    /// assert_eq!(Value::Array(vec![]).as_falsy(), None);
    /// ```
    pub fn as_falsy(&self) -> Option<FalsyValue> {
        match self {
            Value::Undefined => Some(FalsyValue::Undefined),
            Value::Null => Some(FalsyValue::Null),
            Value::Bool(false) => Some(FalsyValue::False),
            Value::Bool(true) => None,
            Value::Number(n) => FalsyValue::from_number(*n),
            Value::BigInt(n) if n.is_zero() => Some(FalsyValue::ZeroBigInt),
            Value::String(s) if s.is_empty() => Some(FalsyValue::EmptyString),
            Value::BigInt(_) | Value::String(_) | Value::Array(_) | Value::Object(_) | Value::Map(_) => None,
        }
    }

    /// Narrows to [`NaN`] when the value is the not-a-number.
    pub fn as_nan(&self) -> Option<NaN> {
        match self {
            Value::Number(n) if n.is_nan() => Some(NaN),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl ToBoolean for Value {
    fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.to_boolean(),
            Value::BigInt(n) => n.to_boolean(),
            Value::String(s) => s.to_boolean(),
            Value::Array(_) | Value::Object(_) | Value::Map(_) => true,
        }
    }

    fn is_nan(&self) -> bool {
        self.as_nan().is_some()
    }
}

// --- Conversions -------------------------------------------------------------------------------

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<NaN> for Value {
    fn from(nan: NaN) -> Self {
        Value::Number(nan.into())
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

/// `None` becomes `null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<FalsyValue> for Value {
    fn from(member: FalsyValue) -> Self {
        match member {
            FalsyValue::False => Value::Bool(false),
            FalsyValue::Zero => Value::Number(0.0),
            FalsyValue::NegativeZero => Value::Number(-0.0),
            FalsyValue::NaN => Value::from(NaN),
            FalsyValue::ZeroBigInt => Value::BigInt(BigInt::zero()),
            FalsyValue::EmptyString => Value::String(String::new()),
            FalsyValue::Null => Value::Null,
            FalsyValue::Undefined => Value::Undefined,
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

// --- Literal rendering ------------------------------------------------------------------------

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::String(s) => write_quoted(f, s),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(entries) if entries.is_empty() => f.write_str("{}"),
            Value::Object(entries) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if is_identifier(key) {
                        f.write_str(key)?;
                    } else {
                        write_quoted(f, key)?;
                    }
                    write!(f, ": {value}")?;
                }
                f.write_str(" }")
            }
            Value::Map(entries) if entries.is_empty() => f.write_str("new Map()"),
            Value::Map(entries) => {
                f.write_str("new Map([")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "[{key}, {value}]")?;
                }
                f.write_str("])")
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 && n.is_sign_negative() {
        f.write_str("-0")
    } else {
        write!(f, "{n}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Keys that can be written bare in an object literal.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(entries: &[(&str, Value)]) -> Value {
        Value::Object(entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect())
    }

    // ========================================
    // Classification
    // ========================================

    #[test]
    fn test_as_falsy_covers_every_member() {
        for member in FalsyValue::ALL {
            let value = Value::from(member);
            assert_eq!(value.as_falsy(), Some(member), "{value}");
            assert!(!value.to_boolean(), "{value}");
        }
    }

    #[test]
    fn test_truthy_values_have_no_falsy_member() {
        let values = [
            Value::Bool(true),
            Value::Number(-1.0),
            Value::BigInt(BigInt::from(-1)),
            Value::from(" "),
            Value::Array(vec![]),
            Value::Object(BTreeMap::new()),
            Value::Map(vec![]),
        ];
        for value in values {
            assert_eq!(value.as_falsy(), None, "{value}");
            assert!(value.to_boolean(), "{value}");
        }
    }

    #[test]
    fn test_composites_ignore_their_contents() {
        assert!(Value::Array(vec![Value::Null, Value::Number(0.0)]).to_boolean());
        assert!(object(&[("a", Value::Undefined)]).to_boolean());
        assert!(Value::Map(vec![(Value::Null, Value::Null)]).to_boolean());
    }

    #[test]
    fn test_as_nan() {
        assert!(Value::from(NaN).as_nan().is_some());
        assert!(Value::Number(1.0).as_nan().is_none());
        assert!(Value::from("NaN").as_nan().is_none());
        assert!(ToBoolean::is_nan(&Value::Number(f64::NAN)));
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::from(1).type_of(), "number");
        assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), "bigint");
        assert_eq!(Value::Map(vec![]).type_of(), "object");
        assert_eq!(Value::Map(vec![]).kind(), ValueKind::Map);
        assert!(ValueKind::Map.is_composite());
        assert!(!ValueKind::String.is_composite());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(Value::from(()), Value::Undefined);
        assert_eq!(Value::default(), Value::Undefined);
    }

    // ========================================
    // Rendering
    // ========================================

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(-0.0).to_string(), "-0");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::BigInt(BigInt::from(-12)).to_string(), "-12n");
    }

    #[test]
    fn test_display_escapes_strings() {
        assert_eq!(Value::from("").to_string(), r#""""#);
        assert_eq!(Value::from("a\"b\\c\n").to_string(), r#""a\"b\\c\n""#);
        assert_eq!(Value::from("\u{7}").to_string(), r#""\u0007""#);
    }

    #[test]
    fn test_display_composites() {
        let array: Value = [Value::from(1), Value::Null].into_iter().collect();
        assert_eq!(array.to_string(), "[1, null]");
        assert_eq!(Value::Object(BTreeMap::new()).to_string(), "{}");
        assert_eq!(
            object(&[("b", Value::from(2)), ("a key", Value::Bool(false))]).to_string(),
            r#"{ "a key": false, b: 2 }"#
        );
        assert_eq!(Value::Map(vec![]).to_string(), "new Map()");
        assert_eq!(
            Value::Map(vec![(Value::from("k"), Value::from(1))]).to_string(),
            r#"new Map([["k", 1]])"#
        );
    }
}
