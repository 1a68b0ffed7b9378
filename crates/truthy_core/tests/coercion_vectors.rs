//! Boundary vectors for `is_truthy`, `is_falsy`, `is_nan` and `toggle`.
//!
//! Each vector is checked twice: once through plain Rust values and once through the dynamic [`Value`] model.

use std::collections::{BTreeMap, HashMap};

use num_bigint::BigInt;
use truthy_core::{FalsyValue, NaN, ToBoolean, Value, is_falsy, is_nan, is_truthy, toggle};

#[track_caller]
fn check<T: ToBoolean + ?Sized>(value: &T, truthy: bool) {
    assert_eq!(is_truthy(value), truthy);
    assert_eq!(is_falsy(value), !truthy);
}

#[test]
fn booleans() {
    check(&true, true);
    check(&false, false);
    check(&Value::Bool(true), true);
    check(&Value::Bool(false), false);
}

#[test]
fn numbers() {
    check(&1, true);
    check(&0, false);
    check(&-0.0_f64, false);
    check(&-1, true);
    check(&f64::NAN, false);
    check(&NaN, false);

    check(&Value::from(1), true);
    check(&Value::from(0), false);
    check(&Value::from(-0.0), false);
    check(&Value::from(-1), true);
    check(&Value::from(NaN), false);
}

#[test]
fn big_integers() {
    check(&BigInt::from(0), false);
    check(&BigInt::from(1), true);
    check(&BigInt::from(-1), true);

    check(&Value::BigInt(BigInt::from(0)), false);
    check(&Value::BigInt(BigInt::from(1)), true);
    check(&Value::BigInt(BigInt::from(-1)), true);
}

#[test]
fn strings() {
    check("", false);
    check("x", true);
    check(" ", true);
    check(&String::new(), false);

    check(&Value::from(""), false);
    check(&Value::from("x"), true);
    check(&Value::from(" "), true);
}

#[test]
fn absent_values() {
    check(&None::<i32>, false);
    check(&(), false);

    check(&Value::Null, false);
    check(&Value::Undefined, false);
}

#[test]
fn empty_composites() {
    check(&BTreeMap::<String, i32>::new(), true);
    check(&Vec::<i32>::new(), true);
    check(&HashMap::<String, i32>::new(), true);

    check(&Value::Object(BTreeMap::new()), true);
    check(&Value::Array(Vec::new()), true);
    check(&Value::Map(Vec::new()), true);
}

#[test]
fn filter_numbers() {
    let kept: Vec<i32> = vec![0, 1, 2].into_iter().filter(is_truthy).collect();
    assert_eq!(kept, [1, 2]);

    let values = vec![Value::from(0), Value::from(1), Value::from(2)];
    let kept: Vec<&Value> = values.iter().filter(|v| is_truthy(*v)).collect();
    assert_eq!(kept, [&Value::from(1), &Value::from(2)]);
}

#[test]
fn filter_objects_and_null() {
    let empty = || Value::Object(BTreeMap::new());
    let values = vec![empty(), Value::Null, empty()];
    let kept: Vec<Value> = values.into_iter().filter(is_truthy).collect();
    assert_eq!(kept, [empty(), empty()]);

    let options = vec![Some(BTreeMap::<String, i32>::new()), None, Some(BTreeMap::new())];
    assert_eq!(options.iter().filter(|o| is_truthy(*o)).count(), 2);
}

#[test]
fn filter_strings() {
    let kept: Vec<&str> = vec!["hello", "", "world"].into_iter().filter(is_truthy).collect();
    assert_eq!(kept, ["hello", "world"]);
}

#[test]
fn falsy_set_is_closed() {
    for member in FalsyValue::ALL {
        let value = Value::from(member);
        assert!(is_falsy(&value), "{member:?} must be falsy");
        assert_eq!(value.as_falsy(), Some(member));
    }
}

#[test]
fn is_nan_vectors() {
    assert!(is_nan(&NaN));
    assert!(is_nan(&f64::NAN));
    assert!(is_nan(&Value::from(NaN)));
    assert!(!is_nan(&0.0));
    assert!(!is_nan(&Value::Undefined));
    assert!(!is_nan(&Value::from("NaN")));
    assert!(!is_nan(&Value::Array(vec![Value::from(NaN)])));
}

#[test]
fn toggle_vectors() {
    assert!(!toggle(true));
    assert!(toggle(false));
}
