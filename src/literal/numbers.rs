//! Number scanning for the literal parser
//!
//! Handles decimal, exponent and radix-prefixed numbers, `Infinity`, and big integers (`n` suffix).

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use truthy_core::Value;

use super::errors::LiteralError;
use super::{Parser, is_identifier_char};

impl<'a> Parser<'a> {
    pub(super) fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos();
        let negative = match self.peek() {
            Some('-') => {
                self.advance();
                true
            }
            Some('+') => {
                self.advance();
                false
            }
            _ => false,
        };

        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' => {}
            Some(c) if c.is_ascii_alphabetic() => {
                let (_, name) = self.read_identifier();
                if name == "Infinity" {
                    let inf = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
                    return Ok(Value::Number(inf));
                }
                let end = self.pos();
                return Err(LiteralError::InvalidNumber {
                    text: self.source[start..end].to_string(),
                    span: (start, end - start).into(),
                });
            }
            _ => return Err(self.unexpected("a number")),
        }

        let body_start = self.pos();
        let radix_prefixed = radix_of(&self.source[body_start..]).is_some();
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            // An exponent sign only follows `e`/`E` in a decimal literal (`e` is a digit in hex).
            let exponent_sign = (c == '+' || c == '-') && matches!(prev, 'e' | 'E') && !radix_prefixed;
            if is_identifier_char(c) || c == '.' || exponent_sign {
                prev = c;
                self.advance();
            } else {
                break;
            }
        }
        let end = self.pos();
        let body = &self.source[body_start..end];
        let invalid = || LiteralError::InvalidNumber {
            text: self.source[start..end].to_string(),
            span: (start, end - start).into(),
        };

        if let Some(digits) = body.strip_suffix('n') {
            let n = parse_bigint(digits).ok_or_else(invalid)?;
            return Ok(Value::BigInt(if negative { -n } else { n }));
        }

        let magnitude = parse_number_body(body).ok_or_else(invalid)?;
        Ok(Value::Number(if negative { -magnitude } else { magnitude }))
    }
}

/// Splits a `0x`/`0o`/`0b` prefix off, returning the radix and the digits.
fn radix_of(text: &str) -> Option<(u32, &str)> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Removes `_` separators. Each one must sit between two digits of `radix`.
fn strip_separators(text: &str, radix: u32) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        if !before.is_some_and(|d| d.is_digit(radix)) || !after.is_some_and(|d| d.is_digit(radix)) {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

fn parse_number_body(body: &str) -> Option<f64> {
    if let Some((radix, digits)) = radix_of(body) {
        // Wider than any machine integer is fine; the value rounds to the nearest double.
        return parse_digits(digits, radix)?.to_f64();
    }
    // Rust's float grammar already matches decimal literals (`1`, `.5`, `5.`, `1e-3`); it also accepts `inf` and
    // `nan`, which cannot reach here because the body starts with a digit or `.`.
    strip_separators(body, 10)?.parse::<f64>().ok()
}

fn parse_bigint(digits: &str) -> Option<BigInt> {
    let (radix, digits) = radix_of(digits).unwrap_or((10, digits));
    parse_digits(digits, radix)
}

fn parse_digits(digits: &str, radix: u32) -> Option<BigInt> {
    let digits = strip_separators(digits, radix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}
