//! Literal syntax for values typed on the command line.
//!
//! Reads a small, JavaScript-flavoured literal language into a [`Value`]:
//!
//! - keywords: `undefined`, `null`, `true`, `false`, `NaN`, `Infinity`
//! - numbers: `1`, `-0`, `2.5e-3`, `1_000`, `0xff`; with an `n` suffix, big integers (`0n`, `-12n`)
//! - strings: `"double"` or `'single'` quoted, with the usual backslash escapes
//! - composites: `[1, 2]`, `{ key: 1, "quoted key": 2 }`, `new Map()`, `new Map([[key, value]])`
//!
//! Whitespace between tokens is ignored and trailing commas are allowed.
//!
//! ## Module Structure
//!
//! - `numbers` - Numeric and big integer literals
//! - `strings` - Quoted strings and escapes
//! - `errors` - `LiteralError` and its rendering

mod errors;
mod numbers;
mod strings;

pub use errors::{LiteralError, render_error};

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::CharIndices;

use truthy_core::Value;

/// Parses `source` as a single literal.
///
/// ## Errors
///
/// Returns a [`LiteralError`] pointing at the first offending byte range, including any non-whitespace input
/// left after a complete value.
///
/// ## Examples
///
/// ```rust
/// use truthy::literal::parse;
/// use truthy_core::{is_falsy, Value};
///
/// assert_eq!(parse("null").unwrap(), Value::Null);
/// assert!(is_falsy(&parse("-0").unwrap()));
/// assert!(parse("[1, 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser::new(source);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    let pos = parser.pos();
    if pos < source.len() {
        return Err(LiteralError::TrailingInput {
            span: (pos, source.len() - pos).into(),
        });
    }
    Ok(value)
}

/// How many arrays, objects and maps may enclose one another.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent reader over a single literal.
pub(crate) struct Parser<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Composites currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            depth: 0,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Byte offset of the next unread character.
    fn pos(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |(i, _)| *i)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Error for whatever sits at the current position when `expected` was wanted.
    fn unexpected(&mut self, expected: &'static str) -> LiteralError {
        let pos = self.pos();
        match self.peek() {
            Some(found) => LiteralError::UnexpectedChar {
                found,
                expected,
                span: (pos, found.len_utf8()).into(),
            },
            None => LiteralError::UnexpectedEnd {
                expected,
                span: (pos, 0).into(),
            },
        }
    }

    fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), LiteralError> {
        self.skip_whitespace();
        if self.peek() == Some(ch) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Reads `[A-Za-z0-9_$]*` and returns it with its start offset.
    fn read_identifier(&mut self) -> (usize, &'a str) {
        let start = self.pos();
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }
        let end = self.pos();
        let source = self.source;
        (start, &source[start..end])
    }

    // ========================================================================
    // Values
    // ========================================================================

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            Some('"' | '\'') => self.parse_string().map(Value::String),
            Some('[') => self.nested(Self::parse_array),
            Some('{') => self.nested(Self::parse_object),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.parse_number(),
            Some(c) if is_identifier_start(c) => self.parse_keyword(),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Runs `parse` one composite level deeper, failing past [`MAX_DEPTH`].
    fn nested(&mut self, parse: fn(&mut Self) -> Result<Value, LiteralError>) -> Result<Value, LiteralError> {
        if self.depth >= MAX_DEPTH {
            let pos = self.pos();
            let len = self.peek().map_or(0, char::len_utf8);
            return Err(LiteralError::TooDeep { span: (pos, len).into() });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_keyword(&mut self) -> Result<Value, LiteralError> {
        let (start, name) = self.read_identifier();
        match name {
            "undefined" => Ok(Value::Undefined),
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "NaN" => Ok(Value::Number(f64::NAN)),
            "Infinity" => Ok(Value::Number(f64::INFINITY)),
            "new" => self.parse_constructor(),
            _ => Err(LiteralError::UnknownIdentifier {
                name: name.to_string(),
                span: (start, name.len()).into(),
            }),
        }
    }

    fn parse_array(&mut self) -> Result<Value, LiteralError> {
        self.advance(); // consume [
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.advance();
                break;
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                }
                Some(']') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.unexpected("`,` or `]`")),
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, LiteralError> {
        self.advance(); // consume {
        let mut entries = BTreeMap::new();
        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some('}') => {
                    self.advance();
                    break;
                }
                Some('"' | '\'') => self.parse_string()?,
                Some(c) if is_identifier_start(c) => self.read_identifier().1.to_string(),
                _ => return Err(self.unexpected("a property name or `}`")),
            };
            self.expect(':', "`:`")?;
            let value = self.parse_value()?;
            // Later duplicates win, as in an object literal.
            entries.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                }
                Some('}') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.unexpected("`,` or `}`")),
            }
        }
        Ok(Value::Object(entries))
    }

    /// `new Map()` or `new Map([[key, value], ...])`; `new` is already consumed.
    fn parse_constructor(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        let (start, name) = self.read_identifier();
        if name != "Map" {
            return Err(LiteralError::UnknownIdentifier {
                name: format!("new {name}"),
                span: (start, name.len()).into(),
            });
        }
        self.expect('(', "`(`")?;
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.advance();
            return Ok(Value::Map(Vec::new()));
        }

        let arg_start = self.pos();
        let arg = self.nested(Self::parse_value)?;
        let arg_span = (arg_start, self.pos() - arg_start).into();
        let entries = into_map_entries(arg).ok_or(LiteralError::InvalidMapEntry { span: arg_span })?;
        self.expect(')', "`)`")?;
        Ok(Value::Map(entries))
    }
}

fn into_map_entries(arg: Value) -> Option<Vec<(Value, Value)>> {
    let Value::Array(pairs) = arg else {
        return None;
    };
    pairs
        .into_iter()
        .map(|pair| match pair {
            Value::Array(kv) if kv.len() == 2 => {
                let mut kv = kv.into_iter();
                Some((kv.next()?, kv.next()?))
            }
            _ => None,
        })
        .collect()
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
