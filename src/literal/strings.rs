//! String scanning for the literal parser
//!
//! Handles single- and double-quoted strings and their escapes, including `\xHH`, `\uHHHH` (with surrogate
//! pairs) and `\u{H...}`.

use super::Parser;
use super::errors::LiteralError;

impl<'a> Parser<'a> {
    /// Reads a quoted string. The opening quote is the next character.
    pub(super) fn parse_string(&mut self) -> Result<String, LiteralError> {
        let start = self.pos();
        let quote = match self.advance() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.unexpected("a string")),
        };
        let unterminated = LiteralError::UnterminatedString {
            span: (start, self.source.len() - start).into(),
        };

        let mut out = String::new();
        loop {
            let escape_start = self.pos();
            match self.advance() {
                None => return Err(unterminated),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    if self.peek().is_none() {
                        return Err(unterminated);
                    }
                    if let Some(c) = self.scan_escape(escape_start)? {
                        out.push(c);
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    /// Reads the escape after a backslash. Returns `None` for a line continuation.
    fn scan_escape(&mut self, start: usize) -> Result<Option<char>, LiteralError> {
        let c = match self.advance() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('v') => '\u{b}',
            Some('0') if !self.peek().is_some_and(|c| c.is_ascii_digit()) => '\0',
            Some('\n') => return Ok(None),
            Some('x') => {
                let code = self.scan_hex_digits(start, 2)?;
                self.code_point(start, code)?
            }
            Some('u') => self.scan_unicode_escape(start)?,
            // Octal escapes are not supported.
            Some(c) if c.is_ascii_digit() => return Err(self.invalid_escape(start)),
            // Any other character escapes to itself (`\\`, `\'`, `\"`, `\/`, ...).
            Some(c) => c,
            None => return Err(self.invalid_escape(start)),
        };
        Ok(Some(c))
    }

    fn scan_unicode_escape(&mut self, start: usize) -> Result<char, LiteralError> {
        let high = self.scan_code_unit(start)?;
        if !(0xD800..0xDC00).contains(&high) {
            return self.code_point(start, high);
        }

        // A high surrogate must be followed by `\u` and a low surrogate.
        if self.advance() != Some('\\') || self.advance() != Some('u') {
            return Err(self.invalid_escape(start));
        }
        let low = self.scan_code_unit(start)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.invalid_escape(start));
        }
        self.code_point(start, 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    }

    /// `HHHH` or `{H...}` after `\u`.
    fn scan_code_unit(&mut self, start: usize) -> Result<u32, LiteralError> {
        if self.peek() != Some('{') {
            return self.scan_hex_digits(start, 4);
        }
        self.advance();
        let mut code: u32 = 0;
        let mut digits = 0;
        loop {
            match self.advance() {
                Some('}') if digits > 0 => return Ok(code),
                Some(c) if c.is_ascii_hexdigit() && digits < 6 => {
                    code = code * 16 + c.to_digit(16).unwrap_or(0);
                    digits += 1;
                }
                _ => return Err(self.invalid_escape(start)),
            }
        }
    }

    fn scan_hex_digits(&mut self, start: usize, count: usize) -> Result<u32, LiteralError> {
        let mut code: u32 = 0;
        for _ in 0..count {
            match self.peek().and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    self.advance();
                    code = code * 16 + digit;
                }
                None => return Err(self.invalid_escape(start)),
            }
        }
        Ok(code)
    }

    fn code_point(&mut self, start: usize, code: u32) -> Result<char, LiteralError> {
        char::from_u32(code).ok_or_else(|| self.invalid_escape(start))
    }

    fn invalid_escape(&mut self, start: usize) -> LiteralError {
        let end = self.pos().max(start + 1);
        LiteralError::InvalidEscape {
            span: (start, end - start).into(),
        }
    }
}
