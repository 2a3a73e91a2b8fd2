//! Low-level cursor parser for persisted snapshot sources.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor over the raw bytes
//! of a snapshot file. It knows nothing about tables; it only hands out the lexical pieces
//! the snapshot reader needs (identifiers, integers, quoted strings, punctuation) while
//! keeping track of the current line for error reporting.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::advance`] / [`crate::file::parser::Parser::advance_by`] - Move forward
//! - [`crate::file::parser::Parser::skip_trivia`] - Skip whitespace and `#` comments
//! - [`crate::file::parser::Parser::pos`] / [`crate::file::parser::Parser::line`] - Current location
//!
//! ## Token Methods
//! - [`crate::file::parser::Parser::read_identifier`] - `[A-Za-z_][A-Za-z0-9_]*`
//! - [`crate::file::parser::Parser::read_integer`] - Decimal or `0x` hexadecimal
//! - [`crate::file::parser::Parser::read_string`] - Single- or double-quoted strings
//! - [`crate::file::parser::Parser::expect_byte`] / [`crate::file::parser::Parser::consume_byte`] - Punctuation
//!
//! # Usage Examples
//!
//! ```rust
//! use v8heapconst::Parser;
//!
//! let mut parser = Parser::new(b"  # header\n  247: \"MAP_TYPE\",");
//! parser.skip_trivia();
//! assert_eq!(parser.line(), 2);
//! assert_eq!(parser.read_integer()?, 247);
//! parser.expect_byte(b':')?;
//! parser.skip_trivia();
//! assert_eq!(parser.read_string()?, "MAP_TYPE");
//! assert!(parser.consume_byte(b','));
//! assert!(!parser.has_more_data());
//! # Ok::<(), v8heapconst::Error>(())
//! ```

use crate::Result;

/// A cursor-based parser over snapshot source bytes.
///
/// The parser tracks a byte position and a 1-based line number. Every read is bounds
/// checked; reading past the end yields [`crate::Error::OutOfBounds`], and bytes that do not
/// form the requested token yield [`crate::Error::Malformed`] naming the line.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::Parser;
///
/// let mut parser = Parser::new(b"(\"old_space\", 0x0439d)");
/// parser.expect_byte(b'(')?;
/// assert_eq!(parser.read_string()?, "old_space");
/// parser.expect_byte(b',')?;
/// parser.skip_trivia();
/// assert_eq!(parser.read_integer()?, 0x0439d);
/// parser.expect_byte(b')')?;
/// # Ok::<(), v8heapconst::Error>(())
/// ```
pub struct Parser<'a> {
    /// The source data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
    /// 1-based line number of `position`
    line: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser {
            data,
            position: 0,
            line: 1,
        }
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get the 1-based line number of the current position.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    pub fn peek_byte(&self) -> Result<u8> {
        if self.position >= self.data.len() {
            return Err(out_of_bounds_error!());
        }
        Ok(self.data[self.position])
    }

    /// Move the position forward by one byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing would exceed the data length.
    pub fn advance(&mut self) -> Result<()> {
        self.advance_by(1)
    }

    /// Move the position forward by the specified number of bytes, counting the lines
    /// that are passed.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let Some(end) = self.position.checked_add(step) else {
            return Err(out_of_bounds_error!());
        };
        if end > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.line += self.data[self.position..end]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count();
        self.position = end;
        Ok(())
    }

    /// Skip whitespace and `#` comments (up to and including the newline).
    pub fn skip_trivia(&mut self) {
        while self.position < self.data.len() {
            match self.data[self.position] {
                b'\n' => {
                    self.line += 1;
                    self.position += 1;
                }
                b' ' | b'\t' | b'\r' => self.position += 1,
                b'#' => {
                    while self.position < self.data.len() && self.data[self.position] != b'\n' {
                        self.position += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Consume `expected` if it is the next byte after trivia.
    ///
    /// Returns `true` if the byte was consumed. The position is left after the skipped
    /// trivia either way.
    pub fn consume_byte(&mut self, expected: u8) -> bool {
        self.skip_trivia();
        if self.position < self.data.len() && self.data[self.position] == expected {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Require `expected` as the next byte after trivia.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input, or [`crate::Error::Malformed`] if
    /// a different byte is found.
    pub fn expect_byte(&mut self, expected: u8) -> Result<()> {
        self.skip_trivia();
        let found = self.peek_byte()?;
        if found != expected {
            return Err(malformed_error!(
                "line {}: expected '{}', found '{}'",
                self.line,
                char::from(expected),
                char::from(found).escape_default()
            ));
        }

        self.position += 1;
        Ok(())
    }

    /// Read an identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input, or [`crate::Error::Malformed`] if
    /// no identifier starts at the current position.
    pub fn read_identifier(&mut self) -> Result<&'a str> {
        let first = self.peek_byte()?;
        if !(first.is_ascii_alphabetic() || first == b'_') {
            return Err(malformed_error!(
                "line {}: expected identifier, found '{}'",
                self.line,
                char::from(first).escape_default()
            ));
        }

        let start = self.position;
        while self.position < self.data.len()
            && (self.data[self.position].is_ascii_alphanumeric()
                || self.data[self.position] == b'_')
        {
            self.position += 1;
        }

        // Identifier bytes are ASCII by construction
        std::str::from_utf8(&self.data[start..self.position])
            .map_err(|error| malformed_error!("line {}: {}", self.line, error))
    }

    /// Read an unsigned integer literal, decimal or `0x`-prefixed hexadecimal.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input, or [`crate::Error::Malformed`] if
    /// no digits follow or the value does not fit into 64 bits.
    pub fn read_integer(&mut self) -> Result<u64> {
        let first = self.peek_byte()?;
        if !first.is_ascii_digit() {
            return Err(malformed_error!(
                "line {}: expected integer, found '{}'",
                self.line,
                char::from(first).escape_default()
            ));
        }

        let radix = if first == b'0'
            && matches!(self.data.get(self.position + 1), Some(b'x' | b'X'))
        {
            self.position += 2;
            16
        } else {
            10
        };

        let start = self.position;
        while self.position < self.data.len()
            && (self.data[self.position].is_ascii_hexdigit() || self.data[self.position] == b'_')
        {
            self.position += 1;
        }

        let digits: String = self.data[start..self.position]
            .iter()
            .filter(|&&byte| byte != b'_')
            .map(|&byte| char::from(byte))
            .collect();
        if digits.is_empty() {
            return Err(malformed_error!("line {}: missing integer digits", self.line));
        }

        u64::from_str_radix(&digits, radix).map_err(|error| {
            malformed_error!(
                "line {}: invalid integer literal '{}' - {}",
                self.line,
                digits,
                error
            )
        })
    }

    /// Read a single- or double-quoted string literal.
    ///
    /// Supports the escapes `\\`, `\"`, `\'`, `\n`, `\t` and `\r`. Strings may not span lines.
    /// Any other escape is rejected, including Python's numeric and named escapes (`\x41`,
    /// `\u0041`, `\N{...}`, octal `\101`). String prefixes such as `r"..."` or `b"..."` are
    /// not strings to this parser either.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the input ends inside the string, or
    /// [`crate::Error::Malformed`] for a missing quote, a raw newline, an unknown escape or
    /// invalid UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let quote = self.peek_byte()?;
        if quote != b'"' && quote != b'\'' {
            return Err(malformed_error!(
                "line {}: expected string, found '{}'",
                self.line,
                char::from(quote).escape_default()
            ));
        }
        self.position += 1;

        let mut bytes = Vec::new();
        loop {
            let byte = self.peek_byte()?;
            self.position += 1;
            match byte {
                b'\n' => {
                    return Err(malformed_error!(
                        "line {}: unterminated string literal",
                        self.line
                    ))
                }
                b'\\' => {
                    let escaped = self.peek_byte()?;
                    self.position += 1;
                    bytes.push(match escaped {
                        b'\\' | b'"' | b'\'' => escaped,
                        b'n' => b'\n',
                        b't' => b'\t',
                        b'r' => b'\r',
                        other => {
                            return Err(malformed_error!(
                                "line {}: unsupported escape '\\{}'",
                                self.line,
                                char::from(other).escape_default()
                            ))
                        }
                    });
                }
                _ if byte == quote => break,
                _ => bytes.push(byte),
            }
        }

        String::from_utf8(bytes)
            .map_err(|error| malformed_error!("line {}: {}", self.line, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_read_integer() {
        let test_cases = vec![
            (&b"0"[..], 0),
            (&b"247"[..], 247),
            (&b"2152"[..], 2152),
            (&b"0x02139"[..], 0x02139),
            (&b"0x000c0000"[..], 0x000c_0000),
            (&b"0XFF"[..], 0xFF),
            (&b"1_000"[..], 1000),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(input);
            assert_eq!(parser.read_integer().unwrap(), expected);
            assert!(!parser.has_more_data());
        }
    }

    #[test]
    fn test_read_integer_errors() {
        let mut parser = Parser::new(b"0x");
        assert!(matches!(parser.read_integer(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"abc");
        assert!(matches!(parser.read_integer(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"99999999999999999999999");
        assert!(matches!(parser.read_integer(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"");
        assert!(matches!(
            parser.read_integer(),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_read_string() {
        let test_cases = vec![
            (&b"\"MetaMap\""[..], "MetaMap"),
            (&b"'old_space'"[..], "old_space"),
            (&b"\"\""[..], ""),
            (&b"\"a\\\"b\""[..], "a\"b"),
            (&b"\"it's\""[..], "it's"),
            (&b"\"tab\\there\""[..], "tab\there"),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(input);
            assert_eq!(parser.read_string().unwrap(), expected);
        }
    }

    #[test]
    fn test_read_string_errors() {
        let mut parser = Parser::new(b"\"unterminated");
        assert!(matches!(parser.read_string(), Err(Error::OutOfBounds { .. })));

        let mut parser = Parser::new(b"\"broken\nline\"");
        assert!(matches!(parser.read_string(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"\"bad \\q escape\"");
        assert!(matches!(parser.read_string(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"MetaMap");
        assert!(matches!(parser.read_string(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"r\"raw\"");
        assert!(matches!(parser.read_string(), Err(Error::Malformed { .. })));

        let mut parser = Parser::new(b"\"\xff\xfe\"");
        assert!(matches!(parser.read_string(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_read_string_numeric_escapes() {
        for input in [
            &b"'a\\x41'"[..],
            &b"'a\\u0041'"[..],
            &b"'a\\N{DASH}'"[..],
            &b"'a\\101'"[..],
            &b"'a\\x'"[..],
        ] {
            let mut parser = Parser::new(input);
            match parser.read_string() {
                Err(Error::Malformed { message, .. }) => {
                    assert!(message.contains("unsupported escape"), "{message}");
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_identifier() {
        let mut parser = Parser::new(b"KNOWN_MAPS = {");
        assert_eq!(parser.read_identifier().unwrap(), "KNOWN_MAPS");
        assert_eq!(parser.pos(), 10);
        parser.expect_byte(b'=').unwrap();
        parser.expect_byte(b'{').unwrap();
        assert!(!parser.has_more_data());

        let mut parser = Parser::new(b"1ABC");
        assert!(matches!(
            parser.read_identifier(),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn test_skip_trivia_tracks_lines() {
        let mut parser = Parser::new(b"#!/usr/bin/env python3\n# yapf: disable\n\n  X");
        parser.skip_trivia();
        assert_eq!(parser.line(), 4);
        assert_eq!(parser.peek_byte().unwrap(), b'X');

        let mut parser = Parser::new(b"# only a comment");
        parser.skip_trivia();
        assert!(!parser.has_more_data());
    }

    #[test]
    fn test_expect_and_consume() {
        let mut parser = Parser::new(b"  ,\n  )");
        assert!(!parser.consume_byte(b')'));
        assert!(parser.consume_byte(b','));

        let error = parser.expect_byte(b'}').unwrap_err();
        match error {
            Error::Malformed { message, .. } => {
                assert!(message.contains("line 2"), "{message}");
                assert!(message.contains("expected '}'"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }

        parser.expect_byte(b')').unwrap();
        assert!(matches!(
            parser.expect_byte(b')'),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_advance_by() {
        let mut parser = Parser::new(b"a\nb\nc");
        parser.advance_by(4).unwrap();
        assert_eq!(parser.line(), 3);
        assert_eq!(parser.peek_byte().unwrap(), b'c');
        assert!(parser.advance_by(2).is_err());
        assert!(parser.advance_by(usize::MAX).is_err());
        parser.advance().unwrap();
        assert!(!parser.has_more_data());
        assert!(parser.advance().is_err());
    }

    #[test]
    fn test_empty() {
        let parser = Parser::new(&[]);
        assert!(!parser.has_more_data());
        assert_eq!(parser.pos(), 0);
        assert!(parser.peek_byte().is_err());
    }
}
