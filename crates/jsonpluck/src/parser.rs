//! Stream-driven recursive-descent JSON reader.
//!
//! One procedure per grammar production, one peeked character of lookahead,
//! no backtracking. The reader consumes exactly the prefix of the stream
//! that the top-level value occupies; whatever follows is never inspected.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{Error, Result},
    source::{END_OF_INPUT, Source, StrSource},
    value::{ObjectContent, Payload, Value},
};

/// Parses one JSON document from `source`.
///
/// The document must open, after any leading whitespace, with `{` or `[`;
/// bare top-level scalars are rejected. On success exactly the characters of
/// the document have been consumed and trailing input is left untouched.
///
/// # Errors
///
/// [`Error::Structural`] at the first character that does not fit the
/// grammar. The parse never recovers or produces a partial tree.
pub fn parse<S: Source>(source: &mut S) -> Result<Value> {
    Parser { source }.parse_document()
}

/// Parses one JSON document and moves the top-level payload out as `T`.
///
/// # Errors
///
/// As [`parse`], plus [`Error::TypeMismatch`] when the parsed document does
/// not hold `T`'s tag.
pub fn parse_as<T: Payload, S: Source>(source: &mut S) -> Result<T> {
    T::extract_into(parse(source)?).map_err(|value| Error::TypeMismatch {
        expected: T::TYPE,
        found: value.value_type(),
    })
}

/// Parses a document held entirely in a string slice.
///
/// # Errors
///
/// As [`parse`].
pub fn parse_str(input: &str) -> Result<Value> {
    parse(&mut StrSource::new(input))
}

struct Parser<'a, S: Source> {
    source: &'a mut S,
}

impl<S: Source> Parser<'_, S> {
    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.source.peek() {
            Some('{') => self.read_object(),
            Some('[') => self.read_array(),
            found => Err(self.mismatch('{', found)),
        }
    }

    fn mismatch(&self, expected: char, found: Option<char>) -> Error {
        Error::Structural {
            expected,
            found: found.unwrap_or(END_OF_INPUT),
            position: self.source.position() + 1,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.source.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.source.consume();
        }
    }

    /// Consumes `expected` after any whitespace, failing structurally on
    /// anything else.
    fn expect_consume(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        match self.source.peek() {
            Some(c) if c == expected => {
                self.source.consume();
                Ok(())
            }
            found => Err(self.mismatch(expected, found)),
        }
    }

    fn read_value(&mut self) -> Result<Value> {
        match self.source.peek() {
            Some('"') => self.read_string(),
            Some('[') => self.read_array(),
            Some('{') => self.read_object(),
            _ => self.read_primitive(),
        }
    }

    fn read_object(&mut self) -> Result<Value> {
        self.expect_consume('{')?;
        let mut content = ObjectContent::new();
        self.skip_whitespace();
        while self.source.peek() != Some('}') {
            let key = self.read_quoted()?;
            self.expect_consume(':')?;
            self.skip_whitespace();
            let value = self.read_value()?;
            // Last write wins on duplicate keys.
            content.insert(key, value);
            self.skip_whitespace();
            if self.source.peek() == Some(',') {
                self.source.consume();
                self.skip_whitespace();
            }
        }
        self.expect_consume('}')?;
        Ok(Value::Object(content))
    }

    fn read_array(&mut self) -> Result<Value> {
        self.expect_consume('[')?;
        let mut content = Vec::new();
        self.skip_whitespace();
        while self.source.peek() != Some(']') {
            content.push(self.read_value()?);
            self.skip_whitespace();
            if self.source.peek() == Some(',') {
                self.source.consume();
                self.skip_whitespace();
            }
        }
        self.expect_consume(']')?;
        Ok(Value::Array(content))
    }

    fn read_string(&mut self) -> Result<Value> {
        self.read_quoted().map(Value::String)
    }

    /// Reads a quote-delimited run of characters.
    ///
    /// A backslash is dropped and the character after it is kept verbatim —
    /// an escaped quote therefore does not end the string, and no escape
    /// sequence is ever translated. Exhausted input falls out of the loop
    /// and fails on the closing-quote expectation.
    fn read_quoted(&mut self) -> Result<String> {
        self.expect_consume('"')?;
        let mut buffer = String::new();
        while let Some(c) = self.source.peek() {
            if c == '"' {
                break;
            }
            self.source.consume();
            if c == '\\' {
                if let Some(escaped) = self.source.consume() {
                    buffer.push(escaped);
                }
            } else {
                buffer.push(c);
            }
        }
        self.expect_consume('"')?;
        Ok(buffer)
    }

    /// Reads an unquoted token: `true`, `false`, `null` or a number.
    ///
    /// The token runs until whitespace, `,`, `]`, `}` or the end of input.
    /// An empty token means nothing that can begin a value stood here; that
    /// is reported against the digit the numeric fallback would have needed.
    fn read_primitive(&mut self) -> Result<Value> {
        let mut token = String::new();
        while let Some(c) = self.source.peek() {
            if c.is_ascii_whitespace() || matches!(c, ',' | ']' | '}') {
                break;
            }
            self.source.consume();
            token.push(c);
        }
        if token.is_empty() {
            let found = self.source.peek();
            return Err(self.mismatch('0', found));
        }
        Ok(match token.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            _ => Value::Int(integer_prefix(&token)),
        })
    }
}

/// Base-10 integer conversion in the `strtol` mould, minus the leading `+`:
/// an optional `-` sign, then the longest run of digits, saturating at the
/// `i64` range. Tokens with no usable prefix yield zero rather than failing.
fn integer_prefix(token: &str) -> i64 {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        let digit = i64::from(digit);
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::integer_prefix;

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("-17", -17)]
    #[case("007", 7)]
    #[case("12abc", 12)]
    #[case("3.25", 3)]
    #[case("1e3", 1)]
    #[case("abc", 0)]
    #[case("+5", 0)]
    #[case("-", 0)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("9223372036854775808", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    #[case("99999999999999999999999", i64::MAX)]
    fn integer_prefix_conversion(#[case] token: &str, #[case] expected: i64) {
        assert_eq!(integer_prefix(token), expected);
    }
}
