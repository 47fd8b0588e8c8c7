//! Lexer and recursive-descent parser.
//!
//! The lexer is a pure function over a shrinking `&str`: each call skips
//! leading ASCII whitespace, classifies the next token, and advances the
//! slice past it. The grammar layer has one function per production
//! (`parse_value`, `parse_array`, `parse_object`); each returns
//! `Result<Value, ParseError>` and the first error aborts the whole parse.
//!
//! # Supported grammar
//!
//! Objects, arrays, strings, `true`/`false`/`null`, and digit-run numbers.
//! Two deliberate departures from full JSON:
//!
//! - Number literals are unsigned integer digit runs only — no sign,
//!   fraction, or exponent. Anything else at the start of a number is a
//!   separate (invalid) token.
//! - String contents are kept as written: a `"` preceded by `\` does not
//!   terminate the literal, but escape sequences are not decoded.
//!
//! Empty (or whitespace-only) input parses successfully to a Null value;
//! that permissive top-level behavior is part of the contract, not a gap.

use crate::array::Array;
use crate::error::{ErrorKind, ParseError, Result};
use crate::map::Map;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    BraceLeft,
    BraceRight,
    BracketLeft,
    BracketRight,
    Colon,
    Comma,
    String(&'a str),
    Number(&'a str),
    True,
    False,
    Null,
    /// Unrecognized input: an unterminated string (carrying the opening
    /// quote), an unknown keyword, or a stray character.
    Error(&'a str),
}

impl<'a> Token<'a> {
    /// The token's source text, for error messages.
    fn text(&self) -> &'a str {
        match self {
            Token::BraceLeft => "{",
            Token::BraceRight => "}",
            Token::BracketLeft => "[",
            Token::BracketRight => "]",
            Token::Colon => ":",
            Token::Comma => ",",
            Token::String(text) | Token::Number(text) | Token::Error(text) => text,
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
        }
    }
}

fn skip_whitespace(source: &mut &str) {
    *source = source.trim_start_matches(|c: char| c.is_ascii_whitespace());
}

/// Split off the first `len` bytes of `source` and advance past them.
fn poll_text<'a>(source: &mut &'a str, len: usize) -> &'a str {
    let (text, rest) = source.split_at(len);
    *source = rest;
    text
}

fn scan_number<'a>(source: &mut &'a str) -> Token<'a> {
    let len = source
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    Token::Number(poll_text(source, len))
}

/// Scan a string literal: the body runs until a `"` not immediately
/// preceded by `\`. An unterminated literal is an error token carrying the
/// opening quote, and the source is left unconsumed.
fn scan_string<'a>(source: &mut &'a str) -> Token<'a> {
    let bytes = source.as_bytes();
    for i in 1..bytes.len() {
        if bytes[i] == b'"' && bytes[i - 1] != b'\\' {
            let text = &source[1..i];
            *source = &source[i + 1..];
            return Token::String(text);
        }
    }

    Token::Error(&source[..1])
}

/// Scan an alphabetic run and match it against the three keywords.
fn scan_literal<'a>(source: &mut &'a str) -> Token<'a> {
    let len = source
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();

    match poll_text(source, len) {
        "true" => Token::True,
        "false" => Token::False,
        "null" => Token::Null,
        other => Token::Error(other),
    }
}

/// Produce the next token, or `None` at end of input.
fn scan_token<'a>(source: &mut &'a str) -> Option<Token<'a>> {
    skip_whitespace(source);
    let first = source.chars().next()?;

    Some(match first {
        '{' => {
            poll_text(source, 1);
            Token::BraceLeft
        }
        '}' => {
            poll_text(source, 1);
            Token::BraceRight
        }
        '[' => {
            poll_text(source, 1);
            Token::BracketLeft
        }
        ']' => {
            poll_text(source, 1);
            Token::BracketRight
        }
        ':' => {
            poll_text(source, 1);
            Token::Colon
        }
        ',' => {
            poll_text(source, 1);
            Token::Comma
        }
        '"' => scan_string(source),
        '0'..='9' => scan_number(source),
        c if c.is_ascii_alphabetic() => scan_literal(source),
        c => Token::Error(poll_text(source, c.len_utf8())),
    })
}

/// What the previous token inside a container was; used to reject misplaced
/// commas in both directions (a comma must follow a value and be followed
/// by one).
#[derive(PartialEq, Eq, Clone, Copy)]
enum LastElement {
    None,
    Comma,
    Value,
}

fn parse_array(source: &mut &str) -> Result<Value> {
    let mut array = Array::new();
    let mut last = LastElement::None;

    while let Some(token) = scan_token(source) {
        match token {
            Token::Comma => {
                if last != LastElement::Value {
                    return Err(ParseError::new(
                        ErrorKind::SyntaxError,
                        "no leading or repeated commas allowed",
                    ));
                }
                last = LastElement::Comma;
            }
            Token::BracketRight => {
                if last == LastElement::Comma {
                    return Err(ParseError::new(
                        ErrorKind::SyntaxError,
                        "no trailing commas allowed",
                    ));
                }
                return Ok(Value::Array(array));
            }
            token => {
                array.push(parse_value_from(source, token)?);
                last = LastElement::Value;
            }
        }
    }

    // Ran out of input before the matching bracket.
    Err(ParseError::new(
        ErrorKind::ExpectedToken,
        "unterminated array, expected ']'",
    ))
}

fn parse_object(source: &mut &str) -> Result<Value> {
    let mut object = Map::new();
    let mut last = LastElement::None;

    while let Some(token) = scan_token(source) {
        match token {
            Token::Comma => {
                if last != LastElement::Value {
                    return Err(ParseError::new(
                        ErrorKind::SyntaxError,
                        "no leading or repeated commas allowed",
                    ));
                }
                last = LastElement::Comma;
            }
            Token::BraceRight => {
                if last == LastElement::Comma {
                    return Err(ParseError::new(
                        ErrorKind::SyntaxError,
                        "no trailing commas allowed",
                    ));
                }
                return Ok(Value::Object(object));
            }
            Token::String(key) => {
                match scan_token(source) {
                    Some(Token::Colon) => {}
                    Some(other) => {
                        return Err(ParseError::new(
                            ErrorKind::InvalidToken,
                            format!("expected ':' but got '{}'", other.text()),
                        ));
                    }
                    None => {
                        return Err(ParseError::new(
                            ErrorKind::ExpectedToken,
                            "expected ':' but got end of text",
                        ));
                    }
                }

                let value = parse_value(source)?;
                // Duplicate keys keep the last value.
                object.insert_or_assign(key, value);
                last = LastElement::Value;
            }
            other => {
                return Err(ParseError::new(
                    ErrorKind::InvalidToken,
                    format!("expected string but got '{}'", other.text()),
                ));
            }
        }
    }

    // Ran out of input before the matching brace.
    Err(ParseError::new(
        ErrorKind::ExpectedToken,
        "unterminated object, expected '}'",
    ))
}

fn parse_value(source: &mut &str) -> Result<Value> {
    match scan_token(source) {
        Some(token) => parse_value_from(source, token),
        None => Err(ParseError::new(
            ErrorKind::ExpectedToken,
            "expected value but got end of text",
        )),
    }
}

fn parse_value_from(source: &mut &str, token: Token<'_>) -> Result<Value> {
    match token {
        Token::BraceLeft => parse_object(source),
        Token::BracketLeft => parse_array(source),
        Token::True => Ok(Value::Boolean(true)),
        Token::False => Ok(Value::Boolean(false)),
        Token::Null => Ok(Value::Null),
        Token::String(text) => Ok(Value::String(text.to_owned())),
        Token::Number(text) => {
            let number = text.parse::<f64>().map_err(|_| {
                ParseError::new(ErrorKind::InvalidToken, format!("invalid number '{text}'"))
            })?;
            Ok(Value::Number(number))
        }
        token => Err(ParseError::new(
            ErrorKind::InvalidToken,
            format!("invalid value '{}'", token.text()),
        )),
    }
}

/// Parse a whole JSON document into a [`Value`].
///
/// Empty or whitespace-only input yields `Ok(Value::Null)`. On failure the
/// structured [`ParseError`] describes the first problem found; nothing of
/// the partial document is returned.
///
/// ```rust
/// use jot_core::{parse, Kind};
///
/// let doc = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
/// assert_eq!(doc.kind(), Kind::Object);
/// assert_eq!(doc.object().get().at("scores").get().array().get().len(), 3);
/// ```
pub fn parse(source: &str) -> Result<Value> {
    let mut source = source;
    match scan_token(&mut source) {
        Some(token) => parse_value_from(&mut source, token),
        None => Ok(Value::Null),
    }
}
