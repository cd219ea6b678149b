//! Coercing raw table cell values into literals for generated code

use std::fmt;

/// The kind of literal a raw cell value is taken to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Email,
    Boolean,
    Text,
}

/// Rules are tried in order and the first match wins; anything matching
/// none of them is Text.
const RULES: &[(fn(&str) -> bool, Kind)] = &[
    (is_integer, Kind::Integer),
    (is_email, Kind::Email),
    (is_boolean, Kind::Boolean),
];

fn is_integer(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    value.contains('@')
}

fn is_boolean(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("true") || lower.contains("false")
}

pub fn classify(value: &str) -> Kind {
    RULES
        .iter()
        .find(|(matches, _)| matches(value))
        .map(|(_, kind)| *kind)
        .unwrap_or(Kind::Text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'i> {
    Integer(&'i str),
    Email(&'i str),
    Boolean(bool),
    Text(&'i str),
}

pub fn coerce(value: &str) -> Literal<'_> {
    match classify(value) {
        Kind::Integer => Literal::Integer(value),
        Kind::Email => Literal::Email(value),
        Kind::Boolean => Literal::Boolean(
            value
                .to_lowercase()
                .contains("true"),
        ),
        Kind::Text => Literal::Text(value),
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(digits) => f.write_str(digits),
            Literal::Boolean(true) => f.write_str("true"),
            Literal::Boolean(false) => f.write_str("false"),
            Literal::Email(text) | Literal::Text(text) => write!(f, "\"{}\"", escape(text)),
        }
    }
}

// backslashes and double quotes would otherwise end the string literal early
fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}
