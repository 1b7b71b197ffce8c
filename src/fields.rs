//! Turns raw console lines into typed field values.
//!
//! Quantity and price are deliberately kept as text: the store accepts
//! whatever the operator typed, only emptiness is rejected.

use std::fmt;
use crate::error::ValidationError;

/// The free-text columns of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Product name",
            Field::Quantity => "Quantity",
            Field::Price => "Price",
        };
        f.write_str(label)
    }
}

/// Parses a product id.
///
/// Surrounding whitespace is ignored. Anything that is not a whole `i64`
/// literal is rejected, including decimals and empty input. Negative ids
/// parse; there is no range check.
pub fn parse_identifier(text: &str) -> Result<i64, ValidationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId(text.trim().to_string()))
}

/// Accepts any non-empty line as the value of `field`.
pub fn parse_text(field: Field, text: &str) -> Result<String, ValidationError> {
    let value = text.trim_end_matches(['\r', '\n']);
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier_accepts_integers() {
        assert_eq!(parse_identifier("42"), Ok(42));
        assert_eq!(parse_identifier(" 7\n"), Ok(7));
        assert_eq!(parse_identifier("0"), Ok(0));
        assert_eq!(parse_identifier("-1"), Ok(-1));
        assert_eq!(parse_identifier("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_parse_identifier_rejects_non_integers() {
        for bad in ["abc", "12.5", "", "   ", "1e3", "9223372036854775808"] {
            match parse_identifier(bad) {
                Err(ValidationError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_text_is_lenient() {
        assert_eq!(parse_text(Field::Quantity, "ten"), Ok("ten".to_string()));
        assert_eq!(parse_text(Field::Price, "9.99\r\n"), Ok("9.99".to_string()));
        assert_eq!(parse_text(Field::Name, " Widget "), Ok(" Widget ".to_string()));
    }

    #[test]
    fn test_parse_text_rejects_empty() {
        assert_eq!(
            parse_text(Field::Name, "\n"),
            Err(ValidationError::EmptyField(Field::Name))
        );
        assert_eq!(
            ValidationError::EmptyField(Field::Name).to_string(),
            "Product name must not be empty"
        );
    }
}
