// src/utilities/decode.rs
//
// Decodes the comma-separated float payload carried by each mocap message.

use std::fmt;

/// A segment of the payload failed to parse as a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub token: String,
    pub index: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid numeric token {:?} at index {}",
            self.token, self.index
        )
    }
}

impl std::error::Error for ParseError {}

/// Splits `raw` on `,` and parses each segment as an f32.
///
/// Only segments followed by a delimiter are kept: the remainder after the
/// last comma is dropped, so "1,2,3" decodes to [1.0, 2.0] and a string with
/// no comma decodes to an empty sequence. Tracker senders terminate every
/// value with a comma, and downstream consumers depend on this exact
/// behavior.
///
/// A single bad segment fails the whole decode; no partial result is
/// returned.
pub fn decode_value_list(raw: &str) -> Result<Vec<f32>, ParseError> {
    let mut values = Vec::new();
    let mut rest = raw;
    while let Some(pos) = rest.find(',') {
        let token = &rest[..pos];
        let value = token.parse::<f32>().map_err(|_| ParseError {
            token: token.to_string(),
            index: values.len(),
        })?;
        values.push(value);
        rest = &rest[pos + 1..];
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_segment_is_dropped() {
        assert_eq!(decode_value_list("1,2,3").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_comma_terminated_payload() {
        assert_eq!(decode_value_list("1,2,").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(decode_value_list("").unwrap(), Vec::<f32>::new());
    }

    #[test]
    fn test_no_delimiter_yields_nothing() {
        assert_eq!(decode_value_list("5").unwrap(), Vec::<f32>::new());
    }

    #[test]
    fn test_negative_and_fractional_values() {
        assert_eq!(
            decode_value_list("-12.5,0.25,1e3,").unwrap(),
            vec![-12.5, 0.25, 1000.0]
        );
    }

    #[test]
    fn test_bad_token_fails_whole_decode() {
        let err = decode_value_list("1,abc,3,").unwrap_err();
        assert_eq!(err.token, "abc");
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_empty_token_fails() {
        assert!(decode_value_list("1,,3,").is_err());
    }
}
