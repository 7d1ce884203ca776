//! Intake amount parsing and formatting.
//!
//! The log-intake input accepts plain millilitre values ("250"), values
//! with an explicit unit ("250ml", "250 ml") and litre values with
//! decimals ("0.5l", "1.5 L"). Everything normalizes to whole
//! millilitres.

use regex::Regex;

const AMOUNT_PATTERN: &str = r"^(\d+(?:\.\d+)?)\s*(ml|l)?$";

/// Errors that can occur while parsing an intake amount.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseAmountError {
    /// Input was empty
    #[error("Enter an amount first")]
    Empty,

    /// Input did not look like an amount
    #[error("'{0}' is not an amount (try 250, 250ml or 0.5l)")]
    Malformed(String),

    /// Millilitre values must be whole numbers
    #[error("'{0}' has a fraction; millilitre amounts must be whole")]
    FractionalMillilitres(String),

    /// Value does not fit the millilitre counter
    #[error("'{0}' is too large to log")]
    TooLarge(String),
}

/// Parse a user-entered amount into whole millilitres.
///
pub fn parse_amount(input: &str) -> Result<u32, ParseAmountError> {
    let trimmed = input.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    // Digits-only is the common case; skip the regex for it.
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed
            .parse::<u32>()
            .map_err(|_| ParseAmountError::TooLarge(input.trim().to_string()));
    }

    let re = match Regex::new(AMOUNT_PATTERN) {
        Ok(re) => re,
        Err(_) => return Err(ParseAmountError::Malformed(input.trim().to_string())),
    };
    let captures = match re.captures(&trimmed) {
        Some(captures) => captures,
        None => return Err(ParseAmountError::Malformed(input.trim().to_string())),
    };

    let number = &captures[1];
    let unit = captures.get(2).map(|m| m.as_str()).unwrap_or("ml");
    match unit {
        "l" => {
            let litres: f64 = number
                .parse()
                .map_err(|_| ParseAmountError::Malformed(input.trim().to_string()))?;
            let millilitres = (litres * 1000.0).round();
            if millilitres > f64::from(u32::MAX) {
                return Err(ParseAmountError::TooLarge(input.trim().to_string()));
            }
            Ok(millilitres as u32)
        }
        _ => {
            if number.contains('.') {
                return Err(ParseAmountError::FractionalMillilitres(
                    input.trim().to_string(),
                ));
            }
            number
                .parse::<u32>()
                .map_err(|_| ParseAmountError::TooLarge(input.trim().to_string()))
        }
    }
}

/// Format a millilitre value for display, switching to litres for round
/// values of a litre or more.
///
pub fn format_ml(ml: u32) -> String {
    if ml >= 1000 && ml % 1000 == 0 {
        format!("{} L", ml / 1000)
    } else if ml >= 1000 && ml % 100 == 0 {
        format!("{}.{} L", ml / 1000, (ml % 1000) / 100)
    } else {
        format!("{} ml", ml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_millilitres() {
        assert_eq!(parse_amount("250").unwrap(), 250);
        assert_eq!(parse_amount(" 750 ").unwrap(), 750);
        assert_eq!(parse_amount("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_with_millilitre_unit() {
        assert_eq!(parse_amount("250ml").unwrap(), 250);
        assert_eq!(parse_amount("250 ml").unwrap(), 250);
        assert_eq!(parse_amount("330ML").unwrap(), 330);
    }

    #[test]
    fn test_parse_litres() {
        assert_eq!(parse_amount("1l").unwrap(), 1000);
        assert_eq!(parse_amount("0.5l").unwrap(), 500);
        assert_eq!(parse_amount("1.5 L").unwrap(), 1500);
        assert_eq!(parse_amount("0.33l").unwrap(), 330);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_amount("a glass"),
            Err(ParseAmountError::Malformed(_))
        ));
        assert!(matches!(
            parse_amount("250oz"),
            Err(ParseAmountError::Malformed(_))
        ));
        assert!(matches!(
            parse_amount("ml"),
            Err(ParseAmountError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_fractional_millilitres() {
        assert!(matches!(
            parse_amount("12.5"),
            Err(ParseAmountError::FractionalMillilitres(_))
        ));
        assert!(matches!(
            parse_amount("12.5ml"),
            Err(ParseAmountError::FractionalMillilitres(_))
        ));
    }

    #[test]
    fn test_parse_rejects_oversized_values() {
        assert!(matches!(
            parse_amount("99999999999"),
            Err(ParseAmountError::TooLarge(_))
        ));
        assert!(matches!(
            parse_amount("5000000l"),
            Err(ParseAmountError::TooLarge(_))
        ));
    }

    #[test]
    fn test_format_ml() {
        assert_eq!(format_ml(0), "0 ml");
        assert_eq!(format_ml(750), "750 ml");
        assert_eq!(format_ml(1000), "1 L");
        assert_eq!(format_ml(2000), "2 L");
        assert_eq!(format_ml(2500), "2.5 L");
        assert_eq!(format_ml(1234), "1234 ml");
    }
}
