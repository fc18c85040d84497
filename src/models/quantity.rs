use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9.]+)([a-zA-Z]*)$").expect("quantity pattern must compile")
});

/// A free-text quantity such as `50g` or `1.5tbsp`, split into its numeric
/// value and unit suffix. The unit may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    /// Parse `<digits/decimal><optional letters>`
    ///
    /// Surrounding whitespace is ignored. Anything else, including negative
    /// numbers, exponents and embedded spaces, is rejected.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError {
            quantity: input.to_string(),
        };

        let captures = QUANTITY_PATTERN.captures(input.trim()).ok_or_else(invalid)?;

        // The digit run may still be something like "1.2.3" or "."
        let value = captures[1].parse::<f64>().map_err(|_| invalid())?;

        Ok(Self {
            value,
            unit: captures[2].to_string(),
        })
    }
}

impl FromStr for Quantity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("50g", 50.0, "g")]
    #[case("1.5tbsp", 1.5, "tbsp")]
    #[case("3", 3.0, "")]
    #[case("  250ml ", 250.0, "ml")]
    #[case("0.25KG", 0.25, "KG")]
    fn test_parse_valid_quantity(#[case] input: &str, #[case] value: f64, #[case] unit: &str) {
        let quantity = Quantity::parse(input).expect("Failed to parse quantity");

        assert_eq!(quantity.value, value);
        assert_eq!(quantity.unit, unit);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("g50")]
    #[case("-5g")]
    #[case("1e3g")]
    #[case("50 g")]
    #[case("1.2.3g")]
    #[case(".")]
    #[case("5g2")]
    #[case("½cup")]
    fn test_parse_invalid_quantity(#[case] input: &str) {
        let result = Quantity::parse(input);

        assert_eq!(
            result,
            Err(ParseError {
                quantity: input.to_string()
            })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let error = Quantity::parse("a pinch").unwrap_err();

        assert_eq!(error.to_string(), "Invalid quantity format: a pinch");
    }

    #[test]
    fn test_from_str_and_display() {
        let quantity: Quantity = "12.5oz".parse().expect("Failed to parse quantity");

        assert_eq!(quantity.to_string(), "12.5oz");
    }
}
