//! Label value (one entry of a label's value range)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single permitted value of a label together with its description
///
/// The text form is the signed value followed by the description, as it
/// appears in project configuration:
///
/// ```
/// use labelgate_domain::LabelValue;
///
/// let value: LabelValue = "+2 Looks good to me, approved".parse().unwrap();
/// assert_eq!(value.value, 2);
/// assert_eq!(value.text, "Looks good to me, approved");
/// assert_eq!(value.to_string(), "+2 Looks good to me, approved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelValue {
    /// The numeric vote value
    pub value: i16,
    /// Human-readable description
    pub text: String,
}

impl LabelValue {
    pub fn new(value: i16, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    /// Format a vote value with an explicit sign for positive values
    ///
    /// E.g., `1` -> `"+1"`, `0` -> `"0"`, `-2` -> `"-2"`
    pub fn format_value(value: i16) -> String {
        if value > 0 {
            format!("+{}", value)
        } else {
            value.to_string()
        }
    }
}

impl std::fmt::Display for LabelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", Self::format_value(self.value))
        } else {
            write!(f, "{} {}", Self::format_value(self.value), self.text)
        }
    }
}

impl std::str::FromStr for LabelValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, text) = match trimmed.split_once(char::is_whitespace) {
            Some((number, text)) => (number, text.trim()),
            None => (trimmed, ""),
        };

        let number = number.strip_prefix('+').unwrap_or(number);
        let value: i16 = number
            .parse()
            .map_err(|_| DomainError::InvalidLabelValue(s.to_string()))?;

        Ok(Self::new(value, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_negative_zero() {
        let plus: LabelValue = "+1 Positive".parse().unwrap();
        assert_eq!(plus, LabelValue::new(1, "Positive"));

        let zero: LabelValue = "0 No score".parse().unwrap();
        assert_eq!(zero, LabelValue::new(0, "No score"));

        let minus: LabelValue = "-1 Negative".parse().unwrap();
        assert_eq!(minus, LabelValue::new(-1, "Negative"));
    }

    #[test]
    fn test_parse_unsigned_and_bare() {
        assert_eq!("2 Approved".parse::<LabelValue>().unwrap().value, 2);

        let bare: LabelValue = " -2 ".parse().unwrap();
        assert_eq!(bare, LabelValue::new(-2, ""));
    }

    #[test]
    fn test_parse_collapses_description_padding() {
        let value: LabelValue = "+1    Works for me".parse().unwrap();
        assert_eq!(value.text, "Works for me");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("Positive".parse::<LabelValue>().is_err());
        assert!("".parse::<LabelValue>().is_err());
        assert!("+ 1 Positive".parse::<LabelValue>().is_err());
        assert!("99999 Too big".parse::<LabelValue>().is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(LabelValue::format_value(2), "+2");
        assert_eq!(LabelValue::format_value(0), "0");
        assert_eq!(LabelValue::format_value(-1), "-1");
    }

    #[test]
    fn test_display_without_text() {
        assert_eq!(LabelValue::new(-1, "").to_string(), "-1");
    }
}
