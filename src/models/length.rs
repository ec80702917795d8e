use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A CSS length usable for spacing properties such as `margin-top`.
///
/// Colour keywords and other non-length values cannot be represented, so a
/// value like `"Green"` is rejected at parse time instead of being silently
/// dropped by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Em(f32),
    Percent(f32),
}

/// Why a string could not be read as a [`Length`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("empty length value")]
    Empty,
    #[error("`{0}` is not a number followed by a unit")]
    NotALength(String),
    #[error("unsupported unit `{unit}` in `{value}`")]
    UnsupportedUnit { value: String, unit: String },
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);

    /// Parse a CSS length such as `12px`, `1.5rem` or a bare `0`.
    pub fn parse(value: &str) -> Result<Self, LengthError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(LengthError::Empty);
        }

        let split = value
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(value.len());
        let (number, unit) = value.split_at(split);

        let number: f32 = number
            .parse()
            .map_err(|_| LengthError::NotALength(value.to_string()))?;
        if !number.is_finite() {
            return Err(LengthError::NotALength(value.to_string()));
        }

        match unit.to_ascii_lowercase().as_str() {
            // Unitless lengths are only valid for zero
            "" if number == 0.0 => Ok(Self::ZERO),
            "" => Err(LengthError::NotALength(value.to_string())),
            "px" => Ok(Self::Px(number)),
            "rem" => Ok(Self::Rem(number)),
            "em" => Ok(Self::Em(number)),
            "%" => Ok(Self::Percent(number)),
            other => Err(LengthError::UnsupportedUnit {
                value: value.to_string(),
                unit: other.to_string(),
            }),
        }
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Rem(v) => write!(f, "{v}rem"),
            Self::Em(v) => write!(f, "{v}em"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}
