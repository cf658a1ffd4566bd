use std::fmt;

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Transverse dimensionality of the current collector.
///
/// Zero means the through-cell problem alone; one and two add resolved
/// transverse dimensions and require a potential-pair collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    /// No transverse dimensions.
    #[default]
    Zero,

    /// One transverse dimension.
    One,

    /// Two transverse dimensions.
    Two,
}

impl Dimensionality {
    pub const OPTION: &'static str = "dimensionality";

    pub const ALLOWED: &'static [&'static str] = &["0", "1", "2"];

    /// The dimensionality as a plain integer.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Whether any transverse dimension is resolved.
    pub fn is_transverse(self) -> bool {
        !matches!(self, Self::Zero)
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = OptionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Dimensionality {
    type Error = OptionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other.to_string(),
                Self::ALLOWED,
            )),
        }
    }
}

impl From<Dimensionality> for u8 {
    fn from(value: Dimensionality) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_legal_values() {
        assert_eq!(Dimensionality::try_from(0_i64), Ok(Dimensionality::Zero));
        assert_eq!(Dimensionality::try_from(1_i64), Ok(Dimensionality::One));
        assert_eq!(Dimensionality::try_from(2_i64), Ok(Dimensionality::Two));
    }

    #[test]
    fn rejects_out_of_range_value_naming_the_option() {
        let error = Dimensionality::try_from(5_i64).unwrap_err();
        match error {
            OptionError::InvalidValue { option, given, .. } => {
                assert_eq!(option, "dimensionality");
                assert_eq!(given, "5");
            }
            other => panic!("expected InvalidValue, got: {other:?}"),
        }
    }
}
