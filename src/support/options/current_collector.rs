use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Current collector submodel choice.
///
/// `uniform` assumes a uniform current distribution and is only meaningful
/// for a zero-dimensional collector; `potential pair` resolves the
/// collector potentials over one or two transverse dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentCollector {
    /// Uniform current distribution.
    #[default]
    #[serde(rename = "uniform")]
    Uniform,

    /// Resolved negative and positive collector potentials.
    #[serde(rename = "potential pair")]
    PotentialPair,
}

impl CurrentCollector {
    pub const OPTION: &'static str = "current collector";

    pub const ALLOWED: &'static [&'static str] = &["uniform", "potential pair"];
}

impl FromStr for CurrentCollector {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "potential pair" => Ok(Self::PotentialPair),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for CurrentCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uniform => "uniform",
            Self::PotentialPair => "potential pair",
        })
    }
}
