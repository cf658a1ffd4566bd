use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Particle cracking submodel choice.
///
/// `no cracking` computes mechanical stresses without crack growth; the
/// electrode values add a crack-length state on the named electrode(s).
/// All values other than `none` require Fickian particle diffusion, since
/// the stress model needs the resolved concentration profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleCracking {
    /// No mechanics are modelled.
    #[default]
    #[serde(rename = "none")]
    None,

    /// Stresses are computed but cracks do not grow.
    #[serde(rename = "no cracking")]
    NoCracking,

    /// Crack growth on the negative electrode only.
    #[serde(rename = "anode")]
    Anode,

    /// Crack growth on the positive electrode only.
    #[serde(rename = "cathode")]
    Cathode,

    /// Crack growth on both electrodes.
    #[serde(rename = "both")]
    Both,
}

impl ParticleCracking {
    pub const OPTION: &'static str = "particle cracking";

    pub const ALLOWED: &'static [&'static str] =
        &["none", "no cracking", "anode", "cathode", "both"];

    /// Whether this choice engages the mechanics submodel at all.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for ParticleCracking {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "no cracking" => Ok(Self::NoCracking),
            "anode" => Ok(Self::Anode),
            "cathode" => Ok(Self::Cathode),
            "both" => Ok(Self::Both),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for ParticleCracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::NoCracking => "no cracking",
            Self::Anode => "anode",
            Self::Cathode => "cathode",
            Self::Both => "both",
        })
    }
}
