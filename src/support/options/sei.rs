use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Solid-electrolyte interphase growth submodel choice.
///
/// Each non-`none` value names the rate-limiting mechanism for SEI layer
/// growth on the negative electrode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeiModel {
    /// No SEI layer is modelled.
    #[default]
    #[serde(rename = "none")]
    None,

    /// Growth limited by the interfacial reaction rate.
    #[serde(rename = "reaction limited")]
    ReactionLimited,

    /// Growth limited by solvent diffusion through the layer.
    #[serde(rename = "solvent-diffusion limited")]
    SolventDiffusionLimited,

    /// Growth limited by electron migration through the layer.
    #[serde(rename = "electron-migration limited")]
    ElectronMigrationLimited,

    /// Growth limited by lithium-interstitial diffusion.
    #[serde(rename = "interstitial-diffusion limited")]
    InterstitialDiffusionLimited,

    /// Growth limited by the ethylene carbonate reaction, with the EC
    /// concentration at the surface resolved as an algebraic state.
    #[serde(rename = "ec reaction limited")]
    EcReactionLimited,
}

impl SeiModel {
    pub const OPTION: &'static str = "sei";

    pub const ALLOWED: &'static [&'static str] = &[
        "none",
        "reaction limited",
        "solvent-diffusion limited",
        "electron-migration limited",
        "interstitial-diffusion limited",
        "ec reaction limited",
    ];
}

impl FromStr for SeiModel {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "reaction limited" => Ok(Self::ReactionLimited),
            "solvent-diffusion limited" => Ok(Self::SolventDiffusionLimited),
            "electron-migration limited" => Ok(Self::ElectronMigrationLimited),
            "interstitial-diffusion limited" => Ok(Self::InterstitialDiffusionLimited),
            "ec reaction limited" => Ok(Self::EcReactionLimited),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for SeiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::ReactionLimited => "reaction limited",
            Self::SolventDiffusionLimited => "solvent-diffusion limited",
            Self::ElectronMigrationLimited => "electron-migration limited",
            Self::InterstitialDiffusionLimited => "interstitial-diffusion limited",
            Self::EcReactionLimited => "ec reaction limited",
        })
    }
}
