use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Particle concentration submodel choice.
///
/// Fickian diffusion resolves the concentration through the particle
/// radius; the profile variants reduce it to one or two averaged states per
/// electrode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Particle {
    /// Concentration resolved through the particle radius.
    #[default]
    #[serde(rename = "Fickian diffusion")]
    FickianDiffusion,

    /// A single averaged concentration per electrode.
    #[serde(rename = "uniform profile")]
    UniformProfile,

    /// A quadratic concentration profile, tracked by its average.
    #[serde(rename = "quadratic profile")]
    QuadraticProfile,

    /// A quartic concentration profile, tracked by its average and the
    /// average of its gradient.
    #[serde(rename = "quartic profile")]
    QuarticProfile,
}

impl Particle {
    pub const OPTION: &'static str = "particle";

    pub const ALLOWED: &'static [&'static str] = &[
        "Fickian diffusion",
        "uniform profile",
        "quadratic profile",
        "quartic profile",
    ];
}

impl FromStr for Particle {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fickian diffusion" => Ok(Self::FickianDiffusion),
            "uniform profile" => Ok(Self::UniformProfile),
            "quadratic profile" => Ok(Self::QuadraticProfile),
            "quartic profile" => Ok(Self::QuarticProfile),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FickianDiffusion => "Fickian diffusion",
            Self::UniformProfile => "uniform profile",
            Self::QuadraticProfile => "quadratic profile",
            Self::QuarticProfile => "quartic profile",
        })
    }
}

/// Particle geometry choice.
///
/// Affects how surface area to volume ratios are derived; it parameterizes
/// the particle variant and contributes no equations of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleShape {
    /// Spherical particles with geometry-derived surface area.
    #[default]
    #[serde(rename = "spherical")]
    Spherical,

    /// User-supplied surface area to volume ratio.
    #[serde(rename = "user")]
    User,
}

impl ParticleShape {
    pub const OPTION: &'static str = "particle shape";

    pub const ALLOWED: &'static [&'static str] = &["spherical", "user"];
}

impl FromStr for ParticleShape {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spherical" => Ok(Self::Spherical),
            "user" => Ok(Self::User),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for ParticleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spherical => "spherical",
            Self::User => "user",
        })
    }
}
