use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Electrolyte conductivity treatment.
///
/// `full` is a legal value of the option domain but has no implemented
/// variant in the SPMe family; selecting it is a capability gap, reported
/// by the family's rule table rather than here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectrolyteConductivity {
    /// Composite leading-order conductivity with per-region potentials.
    #[default]
    #[serde(rename = "default")]
    Default,

    /// Fully coupled conductivity (not implemented for this family).
    #[serde(rename = "full")]
    Full,

    /// Integrated conductivity with a single ohmic drop over the cell.
    #[serde(rename = "integrated")]
    Integrated,
}

impl ElectrolyteConductivity {
    pub const OPTION: &'static str = "electrolyte conductivity";

    pub const ALLOWED: &'static [&'static str] = &["default", "full", "integrated"];
}

impl FromStr for ElectrolyteConductivity {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "full" => Ok(Self::Full),
            "integrated" => Ok(Self::Integrated),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for ElectrolyteConductivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Full => "full",
            Self::Integrated => "integrated",
        })
    }
}

/// Surface-form treatment of the interfacial current.
///
/// Only `false` (no capacitance term) is implemented for this model family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceForm {
    /// No surface capacitance; the standard charge-conservation form.
    #[default]
    #[serde(rename = "false")]
    False,

    /// Differential surface capacitance (not implemented).
    #[serde(rename = "differential")]
    Differential,

    /// Algebraic surface form (not implemented).
    #[serde(rename = "algebraic")]
    Algebraic,
}

impl SurfaceForm {
    pub const OPTION: &'static str = "surface form";

    pub const ALLOWED: &'static [&'static str] = &["false", "differential", "algebraic"];
}

impl FromStr for SurfaceForm {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" => Ok(Self::False),
            "differential" => Ok(Self::Differential),
            "algebraic" => Ok(Self::Algebraic),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for SurfaceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::False => "false",
            Self::Differential => "differential",
            Self::Algebraic => "algebraic",
        })
    }
}
