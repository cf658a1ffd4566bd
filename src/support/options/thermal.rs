use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::options::OptionError;

/// Thermal submodel choice.
///
/// The thermal treatment ranges from no thermal physics at all to a full
/// through-cell temperature profile. The x-resolved variants interact with
/// [`Dimensionality`](crate::support::options::Dimensionality): `x-full` is
/// only implemented for a zero-dimensional current collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thermal {
    /// The cell is held at ambient temperature; no thermal equations.
    #[default]
    #[serde(rename = "isothermal")]
    Isothermal,

    /// A single volume-averaged cell temperature.
    #[serde(rename = "lumped")]
    Lumped,

    /// Temperature averaged through the cell thickness, resolved over the
    /// current collector when the collector is one- or two-dimensional.
    #[serde(rename = "x-lumped")]
    XLumped,

    /// Temperature resolved through the cell thickness.
    #[serde(rename = "x-full")]
    XFull,
}

impl Thermal {
    /// The option name this enum answers for.
    pub const OPTION: &'static str = "thermal";

    /// The legal value set, in canonical form.
    pub const ALLOWED: &'static [&'static str] = &["isothermal", "lumped", "x-lumped", "x-full"];
}

impl FromStr for Thermal {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isothermal" => Ok(Self::Isothermal),
            "lumped" => Ok(Self::Lumped),
            "x-lumped" => Ok(Self::XLumped),
            "x-full" => Ok(Self::XFull),
            other => Err(OptionError::invalid_value(
                Self::OPTION,
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for Thermal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Isothermal => "isothermal",
            Self::Lumped => "lumped",
            Self::XLumped => "x-lumped",
            Self::XFull => "x-full",
        })
    }
}
