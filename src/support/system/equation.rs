use std::fmt;

use serde::{Deserialize, Serialize};

use crate::support::submodels::PhysicalDomain;

/// A named region of the cell to which variables and equations belong.
///
/// Not to be confused with a physical domain
/// ([`PhysicalDomain`]), which names the mechanism whose submodel
/// contributed an equation; a single submodel routinely contributes
/// equations across several regions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Region {
    /// The negative electrode, through the cell thickness.
    NegativeElectrode,

    /// The separator.
    Separator,

    /// The positive electrode, through the cell thickness.
    PositiveElectrode,

    /// The representative negative-electrode particle, through its radius.
    NegativeParticle,

    /// The representative positive-electrode particle, through its radius.
    PositiveParticle,

    /// The current collector plane.
    CurrentCollector,

    /// The cell as a whole, for volume-averaged quantities.
    Cell,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NegativeElectrode => "negative electrode",
            Self::Separator => "separator",
            Self::PositiveElectrode => "positive electrode",
            Self::NegativeParticle => "negative particle",
            Self::PositiveParticle => "positive particle",
            Self::CurrentCollector => "current collector",
            Self::Cell => "cell",
        })
    }
}

/// Identifies one quantity within a region.
///
/// Variable names come from the static catalog in
/// [`variables`](crate::support::submodels::variables); the pair of name
/// and region is globally unique across an assembled system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VariableId {
    /// The variable's name.
    pub name: &'static str,

    /// The region the variable lives in.
    pub region: Region,
}

impl VariableId {
    /// Builds a variable identifier.
    pub const fn new(name: &'static str, region: Region) -> Self {
        Self { name, region }
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}

/// The structural kind of a governing equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquationKind {
    /// No time derivative and no spatial operator. Takes no initial or
    /// boundary conditions.
    Algebraic,

    /// First-order in time with no spatial operator. Takes exactly one
    /// initial condition.
    Ode,

    /// First-order in time with a second-order spatial operator over the
    /// variable's region. Takes exactly one initial condition and one
    /// boundary condition per boundary side.
    Pde,
}

impl EquationKind {
    /// Whether the equation involves a time derivative.
    pub fn is_differential(self) -> bool {
        matches!(self, Self::Ode | Self::Pde)
    }

    /// Whether the equation involves a spatial operator.
    pub fn has_spatial_operator(self) -> bool {
        matches!(self, Self::Pde)
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Algebraic => "algebraic",
            Self::Ode => "ODE",
            Self::Pde => "PDE",
        })
    }
}

/// One governing equation in the assembled system.
///
/// The unknown-to-equation relationship is one-to-one in a well-posed
/// system; the assembler enforces uniqueness at merge time and the checker
/// re-verifies the rest of the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationRecord {
    /// The unknown this equation governs.
    pub variable: VariableId,

    /// The equation's structural kind.
    pub kind: EquationKind,

    /// The physical domain whose submodel contributed the equation.
    pub contributed_by: PhysicalDomain,
}

impl EquationRecord {
    /// The region the governed unknown lives in.
    pub fn region(&self) -> Region {
        self.variable.region
    }
}
