use std::fmt;

use serde::{Deserialize, Serialize};

use crate::support::system::VariableId;

/// Which boundary of a region a condition applies to.
///
/// For through-thickness and particle regions these are the inner and
/// outer ends of the 1-D domain; for the current collector plane they are
/// the negative and positive tab boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BoundarySide {
    Left,
    Right,
}

impl fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// The mathematical kind of a boundary condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    /// Fixed value.
    Dirichlet,

    /// Fixed flux.
    Neumann,

    /// A linear combination of value and flux.
    Robin,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dirichlet => "Dirichlet",
            Self::Neumann => "Neumann",
            Self::Robin => "Robin",
        })
    }
}

/// A boundary condition attached to a PDE variable's region.
///
/// A second-order spatial operator needs exactly one condition per
/// boundary side; the well-posedness checker verifies the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCondition {
    /// The PDE variable the condition constrains.
    pub variable: VariableId,

    /// The boundary side the condition applies to.
    pub side: BoundarySide,

    /// The condition's kind.
    pub kind: ConditionKind,
}

/// An initial condition for a time-differential variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialCondition {
    /// The differential variable the condition initializes.
    pub variable: VariableId,
}
