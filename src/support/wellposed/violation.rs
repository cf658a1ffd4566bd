use std::fmt;

use thiserror::Error;

use crate::support::{
    submodels::PhysicalDomain,
    system::{BoundarySide, VariableId},
};

/// One structural defect found by the well-posedness checker.
///
/// Each variant carries the variable (and, where relevant, the boundary
/// side or the domains involved) so a defect can be diagnosed without
/// re-running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A condition references a variable with no governing equation.
    #[error("condition attached to {variable}, which has no governing equation")]
    ConditionWithoutEquation { variable: VariableId },

    /// A differential variable has no initial condition.
    #[error("differential variable {variable} has no initial condition")]
    MissingInitialCondition { variable: VariableId },

    /// An algebraic variable has an initial condition.
    #[error("algebraic variable {variable} has an initial condition")]
    InitialConditionOnAlgebraic { variable: VariableId },

    /// A PDE variable is missing a boundary condition on one side.
    #[error("PDE variable {variable} has no boundary condition on the {side} side")]
    MissingBoundaryCondition {
        variable: VariableId,
        side: BoundarySide,
    },

    /// A PDE variable has more than one boundary condition on one side.
    #[error("PDE variable {variable} has more than one boundary condition on the {side} side")]
    ExcessBoundaryCondition {
        variable: VariableId,
        side: BoundarySide,
    },

    /// A variable without a spatial operator has boundary conditions.
    #[error("{variable} has boundary conditions but no spatial operator")]
    BoundaryConditionWithoutOperator { variable: VariableId },

    /// A consumed coupling variable is produced by no domain.
    #[error("the {consumer} domain consumes {variable}, which nothing produces")]
    DanglingCoupling {
        consumer: PhysicalDomain,
        variable: VariableId,
    },

    /// A consumed coupling variable is produced by more than one domain.
    #[error("{variable} is produced by more than one domain: {producers:?}")]
    AmbiguousProducer {
        variable: VariableId,
        producers: Vec<PhysicalDomain>,
    },
}

/// The checker's verdict when a model is not well posed.
///
/// Carries every violation found in the checking pass, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct WellPosednessError {
    violations: Vec<Violation>,
}

impl WellPosednessError {
    /// Wraps a non-empty list of violations.
    ///
    /// # Panics
    ///
    /// Panics if `violations` is empty; an empty list means the model is
    /// well posed and no error should be built at all.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        assert!(
            !violations.is_empty(),
            "WellPosednessError requires at least one violation"
        );
        Self { violations }
    }

    /// Every violation found, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for WellPosednessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "model is not well posed ({} violation{}): ",
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" }
        )?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
