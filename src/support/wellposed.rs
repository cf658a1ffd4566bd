//! Structural well-posedness checking.
//!
//! [`check`] is a static proof over an [`AssembledModel`], analogous to a
//! type-checker pass: it verifies that the system has exactly the
//! equations, initial conditions, and boundary conditions needed to
//! determine a unique solution, without evaluating anything. All
//! violations are collected in one pass rather than stopping at the first.

mod violation;

pub use violation::{Violation, WellPosednessError};

use crate::support::system::{AssembledModel, BoundarySide};

/// Verifies the structural well-posedness of an assembled model.
///
/// Four independent passes are made over the model:
///
/// 1. every condition targets a variable with a governing equation;
/// 2. every differential variable has exactly one initial condition and
///    every algebraic variable has none;
/// 3. every PDE variable has exactly one boundary condition per boundary
///    side and non-spatial variables have none;
/// 4. every consumed coupling variable is produced by exactly one domain.
///
/// # Errors
///
/// Returns a [`WellPosednessError`] carrying every violation found.
pub fn check(model: &AssembledModel) -> Result<(), WellPosednessError> {
    let mut violations = Vec::new();

    check_condition_targets(model, &mut violations);
    check_initial_conditions(model, &mut violations);
    check_boundary_conditions(model, &mut violations);
    check_dependency_closure(model, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(WellPosednessError::new(violations))
    }
}

/// A condition on a variable nothing governs is either a leftover or a
/// mis-spelled coupling; both break the one-equation-per-unknown balance.
fn check_condition_targets(model: &AssembledModel, violations: &mut Vec<Violation>) {
    let mut reported = Vec::new();
    for variable in model.condition_targets() {
        if model.equation(variable).is_none() && !reported.contains(variable) {
            reported.push(*variable);
            violations.push(Violation::ConditionWithoutEquation {
                variable: *variable,
            });
        }
    }
}

fn check_initial_conditions(model: &AssembledModel, violations: &mut Vec<Violation>) {
    for equation in model.equations() {
        let has_initial = model.initial_condition(&equation.variable).is_some();
        if equation.kind.is_differential() && !has_initial {
            violations.push(Violation::MissingInitialCondition {
                variable: equation.variable,
            });
        }
        if !equation.kind.is_differential() && has_initial {
            // Either redundant or over-constraining; both are defects.
            violations.push(Violation::InitialConditionOnAlgebraic {
                variable: equation.variable,
            });
        }
    }
}

fn check_boundary_conditions(model: &AssembledModel, violations: &mut Vec<Violation>) {
    for equation in model.equations() {
        let conditions = model.boundary_conditions_of(&equation.variable);

        if !equation.kind.has_spatial_operator() {
            if !conditions.is_empty() {
                violations.push(Violation::BoundaryConditionWithoutOperator {
                    variable: equation.variable,
                });
            }
            continue;
        }

        // A second-order operator needs exactly one condition per side.
        for side in [BoundarySide::Left, BoundarySide::Right] {
            match conditions.iter().filter(|c| c.side == side).count() {
                0 => violations.push(Violation::MissingBoundaryCondition {
                    variable: equation.variable,
                    side,
                }),
                1 => {}
                _ => violations.push(Violation::ExcessBoundaryCondition {
                    variable: equation.variable,
                    side,
                }),
            }
        }
    }
}

fn check_dependency_closure(model: &AssembledModel, violations: &mut Vec<Violation>) {
    let coupling = model.coupling();
    for (consumer, variable) in coupling.consumptions() {
        match coupling.producers_of(variable) {
            [] => violations.push(Violation::DanglingCoupling {
                consumer: *consumer,
                variable: *variable,
            }),
            [_] => {}
            producers => violations.push(Violation::AmbiguousProducer {
                variable: *variable,
                producers: producers.to_vec(),
            }),
        }
    }
}
