use std::collections::{BTreeMap, btree_map::Entry};

use thiserror::Error;

use crate::support::{
    submodels::{Contribution, PhysicalDomain},
    system::{
        AssembledModel, BoundaryCondition, CouplingGraph, EquationRecord, InitialCondition,
        VariableId,
    },
};

/// An internal consistency defect discovered while merging contributions.
///
/// Two submodel variants both claimed to govern the same variable. This
/// indicates a defect in the variant catalog, not in user input; it should
/// never occur when a family's rule table and catalog agree, but the merge
/// detects it rather than silently overwriting either equation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate governing equation for {variable}: contributed by both {first} and {second}")]
pub struct AssemblyFault {
    /// The variable claimed twice.
    pub variable: VariableId,

    /// The domain whose equation was merged first.
    pub first: PhysicalDomain,

    /// The domain whose competing equation triggered the fault.
    pub second: PhysicalDomain,
}

/// Merges submodel contributions into one coupled system.
///
/// Purely structural: records are collected into deterministic (ordered)
/// maps and the produce/consume coupling graph is built, but nothing is
/// evaluated or reordered. Assembling the same contributions twice yields
/// structurally identical models.
///
/// # Errors
///
/// Returns [`AssemblyFault`] if two contributions govern the same variable.
pub fn assemble<I>(contributions: I) -> Result<AssembledModel, AssemblyFault>
where
    I: IntoIterator<Item = (PhysicalDomain, Contribution)>,
{
    let mut equations = BTreeMap::new();
    let mut initial_conditions = BTreeMap::new();
    let mut boundary_conditions: BTreeMap<VariableId, Vec<BoundaryCondition>> = BTreeMap::new();
    let mut coupling = CouplingGraph::new();

    for (domain, contribution) in contributions {
        for (variable, kind) in contribution.equations {
            match equations.entry(variable) {
                Entry::Occupied(existing) => {
                    let existing: &EquationRecord = existing.get();
                    return Err(AssemblyFault {
                        variable,
                        first: existing.contributed_by,
                        second: domain,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(EquationRecord {
                        variable,
                        kind,
                        contributed_by: domain,
                    });
                }
            }
            coupling.add_producer(domain, variable);
        }

        for variable in contribution.initial_conditions {
            initial_conditions.insert(variable, InitialCondition { variable });
        }
        for condition in contribution.boundary_conditions {
            boundary_conditions
                .entry(condition.variable)
                .or_default()
                .push(condition);
        }

        for variable in contribution.derived {
            coupling.add_producer(domain, variable);
        }
        for variable in contribution.consumed {
            coupling.add_consumption(domain, variable);
        }
    }

    coupling.connect();

    Ok(AssembledModel::new(
        equations,
        initial_conditions,
        boundary_conditions,
        coupling,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::system::{EquationKind, Region};

    const STATE: VariableId = VariableId::new("state", Region::Cell);
    const OUTPUT: VariableId = VariableId::new("output", Region::Cell);

    #[test]
    fn merges_contributions_from_separate_domains() {
        let model = assemble([
            (
                PhysicalDomain::Thermal,
                Contribution::none().ode(STATE).derives(OUTPUT),
            ),
            (
                PhysicalDomain::Particle,
                Contribution::none().consumes(OUTPUT),
            ),
        ])
        .expect("merge should succeed");

        assert_eq!(model.equations().count(), 1);
        assert_eq!(model.equation(&STATE).map(|e| e.kind), Some(EquationKind::Ode));
        assert!(model.initial_condition(&STATE).is_some());
        assert_eq!(
            model.coupling().producers_of(&OUTPUT),
            &[PhysicalDomain::Thermal]
        );
        assert!(model.coupling().consumes(PhysicalDomain::Particle, &OUTPUT));
    }

    #[test]
    fn duplicate_governing_equation_is_a_fault() {
        let fault = assemble([
            (PhysicalDomain::Thermal, Contribution::none().ode(STATE)),
            (PhysicalDomain::Sei, Contribution::none().algebraic(STATE)),
        ])
        .unwrap_err();

        assert_eq!(
            fault,
            AssemblyFault {
                variable: STATE,
                first: PhysicalDomain::Thermal,
                second: PhysicalDomain::Sei,
            }
        );
    }

    #[test]
    fn duplicate_claim_within_one_contribution_is_also_a_fault() {
        let fault = assemble([(
            PhysicalDomain::Thermal,
            Contribution::none().ode(STATE).algebraic(STATE),
        )])
        .unwrap_err();

        assert_eq!(fault.variable, STATE);
        assert_eq!(fault.first, fault.second);
    }
}
