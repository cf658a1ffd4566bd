use std::collections::BTreeMap;

use crate::support::system::{
    BoundaryCondition, CouplingGraph, EquationRecord, InitialCondition, VariableId,
};

/// The merged, read-only system of equations, conditions, and couplings.
///
/// Produced once by [`assemble`](crate::support::system::assemble),
/// verified by the well-posedness checker, and consumed by downstream
/// discretization and solver stages. All iteration orders are
/// deterministic: variables are visited in their natural order regardless
/// of the order contributions were merged in.
#[derive(Debug, Clone)]
pub struct AssembledModel {
    equations: BTreeMap<VariableId, EquationRecord>,
    initial_conditions: BTreeMap<VariableId, InitialCondition>,
    boundary_conditions: BTreeMap<VariableId, Vec<BoundaryCondition>>,
    coupling: CouplingGraph,
}

impl AssembledModel {
    pub(crate) fn new(
        equations: BTreeMap<VariableId, EquationRecord>,
        initial_conditions: BTreeMap<VariableId, InitialCondition>,
        boundary_conditions: BTreeMap<VariableId, Vec<BoundaryCondition>>,
        coupling: CouplingGraph,
    ) -> Self {
        Self {
            equations,
            initial_conditions,
            boundary_conditions,
            coupling,
        }
    }

    /// The governing equation for `variable`, if it is an unknown.
    pub fn equation(&self, variable: &VariableId) -> Option<&EquationRecord> {
        self.equations.get(variable)
    }

    /// Every governing equation, in variable order.
    pub fn equations(&self) -> impl Iterator<Item = &EquationRecord> {
        self.equations.values()
    }

    /// Every unknown, in variable order.
    pub fn variables(&self) -> impl Iterator<Item = &VariableId> {
        self.equations.keys()
    }

    /// The number of unknowns (equal to the number of equations).
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Whether the system is empty.
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// The initial condition attached to `variable`, if any.
    pub fn initial_condition(&self, variable: &VariableId) -> Option<&InitialCondition> {
        self.initial_conditions.get(variable)
    }

    /// Every initial condition, in variable order.
    pub fn initial_conditions(&self) -> impl Iterator<Item = &InitialCondition> {
        self.initial_conditions.values()
    }

    /// The boundary conditions attached to `variable`; empty if none.
    pub fn boundary_conditions_of(&self, variable: &VariableId) -> &[BoundaryCondition] {
        self.boundary_conditions
            .get(variable)
            .map_or(&[], Vec::as_slice)
    }

    /// Every boundary condition, grouped by variable in variable order.
    pub fn boundary_conditions(&self) -> impl Iterator<Item = &BoundaryCondition> {
        self.boundary_conditions.values().flatten()
    }

    /// Variables that have conditions attached, in variable order.
    pub(crate) fn condition_targets(&self) -> impl Iterator<Item = &VariableId> {
        self.initial_conditions
            .keys()
            .chain(self.boundary_conditions.keys())
    }

    /// The produce/consume coupling graph between physical domains.
    pub fn coupling(&self) -> &CouplingGraph {
        &self.coupling
    }
}
