use crate::support::system::{
    BoundaryCondition, BoundarySide, ConditionKind, EquationKind, VariableId,
};

/// The structural contribution of one submodel variant.
///
/// Everything a variant adds to the assembled system, as plain records:
/// which unknowns it governs and how, which conditions it attaches, and
/// which variables it produces for or consumes from other domains.
/// Governed unknowns are implicitly produced; [`derives`](Self::derives) is
/// for outputs a variant computes without governing them as unknowns (e.g.
/// a surface concentration read off a resolved profile).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    /// Governing equations, one per unknown.
    pub equations: Vec<(VariableId, EquationKind)>,

    /// Initial conditions for the variant's differential unknowns.
    pub initial_conditions: Vec<VariableId>,

    /// Boundary conditions for the variant's PDE unknowns.
    pub boundary_conditions: Vec<BoundaryCondition>,

    /// Derived outputs made available to other domains.
    pub derived: Vec<VariableId>,

    /// Variables required from other domains.
    pub consumed: Vec<VariableId>,
}

impl Contribution {
    /// An empty contribution, for variants that model nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a governing equation without conditions.
    pub fn equation(mut self, variable: VariableId, kind: EquationKind) -> Self {
        self.equations.push((variable, kind));
        self
    }

    /// Adds an algebraic equation for `variable`.
    pub fn algebraic(self, variable: VariableId) -> Self {
        self.equation(variable, EquationKind::Algebraic)
    }

    /// Adds an ODE for `variable` together with its initial condition.
    pub fn ode(mut self, variable: VariableId) -> Self {
        self.initial_conditions.push(variable);
        self.equation(variable, EquationKind::Ode)
    }

    /// Adds a second-order PDE for `variable` together with its initial
    /// condition and one boundary condition per side.
    pub fn diffusion_pde(
        mut self,
        variable: VariableId,
        left: ConditionKind,
        right: ConditionKind,
    ) -> Self {
        self.initial_conditions.push(variable);
        self.boundary_conditions.push(BoundaryCondition {
            variable,
            side: BoundarySide::Left,
            kind: left,
        });
        self.boundary_conditions.push(BoundaryCondition {
            variable,
            side: BoundarySide::Right,
            kind: right,
        });
        self.equation(variable, EquationKind::Pde)
    }

    /// Adds a standalone initial condition.
    ///
    /// Normally [`ode`](Self::ode) and [`diffusion_pde`](Self::diffusion_pde)
    /// attach conditions; this is the low-level escape hatch, which the
    /// checker tests also use to build defective systems.
    pub fn initial_condition(mut self, variable: VariableId) -> Self {
        self.initial_conditions.push(variable);
        self
    }

    /// Adds a standalone boundary condition.
    pub fn boundary_condition(
        mut self,
        variable: VariableId,
        side: BoundarySide,
        kind: ConditionKind,
    ) -> Self {
        self.boundary_conditions
            .push(BoundaryCondition { variable, side, kind });
        self
    }

    /// Declares a derived output.
    pub fn derives(mut self, variable: VariableId) -> Self {
        self.derived.push(variable);
        self
    }

    /// Declares a dependency on another domain's variable.
    pub fn consumes(mut self, variable: VariableId) -> Self {
        self.consumed.push(variable);
        self
    }
}
