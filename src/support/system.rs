//! Structural representation of an assembled equation system.
//!
//! Everything in this module is symbolic bookkeeping: equation records name
//! their unknown, kind, and region; conditions name the variable they
//! constrain; the coupling graph names which domain produces what for whom.
//! No numeric work happens here or downstream of here within this crate.

mod assembler;
mod conditions;
mod coupling;
mod equation;
mod model;

pub use assembler::{AssemblyFault, assemble};
pub use conditions::{BoundaryCondition, BoundarySide, ConditionKind, InitialCondition};
pub use coupling::CouplingGraph;
pub use equation::{EquationKind, EquationRecord, Region, VariableId};
pub use model::AssembledModel;
