//! # Voltaic Models
//!
//! Composable electrochemical cell models, assembled from a catalog of
//! interchangeable physics submodels and verified for structural
//! well-posedness before any numeric solution is attempted.
//!
//! ## Crate layout
//!
//! - [`models`]: Cell model families (currently lithium-ion).
//! - [`support`]: Model-building tools used by the model families.
//!
//! ## Pipeline
//!
//! Constructing a model is a single linear pipeline with early termination
//! on the first failing stage:
//!
//! 1. An immutable [`support::options::Options`] record captures every
//!    configuration choice, with documented defaults.
//! 2. A model family validates the option set against its compatibility
//!    rule table, distinguishing invalid configurations from recognized but
//!    unimplemented ones.
//! 3. The family's catalog resolves one submodel variant per physical
//!    domain.
//! 4. The assembler merges each variant's equations, variables, and
//!    boundary/initial conditions into one coupled system, along with the
//!    produce/consume coupling graph between domains.
//! 5. The well-posedness checker proves, structurally, that the system has
//!    exactly the equations and conditions needed for a unique solution.
//!
//! No stage performs numeric work; the assembled model is a symbolic
//! artifact consumed by downstream discretization and solver stages.

pub mod models;
pub mod support;
