//! Model-building tools used by the model families in [`crate::models`].
//!
//! - [`options`]: Configuration option domains and the immutable option set.
//! - [`submodels`]: The submodel variant catalog and its structural
//!   contributions.
//! - [`system`]: Equation records, conditions, the assembler, and the
//!   assembled model artifact.
//! - [`wellposed`]: The structural well-posedness checker.
//!
//! Modules here are part of the public API because they're useful, but their
//! APIs are not stable. Breaking changes may occur as needed.

pub mod options;
pub mod submodels;
pub mod system;
pub mod wellposed;
