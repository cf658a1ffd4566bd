//! Cell model families.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized by chemistry (currently [`lithium_ion`]). Each
//! model family lives in its own module and contains an internal `core`
//! submodule where the family's compatibility rule table and submodel
//! catalog live. The `core` module is an implementation detail and is
//! **not** re-exported as part of the public API.
//!
//! # Model structure
//!
//! A model's public type is a thin adapter over the shared pipeline in
//! [`crate::support`]: it validates the option set against the family's
//! rule table, resolves one submodel variant per physical domain, assembles
//! the coupled system, and verifies its well-posedness. Construction either
//! returns a usable model or one typed error; no partially built model is
//! ever exposed.

pub mod lithium_ion;
