//! Core option handling for the SPMe family.
//!
//! [`rules`] holds the family's entire compatibility rule table; [`catalog`]
//! resolves a validated option set to one submodel variant per physical
//! domain. Keeping every legality predicate in the rule table means the
//! catalog never has to re-derive whether a combination is allowed.

pub(super) mod catalog;
pub(super) mod rules;
