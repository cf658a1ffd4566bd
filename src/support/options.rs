//! Configuration option domains and the immutable option set.
//!
//! Every configurable aspect of a cell model is a closed enumeration with a
//! documented default. The [`Options`] record captures one choice per
//! domain; it is constructed once, either directly, from string-keyed
//! entries via [`Options::try_from_entries`], or from a serialized
//! configuration, and never mutated afterward.
//!
//! Per-option legality (unknown names, out-of-domain values) is enforced at
//! construction. Cross-option legality is the concern of each model
//! family's compatibility rule table, not of this module.

mod current_collector;
mod dimensionality;
mod electrolyte;
mod error;
mod mechanics;
mod particle;
mod sei;
mod set;
mod thermal;

pub use current_collector::CurrentCollector;
pub use dimensionality::Dimensionality;
pub use electrolyte::{ElectrolyteConductivity, SurfaceForm};
pub use error::{ConfigurationError, ConfigurationErrors, OptionError, UnsupportedCombination};
pub use mechanics::ParticleCracking;
pub use particle::{Particle, ParticleShape};
pub use sei::SeiModel;
pub use set::{OptionValue, Options};
pub use thermal::Thermal;
