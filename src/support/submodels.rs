//! The submodel variant catalog.
//!
//! Each physical domain of the cell has a closed set of submodel variants;
//! a model family's catalog resolves exactly one variant per domain from a
//! validated option set. A variant's [`Contribution`] is the structural
//! record of everything it adds to the assembled system: governing
//! equations, initial and boundary conditions, and the variables it
//! produces for or consumes from other domains.
//!
//! Contributions are pure data. Building one performs no numeric work and
//! depends only on the variant itself.

mod contribution;
mod cracking;
mod current_collector;
mod electrolyte;
mod particle;
mod sei;
mod thermal;

pub mod variables;

pub use contribution::Contribution;
pub use cracking::{CrackedElectrodes, CrackingVariant};
pub use current_collector::CurrentCollectorVariant;
pub use electrolyte::ElectrolyteVariant;
pub use particle::ParticleVariant;
pub use sei::{SeiGrowth, SeiMechanism, SeiVariant};
pub use thermal::ThermalVariant;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical mechanism of the cell with its own submodel.
///
/// Not to be confused with a [`Region`](crate::support::system::Region): a
/// domain names the mechanism whose equations are being contributed, not
/// where those equations live.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PhysicalDomain {
    /// Particle concentration.
    Particle,

    /// Electrolyte transport and conductivity.
    ElectrolyteConductivity,

    /// Cell temperature.
    Thermal,

    /// SEI layer growth.
    Sei,

    /// Particle mechanics and cracking.
    Cracking,

    /// Current collection.
    CurrentCollector,
}

impl fmt::Display for PhysicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Particle => "particle",
            Self::ElectrolyteConductivity => "electrolyte conductivity",
            Self::Thermal => "thermal",
            Self::Sei => "sei",
            Self::Cracking => "cracking",
            Self::CurrentCollector => "current collector",
        })
    }
}

/// One resolved submodel variant per physical domain.
///
/// Produced by a model family's catalog and consumed by the assembler.
/// The struct is exhaustive on purpose: a family cannot forget a domain,
/// and downstream code cannot encounter an unresolved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubmodels {
    /// Particle concentration variant.
    pub particle: ParticleVariant,

    /// Electrolyte variant.
    pub electrolyte: ElectrolyteVariant,

    /// Thermal variant.
    pub thermal: ThermalVariant,

    /// SEI variant.
    pub sei: SeiVariant,

    /// Cracking variant.
    pub cracking: CrackingVariant,

    /// Current collector variant.
    pub current_collector: CurrentCollectorVariant,
}

impl ResolvedSubmodels {
    /// Every domain's contribution, in a fixed domain order.
    pub fn contributions(&self) -> Vec<(PhysicalDomain, Contribution)> {
        vec![
            (PhysicalDomain::Particle, self.particle.contribution()),
            (
                PhysicalDomain::ElectrolyteConductivity,
                self.electrolyte.contribution(),
            ),
            (PhysicalDomain::Thermal, self.thermal.contribution()),
            (PhysicalDomain::Sei, self.sei.contribution()),
            (PhysicalDomain::Cracking, self.cracking.contribution()),
            (
                PhysicalDomain::CurrentCollector,
                self.current_collector.contribution(),
            ),
        ]
    }
}
