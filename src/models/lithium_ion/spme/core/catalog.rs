//! The SPMe submodel catalog.
//!
//! Resolves a validated option set to exactly one submodel variant per
//! physical domain. Every match is exhaustive with no fallthrough: adding
//! a new mechanism means adding a variant and an arm, not a conditional.
//!
//! The rule table has already excluded unsupported combinations, so the
//! arms here are straight selections; the one option value with no variant
//! at all (`electrolyte conductivity = "full"`) is rejected again as a
//! backstop, with the same error the rule table produces.

use crate::{
    models::lithium_ion::spme::core::rules::{self, ValidatedOptions},
    support::{
        options::{
            CurrentCollector, ElectrolyteConductivity, Particle, ParticleCracking, SeiModel,
            Thermal,
        },
        submodels::{
            CrackedElectrodes, CrackingVariant, CurrentCollectorVariant, ElectrolyteVariant,
            ParticleVariant, ResolvedSubmodels, SeiGrowth, SeiMechanism, SeiVariant,
            ThermalVariant,
        },
    },
};

use crate::support::options::UnsupportedCombination;

/// Resolves one submodel variant per physical domain.
///
/// # Errors
///
/// Returns [`UnsupportedCombination`] only through the
/// full-conductivity backstop; every other combination reaching this point
/// has a variant.
pub(crate) fn resolve(
    validated: &ValidatedOptions,
) -> Result<ResolvedSubmodels, UnsupportedCombination> {
    let options = validated.get();

    let particle = match options.particle {
        Particle::FickianDiffusion => ParticleVariant::FickianDiffusion {
            shape: options.particle_shape,
        },
        Particle::UniformProfile => ParticleVariant::UniformProfile,
        Particle::QuadraticProfile => ParticleVariant::QuadraticProfile,
        Particle::QuarticProfile => ParticleVariant::QuarticProfile,
    };

    let porosity_coupling = options.sei_porosity_change;
    let electrolyte = match options.electrolyte_conductivity {
        ElectrolyteConductivity::Default => ElectrolyteVariant::Default { porosity_coupling },
        ElectrolyteConductivity::Integrated => ElectrolyteVariant::Integrated { porosity_coupling },
        ElectrolyteConductivity::Full => return Err(rules::unsupported_full_conductivity()),
    };

    let thermal = match options.thermal {
        Thermal::Isothermal => ThermalVariant::Isothermal,
        Thermal::Lumped => ThermalVariant::Lumped,
        Thermal::XLumped => ThermalVariant::XLumped {
            dimensionality: options.dimensionality,
        },
        // The rule table excludes x-full at transverse dimensionality.
        Thermal::XFull => ThermalVariant::XFull,
    };

    let growth = |mechanism| {
        SeiVariant::Growth(SeiGrowth {
            mechanism,
            porosity_change: options.sei_porosity_change,
        })
    };
    let sei = match options.sei {
        SeiModel::None => SeiVariant::None,
        SeiModel::ReactionLimited => growth(SeiMechanism::ReactionLimited),
        SeiModel::SolventDiffusionLimited => growth(SeiMechanism::SolventDiffusionLimited),
        SeiModel::ElectronMigrationLimited => growth(SeiMechanism::ElectronMigrationLimited),
        SeiModel::InterstitialDiffusionLimited => growth(SeiMechanism::InterstitialDiffusionLimited),
        SeiModel::EcReactionLimited => growth(SeiMechanism::EcReactionLimited),
    };

    let cracking = match options.particle_cracking {
        ParticleCracking::None => CrackingVariant::None,
        ParticleCracking::NoCracking => CrackingVariant::StressOnly,
        ParticleCracking::Anode => CrackingVariant::CrackGrowth(CrackedElectrodes::Negative),
        ParticleCracking::Cathode => CrackingVariant::CrackGrowth(CrackedElectrodes::Positive),
        ParticleCracking::Both => CrackingVariant::CrackGrowth(CrackedElectrodes::Both),
    };

    let current_collector = match options.current_collector {
        CurrentCollector::Uniform => CurrentCollectorVariant::Uniform,
        CurrentCollector::PotentialPair => CurrentCollectorVariant::PotentialPair {
            dimensionality: options.dimensionality,
        },
    };

    Ok(ResolvedSubmodels {
        particle,
        electrolyte,
        thermal,
        sei,
        cracking,
        current_collector,
    })
}
