use crate::support::{
    submodels::{Contribution, variables},
    system::{Region, VariableId},
};

/// Which electrode(s) a cracking submodel applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackedElectrodes {
    Negative,
    Positive,
    Both,
}

impl CrackedElectrodes {
    fn regions(self) -> &'static [Region] {
        match self {
            Self::Negative => &[Region::NegativeElectrode],
            Self::Positive => &[Region::PositiveElectrode],
            Self::Both => &[Region::NegativeElectrode, Region::PositiveElectrode],
        }
    }
}

/// Particle mechanics submodel variants.
///
/// The stress model reads the concentration profile at the particle
/// surface, which is why every active variant requires Fickian particle
/// diffusion (enforced by the model family's rule table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackingVariant {
    /// No mechanics are modelled.
    None,

    /// Stresses are computed on both electrodes without crack growth.
    StressOnly,

    /// Stresses and crack growth on the given electrode(s).
    CrackGrowth(CrackedElectrodes),
}

impl CrackingVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let (stress_regions, growth_regions): (&[Region], &[Region]) = match self {
            Self::None => return Contribution::none(),
            Self::StressOnly => (CrackedElectrodes::Both.regions(), &[]),
            Self::CrackGrowth(electrodes) => (electrodes.regions(), electrodes.regions()),
        };

        let mut contribution = Contribution::none();
        for region in stress_regions {
            contribution = contribution
                .algebraic(VariableId::new(variables::SURFACE_STRESS, *region))
                .consumes(VariableId::new(
                    variables::PARTICLE_SURFACE_CONCENTRATION,
                    *region,
                ));
        }
        for region in growth_regions {
            contribution = contribution.ode(VariableId::new(variables::CRACK_LENGTH, *region));
        }
        contribution
    }
}
