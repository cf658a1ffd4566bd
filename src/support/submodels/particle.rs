use crate::support::{
    options::ParticleShape,
    submodels::{Contribution, variables},
    system::{ConditionKind, Region, VariableId},
};

/// Particle concentration submodel variants.
///
/// Every variant works per electrode: one representative particle each for
/// the negative and positive electrodes. The surface concentration is a
/// derived output in all cases, so downstream domains couple to it the
/// same way regardless of how the profile is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleVariant {
    /// Concentration resolved through the particle radius.
    FickianDiffusion {
        /// Particle geometry, threaded from the option set.
        shape: ParticleShape,
    },

    /// A single averaged concentration state per electrode.
    UniformProfile,

    /// Quadratic profile tracked by its average.
    QuadraticProfile,

    /// Quartic profile tracked by its average and the average gradient.
    QuarticProfile,
}

const ELECTRODES: [(Region, Region); 2] = [
    (Region::NegativeParticle, Region::NegativeElectrode),
    (Region::PositiveParticle, Region::PositiveElectrode),
];

impl ParticleVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let mut contribution = Contribution::none();
        for (particle, electrode) in ELECTRODES {
            contribution = match self {
                Self::FickianDiffusion { .. } => contribution.diffusion_pde(
                    VariableId::new(variables::PARTICLE_CONCENTRATION, particle),
                    // Symmetry at the particle centre, reaction flux at the surface.
                    ConditionKind::Neumann,
                    ConditionKind::Neumann,
                ),
                Self::UniformProfile | Self::QuadraticProfile => contribution.ode(
                    VariableId::new(variables::AVERAGE_PARTICLE_CONCENTRATION, particle),
                ),
                Self::QuarticProfile => contribution
                    .ode(VariableId::new(
                        variables::AVERAGE_PARTICLE_CONCENTRATION,
                        particle,
                    ))
                    .ode(VariableId::new(
                        variables::AVERAGE_CONCENTRATION_GRADIENT,
                        particle,
                    )),
            };
            contribution = contribution
                .derives(VariableId::new(
                    variables::PARTICLE_SURFACE_CONCENTRATION,
                    electrode,
                ))
                .consumes(VariableId::new(
                    variables::INTERFACIAL_CURRENT_DENSITY,
                    electrode,
                ));
        }
        contribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::system::EquationKind;

    #[test]
    fn fickian_diffusion_contributes_a_pde_per_electrode() {
        let contribution = ParticleVariant::FickianDiffusion {
            shape: ParticleShape::Spherical,
        }
        .contribution();

        assert_eq!(contribution.equations.len(), 2);
        assert!(
            contribution
                .equations
                .iter()
                .all(|(_, kind)| *kind == EquationKind::Pde)
        );
        // Two boundary conditions per PDE, one initial condition each.
        assert_eq!(contribution.boundary_conditions.len(), 4);
        assert_eq!(contribution.initial_conditions.len(), 2);
    }

    #[test]
    fn quartic_profile_adds_a_gradient_state_per_electrode() {
        let contribution = ParticleVariant::QuarticProfile.contribution();

        assert_eq!(contribution.equations.len(), 4);
        assert!(
            contribution
                .equations
                .iter()
                .all(|(_, kind)| *kind == EquationKind::Ode)
        );
        assert_eq!(contribution.initial_conditions.len(), 4);
        assert!(contribution.boundary_conditions.is_empty());
    }

    #[test]
    fn every_variant_derives_both_surface_concentrations() {
        for variant in [
            ParticleVariant::FickianDiffusion {
                shape: ParticleShape::User,
            },
            ParticleVariant::UniformProfile,
            ParticleVariant::QuadraticProfile,
            ParticleVariant::QuarticProfile,
        ] {
            let contribution = variant.contribution();
            for electrode in [Region::NegativeElectrode, Region::PositiveElectrode] {
                assert!(contribution.derived.contains(&VariableId::new(
                    variables::PARTICLE_SURFACE_CONCENTRATION,
                    electrode
                )));
            }
        }
    }
}
