use crate::support::{
    options::Dimensionality,
    submodels::{Contribution, variables},
    system::{ConditionKind, Region, VariableId},
};

/// Current collector submodel variants.
///
/// The collector domain is the source of the interfacial current densities
/// every other domain consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentCollectorVariant {
    /// Uniform current distribution through a zero-dimensional collector.
    Uniform,

    /// Resolved potentials over a one- or two-dimensional collector plane.
    PotentialPair {
        /// Transverse dimensionality, threaded from the option set.
        dimensionality: Dimensionality,
    },
}

impl CurrentCollectorVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let collector = Region::CurrentCollector;
        let contribution = match self {
            Self::Uniform => Contribution::none().algebraic(VariableId::new(
                variables::COLLECTOR_CURRENT_DENSITY,
                collector,
            )),
            Self::PotentialPair { .. } => Contribution::none()
                .diffusion_pde(
                    VariableId::new(variables::NEGATIVE_COLLECTOR_POTENTIAL, collector),
                    // Grounded at the negative tab, insulated opposite.
                    ConditionKind::Dirichlet,
                    ConditionKind::Neumann,
                )
                .diffusion_pde(
                    VariableId::new(variables::POSITIVE_COLLECTOR_POTENTIAL, collector),
                    // Applied current enters at the positive tab.
                    ConditionKind::Neumann,
                    ConditionKind::Dirichlet,
                )
                .algebraic(VariableId::new(
                    variables::COLLECTOR_CURRENT_DENSITY,
                    collector,
                )),
        };

        contribution
            .derives(VariableId::new(
                variables::INTERFACIAL_CURRENT_DENSITY,
                Region::NegativeElectrode,
            ))
            .derives(VariableId::new(
                variables::INTERFACIAL_CURRENT_DENSITY,
                Region::PositiveElectrode,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::system::EquationKind;

    #[test]
    fn uniform_collector_is_a_single_algebraic_state() {
        let contribution = CurrentCollectorVariant::Uniform.contribution();

        assert_eq!(contribution.equations.len(), 1);
        assert_eq!(contribution.equations[0].1, EquationKind::Algebraic);
        assert!(contribution.boundary_conditions.is_empty());
    }

    #[test]
    fn potential_pair_resolves_both_collector_potentials() {
        let contribution = CurrentCollectorVariant::PotentialPair {
            dimensionality: Dimensionality::Two,
        }
        .contribution();

        let pdes: Vec<_> = contribution
            .equations
            .iter()
            .filter(|(_, kind)| *kind == EquationKind::Pde)
            .map(|(variable, _)| variable.name)
            .collect();
        assert_eq!(
            pdes,
            vec![
                variables::NEGATIVE_COLLECTOR_POTENTIAL,
                variables::POSITIVE_COLLECTOR_POTENTIAL
            ]
        );
        assert_eq!(contribution.boundary_conditions.len(), 4);
    }

    #[test]
    fn every_variant_feeds_the_interfacial_currents() {
        for variant in [
            CurrentCollectorVariant::Uniform,
            CurrentCollectorVariant::PotentialPair {
                dimensionality: Dimensionality::One,
            },
        ] {
            let contribution = variant.contribution();
            for electrode in [Region::NegativeElectrode, Region::PositiveElectrode] {
                assert!(contribution.derived.contains(&VariableId::new(
                    variables::INTERFACIAL_CURRENT_DENSITY,
                    electrode
                )));
            }
        }
    }
}
