use crate::support::{
    submodels::{Contribution, variables},
    system::{ConditionKind, Region, VariableId},
};

/// Electrolyte submodel variants.
///
/// Both variants resolve the salt concentration through the cell thickness;
/// they differ in how the electrolyte potential is represented. When SEI
/// porosity coupling is on, the variant additionally consumes the porosity
/// change produced by the SEI domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectrolyteVariant {
    /// Composite leading-order conductivity with per-region potentials.
    Default {
        /// Whether the SEI domain feeds porosity changes into this one.
        porosity_coupling: bool,
    },

    /// Integrated conductivity with a single ohmic drop over the cell.
    Integrated {
        /// Whether the SEI domain feeds porosity changes into this one.
        porosity_coupling: bool,
    },
}

const THICKNESS_REGIONS: [Region; 3] = [
    Region::NegativeElectrode,
    Region::Separator,
    Region::PositiveElectrode,
];

impl ElectrolyteVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let mut contribution = Contribution::none();

        for region in THICKNESS_REGIONS {
            contribution = contribution.diffusion_pde(
                VariableId::new(variables::ELECTROLYTE_CONCENTRATION, region),
                ConditionKind::Neumann,
                ConditionKind::Neumann,
            );
        }

        contribution = match self {
            Self::Default { .. } => THICKNESS_REGIONS.iter().fold(contribution, |c, region| {
                c.algebraic(VariableId::new(variables::ELECTROLYTE_POTENTIAL, *region))
            }),
            Self::Integrated { .. } => contribution.algebraic(VariableId::new(
                variables::ELECTROLYTE_OHMIC_DROP,
                Region::Cell,
            )),
        };

        for electrode in [Region::NegativeElectrode, Region::PositiveElectrode] {
            contribution = contribution
                .consumes(VariableId::new(
                    variables::PARTICLE_SURFACE_CONCENTRATION,
                    electrode,
                ))
                .consumes(VariableId::new(
                    variables::INTERFACIAL_CURRENT_DENSITY,
                    electrode,
                ));
        }
        contribution = contribution.consumes(VariableId::new(
            variables::CELL_TEMPERATURE,
            Region::Cell,
        ));

        let porosity_coupling = match self {
            Self::Default { porosity_coupling } | Self::Integrated { porosity_coupling } => {
                *porosity_coupling
            }
        };
        if porosity_coupling {
            contribution = contribution.consumes(VariableId::new(
                variables::POROSITY_CHANGE,
                Region::NegativeElectrode,
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
    fn default_variant_has_per_region_potentials() {
        let contribution = ElectrolyteVariant::Default {
            porosity_coupling: false,
        }
        .contribution();

        let algebraic: Vec<_> = contribution
            .equations
            .iter()
            .filter(|(_, kind)| *kind == EquationKind::Algebraic)
            .map(|(variable, _)| *variable)
            .collect();
        assert_eq!(algebraic.len(), 3);
        assert!(
            algebraic
                .iter()
                .all(|v| v.name == variables::ELECTROLYTE_POTENTIAL)
        );
    }

    #[test]
    fn integrated_variant_has_a_single_ohmic_drop() {
        let contribution = ElectrolyteVariant::Integrated {
            porosity_coupling: false,
        }
        .contribution();

        let algebraic: Vec<_> = contribution
            .equations
            .iter()
            .filter(|(_, kind)| *kind == EquationKind::Algebraic)
            .collect();
        assert_eq!(algebraic.len(), 1);
        assert_eq!(
            algebraic[0].0,
            VariableId::new(variables::ELECTROLYTE_OHMIC_DROP, Region::Cell)
        );
    }

    #[test]
    fn porosity_coupling_adds_the_consumption() {
        let without = ElectrolyteVariant::Default {
            porosity_coupling: false,
        }
        .contribution();
        let with = ElectrolyteVariant::Default {
            porosity_coupling: true,
        }
        .contribution();

        let porosity = VariableId::new(variables::POROSITY_CHANGE, Region::NegativeElectrode);
        assert!(!without.consumed.contains(&porosity));
        assert!(with.consumed.contains(&porosity));
    }
}
