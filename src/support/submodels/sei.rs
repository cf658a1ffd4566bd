use crate::support::{
    submodels::{Contribution, variables},
    system::{Region, VariableId},
};

/// The rate-limiting mechanism for SEI layer growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeiMechanism {
    ReactionLimited,
    SolventDiffusionLimited,
    ElectronMigrationLimited,
    InterstitialDiffusionLimited,
    EcReactionLimited,
}

/// An active SEI growth submodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeiGrowth {
    /// The rate-limiting mechanism.
    pub mechanism: SeiMechanism,

    /// Whether the layer growth feeds back into the electrode porosity.
    pub porosity_change: bool,
}

/// SEI submodel variants.
///
/// SEI growth happens on the negative electrode only. When porosity
/// coupling is on, the variant governs a porosity change variable that the
/// electrolyte domain consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeiVariant {
    /// No SEI layer is modelled.
    None,

    /// SEI growth with the given mechanism and coupling.
    Growth(SeiGrowth),
}

impl SeiVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let growth = match self {
            Self::None => return Contribution::none(),
            Self::Growth(growth) => growth,
        };

        let electrode = Region::NegativeElectrode;
        let mut contribution = match growth.mechanism {
            SeiMechanism::EcReactionLimited => Contribution::none()
                .ode(VariableId::new(variables::OUTER_SEI_THICKNESS, electrode))
                .algebraic(VariableId::new(
                    variables::EC_SURFACE_CONCENTRATION,
                    electrode,
                ))
                .consumes(VariableId::new(
                    variables::ELECTROLYTE_CONCENTRATION,
                    electrode,
                )),
            _ => Contribution::none()
                .ode(VariableId::new(variables::INNER_SEI_THICKNESS, electrode))
                .ode(VariableId::new(variables::OUTER_SEI_THICKNESS, electrode)),
        };

        contribution = contribution
            .derives(VariableId::new(variables::SEI_INTERFACIAL_CURRENT, electrode))
            .consumes(VariableId::new(
                variables::INTERFACIAL_CURRENT_DENSITY,
                electrode,
            ));

        if growth.porosity_change {
            contribution =
                contribution.algebraic(VariableId::new(variables::POROSITY_CHANGE, electrode));
        }

        contribution
    }
}
