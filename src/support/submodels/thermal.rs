use crate::support::{
    options::Dimensionality,
    submodels::{Contribution, variables},
    system::{ConditionKind, Region, VariableId},
};

/// Thermal submodel variants.
///
/// Every variant makes the bulk cell temperature available to the other
/// domains, either by governing it directly or as a derived average of a
/// resolved temperature field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalVariant {
    /// Fixed ambient temperature.
    Isothermal,

    /// A single volume-averaged temperature state.
    Lumped,

    /// Through-thickness-averaged temperature; resolved over the current
    /// collector plane when the collector has transverse dimensions.
    XLumped {
        /// Collector dimensionality, threaded from the option set.
        dimensionality: Dimensionality,
    },

    /// Temperature resolved through the cell thickness. Only implemented
    /// for a zero-dimensional collector.
    XFull,
}

impl ThermalVariant {
    /// The variant's structural contribution.
    pub fn contribution(&self) -> Contribution {
        let bulk = VariableId::new(variables::CELL_TEMPERATURE, Region::Cell);
        let contribution = match self {
            Self::Isothermal => {
                // No heat sources consumed; the temperature is pinned.
                return Contribution::none().algebraic(bulk);
            }
            Self::Lumped => Contribution::none()
                .ode(VariableId::new(
                    variables::VOLUME_AVERAGED_TEMPERATURE,
                    Region::Cell,
                ))
                .derives(bulk),
            Self::XLumped { dimensionality } if dimensionality.is_transverse() => {
                Contribution::none()
                    .diffusion_pde(
                        VariableId::new(
                            variables::X_AVERAGED_TEMPERATURE,
                            Region::CurrentCollector,
                        ),
                        // Convective cooling at both tabs.
                        ConditionKind::Robin,
                        ConditionKind::Robin,
                    )
                    .derives(bulk)
            }
            Self::XLumped { .. } => Contribution::none()
                .ode(VariableId::new(
                    variables::X_AVERAGED_TEMPERATURE,
                    Region::Cell,
                ))
                .derives(bulk),
            Self::XFull => {
                let mut contribution = Contribution::none();
                for region in [
                    Region::NegativeElectrode,
                    Region::Separator,
                    Region::PositiveElectrode,
                ] {
                    contribution = contribution.diffusion_pde(
                        VariableId::new(variables::CELL_TEMPERATURE, region),
                        ConditionKind::Robin,
                        ConditionKind::Robin,
                    );
                }
                contribution.derives(bulk)
            }
        };

        // Ohmic and reaction heating from both electrodes.
        contribution
            .consumes(VariableId::new(
                variables::INTERFACIAL_CURRENT_DENSITY,
                Region::NegativeElectrode,
            ))
            .consumes(VariableId::new(
                variables::INTERFACIAL_CURRENT_DENSITY,
                Region::PositiveElectrode,
            ))
    }
}
