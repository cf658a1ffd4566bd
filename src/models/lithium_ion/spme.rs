//! Single Particle Model with electrolyte (SPMe).
//!
//! The SPMe family resolves one representative particle per electrode and
//! a reduced-order electrolyte, with optional thermal, SEI, cracking, and
//! resolved current collector submodels. The family's compatibility rule
//! table and submodel catalog live in the internal [`core`] module.

mod core;

use crate::{
    models::lithium_ion::ModelError,
    support::{
        options::{OptionValue, Options},
        submodels::ResolvedSubmodels,
        system::{AssembledModel, assemble},
        wellposed,
    },
};

use self::core::{catalog, rules};

/// A fully assembled, well-posed SPMe model.
///
/// Construction runs the whole pipeline: option validation against the
/// family rule table, submodel resolution, assembly, and the structural
/// well-posedness check. A value of this type is therefore proof that the
/// configuration was legal and the resulting system solvable; no partially
/// built model is ever exposed.
#[derive(Debug, Clone)]
pub struct Spme {
    options: Options,
    submodels: ResolvedSubmodels,
    model: AssembledModel,
}

impl Spme {
    /// Builds an SPMe model from a typed option set.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the options are invalid or name an
    /// unimplemented combination, if the variant catalog is internally
    /// inconsistent, or if the assembled system is not well posed.
    pub fn new(options: Options) -> Result<Self, ModelError> {
        let validated = rules::validate(options)?;
        let submodels = catalog::resolve(&validated)?;
        let model = assemble(submodels.contributions())?;
        wellposed::check(&model)?;

        Ok(Self {
            options: validated.into_inner(),
            submodels,
            model,
        })
    }

    /// Builds an SPMe model from string-keyed option entries, filling
    /// every unspecified option with its default.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus an option error for unknown names or
    /// out-of-domain values in the entries.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let options = Options::try_from_entries(entries)?;
        Self::new(options)
    }

    /// The validated option set the model was built from.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The resolved submodel variant for each physical domain.
    pub fn submodels(&self) -> &ResolvedSubmodels {
        &self.submodels
    }

    /// The assembled, verified system of equations.
    pub fn model(&self) -> &AssembledModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{
        options::{ConfigurationError, OptionError, UnsupportedCombination},
        submodels::{PhysicalDomain, variables},
        system::{Region, VariableId},
    };

    fn well_posed<'a, I>(entries: I) -> Spme
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        Spme::from_entries(entries).expect("model should assemble and be well posed")
    }

    fn capability_gap(error: ModelError) -> UnsupportedCombination {
        match error {
            ModelError::Configuration(errors) => match errors.primary() {
                ConfigurationError::Unsupported(gap) => gap.clone(),
                other => panic!("expected a capability gap, got: {other:?}"),
            },
            other => panic!("expected a configuration error, got: {other:?}"),
        }
    }

    #[test]
    fn well_posed_with_default_options() {
        let model = Spme::new(Options::default()).expect("defaults should be well posed");
        assert!(!model.model().is_empty());
    }

    #[test]
    fn well_posed_isothermal() {
        well_posed([("thermal", OptionValue::from("isothermal"))]);
    }

    #[test]
    fn well_posed_2plus1d() {
        for dimensionality in [1_i64, 2] {
            well_posed([
                ("current collector", OptionValue::from("potential pair")),
                ("dimensionality", OptionValue::from(dimensionality)),
            ]);
        }
    }

    #[test]
    fn rejects_out_of_range_dimensionality() {
        let error = Spme::from_entries([
            ("current collector", OptionValue::from("potential pair")),
            ("dimensionality", OptionValue::from(5_i64)),
        ])
        .unwrap_err();

        match error {
            ModelError::Configuration(errors) => match errors.primary() {
                ConfigurationError::Option(OptionError::InvalidValue { option, given, .. }) => {
                    assert_eq!(*option, "dimensionality");
                    assert_eq!(given, "5");
                }
                other => panic!("expected an option error, got: {other:?}"),
            },
            other => panic!("expected a configuration error, got: {other:?}"),
        }
    }

    #[test]
    fn well_posed_lumped_thermal() {
        well_posed([("thermal", OptionValue::from("lumped"))]);
    }

    #[test]
    fn well_posed_x_full_thermal() {
        well_posed([("thermal", OptionValue::from("x-full"))]);
    }

    #[test]
    fn x_full_thermal_not_implemented_above_0d() {
        for dimensionality in [1_i64, 2] {
            let error = Spme::from_entries([
                ("current collector", OptionValue::from("potential pair")),
                ("dimensionality", OptionValue::from(dimensionality)),
                ("thermal", OptionValue::from("x-full")),
            ])
            .unwrap_err();

            let gap = capability_gap(error);
            assert!(gap.involves("thermal"));
            assert!(gap.involves("dimensionality"));
        }
    }

    #[test]
    fn well_posed_lumped_thermal_1plus1d_and_2plus1d() {
        for dimensionality in [1_i64, 2] {
            well_posed([
                ("current collector", OptionValue::from("potential pair")),
                ("dimensionality", OptionValue::from(dimensionality)),
                ("thermal", OptionValue::from("lumped")),
            ]);
        }
    }

    #[test]
    fn well_posed_x_lumped_thermal_1plus1d_and_2plus1d() {
        for dimensionality in [1_i64, 2] {
            well_posed([
                ("current collector", OptionValue::from("potential pair")),
                ("dimensionality", OptionValue::from(dimensionality)),
                ("thermal", OptionValue::from("x-lumped")),
            ]);
        }
    }

    #[test]
    fn well_posed_particle_profiles() {
        for profile in ["uniform profile", "quadratic profile", "quartic profile"] {
            well_posed([("particle", OptionValue::from(profile))]);
        }
    }

    #[test]
    fn well_posed_particle_shape_user() {
        well_posed([("particle shape", OptionValue::from("user"))]);
    }

    #[test]
    fn surface_form_not_implemented() {
        for form in ["differential", "algebraic"] {
            let error =
                Spme::from_entries([("surface form", OptionValue::from(form))]).unwrap_err();
            let gap = capability_gap(error);
            assert!(gap.involves("surface form"));
        }
    }

    #[test]
    fn well_posed_integrated_conductivity() {
        well_posed([("electrolyte conductivity", OptionValue::from("integrated"))]);
    }

    #[test]
    fn full_conductivity_names_the_option() {
        let error = Spme::from_entries([("electrolyte conductivity", OptionValue::from("full"))])
            .unwrap_err();
        let gap = capability_gap(error.clone());
        assert!(gap.involves("electrolyte conductivity"));
        assert!(error.to_string().contains("electrolyte conductivity"));
    }

    #[test]
    fn well_posed_with_every_sei_mechanism() {
        for sei in [
            "reaction limited",
            "solvent-diffusion limited",
            "electron-migration limited",
            "interstitial-diffusion limited",
            "ec reaction limited",
        ] {
            well_posed([("sei", OptionValue::from(sei))]);
        }
    }

    #[test]
    fn sei_porosity_change_couples_sei_to_electrolyte() {
        let model = well_posed([
            ("sei", OptionValue::from("ec reaction limited")),
            ("sei porosity change", OptionValue::from(true)),
        ]);

        let porosity = VariableId::new(variables::POROSITY_CHANGE, Region::NegativeElectrode);
        let system = model.model();
        assert!(system.equation(&porosity).is_some());
        assert_eq!(
            system.coupling().producers_of(&porosity),
            &[PhysicalDomain::Sei]
        );
        assert!(
            system
                .coupling()
                .consumes(PhysicalDomain::ElectrolyteConductivity, &porosity)
        );
    }

    #[test]
    fn well_posed_with_every_cracking_mode() {
        for cracking in ["none", "no cracking", "anode", "cathode", "both"] {
            well_posed([
                ("particle", OptionValue::from("Fickian diffusion")),
                ("particle cracking", OptionValue::from(cracking)),
            ]);
        }
    }

    #[test]
    fn cracking_without_fickian_particles_not_implemented() {
        let error = Spme::from_entries([
            ("particle", OptionValue::from("uniform profile")),
            ("particle cracking", OptionValue::from("both")),
        ])
        .unwrap_err();

        let gap = capability_gap(error);
        assert!(gap.involves("particle cracking"));
        assert!(gap.involves("particle"));
    }

    #[test]
    fn every_assembled_model_balances_equations_and_conditions() {
        let configurations: [&[(&str, &str)]; 4] = [
            &[],
            &[("thermal", "x-full"), ("sei", "ec reaction limited")],
            &[
                ("current collector", "potential pair"),
                ("dimensionality", "2"),
                ("thermal", "x-lumped"),
            ],
            &[
                ("particle", "quartic profile"),
                ("electrolyte conductivity", "integrated"),
            ],
        ];

        for entries in configurations {
            let model = well_posed(
                entries
                    .iter()
                    .map(|(name, value)| (*name, OptionValue::from(*value))),
            );
            let system = model.model();

            // One equation per unknown, by construction; one initial
            // condition per differential variable and none elsewhere.
            let differential = system
                .equations()
                .filter(|e| e.kind.is_differential())
                .count();
            assert_eq!(system.initial_conditions().count(), differential);
            for equation in system.equations() {
                let has_initial = system.initial_condition(&equation.variable).is_some();
                assert_eq!(equation.kind.is_differential(), has_initial);

                let boundary = system.boundary_conditions_of(&equation.variable).len();
                let expected = if equation.kind.has_spatial_operator() { 2 } else { 0 };
                assert_eq!(boundary, expected, "for {}", equation.variable);
            }
        }
    }

    #[test]
    fn assembly_is_deterministic() {
        let options = Options::try_from_entries([
            ("thermal", OptionValue::from("lumped")),
            ("sei", OptionValue::from("reaction limited")),
            ("sei porosity change", OptionValue::from(true)),
        ])
        .expect("entries should parse");

        let first = Spme::new(options.clone()).expect("first build should succeed");
        let second = Spme::new(options).expect("second build should succeed");

        let equations = |spme: &Spme| spme.model().equations().copied().collect::<Vec<_>>();
        let initials = |spme: &Spme| spme.model().initial_conditions().copied().collect::<Vec<_>>();
        let boundaries =
            |spme: &Spme| spme.model().boundary_conditions().copied().collect::<Vec<_>>();
        let consumptions = |spme: &Spme| {
            spme.model()
                .coupling()
                .consumptions()
                .copied()
                .collect::<Vec<_>>()
        };

        assert_eq!(equations(&first), equations(&second));
        assert_eq!(initials(&first), initials(&second));
        assert_eq!(boundaries(&first), boundaries(&second));
        assert_eq!(consumptions(&first), consumptions(&second));
    }
}
