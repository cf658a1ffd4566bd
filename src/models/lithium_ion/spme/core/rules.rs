//! The SPMe compatibility rule table.
//!
//! Every cross-option legality predicate for the family lives here, as one
//! declarative, order-independent table. Validation evaluates the whole
//! table and aggregates every violation before failing, so a configuration
//! with several problems reports all of them at once.
//!
//! Two failure categories are distinguished: an
//! [`OptionError`] means the configuration contradicts itself (a user
//! mistake), while an [`UnsupportedCombination`] means the configuration is
//! meaningful but the family has no implemented variant for it (a
//! capability gap).

use crate::support::options::{
    ConfigurationError, ConfigurationErrors, CurrentCollector, ElectrolyteConductivity,
    OptionError, Options, Particle, SeiModel, SurfaceForm, Thermal, UnsupportedCombination,
};

/// Proof that an option set passed the SPMe rule table.
///
/// The only way to obtain one is through [`validate`], so downstream code
/// (the catalog, the assembler) can rely on every rule having held.
#[derive(Debug, Clone)]
pub(crate) struct ValidatedOptions(Options);

impl ValidatedOptions {
    pub(crate) fn get(&self) -> &Options {
        &self.0
    }

    pub(crate) fn into_inner(self) -> Options {
        self.0
    }
}

type Rule = fn(&Options) -> Result<(), ConfigurationError>;

/// The full rule table, in reporting order.
const RULES: &[Rule] = &[
    surface_form_is_implemented,
    electrolyte_conductivity_is_implemented,
    x_full_thermal_needs_flat_collector,
    transverse_collector_needs_potential_pair,
    potential_pair_needs_transverse_dimension,
    cracking_needs_fickian_particles,
    porosity_change_needs_sei,
];

/// Validates an option set against the full rule table.
///
/// # Errors
///
/// Returns every rule violation found, aggregated into one
/// [`ConfigurationErrors`].
pub(crate) fn validate(options: Options) -> Result<ValidatedOptions, ConfigurationErrors> {
    let violations: Vec<ConfigurationError> = RULES
        .iter()
        .filter_map(|rule| rule(&options).err())
        .collect();

    if violations.is_empty() {
        Ok(ValidatedOptions(options))
    } else {
        Err(ConfigurationErrors::new(violations))
    }
}

/// The capability gap for `electrolyte conductivity = "full"`.
///
/// Shared with the catalog so the registry-side backstop can never drift
/// from the rule table's wording.
pub(crate) fn unsupported_full_conductivity() -> UnsupportedCombination {
    UnsupportedCombination::new([(
        ElectrolyteConductivity::OPTION,
        ElectrolyteConductivity::Full.to_string(),
    )])
}

fn surface_form_is_implemented(options: &Options) -> Result<(), ConfigurationError> {
    if options.surface_form == SurfaceForm::False {
        Ok(())
    } else {
        Err(UnsupportedCombination::new([(
            SurfaceForm::OPTION,
            options.surface_form.to_string(),
        )])
        .into())
    }
}

fn electrolyte_conductivity_is_implemented(options: &Options) -> Result<(), ConfigurationError> {
    if options.electrolyte_conductivity == ElectrolyteConductivity::Full {
        Err(unsupported_full_conductivity().into())
    } else {
        Ok(())
    }
}

fn x_full_thermal_needs_flat_collector(options: &Options) -> Result<(), ConfigurationError> {
    if options.thermal == Thermal::XFull && options.dimensionality.is_transverse() {
        Err(UnsupportedCombination::new([
            (Thermal::OPTION, options.thermal.to_string()),
            ("dimensionality", options.dimensionality.to_string()),
        ])
        .into())
    } else {
        Ok(())
    }
}

fn transverse_collector_needs_potential_pair(options: &Options) -> Result<(), ConfigurationError> {
    if options.dimensionality.is_transverse()
        && options.current_collector == CurrentCollector::Uniform
    {
        Err(UnsupportedCombination::new([
            (
                CurrentCollector::OPTION,
                options.current_collector.to_string(),
            ),
            ("dimensionality", options.dimensionality.to_string()),
        ])
        .into())
    } else {
        Ok(())
    }
}

fn potential_pair_needs_transverse_dimension(options: &Options) -> Result<(), ConfigurationError> {
    if options.current_collector == CurrentCollector::PotentialPair
        && !options.dimensionality.is_transverse()
    {
        Err(OptionError::Inconsistent {
            option: CurrentCollector::OPTION,
            value: options.current_collector.to_string(),
            with: "dimensionality = 0".to_owned(),
        }
        .into())
    } else {
        Ok(())
    }
}

fn cracking_needs_fickian_particles(options: &Options) -> Result<(), ConfigurationError> {
    if options.particle_cracking.is_active() && options.particle != Particle::FickianDiffusion {
        Err(UnsupportedCombination::new([
            ("particle cracking", options.particle_cracking.to_string()),
            (Particle::OPTION, options.particle.to_string()),
        ])
        .into())
    } else {
        Ok(())
    }
}

fn porosity_change_needs_sei(options: &Options) -> Result<(), ConfigurationError> {
    if options.sei_porosity_change && options.sei == SeiModel::None {
        Err(OptionError::Inconsistent {
            option: "sei porosity change",
            value: "true".to_owned(),
            with: "sei = \"none\"".to_owned(),
        }
        .into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::options::Dimensionality;

    #[test]
    fn default_options_pass_every_rule() {
        assert!(validate(Options::default()).is_ok());
    }

    #[test]
    fn x_full_thermal_with_transverse_collector_is_a_capability_gap() {
        let options = Options {
            current_collector: CurrentCollector::PotentialPair,
            dimensionality: Dimensionality::One,
            thermal: Thermal::XFull,
            ..Options::default()
        };
        let errors = validate(options).unwrap_err();
        match errors.primary() {
            ConfigurationError::Unsupported(gap) => {
                assert!(gap.involves("thermal"));
                assert!(gap.involves("dimensionality"));
            }
            other => panic!("expected a capability gap, got: {other:?}"),
        }
    }

    #[test]
    fn potential_pair_without_transverse_dimension_is_a_user_error() {
        let options = Options {
            current_collector: CurrentCollector::PotentialPair,
            ..Options::default()
        };
        let errors = validate(options).unwrap_err();
        assert!(matches!(
            errors.primary(),
            ConfigurationError::Option(OptionError::Inconsistent { option, .. })
                if *option == "current collector"
        ));
    }

    #[test]
    fn porosity_change_without_sei_is_a_user_error() {
        let options = Options {
            sei: SeiModel::None,
            sei_porosity_change: true,
            ..Options::default()
        };
        let errors = validate(options).unwrap_err();
        assert!(matches!(
            errors.primary(),
            ConfigurationError::Option(OptionError::Inconsistent { option, .. })
                if *option == "sei porosity change"
        ));
    }

    #[test]
    fn every_violation_is_aggregated() {
        let options = Options {
            surface_form: SurfaceForm::Differential,
            electrolyte_conductivity: ElectrolyteConductivity::Full,
            thermal: Thermal::XFull,
            current_collector: CurrentCollector::PotentialPair,
            dimensionality: Dimensionality::Two,
            ..Options::default()
        };
        let errors = validate(options).unwrap_err();
        // Surface form, full conductivity, and x-full thermal at 2-D.
        assert_eq!(errors.len(), 3);
    }
}
