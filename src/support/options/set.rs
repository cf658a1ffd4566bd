use serde::{Deserialize, Serialize};

use crate::support::options::{
    CurrentCollector, Dimensionality, ElectrolyteConductivity, OptionError, Particle,
    ParticleCracking, ParticleShape, SeiModel, SurfaceForm, Thermal,
};

/// A raw option value, mirroring the loosely typed configuration mappings
/// accepted at the crate boundary.
///
/// Callers working with typed [`Options`] fields never need this; it exists
/// for [`Options::try_from_entries`], where values arrive as strings,
/// booleans, or small integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean value, e.g. for `sei porosity change`.
    Bool(bool),

    /// An integer value, e.g. for `dimensionality`.
    Int(i64),

    /// A string value, the common case.
    Str(String),
}

impl OptionValue {
    /// Renders the value as the text form used in error messages and for
    /// parsing string-valued options.
    fn render(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Str(s) => s.clone(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// The immutable record of every configuration choice for a cell model.
///
/// Every option has a documented default; [`Options::default`] is a valid,
/// well-posed configuration. The record is constructed once and never
/// mutated afterward; derive a changed variant by cloning.
///
/// Construction rejects unknown option names and out-of-domain values with
/// [`OptionError`]. Cross-option compatibility is the concern of each model
/// family's rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Thermal submodel; defaults to `isothermal`.
    pub thermal: Thermal,

    /// Particle concentration submodel; defaults to `Fickian diffusion`.
    pub particle: Particle,

    /// Particle geometry; defaults to `spherical`.
    #[serde(rename = "particle shape")]
    pub particle_shape: ParticleShape,

    /// Particle cracking submodel; defaults to `none`.
    #[serde(rename = "particle cracking")]
    pub particle_cracking: ParticleCracking,

    /// SEI growth submodel; defaults to `none`.
    pub sei: SeiModel,

    /// Whether SEI growth feeds back into the electrode porosity;
    /// defaults to `false`.
    #[serde(rename = "sei porosity change")]
    pub sei_porosity_change: bool,

    /// Surface-form treatment; defaults to `false` (the only implemented
    /// value).
    #[serde(rename = "surface form")]
    pub surface_form: SurfaceForm,

    /// Electrolyte conductivity treatment; defaults to `default`.
    #[serde(rename = "electrolyte conductivity")]
    pub electrolyte_conductivity: ElectrolyteConductivity,

    /// Current collector submodel; defaults to `uniform`.
    #[serde(rename = "current collector")]
    pub current_collector: CurrentCollector,

    /// Transverse collector dimensionality; defaults to `0`.
    pub dimensionality: Dimensionality,
}

impl Options {
    /// Builds an option set from string-keyed entries, filling every
    /// unspecified option with its default.
    ///
    /// This is the loosely typed boundary of the crate: entries arrive as
    /// `(name, value)` pairs the way an external configuration supplies
    /// them. Later entries for the same name overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownOption`] for an unrecognized name and
    /// [`OptionError::InvalidValue`] for a value outside the named option's
    /// legal set.
    pub fn try_from_entries<'a, I>(entries: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut options = Self::default();
        for (name, value) in entries {
            options.apply(name, &value)?;
        }
        Ok(options)
    }

    fn apply(&mut self, name: &str, value: &OptionValue) -> Result<(), OptionError> {
        match name {
            Thermal::OPTION => self.thermal = value.render().parse()?,
            Particle::OPTION => self.particle = value.render().parse()?,
            ParticleShape::OPTION => self.particle_shape = value.render().parse()?,
            ParticleCracking::OPTION => self.particle_cracking = value.render().parse()?,
            SeiModel::OPTION => self.sei = value.render().parse()?,
            "sei porosity change" => self.sei_porosity_change = parse_porosity_change(value)?,
            SurfaceForm::OPTION => self.surface_form = value.render().parse()?,
            ElectrolyteConductivity::OPTION => {
                self.electrolyte_conductivity = value.render().parse()?;
            }
            CurrentCollector::OPTION => self.current_collector = value.render().parse()?,
            Dimensionality::OPTION => self.dimensionality = parse_dimensionality(value)?,
            unknown => {
                return Err(OptionError::UnknownOption {
                    name: unknown.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn parse_porosity_change(value: &OptionValue) -> Result<bool, OptionError> {
    match value {
        OptionValue::Bool(b) => Ok(*b),
        OptionValue::Str(s) if s == "true" => Ok(true),
        OptionValue::Str(s) if s == "false" => Ok(false),
        other => Err(OptionError::invalid_value(
            "sei porosity change",
            other.render(),
            &["false", "true"],
        )),
    }
}

fn parse_dimensionality(value: &OptionValue) -> Result<Dimensionality, OptionError> {
    let integer = match value {
        OptionValue::Int(i) => *i,
        OptionValue::Str(s) => s.parse().map_err(|_| {
            OptionError::invalid_value(Dimensionality::OPTION, s.clone(), Dimensionality::ALLOWED)
        })?,
        OptionValue::Bool(b) => {
            return Err(OptionError::invalid_value(
                Dimensionality::OPTION,
                b.to_string(),
                Dimensionality::ALLOWED,
            ));
        }
    };
    Dimensionality::try_from(integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_select_the_documented_defaults() {
        let options = Options::default();
        assert_eq!(options.thermal, Thermal::Isothermal);
        assert_eq!(options.particle, Particle::FickianDiffusion);
        assert_eq!(options.particle_shape, ParticleShape::Spherical);
        assert_eq!(options.particle_cracking, ParticleCracking::None);
        assert_eq!(options.sei, SeiModel::None);
        assert!(!options.sei_porosity_change);
        assert_eq!(options.surface_form, SurfaceForm::False);
        assert_eq!(
            options.electrolyte_conductivity,
            ElectrolyteConductivity::Default
        );
        assert_eq!(options.current_collector, CurrentCollector::Uniform);
        assert_eq!(options.dimensionality, Dimensionality::Zero);
    }

    #[test]
    fn builds_from_string_keyed_entries() {
        let options = Options::try_from_entries([
            ("current collector", OptionValue::from("potential pair")),
            ("dimensionality", OptionValue::from(2_i64)),
            ("thermal", OptionValue::from("x-lumped")),
            ("sei", OptionValue::from("ec reaction limited")),
            ("sei porosity change", OptionValue::from(true)),
        ])
        .expect("entries should parse");

        assert_eq!(options.current_collector, CurrentCollector::PotentialPair);
        assert_eq!(options.dimensionality, Dimensionality::Two);
        assert_eq!(options.thermal, Thermal::XLumped);
        assert_eq!(options.sei, SeiModel::EcReactionLimited);
        assert!(options.sei_porosity_change);
        // Unspecified options keep their defaults.
        assert_eq!(options.particle, Particle::FickianDiffusion);
    }

    #[test]
    fn rejects_unknown_option_name() {
        let error =
            Options::try_from_entries([("bc_options", OptionValue::from("anything"))]).unwrap_err();
        assert_eq!(
            error,
            OptionError::UnknownOption {
                name: "bc_options".to_owned()
            }
        );
    }

    #[test]
    fn rejects_out_of_range_dimensionality() {
        let error = Options::try_from_entries([("dimensionality", OptionValue::from(5_i64))])
            .unwrap_err();
        match error {
            OptionError::InvalidValue { option, given, .. } => {
                assert_eq!(option, "dimensionality");
                assert_eq!(given, "5");
            }
            other => panic!("expected InvalidValue, got: {other:?}"),
        }
    }

    #[test]
    fn deserializes_from_json_with_spaced_keys() {
        let options: Options = serde_json::from_str(
            r#"{
                "thermal": "lumped",
                "particle shape": "user",
                "electrolyte conductivity": "integrated",
                "current collector": "potential pair",
                "dimensionality": 1
            }"#,
        )
        .expect("configuration should deserialize");

        assert_eq!(options.thermal, Thermal::Lumped);
        assert_eq!(options.particle_shape, ParticleShape::User);
        assert_eq!(
            options.electrolyte_conductivity,
            ElectrolyteConductivity::Integrated
        );
        assert_eq!(options.current_collector, CurrentCollector::PotentialPair);
        assert_eq!(options.dimensionality, Dimensionality::One);
    }

    #[test]
    fn rejects_unknown_field_when_deserializing() {
        let result = serde_json::from_str::<Options>(r#"{"bc_options": {"dimensionality": 5}}"#);
        assert!(result.is_err());
    }
}
