use std::fmt;

use thiserror::Error;

/// An error in the supplied option values themselves.
///
/// An `OptionError` always indicates a user mistake: the configuration is
/// self-contradictory or references a name or value outside the documented
/// option domains. It is never recovered from or defaulted silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The configuration referenced an option name that is not recognized.
    #[error("unrecognized option {name:?}")]
    UnknownOption {
        /// The offending option name, as supplied.
        name: String,
    },

    /// An option was given a value outside its legal set.
    #[error("invalid value {given:?} for option {option:?}; allowed values are {allowed:?}")]
    InvalidValue {
        /// The option the value was supplied for.
        option: &'static str,

        /// The offending value, rendered as text.
        given: String,

        /// The full legal set for this option.
        allowed: &'static [&'static str],
    },

    /// Two individually valid option values contradict each other.
    #[error("option {option:?} = {value:?} is inconsistent with {with}")]
    Inconsistent {
        /// The option whose value triggers the contradiction.
        option: &'static str,

        /// Its value, rendered as text.
        value: String,

        /// A description of the conflicting choice.
        with: String,
    },
}

impl OptionError {
    pub(crate) fn invalid_value(
        option: &'static str,
        given: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::InvalidValue {
            option,
            given: given.into(),
            allowed,
        }
    }
}

/// A recognized but unimplemented option combination.
///
/// The configuration is well-formed and physically meaningful; this model
/// family simply has no submodel variant for it. Distinct from
/// [`OptionError`], which signals a user mistake rather than a capability
/// gap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no implemented submodel for {}", render_pairs(.options))]
pub struct UnsupportedCombination {
    /// The option/value pairs that jointly have no implemented variant.
    pub options: Vec<(&'static str, String)>,
}

impl UnsupportedCombination {
    /// Builds an error from the offending option/value pairs.
    pub fn new<I, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        Self {
            options: options
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
        }
    }

    /// Whether the combination involves the named option.
    pub fn involves(&self, option: &str) -> bool {
        self.options.iter().any(|(name, _)| *name == option)
    }
}

fn render_pairs(options: &[(&'static str, String)]) -> String {
    options
        .iter()
        .map(|(name, value)| format!("{name:?} = {value:?}"))
        .collect::<Vec<_>>()
        .join(" with ")
}

/// One violation found while validating an option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The configuration itself is invalid.
    #[error(transparent)]
    Option(#[from] OptionError),

    /// The configuration is valid but not implemented.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedCombination),
}

/// Every violation found in one pass over a compatibility rule table.
///
/// Rules are declarative and order-independent, so all of them are
/// evaluated and every violation is reported at once rather than stopping
/// at the first. The invariant that the list is non-empty is enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ConfigurationErrors(Vec<ConfigurationError>);

impl ConfigurationErrors {
    /// Wraps a non-empty list of violations.
    ///
    /// # Panics
    ///
    /// Panics if `violations` is empty; an empty violation list means the
    /// configuration is valid and no error should be built at all.
    pub(crate) fn new(violations: Vec<ConfigurationError>) -> Self {
        assert!(
            !violations.is_empty(),
            "ConfigurationErrors requires at least one violation"
        );
        Self(violations)
    }

    /// The violation that determines this error's category.
    ///
    /// This is the first violation in rule order; the full list is
    /// available through [`iter`](Self::iter).
    pub fn primary(&self) -> &ConfigurationError {
        &self.0[0]
    }

    /// All violations, in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigurationError> {
        self.0.iter()
    }

    /// The number of violations found.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the list is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ConfigurationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid model configuration: ")?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl From<OptionError> for ConfigurationErrors {
    fn from(error: OptionError) -> Self {
        Self(vec![ConfigurationError::Option(error)])
    }
}

impl From<UnsupportedCombination> for ConfigurationErrors {
    fn from(error: UnsupportedCombination) -> Self {
        Self(vec![ConfigurationError::Unsupported(error)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_option_and_legal_set() {
        let error = OptionError::invalid_value("dimensionality", "5", &["0", "1", "2"]);
        let message = error.to_string();
        assert!(message.contains("dimensionality"));
        assert!(message.contains('5'));
        assert!(message.contains('0') && message.contains('1') && message.contains('2'));
    }

    #[test]
    fn unsupported_combination_names_every_option_involved() {
        let error = UnsupportedCombination::new([
            ("thermal", "x-full".to_owned()),
            ("dimensionality", "1".to_owned()),
        ]);
        assert!(error.involves("thermal"));
        assert!(error.involves("dimensionality"));
        assert!(!error.involves("sei"));
        let message = error.to_string();
        assert!(message.contains("thermal") && message.contains("dimensionality"));
    }

    #[test]
    fn aggregated_errors_report_every_violation() {
        let errors = ConfigurationErrors::new(vec![
            ConfigurationError::Option(OptionError::UnknownOption {
                name: "bc_options".to_owned(),
            }),
            ConfigurationError::Unsupported(UnsupportedCombination::new([(
                "surface form",
                "algebraic".to_owned(),
            )])),
        ]);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors.primary(), ConfigurationError::Option(_)));
        let message = errors.to_string();
        assert!(message.contains("bc_options") && message.contains("surface form"));
    }
}
