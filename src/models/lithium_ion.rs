//! Lithium-ion cell models.

pub mod spme;

pub use spme::Spme;

use thiserror::Error;

use crate::support::{
    options::{ConfigurationErrors, OptionError, UnsupportedCombination},
    system::AssemblyFault,
    wellposed::WellPosednessError,
};

/// Errors that can occur while constructing a lithium-ion model.
///
/// All variants are terminal for the construction pipeline; none are
/// retried or worked around, and the caller receives no partial model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The option set is invalid or names an unimplemented combination.
    #[error(transparent)]
    Configuration(#[from] ConfigurationErrors),

    /// Two submodels claimed the same unknown; a defect in the variant
    /// catalog itself, not in user input.
    #[error(transparent)]
    Assembly(#[from] AssemblyFault),

    /// The assembled system is not structurally solvable.
    #[error(transparent)]
    WellPosedness(#[from] WellPosednessError),
}

impl From<OptionError> for ModelError {
    fn from(error: OptionError) -> Self {
        Self::Configuration(error.into())
    }
}

impl From<UnsupportedCombination> for ModelError {
    fn from(error: UnsupportedCombination) -> Self {
        Self::Configuration(error.into())
    }
}
