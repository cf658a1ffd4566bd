//! Variable names shared across submodel domains.
//!
//! Coupling between domains is by exact [`VariableId`] match, so every
//! cross-domain variable name lives here rather than inline in a variant's
//! contribution. Names are paired with a region at the use site.
//!
//! [`VariableId`]: crate::support::system::VariableId

/// Concentration through the particle radius (Fickian diffusion).
pub const PARTICLE_CONCENTRATION: &str = "particle concentration";

/// Concentration at the particle surface, on the electrode it sits in.
pub const PARTICLE_SURFACE_CONCENTRATION: &str = "particle surface concentration";

/// Radially averaged particle concentration (profile variants).
pub const AVERAGE_PARTICLE_CONCENTRATION: &str = "average particle concentration";

/// Radially averaged concentration gradient (quartic profile).
pub const AVERAGE_CONCENTRATION_GRADIENT: &str = "average concentration gradient";

/// Salt concentration in the electrolyte.
pub const ELECTROLYTE_CONCENTRATION: &str = "electrolyte concentration";

/// Electrolyte potential, per region.
pub const ELECTROLYTE_POTENTIAL: &str = "electrolyte potential";

/// Single integrated ohmic drop over the cell (integrated conductivity).
pub const ELECTROLYTE_OHMIC_DROP: &str = "electrolyte ohmic drop";

/// The bulk cell temperature presented to other domains.
pub const CELL_TEMPERATURE: &str = "cell temperature";

/// Volume-averaged cell temperature (lumped thermal).
pub const VOLUME_AVERAGED_TEMPERATURE: &str = "volume-averaged cell temperature";

/// Through-thickness-averaged temperature (x-lumped thermal).
pub const X_AVERAGED_TEMPERATURE: &str = "x-averaged cell temperature";

/// Interfacial current density, per electrode.
pub const INTERFACIAL_CURRENT_DENSITY: &str = "interfacial current density";

/// Current density through the current collector.
pub const COLLECTOR_CURRENT_DENSITY: &str = "current collector current density";

/// Negative current collector potential.
pub const NEGATIVE_COLLECTOR_POTENTIAL: &str = "negative current collector potential";

/// Positive current collector potential.
pub const POSITIVE_COLLECTOR_POTENTIAL: &str = "positive current collector potential";

/// Inner SEI layer thickness.
pub const INNER_SEI_THICKNESS: &str = "inner sei thickness";

/// Outer SEI layer thickness.
pub const OUTER_SEI_THICKNESS: &str = "outer sei thickness";

/// Ethylene carbonate concentration at the SEI surface.
pub const EC_SURFACE_CONCENTRATION: &str = "ec surface concentration";

/// SEI reaction contribution to the interfacial current.
pub const SEI_INTERFACIAL_CURRENT: &str = "sei interfacial current density";

/// Porosity change due to SEI growth, consumed by the electrolyte domain.
pub const POROSITY_CHANGE: &str = "porosity change";

/// Tangential stress at the particle surface.
pub const SURFACE_STRESS: &str = "particle surface stress";

/// Crack length on a cracking electrode.
pub const CRACK_LENGTH: &str = "crack length";
