//! # Conductor Database
//!
//! Conductor families used on overhead distribution lines and their
//! per-kilometre electrical properties.
//!
//! ## Families
//!
//! - **CA**: bare aluminium conductor
//! - **CAA**: aluminium conductor, steel reinforced (Brazilian designation)
//! - **ACSR**: same construction under the international designation
//!
//! ## Example
//!
//! ```rust
//! use calc_core::conductors::{ConductorFamily, ConductorSpec};
//!
//! let spec = ConductorSpec::new(ConductorFamily::Ca, 50.0);
//! let props = spec.properties().unwrap();
//! assert_eq!(props.resistance, 0.641);
//! assert_eq!(props.reactance, 0.300);
//! ```

pub mod table;

pub use table::{lookup, lookup_family, standard_sections};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Conductor material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorFamily {
    /// Bare aluminium (CA)
    #[serde(rename = "CA")]
    Ca,
    /// Aluminium, steel reinforced (CAA)
    #[serde(rename = "CAA")]
    Caa,
    /// Aluminium conductor steel reinforced (ACSR)
    #[serde(rename = "ACSR")]
    Acsr,
}

impl ConductorFamily {
    /// All conductor families for UI selection
    pub const ALL: [ConductorFamily; 3] = [
        ConductorFamily::Ca,
        ConductorFamily::Caa,
        ConductorFamily::Acsr,
    ];

    /// Short code as used on drawings and in requests (e.g., "CAA")
    pub fn code(&self) -> &'static str {
        match self {
            ConductorFamily::Ca => "CA",
            ConductorFamily::Caa => "CAA",
            ConductorFamily::Acsr => "ACSR",
        }
    }

    /// Parse a family code, ignoring case. Surrounding whitespace is not stripped.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().as_str() {
            "CA" => Ok(ConductorFamily::Ca),
            "CAA" => Ok(ConductorFamily::Caa),
            "ACSR" => Ok(ConductorFamily::Acsr),
            _ => Err(CalcError::unknown_conductor_family(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorFamily::Ca => "CA - Bare Aluminium",
            ConductorFamily::Caa => "CAA - Aluminium Steel Reinforced",
            ConductorFamily::Acsr => "ACSR - Aluminium Conductor Steel Reinforced",
        }
    }
}

impl FromStr for ConductorFamily {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl std::fmt::Display for ConductorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A conductor identified by family and nominal cross-section.
///
/// Only used to look up electrical properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorSpec {
    /// Material family
    #[serde(rename = "conductor_type")]
    pub family: ConductorFamily,
    /// Nominal cross-section (mm²)
    #[serde(rename = "cross_section")]
    pub cross_section_mm2: f64,
}

impl ConductorSpec {
    pub fn new(family: ConductorFamily, cross_section_mm2: f64) -> Self {
        Self {
            family,
            cross_section_mm2,
        }
    }

    /// Resistance and reactance for this conductor, interpolated if needed
    pub fn properties(&self) -> CalcResult<ConductorElectricalProperties> {
        lookup_family(self.family, self.cross_section_mm2)
    }

    /// Get display name (e.g., "CA 50 mm²")
    pub fn display_name(&self) -> String {
        format!("{} {} mm²", self.family.code(), self.cross_section_mm2)
    }
}

/// Per-kilometre electrical properties of a conductor.
///
/// Derived per call from the tabulated data; never stored.
///
/// ## JSON Example
///
/// ```json
/// {
///   "conductor_type": "CA",
///   "cross_section": 50.0,
///   "resistance": 0.641,
///   "reactance": 0.3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorElectricalProperties {
    /// Family the values were taken from
    #[serde(rename = "conductor_type")]
    pub family: ConductorFamily,
    /// Cross-section the values apply to (mm²)
    #[serde(rename = "cross_section")]
    pub cross_section_mm2: f64,
    /// Resistance (Ω/km)
    pub resistance: f64,
    /// Reactance (Ω/km)
    pub reactance: f64,
}

impl ConductorElectricalProperties {
    /// The (resistance, reactance) pair in Ω/km
    pub fn as_pair(&self) -> (f64, f64) {
        (self.resistance, self.reactance)
    }
}
