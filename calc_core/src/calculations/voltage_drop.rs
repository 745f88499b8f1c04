//! # Voltage Drop Calculation
//!
//! Voltage drop along a line section per ABNT NBR 5410, checked against the
//! regulatory limit for the voltage tier.
//!
//! ## Formula
//!
//! ```text
//! three-phase:  ΔV = √3 · I · L_km · (R·cosφ + X·sinφ)
//! single-phase: ΔV = 2 · I · L_km · (R·cosφ + X·sinφ)
//! ΔV% = ΔV / Vn · 100
//! ```
//!
//! The √3 factor is the line-to-line drop of a balanced three-phase circuit;
//! the factor 2 covers the phase and neutral conductors of a single-phase
//! circuit. R and X come from the conductor table in Ω/km.
//!
//! ## Limits
//!
//! | Tier | Limit | Reference |
//! |------|-------|-----------|
//! | BT   | 7 %   | NBR 5410  |
//! | MT   | 5 %   | PRODIST   |
//! | AT   | 3 %   | PRODIST   |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::voltage_drop::{calculate, VoltageDropRequest};
//!
//! let request = VoltageDropRequest::new(100.0, 500.0, "CA", 50.0);
//! let result = calculate(&request).unwrap();
//!
//! assert!((result.voltage_drop_v - 61.2536).abs() < 1e-9);
//! assert_eq!(result.limit_pct, 7.0);
//! assert!(!result.compliant);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::round_to;
use crate::conductors;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Amperes, Kilometers, Meters, Volts};

/// Standard label attached to every voltage-drop result
pub const VOLTAGE_DROP_STANDARD: &str = "ABNT NBR 5410";

/// Limit applied when the voltage level is not recognized
pub const FALLBACK_LIMIT_PCT: f64 = 7.0;

/// Voltage tier of the circuit; selects the regulatory drop limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoltageLevel {
    /// Baixa tensão (low voltage)
    #[serde(rename = "BT")]
    Bt,
    /// Média tensão (medium voltage)
    #[serde(rename = "MT")]
    Mt,
    /// Alta tensão (high voltage)
    #[serde(rename = "AT")]
    At,
}

impl VoltageLevel {
    pub const ALL: [VoltageLevel; 3] = [VoltageLevel::Bt, VoltageLevel::Mt, VoltageLevel::At];

    /// Maximum admissible voltage drop (%)
    pub fn limit_pct(&self) -> f64 {
        match self {
            VoltageLevel::Bt => 7.0,
            VoltageLevel::Mt => 5.0,
            VoltageLevel::At => 3.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            VoltageLevel::Bt => "BT",
            VoltageLevel::Mt => "MT",
            VoltageLevel::At => "AT",
        }
    }

    /// Parse a tier code, ignoring case. Returns None for unknown tiers.
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BT" => Some(VoltageLevel::Bt),
            "MT" => Some(VoltageLevel::Mt),
            "AT" => Some(VoltageLevel::At),
            _ => None,
        }
    }
}

impl std::fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Limit (%) for a voltage-level code.
///
/// Unrecognized codes get [`FALLBACK_LIMIT_PCT`]. Callers that need strict
/// behaviour should reject unknown tiers with
/// [`VoltageLevel::from_str_flexible`] before calculating.
pub fn limit_for_level(level: &str) -> f64 {
    match VoltageLevel::from_str_flexible(level) {
        Some(tier) => tier.limit_pct(),
        None => {
            warn!(
                voltage_level = level,
                fallback_pct = FALLBACK_LIMIT_PCT,
                "unrecognized voltage level, applying fallback limit"
            );
            FALLBACK_LIMIT_PCT
        }
    }
}

fn default_conductor_type() -> String {
    "CA".to_string()
}

fn default_power_factor() -> f64 {
    0.92
}

fn default_phases() -> u8 {
    3
}

fn default_nominal_voltage() -> f64 {
    220.0
}

fn default_voltage_level() -> String {
    "BT".to_string()
}

/// Input parameters for a voltage-drop check.
///
/// Family and voltage level are kept as the caller's strings so lookup
/// failures and the limit fallback can report exactly what was sent.
///
/// ## JSON Example
///
/// ```json
/// {
///   "current": 100.0,
///   "length": 500.0,
///   "conductor_type": "CA",
///   "cross_section": 50.0,
///   "power_factor": 0.92,
///   "phases": 3,
///   "nominal_voltage": 220.0,
///   "voltage_level": "BT"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropRequest {
    /// Load current (A)
    pub current: f64,

    /// Section length (m)
    pub length: f64,

    /// Conductor family: CA, CAA or ACSR (case-insensitive)
    #[serde(default = "default_conductor_type")]
    pub conductor_type: String,

    /// Conductor cross-section (mm²)
    pub cross_section: f64,

    /// Power factor cosφ, 0 to 1
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,

    /// Number of phases: 1 or 3
    #[serde(default = "default_phases")]
    pub phases: u8,

    /// Nominal voltage (V)
    #[serde(default = "default_nominal_voltage")]
    pub nominal_voltage: f64,

    /// Voltage tier: BT, MT or AT
    #[serde(default = "default_voltage_level")]
    pub voltage_level: String,
}

impl VoltageDropRequest {
    /// Three-phase 220 V BT request at power factor 0.92
    pub fn new(
        current: f64,
        length: f64,
        conductor_type: impl Into<String>,
        cross_section: f64,
    ) -> Self {
        Self {
            current,
            length,
            conductor_type: conductor_type.into(),
            cross_section,
            power_factor: default_power_factor(),
            phases: default_phases(),
            nominal_voltage: default_nominal_voltage(),
            voltage_level: default_voltage_level(),
        }
    }

    pub fn with_power_factor(mut self, power_factor: f64) -> Self {
        self.power_factor = power_factor;
        self
    }

    pub fn with_phases(mut self, phases: u8) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_nominal_voltage(mut self, nominal_voltage: f64) -> Self {
        self.nominal_voltage = nominal_voltage;
        self
    }

    pub fn with_voltage_level(mut self, voltage_level: impl Into<String>) -> Self {
        self.voltage_level = voltage_level.into();
        self
    }

    /// Validate input parameters.
    ///
    /// The cross-section envelope is checked by the conductor table, not here.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("current", self.current)?;
        require_positive("length", self.length)?;
        require_positive("cross_section", self.cross_section)?;
        require_positive("nominal_voltage", self.nominal_voltage)?;
        if !(0.0..=1.0).contains(&self.power_factor) {
            return Err(CalcError::invalid_input(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor must be between 0 and 1",
            ));
        }
        phase_factor(self.phases)?;
        Ok(())
    }
}

/// √3 for three-phase, 2 for single-phase
fn phase_factor(phases: u8) -> CalcResult<f64> {
    match phases {
        3 => Ok(3f64.sqrt()),
        1 => Ok(2.0),
        other => Err(CalcError::invalid_input(
            "phases",
            other.to_string(),
            "Number of phases must be 1 or 3",
        )),
    }
}

/// A drop exactly at the limit still complies.
fn is_compliant(pct: f64, limit_pct: f64) -> bool {
    pct <= limit_pct
}

/// Results from a voltage-drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "voltage_drop_v": 61.2536,
///   "voltage_drop_pct": 27.8425,
///   "limit_pct": 7.0,
///   "compliant": false,
///   "resistance": 0.641,
///   "reactance": 0.3,
///   "standard": "ABNT NBR 5410"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Absolute drop (V), 4 decimal places
    pub voltage_drop_v: f64,

    /// Drop as a percentage of nominal voltage, 4 decimal places
    pub voltage_drop_pct: f64,

    /// Limit applied (%)
    pub limit_pct: f64,

    /// Drop percentage is at or below the limit
    pub compliant: bool,

    /// Conductor resistance used (Ω/km)
    pub resistance: f64,

    /// Conductor reactance used (Ω/km)
    pub reactance: f64,

    /// Reference standard
    pub standard: String,
}

impl VoltageDropResult {
    /// Check if the section meets the limit
    pub fn passes(&self) -> bool {
        self.compliant
    }

    /// Remaining headroom below the limit (%); negative when exceeded
    pub fn margin_pct(&self) -> f64 {
        self.limit_pct - self.voltage_drop_pct
    }
}

/// Calculate voltage drop for a line section.
///
/// # Returns
///
/// * `Ok(VoltageDropResult)` - Calculation results
/// * `Err(CalcError)` - Invalid input, unknown conductor family, or
///   cross-section outside the table
pub fn calculate(request: &VoltageDropRequest) -> CalcResult<VoltageDropResult> {
    request.validate()?;

    let props = conductors::lookup(&request.conductor_type, request.cross_section)?;
    let (resistance, reactance) = props.as_pair();

    let cos_phi = request.power_factor;
    // Clamp guards against 1 - cos² going slightly negative at cosφ ≈ 1
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    let length_km: Kilometers = Meters(request.length).into();

    let impedance_factor = resistance * cos_phi + reactance * sin_phi;
    let current = Amperes(request.current);

    let delta_v = Volts(phase_factor(request.phases)? * current.0 * length_km.0 * impedance_factor);
    let pct = delta_v.percent_of(Volts(request.nominal_voltage));
    let limit_pct = limit_for_level(&request.voltage_level);
    let compliant = is_compliant(pct, limit_pct);

    debug!(
        conductor = %props.family,
        cross_section = request.cross_section,
        phases = request.phases,
        delta_v = delta_v.0,
        pct,
        limit_pct,
        compliant,
        "voltage drop calculated"
    );

    Ok(VoltageDropResult {
        voltage_drop_v: round_to(delta_v.0, 4),
        voltage_drop_pct: round_to(pct, 4),
        limit_pct,
        compliant,
        resistance,
        reactance,
        standard: VOLTAGE_DROP_STANDARD.to_string(),
    })
}
