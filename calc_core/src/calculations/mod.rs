//! # Network Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Request` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(request) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Calculations hold no state between calls and may run concurrently from
//! any number of threads.
//!
//! ## Available Calculations
//!
//! - [`voltage_drop`] - Voltage drop on a line section (ABNT NBR 5410)
//! - [`mechanical_stress`] - Conductor loads and bending moment on a pole (ABNT NBR 8458/8798)
//! - [`material_list`] - Bill of materials for an overhead network project

pub mod material_list;
pub mod mechanical_stress;
pub mod voltage_drop;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;

// Re-export commonly used types
pub use material_list::{MaterialItem, MaterialListRequest, MaterialListResult};
pub use mechanical_stress::{MechanicalStressRequest, MechanicalStressResult};
pub use voltage_drop::{VoltageDropRequest, VoltageDropResult, VoltageLevel};

/// Enum wrapper for all calculation requests.
///
/// Lets a caller submit any calculation as a single JSON document:
///
/// ```json
/// { "type": "VoltageDrop", "current": 100.0, "length": 500.0, "cross_section": 50.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Voltage drop on a line section
    VoltageDrop(VoltageDropRequest),
    /// Mechanical loads on a pole
    MechanicalStress(MechanicalStressRequest),
    /// Material list for a project
    MaterialList(MaterialListRequest),
}

impl CalculationRequest {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::VoltageDrop(_) => "VoltageDrop",
            CalculationRequest::MechanicalStress(_) => "MechanicalStress",
            CalculationRequest::MaterialList(_) => "MaterialList",
        }
    }
}

/// Result of any calculation, tagged the same way as [`CalculationRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    VoltageDrop(VoltageDropResult),
    MechanicalStress(MechanicalStressResult),
    MaterialList(MaterialListResult),
}

/// Run a calculation request through the matching calculator.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::{run, CalculationOutput, CalculationRequest};
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{ "type": "VoltageDrop", "current": 10.0, "length": 10.0, "cross_section": 50.0 }"#,
/// ).unwrap();
///
/// match run(&request).unwrap() {
///     CalculationOutput::VoltageDrop(result) => assert!(result.compliant),
///     _ => unreachable!(),
/// }
/// ```
pub fn run(request: &CalculationRequest) -> CalcResult<CalculationOutput> {
    debug!(calc_type = request.calc_type(), "running calculation");
    let output = match request {
        CalculationRequest::VoltageDrop(req) => {
            CalculationOutput::VoltageDrop(voltage_drop::calculate(req)?)
        }
        CalculationRequest::MechanicalStress(req) => {
            CalculationOutput::MechanicalStress(mechanical_stress::calculate(req)?)
        }
        CalculationRequest::MaterialList(req) => {
            CalculationOutput::MaterialList(material_list::calculate(req)?)
        }
    };
    Ok(output)
}

/// Parse a JSON request, run it, and serialize the output as pretty JSON.
pub fn run_json(request_json: &str) -> CalcResult<String> {
    let request: CalculationRequest = serde_json::from_str(request_json)?;
    let output = run(&request)?;
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Round half away from zero to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(64.81234567, 4), 64.8123);
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(-2.346, 2), -2.35);
    }

    #[test]
    fn test_request_tagging() {
        let json = r#"{
            "type": "MechanicalStress",
            "wind_speed": 25.0,
            "conductor_diameter": 14.4,
            "span_length": 60.0,
            "conductor_weight": 407.0,
            "conductor_tension": 5000.0
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calc_type(), "MechanicalStress");
        match run(&request).unwrap() {
            CalculationOutput::MechanicalStress(result) => {
                assert_eq!(result.safety_factor_required, 2.5);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_run_json_propagates_errors() {
        let err = run_json(r#"{ "type": "VoltageDrop", "current": 10.0, "length": 10.0,
            "conductor_type": "XYZ", "cross_section": 50.0 }"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CONDUCTOR_FAMILY");

        let err = run_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_run_json_output_is_tagged() {
        let out = run_json(
            r#"{ "type": "MaterialList", "project": "P-1", "items": [] }"#,
        )
        .unwrap();
        assert!(out.contains("\"type\": \"MaterialList\""));
        assert!(out.contains("\"total_items\": 0"));
    }
}
