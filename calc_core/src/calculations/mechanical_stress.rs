//! # Pole Mechanical Stress Calculation
//!
//! Conductor loads transferred to a pole and the resulting bending moment at
//! the pole base, per ABNT NBR 8458/8798.
//!
//! ## Loads (per conductor)
//!
//! ```text
//! q  = 0.613 · V²                 dynamic wind pressure (Pa)
//! Fw = Cf · q · d · L             wind on the conductor, Cf = 1.2
//! Wc = (w / 1000) · g · L         conductor self-weight
//! Ft = T                          horizontal pull from the cable tension
//! ```
//!
//! ## Aggregation
//!
//! ```text
//! H₁      = √(Fw² + Ft²)           wind and tension as orthogonal magnitudes
//! H_total = H₁ · n
//! V_total = Wc · n
//! F       = √(H_total² + V_total²)
//! M       = H_total · h_attachment  vertical load adds no moment
//! ```
//!
//! Combining wind and tension as orthogonal components ignores the real load
//! angles. Utility approval of existing designs depends on this exact
//! approximation, so it is reproduced as-is.
//!
//! The required safety factor (2.5) is reported with the result; checking a
//! pole's nominal strength against it is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::mechanical_stress::{calculate, MechanicalStressRequest};
//!
//! let request = MechanicalStressRequest::new(25.0, 14.4, 60.0, 407.0, 5000.0);
//! let result = calculate(&request).unwrap();
//!
//! assert_eq!(result.wind_load_per_conductor_n, 397.22);
//! assert_eq!(result.safety_factor_required, 2.5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::round_to;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{
    KgPerKm, Meters, MetersPerSecond, Millimeters, Newtons, NewtonsPerMeter, Pascals,
};

/// Standard label attached to every mechanical-stress result
pub const MECHANICAL_STRESS_STANDARD: &str = "ABNT NBR 8458/8798";

/// Minimum safety factor required on pole strength
pub const REQUIRED_SAFETY_FACTOR: f64 = 2.5;

/// Drag coefficient Cf for a cylindrical conductor
pub const DRAG_COEFFICIENT: f64 = 1.2;

/// ½ρ for standard air density ρ = 1.225 kg/m³
pub const AIR_DENSITY_FACTOR: f64 = 0.613;

/// Maximum conductors at a single attachment (cross-arm)
pub const MAX_CONDUCTORS: u32 = 6;

fn default_pole_height() -> f64 {
    11.0
}

fn default_attachment_height() -> f64 {
    10.0
}

fn default_num_conductors() -> u32 {
    3
}

/// Dynamic wind pressure q = ½ρV²
pub fn dynamic_pressure(wind_speed: MetersPerSecond) -> Pascals {
    Pascals(AIR_DENSITY_FACTOR * wind_speed.0 * wind_speed.0)
}

/// Input parameters for a pole loading check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_speed": 25.0,
///   "conductor_diameter": 14.4,
///   "span_length": 60.0,
///   "conductor_weight": 407.0,
///   "conductor_tension": 5000.0,
///   "pole_height": 11.0,
///   "attachment_height": 10.0,
///   "num_conductors": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalStressRequest {
    /// Design wind speed (m/s)
    pub wind_speed: f64,

    /// Conductor outside diameter (mm)
    pub conductor_diameter: f64,

    /// Span length (m)
    pub span_length: f64,

    /// Conductor unit weight (kg/km)
    pub conductor_weight: f64,

    /// Mechanical tension in each conductor (N)
    pub conductor_tension: f64,

    /// Pole height (m); informational, not used in the moment
    #[serde(default = "default_pole_height")]
    pub pole_height: f64,

    /// Height of the conductor attachment above ground (m)
    #[serde(default = "default_attachment_height")]
    pub attachment_height: f64,

    /// Conductors at the attachment, 1 to 6
    #[serde(default = "default_num_conductors")]
    pub num_conductors: u32,
}

impl MechanicalStressRequest {
    /// Request on an 11 m pole, attachment at 10 m, three conductors
    pub fn new(
        wind_speed: f64,
        conductor_diameter: f64,
        span_length: f64,
        conductor_weight: f64,
        conductor_tension: f64,
    ) -> Self {
        Self {
            wind_speed,
            conductor_diameter,
            span_length,
            conductor_weight,
            conductor_tension,
            pole_height: default_pole_height(),
            attachment_height: default_attachment_height(),
            num_conductors: default_num_conductors(),
        }
    }

    pub fn with_attachment_height(mut self, attachment_height: f64) -> Self {
        self.attachment_height = attachment_height;
        self
    }

    pub fn with_pole_height(mut self, pole_height: f64) -> Self {
        self.pole_height = pole_height;
        self
    }

    pub fn with_num_conductors(mut self, num_conductors: u32) -> Self {
        self.num_conductors = num_conductors;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("wind_speed", self.wind_speed)?;
        require_positive("conductor_diameter", self.conductor_diameter)?;
        require_positive("span_length", self.span_length)?;
        require_positive("conductor_weight", self.conductor_weight)?;
        require_positive("conductor_tension", self.conductor_tension)?;
        require_positive("pole_height", self.pole_height)?;
        require_positive("attachment_height", self.attachment_height)?;
        if self.num_conductors == 0 || self.num_conductors > MAX_CONDUCTORS {
            return Err(CalcError::invalid_input(
                "num_conductors",
                self.num_conductors.to_string(),
                "Number of conductors must be between 1 and 6",
            ));
        }
        Ok(())
    }
}

/// Results from a pole loading check. Forces in N, moment in N·m, all
/// rounded to 2 decimal places.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_load_per_conductor_n": 397.22,
///   "weight_load_per_conductor_n": 239.48,
///   "tension_load_n": 5000.0,
///   "total_resultant_n": 15064.4,
///   "moment_nm": 150472.62,
///   "safety_factor_required": 2.5,
///   "standard": "ABNT NBR 8458/8798"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalStressResult {
    /// Horizontal wind load on one conductor
    pub wind_load_per_conductor_n: f64,

    /// Vertical weight load of one conductor
    pub weight_load_per_conductor_n: f64,

    /// Horizontal tension load of one conductor
    pub tension_load_n: f64,

    /// Resultant of horizontal and vertical loads over all conductors
    pub total_resultant_n: f64,

    /// Bending moment at the pole base
    pub moment_nm: f64,

    /// Safety factor the pole's nominal strength must meet
    pub safety_factor_required: f64,

    /// Reference standard
    pub standard: String,
}

/// Calculate conductor loads and base moment for a pole.
///
/// # Returns
///
/// * `Ok(MechanicalStressResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(request: &MechanicalStressRequest) -> CalcResult<MechanicalStressResult> {
    request.validate()?;

    let q = dynamic_pressure(MetersPerSecond(request.wind_speed));
    let diameter: Meters = Millimeters(request.conductor_diameter).into();
    let span = Meters(request.span_length);

    let wind = Newtons((DRAG_COEFFICIENT * q.0 * diameter.0 * span.0).max(0.0));
    let weight = NewtonsPerMeter::from(KgPerKm(request.conductor_weight)).over(span);
    let tension = Newtons(request.conductor_tension);

    let horizontal_per_conductor = wind.hypot(tension);
    let n = f64::from(request.num_conductors);
    let total_horizontal = horizontal_per_conductor * n;
    let total_vertical = weight * n;

    let total_resultant = total_horizontal.hypot(total_vertical);
    let moment = total_horizontal.moment_about(Meters(request.attachment_height));

    debug!(
        dynamic_pressure_pa = q.0,
        wind_n = wind.0,
        weight_n = weight.0,
        total_horizontal_n = total_horizontal.0,
        total_vertical_n = total_vertical.0,
        moment_nm = moment.0,
        num_conductors = request.num_conductors,
        "mechanical stress calculated"
    );

    Ok(MechanicalStressResult {
        wind_load_per_conductor_n: round_to(wind.0, 2),
        weight_load_per_conductor_n: round_to(weight.0, 2),
        tension_load_n: round_to(tension.0, 2),
        total_resultant_n: round_to(total_resultant.0, 2),
        moment_nm: round_to(moment.0, 2),
        safety_factor_required: REQUIRED_SAFETY_FACTOR,
        standard: MECHANICAL_STRESS_STANDARD.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::GRAVITY_M_S2;
    use proptest::prelude::*;

    fn test_request() -> MechanicalStressRequest {
        MechanicalStressRequest::new(25.0, 14.4, 60.0, 407.0, 5000.0)
    }

    #[test]
    fn test_returns_positive_values() {
        let result = calculate(&test_request()).unwrap();
        assert!(result.wind_load_per_conductor_n > 0.0);
        assert!(result.weight_load_per_conductor_n > 0.0);
        assert!(result.tension_load_n > 0.0);
        assert!(result.total_resultant_n > 0.0);
        assert!(result.moment_nm > 0.0);
    }

    #[test]
    fn test_wind_load_formula() {
        let request = test_request().with_num_conductors(1);
        let result = calculate(&request).unwrap();
        let expected = 1.2 * (0.613 * 625.0) * 0.0144 * 60.0;
        assert!((result.wind_load_per_conductor_n - expected).abs() < 0.005);
    }

    #[test]
    fn test_weight_load_formula() {
        let result = calculate(&test_request()).unwrap();
        let expected = (407.0 / 1000.0) * 60.0 * GRAVITY_M_S2;
        assert!((result.weight_load_per_conductor_n - expected).abs() < 0.005);
    }

    #[test]
    fn test_resultant_and_moment() {
        let result = calculate(&test_request()).unwrap();
        let fw: f64 = 1.2 * (0.613 * 625.0) * 0.0144 * 60.0;
        let wc = 0.407 * GRAVITY_M_S2 * 60.0;
        let h = (fw * fw + 5000.0 * 5000.0).sqrt() * 3.0;
        let v = wc * 3.0;
        assert!((result.total_resultant_n - (h * h + v * v).sqrt()).abs() < 0.005);
        assert!((result.moment_nm - h * 10.0).abs() < 0.005);
        assert_eq!(result.tension_load_n, 5000.0);
    }

    #[test]
    fn test_moment_scales_with_attachment_height() {
        let high = calculate(&test_request().with_attachment_height(10.0)).unwrap();
        let low = calculate(&test_request().with_attachment_height(5.0)).unwrap();
        assert!((high.moment_nm - 2.0 * low.moment_nm).abs() < 0.02);
    }

    #[test]
    fn test_pole_height_does_not_affect_loads() {
        let a = calculate(&test_request().with_pole_height(11.0)).unwrap();
        let b = calculate(&test_request().with_pole_height(12.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_more_conductors_higher_load() {
        let three = calculate(&test_request().with_num_conductors(3)).unwrap();
        let one = calculate(&test_request().with_num_conductors(1)).unwrap();
        assert!(three.total_resultant_n > one.total_resultant_n);
    }

    #[test]
    fn test_labels_and_safety_factor() {
        let result = calculate(&test_request()).unwrap();
        assert_eq!(result.standard, "ABNT NBR 8458/8798");
        assert_eq!(result.safety_factor_required, 2.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&test_request().with_num_conductors(0)).is_err());
        assert!(calculate(&test_request().with_num_conductors(7)).is_err());
        assert!(calculate(&test_request().with_attachment_height(0.0)).is_err());
        let mut request = test_request();
        request.wind_speed = -1.0;
        assert!(calculate(&request).is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "wind_speed": 25.0,
            "conductor_diameter": 14.4,
            "span_length": 60.0,
            "conductor_weight": 407.0,
            "conductor_tension": 5000.0
        }"#;
        let request: MechanicalStressRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, test_request());
    }

    proptest! {
        #[test]
        fn prop_higher_wind_higher_wind_load(v in 1.0..60.0f64, dv in 1.0..20.0f64) {
            let mut low = test_request();
            low.wind_speed = v;
            let mut high = test_request();
            high.wind_speed = v + dv;
            let low = calculate(&low).unwrap();
            let high = calculate(&high).unwrap();
            prop_assert!(high.wind_load_per_conductor_n > low.wind_load_per_conductor_n);
        }

        #[test]
        fn prop_more_conductors_higher_resultant(n in 1u32..6) {
            let fewer = calculate(&test_request().with_num_conductors(n)).unwrap();
            let more = calculate(&test_request().with_num_conductors(n + 1)).unwrap();
            prop_assert!(more.total_resultant_n > fewer.total_resultant_n);
        }
    }
}
