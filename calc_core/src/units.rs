//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in distribution-network design.
//! These are plain `f64` newtypes: they serialize as bare numbers and cost
//! nothing at runtime, but keep metres from being passed where kilometres
//! are expected.
//!
//! ## Units
//!
//! - Length: metres (m), kilometres (km), millimetres (mm)
//! - Force: newtons (N); moment: newton-metres (N·m)
//! - Electrical: volts (V), amperes (A)
//! - Wind: metres per second (m/s), pascals (Pa)
//! - Linear mass/weight: kg per km, newtons per metre
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Kilometers, Meters, Millimeters};
//!
//! let line = Meters(500.0);
//! let line_km: Kilometers = line.into();
//! assert_eq!(line_km.0, 0.5);
//!
//! let diameter: Meters = Millimeters(14.4).into();
//! assert!((diameter.0 - 0.0144).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity (m/s²)
pub const GRAVITY_M_S2: f64 = 9.80665;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in kilometres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Self {
        Meters(km.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

impl Newtons {
    /// Moment of this force about a point at `arm` distance
    pub fn moment_about(self, arm: Meters) -> NewtonMeters {
        NewtonMeters(self.0 * arm.0)
    }

    /// Magnitude of two orthogonal components
    pub fn hypot(self, other: Newtons) -> Newtons {
        Newtons((self.0 * self.0 + other.0 * other.0).sqrt())
    }
}

// ============================================================================
// Electrical Units
// ============================================================================

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

impl Volts {
    /// This voltage as a percentage of `nominal`
    pub fn percent_of(self, nominal: Volts) -> f64 {
        (self.0 / nominal.0) * 100.0
    }
}

// ============================================================================
// Wind Units
// ============================================================================

/// Velocity in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

// ============================================================================
// Linear Weight Units
// ============================================================================

/// Linear mass in kilograms per kilometre (conductor datasheet unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerKm(pub f64);

/// Distributed load in newtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

impl From<KgPerKm> for NewtonsPerMeter {
    fn from(w: KgPerKm) -> Self {
        NewtonsPerMeter((w.0 / 1000.0) * GRAVITY_M_S2)
    }
}

impl NewtonsPerMeter {
    /// Total load carried over a length
    pub fn over(self, length: Meters) -> Newtons {
        Newtons(self.0 * length.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(Volts);
impl_arithmetic!(Amperes);
impl_arithmetic!(MetersPerSecond);
impl_arithmetic!(Pascals);
impl_arithmetic!(KgPerKm);
impl_arithmetic!(NewtonsPerMeter);
