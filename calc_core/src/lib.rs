//! # calc_core - Distribution Network Calculation Engine
//!
//! `calc_core` is the computational heart of sisDIST, providing the design
//! checks for overhead electrical distribution networks against Brazilian
//! standards. All inputs and outputs are JSON-serializable so the engine can
//! sit behind an HTTP handler, a CLI, or an LLM tool call unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a request and return a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No I/O**: No persistence, no network; callers supply validated numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::voltage_drop::{calculate, VoltageDropRequest};
//!
//! let request = VoltageDropRequest::new(10.0, 10.0, "CA", 50.0);
//! let result = calculate(&request).unwrap();
//! assert!(result.compliant);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Voltage drop, pole mechanical stress, material list
//! - [`conductors`] - Conductor families and the resistance/reactance table
//! - [`spans`] - Span length from pole coordinates
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod conductors;
pub mod errors;
pub mod spans;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run, run_json, CalculationOutput, CalculationRequest};
pub use conductors::{ConductorElectricalProperties, ConductorFamily, ConductorSpec};
pub use errors::{CalcError, CalcResult};
