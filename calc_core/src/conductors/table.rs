//! Conductor Resistance/Reactance Tables
//!
//! Resistance and reactance in Ω/km per standard cross-section, from
//! ABNT NBR 5410 and manufacturer datasheets. Each family has ten
//! tabulated sections from 16 to 240 mm².
//!
//! Sections between two tabulated values are linearly interpolated.
//! Sections outside the tabulated envelope are rejected; the table is
//! never extrapolated.

use tracing::debug;

use super::{ConductorElectricalProperties, ConductorFamily};
use crate::errors::{CalcError, CalcResult};

/// One tabulated row: (cross-section mm², resistance Ω/km, reactance Ω/km)
type SectionRow = (f64, f64, f64);

/// CA - bare aluminium
const CA_TABLE: [SectionRow; 10] = [
    (16.0, 1.915, 0.335),
    (25.0, 1.200, 0.320),
    (35.0, 0.868, 0.310),
    (50.0, 0.641, 0.300),
    (70.0, 0.443, 0.290),
    (95.0, 0.320, 0.280),
    (120.0, 0.253, 0.275),
    (150.0, 0.206, 0.270),
    (185.0, 0.164, 0.265),
    (240.0, 0.125, 0.260),
];

/// CAA - aluminium, steel reinforced
const CAA_TABLE: [SectionRow; 10] = [
    (16.0, 1.900, 0.340),
    (25.0, 1.190, 0.325),
    (35.0, 0.860, 0.315),
    (50.0, 0.630, 0.305),
    (70.0, 0.435, 0.295),
    (95.0, 0.315, 0.285),
    (120.0, 0.248, 0.278),
    (150.0, 0.200, 0.272),
    (185.0, 0.160, 0.268),
    (240.0, 0.122, 0.262),
];

/// ACSR - same construction as CAA, kept as its own table
const ACSR_TABLE: [SectionRow; 10] = [
    (16.0, 1.900, 0.340),
    (25.0, 1.190, 0.325),
    (35.0, 0.860, 0.315),
    (50.0, 0.630, 0.305),
    (70.0, 0.435, 0.295),
    (95.0, 0.315, 0.285),
    (120.0, 0.248, 0.278),
    (150.0, 0.200, 0.272),
    (185.0, 0.160, 0.268),
    (240.0, 0.122, 0.262),
];

fn rows(family: ConductorFamily) -> &'static [SectionRow] {
    match family {
        ConductorFamily::Ca => &CA_TABLE,
        ConductorFamily::Caa => &CAA_TABLE,
        ConductorFamily::Acsr => &ACSR_TABLE,
    }
}

/// Tabulated cross-sections (mm²) for a family, ascending
pub fn standard_sections(family: ConductorFamily) -> Vec<f64> {
    rows(family).iter().map(|&(section, _, _)| section).collect()
}

/// Look up (resistance, reactance) by family code and cross-section.
///
/// The family code is case-insensitive ("ca" and "CA" are equal) but must not
/// carry surrounding whitespace.
///
/// # Errors
///
/// * `UnknownConductorFamily` - family is not CA, CAA or ACSR
/// * `CrossSectionOutOfRange` - section below 16 or above 240 mm²
///
/// # Example
///
/// ```rust
/// use calc_core::conductors::lookup;
///
/// let props = lookup("ca", 60.0).unwrap();
/// assert!(props.resistance < 0.641 && props.resistance > 0.443);
/// ```
pub fn lookup(family: &str, cross_section_mm2: f64) -> CalcResult<ConductorElectricalProperties> {
    let family = ConductorFamily::from_str_flexible(family)?;
    lookup_family(family, cross_section_mm2)
}

/// Look up (resistance, reactance) for an already-parsed family.
pub fn lookup_family(
    family: ConductorFamily,
    cross_section_mm2: f64,
) -> CalcResult<ConductorElectricalProperties> {
    let table = rows(family);
    let (min, _, _) = table[0];
    let (max, _, _) = table[table.len() - 1];

    // Negated form also rejects NaN
    if !(cross_section_mm2 >= min && cross_section_mm2 <= max) {
        return Err(CalcError::cross_section_out_of_range(
            family.code(),
            cross_section_mm2,
            min,
            max,
        ));
    }

    let make = |resistance, reactance| ConductorElectricalProperties {
        family,
        cross_section_mm2,
        resistance,
        reactance,
    };

    if let Some(&(_, r, x)) = table.iter().find(|&&(s, _, _)| s == cross_section_mm2) {
        return Ok(make(r, x));
    }

    for pair in table.windows(2) {
        let (s_lo, r_lo, x_lo) = pair[0];
        let (s_hi, r_hi, x_hi) = pair[1];
        if s_lo <= cross_section_mm2 && cross_section_mm2 <= s_hi {
            let t = (cross_section_mm2 - s_lo) / (s_hi - s_lo);
            let r = r_lo + t * (r_hi - r_lo);
            let x = x_lo + t * (x_hi - x_lo);
            debug!(
                family = family.code(),
                cross_section_mm2,
                s_lo,
                s_hi,
                t,
                resistance = r,
                reactance = x,
                "interpolated conductor properties"
            );
            return Ok(make(r, x));
        }
    }

    // Unreachable for a sorted table once the range check has passed
    Err(CalcError::cross_section_out_of_range(
        family.code(),
        cross_section_mm2,
        min,
        max,
    ))
}
