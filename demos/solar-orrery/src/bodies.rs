//! Body table — orbital parameters and visual properties for the nine
//! tracked bodies (eight planets plus the Sun).
//!
//! Distances are scaled at 10 million km to one world unit; periods are in
//! solver time units with Mercury's year as the reference. Visual radii are
//! exaggerated for readability.

use crate::orbit::{OrbitError, OrbitParams};

/// Body index constants. The focus cycle and trail set follow this order.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const SUN: usize = 8;

pub const PLANET_COUNT: usize = 8;
pub const BODY_COUNT: usize = 9;

/// Names for tags and UI display (indexed by body constant).
pub const BODY_NAMES: [&str; BODY_COUNT] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Sun",
];

/// (perihelion, aphelion, period) per planet, validated into OrbitParams
/// at startup.
const PLANET_ORBITS: [(f64, f64, f64); PLANET_COUNT] = [
    (46.0, 70.0, 1.0),        // Mercury
    (107.0, 109.0, 2.56),     // Venus
    (147.0, 152.0, 4.15),     // Earth
    (206.0, 249.0, 7.80),     // Mars
    (741.0, 817.0, 50.0),     // Jupiter
    (1350.0, 1510.0, 122.0),  // Saturn
    (2740.0, 3000.0, 350.0),  // Uranus
    (4460.0, 4550.0, 685.0),  // Neptune
];

/// Per-frame y-axis spin increment in radians (indexed by body constant).
/// Venus spins retrograde; the outer planets are left static.
pub const SPIN_RATES: [f32; BODY_COUNT] = [
    0.01,   // Mercury
    -0.008, // Venus
    0.005,  // Earth
    0.003,  // Mars
    0.0,    // Jupiter
    0.0,    // Saturn
    0.0,    // Uranus
    0.0,    // Neptune
    0.001,  // Sun
];

/// Visual radii in world units (indexed by body constant).
pub const BODY_RADII: [f32; BODY_COUNT] = [
    1.0,   // Mercury
    2.48,  // Venus
    2.61,  // Earth
    1.39,  // Mars
    28.0,  // Jupiter
    24.0,  // Saturn
    10.5,  // Uranus
    10.0,  // Neptune
    30.0,  // Sun
];

/// Surface colors, linear RGB (indexed by body constant).
pub const BODY_COLORS: [[f32; 3]; BODY_COUNT] = [
    [0.60, 0.55, 0.50], // Mercury
    [0.90, 0.75, 0.40], // Venus
    [0.20, 0.40, 0.80], // Earth
    [0.80, 0.30, 0.15], // Mars
    [0.80, 0.70, 0.50], // Jupiter
    [0.85, 0.75, 0.50], // Saturn
    [0.50, 0.75, 0.85], // Uranus
    [0.25, 0.35, 0.80], // Neptune
    [1.00, 0.90, 0.50], // Sun
];

pub const SUN_EMISSIVE: f32 = 3.5;

// Saturn's ring marker — a flat companion entity that tracks the planet.
pub const RING_RADIUS: f32 = 29.0;
pub const RING_COLOR: [f32; 3] = [0.9, 0.9, 0.3];

/// Build the validated orbit table. Fails fast on a bad constant so a
/// typo'd table never reaches the frame loop.
pub fn planet_orbits() -> Result<[OrbitParams; PLANET_COUNT], OrbitError> {
    let mut out = [OrbitParams::new(1.0, 1.0, 1.0)?; PLANET_COUNT];
    for (i, &(perihelion, aphelion, period)) in PLANET_ORBITS.iter().enumerate() {
        out[i] = OrbitParams::new(perihelion, aphelion, period)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_table_validates() {
        let orbits = planet_orbits().unwrap();
        assert_eq!(orbits.len(), PLANET_COUNT);
        for orbit in &orbits {
            assert!(orbit.perihelion() <= orbit.aphelion());
            assert!(orbit.period() > 0.0);
        }
    }

    #[test]
    fn outer_planets_orbit_slower() {
        let orbits = planet_orbits().unwrap();
        for pair in orbits.windows(2) {
            assert!(pair[0].period() < pair[1].period());
        }
    }

    #[test]
    fn tables_cover_all_bodies() {
        assert_eq!(BODY_NAMES.len(), BODY_COUNT);
        assert_eq!(SPIN_RATES.len(), BODY_COUNT);
        assert_eq!(BODY_RADII.len(), BODY_COUNT);
        assert_eq!(BODY_COLORS.len(), BODY_COUNT);
        assert_eq!(BODY_NAMES[SUN], "Sun");
    }

    #[test]
    fn eccentricities_are_moderate() {
        // The solver's convergence argument assumes e < 0.3 for every body
        for orbit in &planet_orbits().unwrap() {
            assert!(orbit.eccentricity() < 0.3, "e = {}", orbit.eccentricity());
        }
    }
}
