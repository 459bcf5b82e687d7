//! Vector and spherical-coordinate primitives.
//!
//! Everything here is dimensionless: a "vector" is a unit (or near-unit)
//! sky direction, never a distance or a velocity. The two supported
//! coordinate systems, equatorial and ecliptic, are related by a fixed
//! rotation about the X axis through the obliquity of the ecliptic.

use lazy_static::lazy_static;
use std::f64::consts::PI;

/// Relative tolerance used throughout this crate for boundary comparisons.
pub const REL_TOL: f64 = 1e-10;

/// Mean obliquity of the ecliptic (J2000), in radians.
const OBLIQUITY_RAD: f64 = 23.439_291_111_111 * PI / 180.0;

lazy_static! {
    /// Precomputed `(sin, cos)` of [`OBLIQUITY_RAD`], computed once since
    /// every equatorial/ecliptic conversion needs both.
    static ref OBLIQUITY_SINCOS: (f64, f64) = (OBLIQUITY_RAD.sin(), OBLIQUITY_RAD.cos());
}

/// A celestial coordinate system a sky direction may be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateSystem {
    Equatorial,
    Ecliptic,
}

/// Which half of the sky, split along the ecliptic plane, a direction
/// belongs to.
///
/// `Unknown` only ever arises from a single vector exactly on the ecliptic
/// plane (`nZ == 0`); classifying a *list* of vertices with mixed nonzero
/// signs is reported as an error by the caller, not folded into this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    Unknown,
}

impl Hemisphere {
    /// Sign convention used when reconstructing `nZ` from `(nX, nY)`:
    /// `+1.0` for North, `-1.0` for South. [`Hemisphere::Unknown`] has no
    /// sign and reconstructing a point from it is a caller error.
    pub fn sign(self) -> Option<f64> {
        match self {
            Hemisphere::North => Some(1.0),
            Hemisphere::South => Some(-1.0),
            Hemisphere::Unknown => None,
        }
    }
}

/// Classify a 3-vector by the sign of its Z component.
pub fn classify_hemisphere(v: [f64; 3]) -> Hemisphere {
    if v[2] > 0.0 {
        Hemisphere::North
    } else if v[2] < 0.0 {
        Hemisphere::South
    } else {
        Hemisphere::Unknown
    }
}

/// Classify a list of vectors as a single hemisphere.
///
/// The first vector with a nonzero `Z` fixes the hemisphere; any later
/// vector of the opposite nonzero sign makes the list ambiguous and
/// `None` is returned. A list with every vector exactly on the ecliptic
/// plane also returns `None` (nothing fixes a hemisphere).
pub fn classify_hemisphere_of_list(vs: &[[f64; 3]]) -> Option<Hemisphere> {
    let mut fixed = None;
    for v in vs {
        match classify_hemisphere(*v) {
            Hemisphere::Unknown => continue,
            h => match fixed {
                None => fixed = Some(h),
                Some(prev) if prev == h => {}
                Some(_) => return None,
            },
        }
    }
    fixed
}

/// `a + b`.
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// `s * a`.
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// Euclidean norm of a 3-vector.
pub fn norm(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

/// Arithmetic mean of a list of 3-vectors.
///
/// The result is *not* renormalized onto the unit sphere; callers that
/// need a unit direction (e.g. to seed the scan origin) renormalize
/// themselves.
pub fn center_of_mass(vs: &[[f64; 3]]) -> [f64; 3] {
    let n = vs.len() as f64;
    let sum = vs.iter().fold([0.0, 0.0, 0.0], |acc, v| add(acc, *v));
    scale(sum, 1.0 / n)
}

/// Convert `(longitude, latitude)` in the given coordinate system to a unit
/// 3-vector in ecliptic Cartesian coordinates.
///
/// `longitude` is right ascension (equatorial) or ecliptic longitude,
/// `latitude` is declination (equatorial) or ecliptic latitude, both in
/// radians.
pub fn sky_to_vec3(longitude: f64, latitude: f64, system: CoordinateSystem) -> [f64; 3] {
    let n = [
        latitude.cos() * longitude.cos(),
        latitude.cos() * longitude.sin(),
        latitude.sin(),
    ];
    match system {
        CoordinateSystem::Ecliptic => n,
        CoordinateSystem::Equatorial => equatorial_to_ecliptic(n),
    }
}

/// Inverse of [`sky_to_vec3`]: recover `(longitude, latitude)` in the given
/// coordinate system from a unit 3-vector in ecliptic Cartesian
/// coordinates.
///
/// `longitude` is returned in `[0, 2*PI)`, `latitude` in `[-PI/2, PI/2]`.
pub fn vec3_to_sky(v: [f64; 3], system: CoordinateSystem) -> (f64, f64) {
    let n = match system {
        CoordinateSystem::Ecliptic => v,
        CoordinateSystem::Equatorial => ecliptic_to_equatorial(v),
    };
    let r = norm(n);
    let lat = (n[2] / r).asin();
    let lon_raw = n[1].atan2(n[0]);
    let lon = if lon_raw < 0.0 {
        lon_raw + 2.0 * PI
    } else {
        lon_raw
    };
    (lon, lat)
}

fn equatorial_to_ecliptic(n: [f64; 3]) -> [f64; 3] {
    let (sin_e, cos_e) = *OBLIQUITY_SINCOS;
    [
        n[0],
        n[1] * cos_e + n[2] * sin_e,
        -n[1] * sin_e + n[2] * cos_e,
    ]
}

fn ecliptic_to_equatorial(n: [f64; 3]) -> [f64; 3] {
    // The inverse rotation of `equatorial_to_ecliptic` is its transpose,
    // which for a rotation about a single axis is the same rotation with
    // the sign of the obliquity flipped.
    let (sin_e, cos_e) = *OBLIQUITY_SINCOS;
    [
        n[0],
        n[1] * cos_e - n[2] * sin_e,
        n[1] * sin_e + n[2] * cos_e,
    ]
}

#[cfg(test)]
mod tests;
