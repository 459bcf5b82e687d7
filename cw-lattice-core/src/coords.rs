//! Conversion between physical Doppler parameters and the canonical
//! coordinates `(w0, kX, kY, w1, w2, ...)` in which the flat metric is
//! (approximately) Euclidean.

use crate::error::ScanError;
use cw_lattice_geometry::vector::REL_TOL;
use cw_lattice_geometry::{Doppler, Hemisphere};
use std::f64::consts::PI;

/// 1 AU in meters.
const R_ORB_M: f64 = 1.495_978_707e11;
/// Speed of light in m/s.
const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// The dimension of the canonical space for a given active spin order:
/// `D = 2 + s*`.
pub fn canonical_dim(active_order: usize) -> usize {
    2 + active_order
}

/// `doppler -> canonical`, using the formulas in the data model verbatim.
///
/// `t_obs` is the observation span `T`. The result has length
/// `canonical_dim(active_order)`.
pub fn doppler_to_canonical(doppler: &Doppler, t_obs: f64, active_order: usize) -> Vec<f64> {
    let d = canonical_dim(active_order);
    let mut canonical = vec![0.0; d];

    canonical[0] = 2.0 * PI * t_obs * doppler.fkdot[0];
    let k_scale = -2.0 * PI * R_ORB_M / SPEED_OF_LIGHT_M_PER_S * doppler.fkdot[0];
    canonical[1] = k_scale * doppler.vn[0];
    canonical[2] = k_scale * doppler.vn[1];

    for s in 1..active_order {
        canonical[2 + s] = 2.0 * PI * t_obs.powi(s as i32 + 1) * doppler.fkdot[s];
    }

    canonical
}

/// `canonical -> doppler`, the inverse of [`doppler_to_canonical`].
///
/// Refuses to produce a sky point when `nX^2 + nY^2 > 1` beyond
/// tolerance, returning [`ScanError::SkyOutOfUnitDisk`] rather than
/// silently clamping. `hemisphere` must be [`Hemisphere::North`] or
/// [`Hemisphere::South`]; it fixes the sign of the reconstructed `nZ`.
pub fn canonical_to_doppler(
    canonical: &[f64],
    t_obs: f64,
    hemisphere: Hemisphere,
    ref_time: f64,
    active_order: usize,
) -> Result<Doppler, ScanError> {
    let d = canonical_dim(active_order);
    if canonical.len() != d {
        return Err(ScanError::DimensionMismatch {
            expected: d,
            found: canonical.len(),
        });
    }

    let fkdot0 = canonical[0] / (2.0 * PI * t_obs);

    // When the signal frequency is exactly zero, kX and kY vanish
    // identically regardless of sky position, so the sky direction cannot
    // be recovered from them; fall back to the ecliptic pole on the
    // requested hemisphere.
    let (n_x, n_y) = if fkdot0 == 0.0 {
        (0.0, 0.0)
    } else {
        let k_scale = -2.0 * PI * R_ORB_M / SPEED_OF_LIGHT_M_PER_S * fkdot0;
        (canonical[1] / k_scale, canonical[2] / k_scale)
    };

    let sum_sq = n_x * n_x + n_y * n_y;
    if sum_sq > 1.0 + REL_TOL {
        return Err(ScanError::SkyOutOfUnitDisk { n_x, n_y });
    }
    let sign = hemisphere
        .sign()
        .expect("canonical_to_doppler requires a fixed hemisphere");
    let n_z = (1.0 - sum_sq).max(0.0).sqrt() * sign;

    let mut fkdot = [0.0; cw_lattice_geometry::MAX_SPIN_ORDER];
    fkdot[0] = fkdot0;
    for s in 1..active_order {
        fkdot[s] = canonical[2 + s] / (2.0 * PI * t_obs.powi(s as i32 + 1));
    }

    Ok(Doppler {
        ref_time,
        vn: [n_x, n_y, n_z],
        fkdot,
    })
}

#[cfg(test)]
mod tests;
