use super::*;
use cw_lattice_geometry::MAX_SPIN_ORDER;

const EPS: f64 = 1e-7;

fn doppler(vn: [f64; 3], fkdot: [f64; MAX_SPIN_ORDER]) -> Doppler {
    Doppler {
        ref_time: 0.0,
        vn,
        fkdot,
    }
}

#[test]
fn roundtrip_no_spindown() {
    let t_obs = 1.0e6;
    let active_order = 1;
    let vn = [0.3, 0.2, (1.0f64 - 0.3 * 0.3 - 0.2 * 0.2).sqrt()];
    let d = doppler(vn, [100.0, 0.0, 0.0, 0.0]);

    let canonical = doppler_to_canonical(&d, t_obs, active_order);
    assert_eq!(canonical.len(), 3);

    let back =
        canonical_to_doppler(&canonical, t_obs, Hemisphere::North, 0.0, active_order).unwrap();
    assert!((back.vn[0] - vn[0]).abs() < EPS);
    assert!((back.vn[1] - vn[1]).abs() < EPS);
    assert!((back.fkdot[0] - 100.0).abs() < EPS);
}

#[test]
fn roundtrip_with_spindown() {
    let t_obs = 1.0e7;
    let active_order = 2;
    let vn = [0.1, -0.2, (1.0f64 - 0.01 - 0.04).sqrt()];
    let d = doppler(vn, [100.0, -1e-10, 0.0, 0.0]);

    let canonical = doppler_to_canonical(&d, t_obs, active_order);
    assert_eq!(canonical.len(), 4);

    let back =
        canonical_to_doppler(&canonical, t_obs, Hemisphere::North, 0.0, active_order).unwrap();
    assert!((back.vn[0] - vn[0]).abs() < EPS);
    assert!((back.vn[1] - vn[1]).abs() < EPS);
    assert!((back.fkdot[0] - 100.0).abs() < EPS);
    assert!((back.fkdot[1] - (-1e-10)).abs() < 1e-16);
}

#[test]
fn south_hemisphere_sign_preserved() {
    let t_obs = 1.0e6;
    let vn = [0.1, 0.1, -(1.0f64 - 0.02).sqrt()];
    let d = doppler(vn, [50.0, 0.0, 0.0, 0.0]);
    let canonical = doppler_to_canonical(&d, t_obs, 1);
    let back = canonical_to_doppler(&canonical, t_obs, Hemisphere::South, 0.0, 1).unwrap();
    assert!(back.vn[2] < 0.0);
}

#[test]
fn out_of_unit_disk_is_an_error() {
    let t_obs = 1.0e6;
    // Fabricate a canonical point whose implied (nX, nY) is outside the
    // unit disk.
    let fkdot0 = 100.0;
    let w0 = 2.0 * std::f64::consts::PI * t_obs * fkdot0;
    let k_scale = -2.0 * std::f64::consts::PI * R_ORB_M / SPEED_OF_LIGHT_M_PER_S * fkdot0;
    let canonical = vec![w0, k_scale * 2.0, k_scale * 2.0];
    let result = canonical_to_doppler(&canonical, t_obs, Hemisphere::North, 0.0, 1);
    assert!(matches!(result, Err(ScanError::SkyOutOfUnitDisk { .. })));
}

#[test]
fn zero_frequency_falls_back_to_pole() {
    let t_obs = 1.0e6;
    let canonical = vec![0.0, 0.0, 0.0];
    let back = canonical_to_doppler(&canonical, t_obs, Hemisphere::North, 0.0, 1).unwrap();
    assert_eq!(back.vn, [0.0, 0.0, 1.0]);
}

#[test]
fn dimension_mismatch_is_an_error() {
    let result = canonical_to_doppler(&[0.0, 0.0], 1.0e6, Hemisphere::North, 0.0, 1);
    assert!(matches!(result, Err(ScanError::DimensionMismatch { .. })));
}
