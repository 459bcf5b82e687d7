use super::*;

const EPS: f64 = 1e-9;

#[test]
fn sky_vec3_roundtrip_ecliptic() {
    for &(lon, lat) in &[(0.3, 0.2), (1.0, 0.5), (5.9, -0.4), (0.0, 0.0)] {
        let v = sky_to_vec3(lon, lat, CoordinateSystem::Ecliptic);
        let (lon2, lat2) = vec3_to_sky(v, CoordinateSystem::Ecliptic);
        assert!((lon - lon2).abs() < EPS, "{lon} vs {lon2}");
        assert!((lat - lat2).abs() < EPS, "{lat} vs {lat2}");
    }
}

#[test]
fn sky_vec3_roundtrip_equatorial() {
    for &(lon, lat) in &[(0.3, 0.2), (1.0, 0.5), (5.9, -0.4)] {
        let v = sky_to_vec3(lon, lat, CoordinateSystem::Equatorial);
        let (lon2, lat2) = vec3_to_sky(v, CoordinateSystem::Equatorial);
        assert!((lon - lon2).abs() < EPS);
        assert!((lat - lat2).abs() < EPS);
    }
}

#[test]
fn equatorial_and_ecliptic_agree_at_equinox() {
    // At longitude 0, both systems place the point on the X axis: the
    // obliquity rotation is about that axis and fixes it.
    let eq = sky_to_vec3(0.0, 0.0, CoordinateSystem::Equatorial);
    let ec = sky_to_vec3(0.0, 0.0, CoordinateSystem::Ecliptic);
    assert!((eq[0] - ec[0]).abs() < EPS);
    assert!((eq[1] - ec[1]).abs() < EPS);
    assert!((eq[2] - ec[2]).abs() < EPS);
}

#[test]
fn classify_hemisphere_signs() {
    assert_eq!(classify_hemisphere([0.1, 0.2, 0.5]), Hemisphere::North);
    assert_eq!(classify_hemisphere([0.1, 0.2, -0.5]), Hemisphere::South);
    assert_eq!(classify_hemisphere([0.1, 0.2, 0.0]), Hemisphere::Unknown);
}

#[test]
fn classify_hemisphere_of_list_fixes_on_first_nonzero() {
    let vs = [[0.0, 0.0, 0.0], [0.1, 0.0, 0.3], [0.2, 0.1, 0.1]];
    assert_eq!(classify_hemisphere_of_list(&vs), Some(Hemisphere::North));
}

#[test]
fn classify_hemisphere_of_list_rejects_mixed() {
    let vs = [[0.1, 0.0, 0.3], [0.2, 0.1, -0.1]];
    assert_eq!(classify_hemisphere_of_list(&vs), None);
}

#[test]
fn classify_hemisphere_of_list_all_unknown() {
    let vs = [[0.1, 0.0, 0.0], [0.2, 0.1, 0.0]];
    assert_eq!(classify_hemisphere_of_list(&vs), None);
}

#[test]
fn center_of_mass_is_arithmetic_mean() {
    let vs = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let c = center_of_mass(&vs);
    assert!((c[0] - 1.0 / 3.0).abs() < EPS);
    assert!((c[1] - 1.0 / 3.0).abs() < EPS);
    assert!((c[2] - 1.0 / 3.0).abs() < EPS);
}

#[test]
fn center_of_mass_not_renormalized() {
    let vs = [[1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    let c = center_of_mass(&vs);
    assert!((norm(c) - 1.0).abs() < EPS);
    let vs = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let c = center_of_mass(&vs);
    assert!((norm(c) - (0.5f64 * 0.5 + 0.5 * 0.5).sqrt()).abs() < EPS);
}

#[test]
fn add_and_scale() {
    assert_eq!(add([1.0, 2.0, 3.0], [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
    assert_eq!(scale([1.0, 2.0, 3.0], 2.0), [2.0, 4.0, 6.0]);
}
