use super::*;

const EPS: f64 = 1e-9;

fn identity(dim: usize) -> Vec<f64> {
    let mut g = vec![0.0; dim * dim];
    for i in 0..dim {
        g[i * dim + i] = 1.0;
    }
    g
}

#[test]
fn one_dimensional_spacing_is_twice_sqrt_mismatch() {
    // A*_1 is just the integers scaled so the covering radius is sqrt(mu):
    // half the spacing between consecutive points must equal sqrt(mu).
    let mu = 0.02;
    let g = covering_generator(&identity(1), 1, mu).unwrap();
    let spacing = g.row(0)[0].abs();
    assert!((spacing - 2.0 * mu.sqrt()).abs() < EPS);
}

#[test]
fn basis_scales_with_sqrt_mismatch() {
    let g_small = covering_generator(&identity(3), 3, 0.01).unwrap();
    let g_large = covering_generator(&identity(3), 3, 0.04).unwrap();
    // mu quadruples, so every basis entry should exactly double.
    for k in 0..3 {
        let small = g_small.row(k);
        let large = g_large.row(k);
        for j in 0..3 {
            assert!((large[j] - 2.0 * small[j]).abs() < EPS, "row {k} col {j}");
        }
    }
}

#[test]
fn two_dimensional_basis_is_equilateral() {
    // A*_2 is the hexagonal lattice: both basis vectors have equal norm,
    // and the angle between them is 120 degrees (cos = -1/2).
    let g = covering_generator(&identity(2), 2, 0.01).unwrap();
    let r0 = g.row(0);
    let r1 = g.row(1);
    let norm0 = (r0[0] * r0[0] + r0[1] * r0[1]).sqrt();
    let norm1 = (r1[0] * r1[0] + r1[1] * r1[1]).sqrt();
    assert!((norm0 - norm1).abs() < 1e-6);
    let dot = r0[0] * r1[0] + r0[1] * r1[1];
    let cos_angle = dot / (norm0 * norm1);
    assert!((cos_angle + 0.5).abs() < 1e-6);
}

#[test]
fn non_positive_definite_metric_is_rejected() {
    // A matrix with a negative diagonal is never positive definite.
    let g = vec![1.0, 0.0, 0.0, -1.0];
    let result = covering_generator(&g, 2, 0.01);
    assert!(matches!(
        result,
        Err(ScanError::NonPositiveDefiniteMetric { .. })
    ));
}

#[test]
fn non_positive_mismatch_is_rejected() {
    let result = covering_generator(&identity(2), 2, 0.0);
    assert!(matches!(result, Err(ScanError::NonPositiveMismatch(_))));
    let result = covering_generator(&identity(2), 2, -1.0);
    assert!(matches!(result, Err(ScanError::NonPositiveMismatch(_))));
}

#[test]
fn dimension_mismatch_is_rejected() {
    let result = covering_generator(&identity(2), 3, 0.01);
    assert!(matches!(result, Err(ScanError::DimensionMismatch { .. })));
}

#[test]
fn point_is_origin_plus_integer_combination() {
    let g = covering_generator(&identity(2), 2, 0.01).unwrap();
    let origin = vec![1.0, 2.0];
    let index = [3_i64, -2];
    let point = g.point(&origin, &index);
    let expected_0 = origin[0] + 3.0 * g.row(0)[0] + -2.0 * g.row(1)[0];
    let expected_1 = origin[1] + 3.0 * g.row(0)[1] + -2.0 * g.row(1)[1];
    assert!((point[0] - expected_0).abs() < EPS);
    assert!((point[1] - expected_1).abs() < EPS);
}
