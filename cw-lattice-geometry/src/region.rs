//! The boundary model: a sky polygon restricted to one ecliptic
//! hemisphere, combined with a spin (frequency + spindown) box.

use crate::doppler::Doppler;
use crate::error::GeometryError;
use crate::vector::{self, CoordinateSystem, Hemisphere, REL_TOL};
use crate::MAX_SPIN_ORDER;

/// An ordered, implicitly-closed sky polygon in the ecliptic-plane
/// projection `(nX, nY)` of a set of unit sky directions restricted to a
/// single hemisphere.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyPolygon {
    vertices: Vec<(f64, f64)>,
}

impl SkyPolygon {
    /// Vertices of the polygon, in order.
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Build a sky polygon, and the hemisphere it is restricted to, from a
    /// list of unit 3-vectors (e.g. produced by [`vector::sky_to_vec3`]).
    ///
    /// This is the only constructor: it enforces every invariant from the
    /// data model in one place so a [`SkyPolygon`] can never exist in an
    /// invalid state.
    pub fn from_directions(directions: &[[f64; 3]]) -> Result<(Self, Hemisphere), GeometryError> {
        if directions.len() == 2 {
            return Err(GeometryError::TwoVertexPolygon);
        }
        let hemisphere = vector::classify_hemisphere_of_list(directions)
            .ok_or(GeometryError::MixedHemisphere)?;

        let mut vertices = Vec::with_capacity(directions.len());
        for &[n_x, n_y, _] in directions {
            let sum_sq = n_x * n_x + n_y * n_y;
            if sum_sq > 1.0 + REL_TOL {
                return Err(GeometryError::VertexOutsideUnitDisk { n_x, n_y, sum_sq });
            }
            vertices.push((n_x, n_y));
        }

        Ok((SkyPolygon { vertices }, hemisphere))
    }

    /// The arithmetic-mean centroid of the vertices, *not* renormalized
    /// onto the unit circle.
    pub fn centroid(&self) -> (f64, f64) {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        (sx / n, sy / n)
    }

    /// Whether `(px, py)` lies inside the polygon, within tolerance.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        if self.vertices.len() == 1 {
            let (vx, vy) = self.vertices[0];
            return (px - vx).abs() < REL_TOL && (py - vy).abs() < REL_TOL;
        }
        point_in_polygon(px, py, &self.vertices)
    }
}

/// Horizontal-ray crossing test, evaluated both to the left and to the
/// right of the query point. The point is inside if *either* parity is
/// odd, which classifies edge and vertex points as inside and absorbs
/// floating-point ambiguities at the boundary.
fn point_in_polygon(px: f64, py: f64, vertices: &[(f64, f64)]) -> bool {
    crossings_odd(px, py, vertices, true) || crossings_odd(px, py, vertices, false)
}

fn crossings_odd(px: f64, py: f64, vertices: &[(f64, f64)], to_the_right: bool) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let (x1, y1) = vertices[i];
        let (x2, y2) = vertices[(i + 1) % n];
        if y1 == y2 {
            continue;
        }
        if (y1 > py) == (y2 > py) {
            continue;
        }
        let x_at_py = x1 + (py - y1) * (x2 - x1) / (y2 - y1);
        let crosses = if to_the_right {
            x_at_py > px
        } else {
            x_at_py < px
        };
        if crosses {
            inside = !inside;
        }
    }
    inside
}

/// A box in signal frequency and its time derivatives (spindowns), valid
/// starting at `t_ref`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinRange {
    pub t_ref: f64,
    fkdot0: [f64; MAX_SPIN_ORDER],
    fkdot_band: [f64; MAX_SPIN_ORDER],
}

impl SpinRange {
    pub fn new(
        t_ref: f64,
        fkdot0: [f64; MAX_SPIN_ORDER],
        fkdot_band: [f64; MAX_SPIN_ORDER],
    ) -> Result<Self, GeometryError> {
        for (order, &band) in fkdot_band.iter().enumerate() {
            if band < 0.0 {
                return Err(GeometryError::NegativeSpinBand { order, value: band });
            }
        }
        Ok(SpinRange {
            t_ref,
            fkdot0,
            fkdot_band,
        })
    }

    pub fn fkdot0(&self) -> [f64; MAX_SPIN_ORDER] {
        self.fkdot0
    }

    pub fn fkdot_band(&self) -> [f64; MAX_SPIN_ORDER] {
        self.fkdot_band
    }

    /// The midpoint of each spin interval, used as the scan's midpoint
    /// Doppler point.
    pub fn midpoint(&self) -> [f64; MAX_SPIN_ORDER] {
        let mut mid = [0.0; MAX_SPIN_ORDER];
        for s in 0..MAX_SPIN_ORDER {
            mid[s] = self.fkdot0[s] + 0.5 * self.fkdot_band[s];
        }
        mid
    }

    /// The active spin dimension `s*`: the largest index with a nonzero
    /// band, plus one, at least 1.
    pub fn active_order(&self) -> usize {
        let highest_nonzero = self
            .fkdot_band
            .iter()
            .rposition(|&band| band != 0.0)
            .unwrap_or(0);
        highest_nonzero + 1
    }

    fn contains(&self, fkdot: &[f64; MAX_SPIN_ORDER]) -> bool {
        (0..MAX_SPIN_ORDER).all(|s| {
            let lo = self.fkdot0[s];
            let hi = self.fkdot0[s] + self.fkdot_band[s];
            rel_le(lo, fkdot[s]) && rel_le(fkdot[s], hi)
        })
    }
}

/// `a <= b`, widened by a relative tolerance on the larger-magnitude
/// operand so that exact boundary values compare as inside.
fn rel_le(a: f64, b: f64) -> bool {
    a <= b + REL_TOL * a.abs().max(b.abs())
}

/// The full boundary of a search region: a sky polygon restricted to one
/// hemisphere, plus a spin box.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pub sky_polygon: SkyPolygon,
    pub hemisphere: Hemisphere,
    pub spin_range: SpinRange,
}

impl Boundary {
    /// Build a boundary from an already-validated sky polygon and a fixed
    /// hemisphere. Rejects [`Hemisphere::Unknown`]: a boundary's
    /// hemisphere must be fixed to North or South so [`midpoint_doppler`]
    /// and `inside` can reconstruct a signed `nZ`.
    ///
    /// [`midpoint_doppler`]: Boundary::midpoint_doppler
    pub fn new(
        sky_polygon: SkyPolygon,
        hemisphere: Hemisphere,
        spin_range: SpinRange,
    ) -> Result<Self, GeometryError> {
        if hemisphere == Hemisphere::Unknown {
            return Err(GeometryError::UnfixedHemisphere);
        }
        Ok(Boundary {
            sky_polygon,
            hemisphere,
            spin_range,
        })
    }

    /// `inside(doppler, boundary)`: conjunction of sky-polygon
    /// containment, hemisphere match, and the spin box.
    pub fn inside(&self, doppler: &Doppler) -> bool {
        let point_hemisphere = vector::classify_hemisphere(doppler.vn);
        let hemisphere_ok = match point_hemisphere {
            Hemisphere::Unknown => true,
            h => h == self.hemisphere,
        };
        hemisphere_ok
            && self.sky_polygon.contains(doppler.vn[0], doppler.vn[1])
            && self.spin_range.contains(&doppler.fkdot)
    }

    /// The midpoint Doppler point: polygon centroid projected onto the
    /// sphere, with the spin midpoints.
    pub fn midpoint_doppler(&self) -> Doppler {
        let (cx, cy) = self.sky_polygon.centroid();
        let sign = self
            .hemisphere
            .sign()
            .expect("Boundary::hemisphere is always North or South");
        let nz = (1.0 - cx * cx - cy * cy).max(0.0).sqrt() * sign;
        Doppler {
            ref_time: self.spin_range.t_ref,
            vn: [cx, cy, nz],
            fkdot: self.spin_range.midpoint(),
        }
    }
}

/// Build a [`Boundary`] from a list of equatorial sky directions and a
/// [`SpinRange`], performing the hemisphere classification and polygon
/// validation in one step. The caller provides the coordinate system the
/// directions were parsed in.
pub fn build_boundary(
    directions: &[(f64, f64)],
    system: CoordinateSystem,
    spin_range: SpinRange,
) -> Result<Boundary, GeometryError> {
    let vecs: Vec<[f64; 3]> = directions
        .iter()
        .map(|&(lon, lat)| vector::sky_to_vec3(lon, lat, system))
        .collect();
    let (polygon, hemisphere) = SkyPolygon::from_directions(&vecs)?;
    Boundary::new(polygon, hemisphere, spin_range)
}
