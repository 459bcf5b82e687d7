//! The scan state: an iterator-like type that owns a boundary, a lattice
//! generator, and a current integer index, and walks the lattice outward
//! from the origin.

use crate::coords::{canonical_dim, canonical_to_doppler, doppler_to_canonical};
use crate::error::ScanError;
use crate::lattice::{covering_generator, Generator};
use crate::metric::FlatMetric;
use cw_lattice_geometry::region::build_boundary;
use cw_lattice_geometry::vector;
use cw_lattice_geometry::{Boundary, CoordinateSystem, SpinRange, MAX_SPIN_ORDER};

/// The outcome of a single [`DopplerScan::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The scan moved to a new valid index.
    Advanced,
    /// Every lattice point reachable by the outward walk has been visited.
    /// The scan's index is unchanged; further calls keep returning
    /// `Finished`.
    Finished,
}

/// A fully resolved Doppler template: sky position plus spin coefficients
/// at a reference time, in the coordinate system the caller requested.
///
/// `orbit` is always `None`: binary-orbit parameters are out of scope for
/// this scanner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulsarDopplerParams {
    pub ref_time: f64,
    /// Right ascension / ecliptic longitude, in `[0, 2*PI)`.
    pub alpha: f64,
    /// Declination / ecliptic latitude, in `[-PI/2, PI/2]`.
    pub delta: f64,
    pub fkdot: [f64; MAX_SPIN_ORDER],
    pub orbit: Option<()>,
}

/// A Doppler-parameter-space lattice scan.
///
/// `DopplerScan` exclusively owns its boundary, its origin and generating
/// matrix, and its current integer index; dropping it releases everything
/// together. There is no separate "destroy" operation.
///
/// The scan starts in a fully initialized state with `index() == [0; D]`,
/// which [`DopplerScan::new`] already validates lies inside the boundary
/// (see invariant 1 in the design). Callers may query [`DopplerScan::current`]
/// before ever calling [`DopplerScan::advance`] to retrieve that origin
/// point.
#[derive(Clone, Debug)]
pub struct DopplerScan {
    t_obs: f64,
    active_order: usize,
    boundary: Boundary,
    origin: Vec<f64>,
    generator: Generator,
    index: Vec<i64>,
    finished: bool,
}

impl DopplerScan {
    /// Initialize a scan.
    ///
    /// `sky_region` is a whitespace-separated list of `(alpha,delta)`
    /// equatorial-radian pairs (see
    /// [`cw_lattice_geometry::parse::parse_sky_region`]). `fkdot0` and
    /// `fkdot_band` are the spindown lower bounds and band widths, `t_obs`
    /// is the observation span `T`, `start_time` and `ref_time` are passed
    /// through to the metric collaborator, and `mismatch` is the target
    /// maximum squared metric distance `mu`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t_obs: f64,
        start_time: f64,
        ref_time: f64,
        sky_region: &str,
        fkdot0: [f64; MAX_SPIN_ORDER],
        fkdot_band: [f64; MAX_SPIN_ORDER],
        mismatch: f64,
        metric: &impl FlatMetric,
    ) -> Result<Self, ScanError> {
        let directions = cw_lattice_geometry::parse::parse_sky_region(sky_region)?;
        let spin_range = SpinRange::new(ref_time, fkdot0, fkdot_band)?;
        let boundary = build_boundary(&directions, CoordinateSystem::Equatorial, spin_range)?;

        let active_order = boundary.spin_range.active_order();
        let dim = canonical_dim(active_order);

        let midpoint = boundary.midpoint_doppler();
        let origin = doppler_to_canonical(&midpoint, t_obs, active_order);

        let g = metric.fisher_matrix(ref_time, start_time, t_obs, dim)?;
        let generator = covering_generator(&g, dim, mismatch)?;

        Ok(DopplerScan {
            t_obs,
            active_order,
            boundary,
            origin,
            generator,
            index: vec![0; dim],
            finished: false,
        })
    }

    /// The dimension `D` of the canonical space.
    pub fn dimension(&self) -> usize {
        self.generator.dim()
    }

    /// The canonical-coordinate origin `O`.
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// The lattice generating matrix.
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// The boundary this scan is covering.
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// The current integer lattice index.
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Whether the scan has been exhausted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Overwrite the current index, e.g. to resume from a checkpoint.
    ///
    /// Validates only the dimension; there is no boundary check, so the
    /// caller is responsible for starting inside the region. Always
    /// leaves the scan in the non-finished state.
    pub fn set_index(&mut self, index: &[i64]) -> Result<(), ScanError> {
        if index.len() != self.dimension() {
            return Err(ScanError::DimensionMismatch {
                expected: self.dimension(),
                found: index.len(),
            });
        }
        self.index = index.to_vec();
        self.finished = false;
        Ok(())
    }

    /// Resolve the current index to a physical Doppler point.
    pub fn current(&self, sky_coords: CoordinateSystem) -> Result<PulsarDopplerParams, ScanError> {
        let canonical = self.generator.point(&self.origin, &self.index);
        let doppler = canonical_to_doppler(
            &canonical,
            self.t_obs,
            self.boundary.hemisphere,
            self.boundary.spin_range.t_ref,
            self.active_order,
        )?;
        let (lon, lat) = vector::vec3_to_sky(doppler.vn, sky_coords);
        Ok(PulsarDopplerParams {
            ref_time: doppler.ref_time,
            alpha: lon,
            delta: lat,
            fkdot: doppler.fkdot,
            orbit: None,
        })
    }

    /// Advance to the next valid index, or report exhaustion.
    ///
    /// See the design for the exact outward-walk algorithm. The scan's
    /// index is only ever committed once a trial index has been confirmed
    /// inside the boundary; if that confirmation itself fails numerically
    /// (which cannot happen for an in-bounds trial, since only an
    /// out-of-unit-disk sky position is possible and that is treated as
    /// "not inside"), the index is left unchanged and the error surfaces.
    pub fn advance(&mut self) -> Result<StepOutcome, ScanError> {
        if self.finished {
            return Ok(StepOutcome::Finished);
        }

        let mut walking = self.index.clone();
        let dim = self.dimension();
        let mut axis = 0;
        while axis < dim {
            let going_up = walking[axis] >= 0;
            let mut trial = walking.clone();
            trial[axis] += if going_up { 1 } else { -1 };
            if self.index_inside(&trial)? {
                self.index = trial;
                return Ok(StepOutcome::Advanced);
            }
            if going_up {
                let mut trial = walking.clone();
                trial[axis] = -1;
                if self.index_inside(&trial)? {
                    self.index = trial;
                    return Ok(StepOutcome::Advanced);
                }
            }
            walking[axis] = 0;
            axis += 1;
        }

        self.finished = true;
        Ok(StepOutcome::Finished)
    }

    /// Whether a candidate index's physical image lies inside the
    /// boundary. A sky-out-of-unit-disk numerical failure is treated as
    /// "not inside" rather than propagated, since it is an expected
    /// outcome for indices that walk past the edge of the canonical
    /// `(kX, kY)` disk; any other numerical failure still propagates.
    fn index_inside(&self, index: &[i64]) -> Result<bool, ScanError> {
        let canonical = self.generator.point(&self.origin, index);
        match canonical_to_doppler(
            &canonical,
            self.t_obs,
            self.boundary.hemisphere,
            self.boundary.spin_range.t_ref,
            self.active_order,
        ) {
            Ok(doppler) => Ok(self.boundary.inside(&doppler)),
            Err(ScanError::SkyOutOfUnitDisk { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }
}
