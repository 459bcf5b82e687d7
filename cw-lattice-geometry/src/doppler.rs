use crate::MAX_SPIN_ORDER;

/// A single Doppler point: a sky direction plus spin-polynomial
/// coefficients at a reference time.
///
/// `vn` is the full unit 3-vector (in the ecliptic frame); `fkdot[s]` is
/// the `s`-th time derivative of the signal frequency (`fkdot[0]` the
/// frequency itself), evaluated at `ref_time`. Binary-orbit parameters are
/// out of scope and have no field here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Doppler {
    pub ref_time: f64,
    pub vn: [f64; 3],
    pub fkdot: [f64; MAX_SPIN_ORDER],
}
