use cw_lattice_geometry::GeometryError;
use thiserror::Error;

/// The error type returned by every fallible operation on a
/// [`crate::scan::DopplerScan`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// The boundary description was invalid; see [`GeometryError`] for the
    /// specific cause.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The collaborator-supplied flat metric failed.
    #[error(transparent)]
    Metric(#[from] MetricError),
    /// Cholesky factorization of the flat metric failed: a diagonal pivot
    /// was not strictly positive, i.e. the metric was not positive
    /// definite.
    #[error("flat metric is not positive definite (pivot {index} was {value})")]
    NonPositiveDefiniteMetric { index: usize, value: f64 },
    /// A caller-supplied index or metric had the wrong dimension for this
    /// scan.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Canonical-to-Doppler inversion would require `nZ` to be the square
    /// root of a negative number: `nX^2 + nY^2 > 1` beyond tolerance.
    #[error("sky point ({n_x}, {n_y}) lies outside the unit disk")]
    SkyOutOfUnitDisk { n_x: f64, n_y: f64 },
    /// The target mismatch was not strictly positive.
    #[error("mismatch must be strictly positive, found {0}")]
    NonPositiveMismatch(f64),
}

/// The error type returned by a [`crate::metric::FlatMetric`] collaborator.
#[derive(Debug, Error)]
pub enum MetricError {
    /// The collaborator could not produce a metric for the requested
    /// dimension (e.g. unsupported spin order, bad ephemeris data).
    #[error("flat-metric computation failed: {0}")]
    ComputationFailed(String),
}
