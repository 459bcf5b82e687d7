//! Doppler-parameter-space A*_n lattice generator and scan-state
//! enumerator for continuous-wave pulsar searches.
//!
//! This crate builds on
//! [`cw-lattice-geometry`](https://docs.rs/cw-lattice-geometry)'s boundary
//! model: given a boundary and a caller-supplied flat metric, it derives a
//! near-optimal covering lattice in canonical coordinates and walks it
//! outward from the boundary's midpoint via [`scan::DopplerScan`].

/// Conversion between physical Doppler parameters and canonical
/// coordinates.
pub mod coords;

/// Error types for this crate.
pub mod error;

/// Construction of the A*_n covering-lattice generator from a flat metric.
pub mod lattice;

/// The flat-metric collaborator contract.
pub mod metric;

/// The scan state and the outward-walk advance algorithm.
pub mod scan;

pub use error::{MetricError, ScanError};
pub use lattice::{covering_generator, Generator};
pub use metric::{DiagonalMetric, FlatMetric};
pub use scan::{DopplerScan, PulsarDopplerParams, StepOutcome};

pub use cw_lattice_geometry::CoordinateSystem as SkyCoordinateSystem;
