//! Sky-polygon and spin-box boundary model for continuous-wave Doppler
//! lattice scanning.
//!
//! This crate owns the pure data model: vectors, spherical coordinates,
//! the sky-polygon / hemisphere / spin-box boundary, and the parsing of
//! the textual sky-region format. It knows nothing about a metric or a
//! lattice; [`cw-lattice-core`](https://docs.rs/cw-lattice-core) builds on
//! top of it.

/// The fixed maximum spin (frequency + spindown) order this crate
/// supports. The *active* order for a given search, `s*`, is always `<=
/// MAX_SPIN_ORDER` and is derived from which spindown bands are nonzero;
/// see [`region::SpinRange::active_order`].
pub const MAX_SPIN_ORDER: usize = 4;

/// A Doppler point: sky direction + spin coefficients at a reference
/// time.
pub mod doppler;

/// Errors produced while building or parsing a boundary.
pub mod error;

/// Parsing of the whitespace-separated sky-region string format.
pub mod parse;

/// The sky-polygon / hemisphere / spin-box boundary and the `inside`
/// test.
pub mod region;

/// Vector and spherical/ecliptic coordinate-system primitives.
pub mod vector;

pub use doppler::Doppler;
pub use error::GeometryError;
pub use region::{Boundary, SkyPolygon, SpinRange};
pub use vector::{CoordinateSystem, Hemisphere};
