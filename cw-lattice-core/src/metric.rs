//! The flat-metric collaborator contract.
//!
//! Computing the actual Fisher information metric of the continuous-wave
//! matched-filter statistic (antenna pattern, ephemeris, detector noise
//! curve, ...) is explicitly out of scope for this crate; callers supply
//! an implementation of [`FlatMetric`] and this crate only consumes its
//! output.

use crate::error::MetricError;

/// A symmetric positive-definite flat metric on the canonical Doppler
/// space, supplied by the caller.
///
/// This is the in-crate stand-in for the collaborator the design calls
/// `FlatMetricCW`.
pub trait FlatMetric {
    /// Fill a `dimension x dimension` symmetric positive-definite matrix,
    /// returned in row-major order (`dimension * dimension` entries), for
    /// the search starting at `start_time`, referenced to `ref_time`, with
    /// observation span `t_obs`.
    fn fisher_matrix(
        &self,
        ref_time: f64,
        start_time: f64,
        t_obs: f64,
        dimension: usize,
    ) -> Result<Vec<f64>, MetricError>;
}

/// A diagonal flat metric with fixed per-axis weights, useful as a test
/// double and as a minimal working example for callers wiring up this
/// crate. Real searches should supply a metric derived from an actual
/// Fisher-matrix computation instead.
#[derive(Clone, Debug)]
pub struct DiagonalMetric {
    weights: Vec<f64>,
}

impl DiagonalMetric {
    /// `weights` must have at least as many entries as any dimension this
    /// metric will be asked for; extra entries are ignored.
    pub fn new(weights: Vec<f64>) -> Self {
        DiagonalMetric { weights }
    }

    /// A diagonal metric with every weight equal to `1.0`.
    pub fn identity(dimension: usize) -> Self {
        DiagonalMetric {
            weights: vec![1.0; dimension],
        }
    }
}

impl FlatMetric for DiagonalMetric {
    fn fisher_matrix(
        &self,
        _ref_time: f64,
        _start_time: f64,
        _t_obs: f64,
        dimension: usize,
    ) -> Result<Vec<f64>, MetricError> {
        if self.weights.len() < dimension {
            return Err(MetricError::ComputationFailed(format!(
                "diagonal metric has {} weights, need {dimension}",
                self.weights.len()
            )));
        }
        let mut g = vec![0.0; dimension * dimension];
        for i in 0..dimension {
            g[i * dimension + i] = self.weights[i];
        }
        Ok(g)
    }
}
