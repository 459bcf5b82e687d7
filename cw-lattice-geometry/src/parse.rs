//! Parsing of the sky-region string format: a whitespace-separated list of
//! `(alpha,delta)` pairs in equatorial radians, e.g.
//! `"(0.1,0.1) (0.2,0.1) (0.15,0.2)"`.
//!
//! The real system treats this as a collaborator (`ParseSkyRegionString`);
//! this is a self-contained stand-in with the same contract, so the crate
//! is independently testable end to end without that collaborator.

use crate::error::GeometryError;

/// Parse a sky-region string into an ordered list of `(alpha, delta)`
/// pairs, in radians.
pub fn parse_sky_region(input: &str) -> Result<Vec<(f64, f64)>, GeometryError> {
    let mut points = Vec::new();
    let mut offset = 0;
    for token in input.split_whitespace() {
        let start = offset;
        offset += token.len() + 1;

        let trimmed = token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .ok_or_else(|| GeometryError::MalformedRegionString {
                offset: start,
                reason: format!("expected `(alpha,delta)`, found `{token}`"),
            })?;
        let (alpha_str, delta_str) =
            trimmed
                .split_once(',')
                .ok_or_else(|| GeometryError::MalformedRegionString {
                    offset: start,
                    reason: format!("expected a comma-separated pair, found `{token}`"),
                })?;
        let alpha: f64 = alpha_str
            .trim()
            .parse()
            .map_err(|_| GeometryError::MalformedRegionString {
                offset: start,
                reason: format!("`{alpha_str}` is not a valid number"),
            })?;
        let delta: f64 = delta_str
            .trim()
            .parse()
            .map_err(|_| GeometryError::MalformedRegionString {
                offset: start,
                reason: format!("`{delta_str}` is not a valid number"),
            })?;
        points.push((alpha, delta));
    }

    if points.is_empty() {
        return Err(GeometryError::MalformedRegionString {
            offset: 0,
            reason: "sky-region string has no vertices".to_string(),
        });
    }

    Ok(points)
}
