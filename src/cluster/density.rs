use crate::error::{Error, Result};

/// Neighbourhood-based density factor of every point.
///
/// ```text
/// NDF[i] = |R_KNB[i]| / |KNB[i]|
/// ```
///
/// A point that more points list as a neighbour than it lists itself sits in a
/// relatively dense region. Only cardinalities matter, so the factor is invariant
/// under any distance-preserving transform of the input.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `forward` and `reverse` cover different point counts.
/// - [`Error::DivisionByZero`] if some forward set is empty.
pub fn density_factor(forward: &[Vec<usize>], reverse: &[Vec<usize>]) -> Result<Vec<f64>> {
    if forward.len() != reverse.len() {
        return Err(Error::InvalidParameter {
            name: "reverse",
            message: "must cover the same points as the forward neighbourhood",
        });
    }
    forward
        .iter()
        .zip(reverse.iter())
        .enumerate()
        .map(|(point, (fwd, rev))| {
            if fwd.is_empty() {
                return Err(Error::DivisionByZero { point });
            }
            Ok(rev.len() as f64 / fwd.len() as f64)
        })
        .collect()
}

/// A point is dense when at least as many points list it as it lists.
#[inline]
pub fn is_dense(ndf: f64) -> bool {
    ndf >= 1.0
}
