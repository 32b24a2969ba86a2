//! Triangle-inequality accelerated k-neighbourhoods.
//!
//! For a query point `p` and any other point `q`, with `r` the reference point:
//!
//! ```text
//! d(p, q) >= |d(p, r) - d(q, r)|
//! ```
//!
//! Once the points are sorted by `d(., r)`, that gap grows monotonically as we walk
//! away from `p` in either direction. So after a first radius `eps` is known, a walk
//! can stop at the first point whose gap alone exceeds `eps`: nothing beyond it can
//! be closer than `eps`.
//!
//! Per point the search runs in two phases:
//!
//! 1. **Seeding**: step outward, always on the side whose gap is smaller, until `k`
//!    candidates are held. `eps` is the largest candidate distance.
//! 2. **Verification**: continue each direction while `gap <= eps`, offering every
//!    visited point to the candidate set (which may shrink `eps`).

use super::candidates::{Candidate, CandidateSet};
use super::ordering::ReferenceOrdering;
use super::{euclidean, validate_k, Neighbourhood};
use crate::error::Result;
use log::{debug, trace};

/// Relative slack on the stopping bound.
///
/// Reference distances and pair distances are rounded independently; the slack
/// keeps a point whose true distance equals `eps` from being cut off by a gap that
/// rounded up. Over-visiting only costs a distance evaluation.
const BOUND_SLACK: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Exact k-neighbourhoods using one reference point to prune distance evaluations.
///
/// The result is identical to [`k_nearest_neighbours`](super::k_nearest_neighbours)
/// for any choice of `reference`, including points far outside the data or
/// coincident with a data point. The reference point only affects how much work is
/// saved.
///
/// # Errors
///
/// Everything [`k_nearest_neighbours`](super::k_nearest_neighbours) rejects, plus a
/// non-finite reference point or one whose dimensionality differs from the data.
pub fn k_nearest_neighbours_accelerated(
    data: &[Vec<f32>],
    k: usize,
    reference: &[f32],
) -> Result<Neighbourhood> {
    let ordering = ReferenceOrdering::build(data, reference)?;
    let n = data.len();
    validate_k(k, n)?;

    let search = Search {
        data,
        ordering: &ordering,
        k,
    };

    let mut nb = Neighbourhood::new(n, k);
    let mut evaluations = 0;
    for id in 0..n {
        let (neighbours, evaluated) = search.neighbours_of(ordering.position_of(id));
        trace!(
            "point {}: {} neighbours after {} evaluations",
            id,
            neighbours.len(),
            evaluated
        );
        evaluations += evaluated;
        nb.fill(id, neighbours);
    }
    nb.record_evaluations(evaluations);

    debug!(
        "accelerated k-neighbourhood: n={}, k={}, evaluations={} (brute force: {})",
        n,
        k,
        evaluations,
        n * (n - 1)
    );
    Ok(nb)
}

struct Search<'a> {
    data: &'a [Vec<f32>],
    ordering: &'a ReferenceOrdering,
    k: usize,
}

impl Search<'_> {
    /// Neighbours of the point at ordering position `anchor`, and the number of
    /// distances evaluated to find them.
    fn neighbours_of(&self, anchor: usize) -> (Vec<usize>, usize) {
        let origin = self.ordering.node(anchor);
        let p = &self.data[origin.id];
        let gap = |pos: usize| (self.ordering.node(pos).ref_dist - origin.ref_dist).abs();

        let mut evaluated = 0;
        let mut candidate = |pos: usize| {
            evaluated += 1;
            let id = self.ordering.node(pos).id;
            Candidate {
                id,
                dist: euclidean(p, &self.data[id]),
            }
        };

        let mut candidates = CandidateSet::new(self.k);
        let mut back = origin.prev;
        let mut fwd = origin.next;

        while candidates.len() < self.k {
            let (pos, direction) = match (back, fwd) {
                (Some(b), Some(f)) if gap(b) < gap(f) => (b, Direction::Backward),
                (_, Some(f)) => (f, Direction::Forward),
                (Some(b), None) => (b, Direction::Backward),
                (None, None) => break,
            };
            candidates.insert(candidate(pos));
            match direction {
                Direction::Backward => back = self.ordering.node(pos).prev,
                Direction::Forward => fwd = self.ordering.node(pos).next,
            }
        }

        for (start, direction) in [(back, Direction::Backward), (fwd, Direction::Forward)] {
            let mut cursor = start;
            while let Some(pos) = cursor {
                let Some(eps) = candidates.radius() else {
                    break;
                };
                if gap(pos) > eps + BOUND_SLACK * (origin.ref_dist + eps) {
                    break;
                }
                candidates.admit(candidate(pos));
                let node = self.ordering.node(pos);
                cursor = match direction {
                    Direction::Backward => node.prev,
                    Direction::Forward => node.next,
                };
            }
        }

        (candidates.into_ids(), evaluated)
    }
}
