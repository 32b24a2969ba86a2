//! Exact k-nearest-neighbour relations.
//!
//! A k-neighbourhood maps every point to the set of other points lying within its
//! k-th smallest Euclidean distance. Ties at that boundary distance are never broken
//! arbitrarily: every point at exactly the boundary distance is included, so a
//! neighbourhood can hold more than `k` members.
//!
//! Alongside the forward relation (`KNB`) we keep its inverse (`R_KNB`): `j` is a
//! reverse neighbour of `i` iff `i` is a neighbour of `j`. The inverse is maintained
//! while the forward sets are filled, never rebuilt by a second scan.
//!
//! ## Two ways to compute it
//!
//! - [`k_nearest_neighbours`]: all-pairs brute force, O(N² D). The correctness baseline.
//! - [`k_nearest_neighbours_accelerated`]: orders the points by their distance to a
//!   single reference point `r` and, for each point `p`, only walks outward along that
//!   order while the triangle-inequality bound
//!
//!   ```text
//!   |d(p, r) - d(q, r)| <= d(p, q)
//!   ```
//!
//!   still allows `q` to be a neighbour. The result is identical to brute force, not
//!   an approximation.
//!
//! ## Usage
//!
//! ```rust
//! use nbclust::neighbourhood::{k_nearest_neighbours, k_nearest_neighbours_accelerated};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 2.0],
//!     vec![3.0, 3.0],
//!     vec![2.0, 3.0],
//! ];
//!
//! let brute = k_nearest_neighbours(&data, 2).unwrap();
//! assert_eq!(brute.neighbours(2), &[1, 3, 4]); // two points tie at the boundary
//!
//! let fast = k_nearest_neighbours_accelerated(&data, 2, &[-1.0, -1.0]).unwrap();
//! assert_eq!(fast.forward(), brute.forward());
//! ```

mod brute;
mod candidates;
mod ordering;
mod triangle;

pub use brute::k_nearest_neighbours;
pub use ordering::{minimum_reference, OrderedPoint, ReferenceOrdering};
pub use triangle::k_nearest_neighbours_accelerated;

use crate::error::{Error, Result};

/// Forward and reverse k-neighbourhoods of a point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbourhood {
    k: usize,
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
    distance_evaluations: usize,
}

impl Neighbourhood {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            k,
            forward: vec![Vec::new(); n],
            reverse: vec![Vec::new(); n],
            distance_evaluations: 0,
        }
    }

    /// Record the neighbours of `point` and register `point` as a reverse neighbour of each.
    ///
    /// Points must be filled in ascending order so reverse sets stay sorted.
    pub(crate) fn fill(&mut self, point: usize, mut neighbours: Vec<usize>) {
        neighbours.sort_unstable();
        for &n in &neighbours {
            debug_assert_ne!(n, point, "a point is never its own neighbour");
            self.reverse[n].push(point);
        }
        self.forward[point] = neighbours;
    }

    pub(crate) fn record_evaluations(&mut self, count: usize) {
        self.distance_evaluations += count;
    }

    /// Number of points covered.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the relation covers no points.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The `k` this relation was computed for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Neighbours of `point`, ascending by id.
    pub fn neighbours(&self, point: usize) -> &[usize] {
        &self.forward[point]
    }

    /// Points listing `point` as a neighbour, ascending by id.
    pub fn reverse_neighbours(&self, point: usize) -> &[usize] {
        &self.reverse[point]
    }

    /// The forward relation (`KNB`), indexed by point id.
    pub fn forward(&self) -> &[Vec<usize>] {
        &self.forward
    }

    /// The reverse relation (`R_KNB`), indexed by point id.
    pub fn reverse(&self) -> &[Vec<usize>] {
        &self.reverse
    }

    /// How many point-to-point distances were evaluated to build this relation.
    pub fn distance_evaluations(&self) -> usize {
        self.distance_evaluations
    }

    /// Density factor of every point. See [`crate::cluster::density_factor`].
    pub fn density_factors(&self) -> Result<Vec<f64>> {
        crate::cluster::density_factor(&self.forward, &self.reverse)
    }
}

/// Euclidean distance, accumulated in `f64`.
///
/// Symmetric bit-for-bit, so both search strategies see identical distances.
#[inline]
pub fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Check that `data` is a non-empty set of finite points of one dimensionality.
///
/// Returns that dimensionality.
pub fn validate_points(data: &[Vec<f32>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for point in data {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if point.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "points",
                message: "coordinates must be finite",
            });
        }
    }
    Ok(d)
}

/// Check `1 <= k < n`.
pub(crate) fn validate_k(k: usize, n: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k >= n {
        return Err(Error::InvalidNeighbourCount {
            requested: k,
            n_items: n,
        });
    }
    Ok(())
}
