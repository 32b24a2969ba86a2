//! NBC: Neighbourhood-Based Clustering.
//!
//! # The Algorithm (Zhou et al., 2005)
//!
//! NBC is a density-based clustering algorithm like DBSCAN, but density is measured
//! relative to the neighbourhood structure instead of against a global radius:
//!
//! - **k-neighbourhood** `KNB(p)`: the points within `p`'s k-th nearest distance.
//! - **Reverse neighbourhood** `R_KNB(p)`: the points that have `p` in their `KNB`.
//! - **Density factor** `NDF(p) = |R_KNB(p)| / |KNB(p)|`.
//! - **Dense point**: `NDF(p) >= 1`.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order; skip points already clustered or not dense.
//! 2. An unclustered dense point `p` opens a new cluster and takes every point of
//!    `KNB(p)` with it, including points an earlier cluster already claimed.
//! 3. Expansion: every dense neighbour of `p`, and every dense point joining later,
//!    pulls in its own unclustered neighbours, transitively, until no dense point is
//!    left to expand.
//! 4. Points that no cluster reached are noise. Clusters emptied by step 2 are
//!    dropped and the remaining ids renumbered in discovery order.
//!
//! Cluster membership is decided by reachability alone, so the order in which the
//! frontier is expanded does not change the result.
//!
//! Because density is relative, NBC finds clusters of different densities with a
//! single parameter `k`.
//!
//! ## References
//!
//! Zhou, S., Zhao, Y., Guan, J., Huang, J. (2005). "A Neighborhood-Based Clustering
//! Algorithm." PAKDD 2005.

use super::assignment::ClusterAssignment;
use super::density::is_dense;
use super::traits::Clustering;
use crate::error::Result;
use crate::neighbourhood::{
    k_nearest_neighbours, k_nearest_neighbours_accelerated, minimum_reference, Neighbourhood,
};
use log::debug;

/// Where the accelerated neighbourhood search takes its reference point from.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferencePoint {
    /// A caller-supplied point.
    Explicit(Vec<f32>),
    /// The per-dimension minimum of the data being clustered.
    Minimum,
}

/// NBC clustering algorithm.
#[derive(Debug, Clone)]
pub struct Nbc {
    /// Neighbourhood size.
    k: usize,
    /// Reference point for the accelerated search; `None` means brute force.
    reference: Option<ReferencePoint>,
}

impl Nbc {
    /// Create a new NBC clusterer using brute-force neighbourhoods.
    ///
    /// # Arguments
    ///
    /// * `k` - Neighbourhood size. Must satisfy `1 <= k < n` at fit time.
    pub fn new(k: usize) -> Self {
        Self { k, reference: None }
    }

    /// Set the neighbourhood size.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Use the accelerated search with an explicit reference point.
    pub fn with_reference_point(mut self, reference: Vec<f32>) -> Self {
        self.reference = Some(ReferencePoint::Explicit(reference));
        self
    }

    /// Use the accelerated search with the per-dimension minimum of the data.
    pub fn with_minimum_reference(mut self) -> Self {
        self.reference = Some(ReferencePoint::Minimum);
        self
    }

    /// Use brute-force neighbourhoods.
    pub fn brute_force(mut self) -> Self {
        self.reference = None;
        self
    }

    /// The configured neighbourhood size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The configured reference point, if the accelerated search is enabled.
    pub fn reference(&self) -> Option<&ReferencePoint> {
        self.reference.as_ref()
    }

    /// Compute the k-neighbourhood of `data` with the configured strategy.
    pub fn neighbourhood(&self, data: &[Vec<f32>]) -> Result<Neighbourhood> {
        match &self.reference {
            None => k_nearest_neighbours(data, self.k),
            Some(ReferencePoint::Explicit(r)) => k_nearest_neighbours_accelerated(data, self.k, r),
            Some(ReferencePoint::Minimum) => {
                let r = minimum_reference(data)?;
                k_nearest_neighbours_accelerated(data, self.k, &r)
            }
        }
    }

    /// Cluster `data`.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterAssignment> {
        let nb = self.neighbourhood(data)?;
        cluster_neighbourhood(&nb)
    }

    /// Fit and predict, returning `None` for noise points.
    pub fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.into_labels())
    }
}

impl Default for Nbc {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Clustering for Nbc {
    /// Noise points are labelled [`NOISE`](super::NOISE).
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.to_flat_labels())
    }

    /// NBC discovers clusters dynamically, so this returns 0.
    fn n_clusters(&self) -> usize {
        0
    }
}

/// Cluster `data` with neighbourhood size `k`, using the accelerated search when a
/// reference point is given.
pub fn cluster(
    data: &[Vec<f32>],
    k: usize,
    reference: Option<&[f32]>,
) -> Result<ClusterAssignment> {
    let nbc = match reference {
        Some(r) => Nbc::new(k).with_reference_point(r.to_vec()),
        None => Nbc::new(k),
    };
    nbc.fit(data)
}

/// Run the NBC expansion over a precomputed neighbourhood.
///
/// # Errors
///
/// Fails only if a density factor is undefined (a point with no neighbours).
pub fn cluster_neighbourhood(nb: &Neighbourhood) -> Result<ClusterAssignment> {
    let ndf = nb.density_factors()?;
    let dense: Vec<bool> = ndf.iter().map(|&f| is_dense(f)).collect();

    let n = nb.len();
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut cluster_id = 0;

    for point_idx in 0..n {
        if labels[point_idx].is_some() || !dense[point_idx] {
            continue;
        }
        labels[point_idx] = Some(cluster_id);

        let mut frontier: Vec<usize> = Vec::new();
        for &n_idx in nb.neighbours(point_idx) {
            labels[n_idx] = Some(cluster_id);
            if dense[n_idx] {
                frontier.push(n_idx);
            }
        }

        while let Some(d) = frontier.pop() {
            for &n_idx in nb.neighbours(d) {
                if labels[n_idx].is_some() {
                    continue;
                }
                labels[n_idx] = Some(cluster_id);
                if dense[n_idx] {
                    frontier.push(n_idx);
                }
            }
        }

        cluster_id += 1;
    }

    let n_clusters = compact_cluster_ids(&mut labels, cluster_id);
    let n_noise = labels.iter().filter(|l| l.is_none()).count();
    debug!(
        "nbc: n={}, k={}, clusters={} ({} opened), noise={}",
        n,
        nb.k(),
        n_clusters,
        cluster_id,
        n_noise
    );
    Ok(ClusterAssignment::new(labels, n_clusters))
}

/// Renumber cluster ids so the surviving clusters form `0..n`, keeping their order.
///
/// Returns the number of surviving clusters.
fn compact_cluster_ids(labels: &mut [Option<usize>], opened: usize) -> usize {
    let mut remap: Vec<Option<usize>> = vec![None; opened];
    for &c in labels.iter().flatten() {
        remap[c] = Some(0);
    }
    let mut next = 0;
    for slot in remap.iter_mut().flatten() {
        *slot = next;
        next += 1;
    }
    for label in labels.iter_mut() {
        *label = label.and_then(|c| remap[c]);
    }
    next
}
