/// Flat label used for noise points in `usize` label vectors.
pub const NOISE: usize = usize::MAX;

/// Cluster id (or noise) for every point of a dataset.
///
/// Cluster ids form the contiguous range `0..n_clusters()`, numbered in the order
/// clusters were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    labels: Vec<Option<usize>>,
    n_clusters: usize,
}

impl ClusterAssignment {
    pub(crate) fn new(labels: Vec<Option<usize>>, n_clusters: usize) -> Self {
        debug_assert!(labels.iter().flatten().all(|&c| c < n_clusters));
        Self { labels, n_clusters }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of clusters found (noise excluded).
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Per-point labels, `None` for noise.
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Label of `point`, `None` for noise.
    pub fn get(&self, point: usize) -> Option<usize> {
        self.labels[point]
    }

    /// Whether `point` is noise.
    pub fn is_noise(&self, point: usize) -> bool {
        self.labels[point].is_none()
    }

    /// Noise points, ascending.
    pub fn noise(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Members of `cluster`, ascending.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == Some(cluster))
            .map(|(i, _)| i)
            .collect()
    }

    /// Members of every cluster, indexed by cluster id.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.n_clusters];
        for (i, l) in self.labels.iter().enumerate() {
            if let Some(c) = l {
                out[*c].push(i);
            }
        }
        out
    }

    /// Labels with noise as [`NOISE`].
    pub fn to_flat_labels(&self) -> Vec<usize> {
        self.labels.iter().map(|l| l.unwrap_or(NOISE)).collect()
    }

    /// Labels with noise as `-1`.
    pub fn to_signed_labels(&self) -> Vec<i64> {
        self.labels
            .iter()
            .map(|l| l.map_or(-1, |c| c as i64))
            .collect()
    }

    /// Consume into per-point labels, `None` for noise.
    pub fn into_labels(self) -> Vec<Option<usize>> {
        self.labels
    }
}
