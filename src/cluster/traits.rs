use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
///
/// [`Nbc`](super::Nbc) implements this trait. Its noise points come back as
/// [`NOISE`](super::NOISE) (`usize::MAX`), so filter them before using labels as
/// indices. Use [`Nbc::fit`](super::Nbc::fit) for `Option` labels instead.
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    ///
    /// Algorithms that can leave points unclustered label them [`NOISE`](super::NOISE).
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g. NBC),
    /// this returns 0.
    fn n_clusters(&self) -> usize;
}
