//! Density-based clustering on top of k-neighbourhoods.
//!
//! ## NBC
//!
//! Neighbourhood-Based Clustering groups points by density-reachability, like DBSCAN,
//! but judges density *relative to the neighbourhood structure*: a point is dense when
//! at least as many points list it among their k nearest neighbours as it lists
//! itself. There is no global radius to tune, only `k`, and clusters of different
//! densities can coexist.
//!
//! **Pipeline**:
//!
//! ```text
//! points ──► k-neighbourhood (brute force or triangle-inequality)
//!        ──► density factor NDF[i] = |R_KNB[i]| / |KNB[i]|
//!        ──► expansion from dense points ──► cluster ids + noise
//! ```
//!
//! **When to use**: clusters of varying density, unknown cluster count, outliers that
//! should stay unclustered.
//!
//! ## Usage
//!
//! ```rust
//! use nbclust::cluster::{Clustering, Nbc, NOISE};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 2.0],
//!     vec![10.0, 10.0],
//!     vec![11.0, 11.0],
//!     vec![12.0, 12.0],
//!     vec![100.0, 100.0],
//! ];
//!
//! let labels = Nbc::new(2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, NOISE]);
//!
//! // Same result through the triangle-inequality search.
//! let accelerated = Nbc::new(2).with_reference_point(vec![-1.0, -1.0]);
//! assert_eq!(accelerated.fit_predict(&data).unwrap(), labels);
//! ```

mod assignment;
mod density;
mod nbc;
mod traits;

pub use assignment::{ClusterAssignment, NOISE};
pub use density::{density_factor, is_dense};
pub use nbc::{cluster, cluster_neighbourhood, Nbc, ReferencePoint};
pub use traits::Clustering;
