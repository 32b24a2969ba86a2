//! Exact k-neighbourhoods and neighbourhood-based density clustering.
//!
//! `nbclust` computes, for a set of dense vectors, the exact k-nearest-neighbour
//! relation (ties included) and clusters the points with NBC.
//!
//! - [`neighbourhood`]: brute-force and triangle-inequality accelerated k-neighbourhoods
//! - [`cluster`]: density factors and the NBC expansion
//! - [`dataset`]: comma-separated input and cluster-id output

#![forbid(unsafe_code)]

pub mod cluster;
pub mod dataset;
pub mod error;
pub mod neighbourhood;

pub use cluster::{
    cluster, density_factor, ClusterAssignment, Clustering, Nbc, ReferencePoint, NOISE,
};
pub use error::{Error, Result};
pub use neighbourhood::{
    k_nearest_neighbours, k_nearest_neighbours_accelerated, Neighbourhood, ReferenceOrdering,
};
