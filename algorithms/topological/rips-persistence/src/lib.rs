//! Degree-0 persistent homology of point clouds.
//!
//! The classifier only needs one thing from topology: the persistence
//! diagram of the connected components of a point cloud under a
//! Vietoris-Rips filtration truncated at some scale. This crate defines that
//! contract ([`Filtration`]) and ships the implementation used by default
//! ([`RipsH0`]).
//!
//! ## Background
//!
//! In VR_ε(X) two points are joined by an edge when their distance is at
//! most ε. Every point is its own component at ε = 0 (birth 0). As ε grows,
//! components merge; the younger one dies at the length of the merging edge.
//! Components that never merge below the threshold never die, and are
//! reported with an infinite death.

mod diagram;
mod rips;

pub use diagram::{PersistenceDiagram, PersistencePair};
pub use rips::RipsH0;

use ndarray::ArrayView2;
use phc_helpers::Float;
use thiserror::Error;

/// Errors raised by a filtration routine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    #[error("point cloud is empty")]
    EmptyCloud,
    #[error("filtration threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),
    #[error("point {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),
    #[error("distance between points {i} and {j} is not finite")]
    NonFiniteDistance { i: usize, j: usize },
    #[error("pair {index} is malformed (birth {birth}, death {death})")]
    Malformed { index: usize, birth: f64, death: f64 },
}

/// A routine producing the degree-0 persistence diagram of a point cloud.
///
/// Implementations must be pure functions of `(cloud, threshold)`: the
/// classifier calls them once per class during fitting and again, with the
/// query appended, on every prediction, and compares the results.
/// Infinite deaths are allowed in the output; clamping is the caller's job.
pub trait Filtration<F: Float>: Send + Sync {
    fn diagram(
        &self,
        cloud: ArrayView2<F>,
        threshold: F,
    ) -> Result<PersistenceDiagram<F>, PersistenceError>;
}
