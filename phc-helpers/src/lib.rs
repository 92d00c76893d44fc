use ndarray::{NdFloat, ScalarOperand};
use num_traits::FromPrimitive;

use std::iter::Sum;

// Include submodules
mod common;
mod dataset;
mod distance;

// Re-export types from submodules
pub use common::DataPoint;
pub use dataset::{DatasetError, LabeledDataset};
pub use distance::{Distance, L1Dist, L2Dist, LInfDist, LpDist};

/// Scalar type for point coordinates and filtration values.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Sum
    + ScalarOperand
    + std::marker::Unpin
{
}

impl Float for f32 {}

impl Float for f64 {}
