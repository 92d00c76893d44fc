//! Supervised classification with persistent homology.
//!
//! Re-exports the workspace crates under one roof:
//! - [`phc_helpers`]: datasets, data points and distance metrics
//! - [`rips_persistence`]: degree-0 Vietoris-Rips persistence diagrams
//! - [`phc`]: the persistent homology classifier

pub use phc::{
    ClassScores, InputError, ModelParts, PersistentHomologyClassifier, PhcConfig, PhcError,
    PhcModel, TieBreak, fit, predict,
};
pub use phc_helpers::{
    DataPoint, DatasetError, Distance, Float, L1Dist, L2Dist, LInfDist, LabeledDataset, LpDist,
};
pub use rips_persistence::{
    Filtration, PersistenceDiagram, PersistenceError, PersistencePair, RipsH0,
};
