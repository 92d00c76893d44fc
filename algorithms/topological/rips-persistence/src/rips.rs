//! Degree-0 Vietoris-Rips persistence via Kruskal-style union-find.
//!
//! H₀ of VR_ε(X) only depends on the 1-skeleton, so the full diagram falls
//! out of a single sweep over the edges in ascending length: every edge that
//! joins two distinct components kills one of them.

use std::cmp::Ordering;

use log::trace;
use ndarray::ArrayView2;
use phc_helpers::{Distance, Float, L2Dist};

use crate::{Filtration, PersistenceDiagram, PersistenceError, PersistencePair};

/// Degree-0 Vietoris-Rips filtration over an arbitrary metric.
///
/// Output conventions:
/// - every vertex is born at 0;
/// - edges longer than the threshold are never added;
/// - merges at distance 0 (duplicate points) are dropped, so the diagram
///   only holds features with positive lifetime;
/// - each component still alive at the threshold yields `(0, ∞)`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct RipsH0<D = L2Dist> {
    metric: D,
}

impl RipsH0<L2Dist> {
    /// Euclidean Rips filtration.
    pub fn new() -> Self {
        Self { metric: L2Dist }
    }
}

impl<D> RipsH0<D> {
    pub fn with_metric(metric: D) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> &D {
        &self.metric
    }
}

impl<F, D> Filtration<F> for RipsH0<D>
where
    F: Float,
    D: Distance<F>,
{
    fn diagram(
        &self,
        cloud: ArrayView2<F>,
        threshold: F,
    ) -> Result<PersistenceDiagram<F>, PersistenceError> {
        if !(threshold > F::zero() && threshold.is_finite()) {
            return Err(PersistenceError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        let n = cloud.nrows();
        if n == 0 {
            return Err(PersistenceError::EmptyCloud);
        }
        if let Some(i) = cloud
            .rows()
            .into_iter()
            .position(|row| row.iter().any(|x| !x.is_finite()))
        {
            return Err(PersistenceError::NonFiniteCoordinate(i));
        }

        let mut edges: Vec<(F, usize, usize)> = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                let d = self.metric.distance(cloud.row(i), cloud.row(j));
                if !d.is_finite() {
                    return Err(PersistenceError::NonFiniteDistance { i, j });
                }
                if d <= threshold {
                    edges.push((d, i, j));
                }
            }
        }
        edges.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
                .then(a.2.cmp(&b.2))
        });

        let mut components = UnionFind::new(n);
        let mut pairs = Vec::with_capacity(n);
        for (d, i, j) in edges {
            if components.union(i, j) && d > F::zero() {
                pairs.push(PersistencePair::new(F::zero(), d));
            }
            if components.count() == 1 {
                break;
            }
        }
        pairs.extend((0..components.count()).map(|_| PersistencePair::essential(F::zero())));

        trace!(
            "H0 diagram: {} points, {} pairs, {} essential",
            n,
            pairs.len(),
            components.count()
        );
        Ok(PersistenceDiagram::new(pairs))
    }
}

/// Disjoint-set forest with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    count: usize,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`; false if they were already joined.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => self.parent[rx] = ry,
            Ordering::Greater => self.parent[ry] = rx,
            Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.count -= 1;
        true
    }

    fn count(&self) -> usize {
        self.count
    }
}
