//! Fixed-radius weighted adjacency graph over region centroids.
//!
//! Candidate edges come from a uniform-grid radius query: only pairs whose
//! centroids lie within the adjacency radius are ever considered, so the
//! expensive dilated-mask overlap count runs once per spatially plausible
//! pair instead of once per O(N²) pair. Weights are symmetric by
//! construction and the graph is frozen after `build`; downstream stages
//! only read from it.
use crate::catalog::RegionCatalog;
use crate::image::RegionMask;
use log::debug;
use nalgebra::Point2;
use rayon::prelude::*;
use std::collections::HashMap;

/// Uniform-grid spatial hash answering fixed-radius neighbor queries.
///
/// Cell size equals the query radius, so all neighbors of a point lie in
/// the 3×3 block of cells around it.
struct GridIndex {
    cell: f32,
    bins: HashMap<(i32, i32), Vec<usize>>,
}

impl GridIndex {
    fn build(points: &[Point2<f32>], radius: f32) -> Self {
        let cell = radius.max(f32::EPSILON);
        let mut bins: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (idx, p) in points.iter().enumerate() {
            bins.entry(Self::key(p, cell)).or_default().push(idx);
        }
        Self { cell, bins }
    }

    #[inline]
    fn key(p: &Point2<f32>, cell: f32) -> (i32, i32) {
        ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32)
    }

    /// All unordered pairs (i, j), i < j, with `‖points[i] − points[j]‖ <= radius`.
    fn candidate_pairs(&self, points: &[Point2<f32>], radius: f32) -> Vec<(usize, usize)> {
        let r2 = radius * radius;
        let mut pairs = Vec::new();
        for i in 0..points.len() {
            let p = points[i];
            let (kx, ky) = Self::key(&p, self.cell);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(members) = self.bins.get(&(kx + dx, ky + dy)) else {
                        continue;
                    };
                    for &j in members {
                        if j > i && (points[j] - p).norm_squared() <= r2 {
                            pairs.push((i, j));
                        }
                    }
                }
            }
        }
        pairs
    }
}

/// Sparse undirected adjacency graph over all cataloged regions.
///
/// Vertices are dense catalog indices; every region is a vertex even when
/// it has no in-radius neighbor. Neighbor lists hold only nonzero-weight
/// entries, sorted by neighbor index; absent pairs read as weight 0.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    ids: Vec<u32>,
    neighbors: Vec<Vec<(usize, u32)>>,
}

impl AdjacencyGraph {
    /// Build the graph from the catalog and its dilated masks.
    ///
    /// `dilated` must be index-aligned with the catalog (see
    /// [`RegionCatalog::dilate_all`]). Overlap counts for the candidate
    /// pairs are computed on the rayon pool; pairs outside `radius` are
    /// never inspected and therefore always weigh 0.
    pub fn build(catalog: &RegionCatalog, dilated: &[RegionMask], radius: f32) -> Self {
        assert_eq!(
            dilated.len(),
            catalog.len(),
            "dilated mask set must be index-aligned with the catalog"
        );
        let points: Vec<Point2<f32>> =
            catalog.regions().iter().map(|r| r.centroid).collect();

        let index = GridIndex::build(&points, radius);
        let pairs = index.candidate_pairs(&points, radius);
        debug!(
            "AdjacencyGraph::build {} vertices, {} candidate pairs within r={}",
            points.len(),
            pairs.len(),
            radius
        );

        let weighted: Vec<(usize, usize, u32)> = pairs
            .par_iter()
            .map(|&(i, j)| (i, j, dilated[i].overlap_count(&dilated[j]) as u32))
            .collect();

        let mut neighbors = vec![Vec::new(); points.len()];
        let mut nonzero = 0usize;
        for (i, j, w) in weighted {
            if w == 0 {
                continue;
            }
            neighbors[i].push((j, w));
            neighbors[j].push((i, w));
            nonzero += 1;
        }
        for list in &mut neighbors {
            list.sort_unstable_by_key(|&(j, _)| j);
        }
        debug!("AdjacencyGraph::build {} nonzero-weight edges", nonzero);

        Self {
            ids: catalog.regions().iter().map(|r| r.id).collect(),
            neighbors,
        }
    }

    /// Number of vertices (== cataloged regions).
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges with nonzero weight.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Region label of a vertex.
    pub fn id(&self, idx: usize) -> u32 {
        self.ids[idx]
    }

    /// Nonzero-weight neighbors of a vertex, sorted by neighbor index.
    pub fn neighbors(&self, idx: usize) -> &[(usize, u32)] {
        &self.neighbors[idx]
    }

    /// Weight of the (i, j) pair; 0 when no edge exists.
    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.neighbors[i]
            .binary_search_by_key(&j, |&(n, _)| n)
            .map(|pos| self.neighbors[i][pos].1)
            .unwrap_or(0)
    }
}
