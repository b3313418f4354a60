//! Nearest-K induced subgraphs with geometric edge attributes.
//!
//! For a chosen center region, the extractor keeps the K regions whose
//! centroids are nearest to the center (the center itself ranks first at
//! distance zero), induces the nonzero-weight edges of the adjacency graph
//! on that set, and attributes every edge with the Euclidean distance and
//! the cosine dissimilarity of the endpoint centroids relative to the
//! selected set's mean centroid. Vertices are enumerated in ascending
//! label order; output rows refer to vertices by that position, with the
//! vertex table acting as the position → centroid side table.
use crate::adjacency::AdjacencyGraph;
use crate::catalog::RegionCatalog;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::collections::HashMap;

/// One vertex of an extracted subgraph.
#[derive(Clone, Debug, Serialize)]
pub struct SubgraphVertex {
    /// Region label in the source catalog.
    pub id: u32,
    /// Centroid coordinate identifying the vertex in the output tables.
    pub centroid: Point2<f32>,
}

/// One undirected edge of an extracted subgraph; `row < col` are positions
/// in the vertex enumeration.
#[derive(Clone, Debug, Serialize)]
pub struct SubgraphEdge {
    pub row: usize,
    pub col: usize,
    /// Dilated-mask overlap weight inherited from the adjacency graph.
    pub weight: u32,
    /// Euclidean distance between the endpoint centroids.
    pub dist: f32,
    /// Cosine distance between the endpoint centroids after subtracting
    /// the subgraph's mean centroid.
    pub angle: f32,
}

/// Induced local neighborhood graph around one center region.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LocalSubgraph {
    pub vertices: Vec<SubgraphVertex>,
    pub edges: Vec<SubgraphEdge>,
}

impl LocalSubgraph {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Extract the induced subgraph on the `k` regions nearest to `center_id`.
///
/// Ranking is by ascending centroid distance to the center with ties broken
/// by ascending label, so the selection is deterministic. Fewer than `k`
/// cataloged regions means all of them are selected. Two selected regions
/// sharing an exact centroid cannot be told apart in the output tables and
/// are rejected as an error.
pub fn extract(
    catalog: &RegionCatalog,
    graph: &AdjacencyGraph,
    center_id: u32,
    k: usize,
) -> Result<LocalSubgraph, String> {
    if catalog.is_empty() {
        return Ok(LocalSubgraph::default());
    }
    let center_idx = catalog
        .index_of(center_id)
        .ok_or_else(|| format!("unknown region id {center_id}"))?;
    let center = catalog.get(center_idx).centroid;

    let mut ranked: Vec<(f32, u32, usize)> = catalog
        .regions()
        .iter()
        .enumerate()
        .map(|(idx, r)| ((r.centroid - center).norm(), r.id, idx))
        .collect();
    ranked.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    ranked.truncate(k);

    // Vertex enumeration order is ascending label, independent of rank.
    let mut selected: Vec<usize> = ranked.into_iter().map(|(_, _, idx)| idx).collect();
    selected.sort_unstable();
    if selected.is_empty() {
        return Ok(LocalSubgraph::default());
    }

    let mut seen: HashMap<(u32, u32), u32> = HashMap::with_capacity(selected.len());
    for &idx in &selected {
        let r = catalog.get(idx);
        let key = (r.centroid.x.to_bits(), r.centroid.y.to_bits());
        if let Some(&first) = seen.get(&key) {
            return Err(format!(
                "regions {} and {} share centroid ({}, {}); cannot key vertices by coordinate",
                first, r.id, r.centroid.x, r.centroid.y
            ));
        }
        seen.insert(key, r.id);
    }

    let position: HashMap<usize, usize> = selected
        .iter()
        .enumerate()
        .map(|(pos, &idx)| (idx, pos))
        .collect();

    let mean: Vector2<f32> = selected
        .iter()
        .fold(Vector2::zeros(), |acc, &idx| {
            acc + catalog.get(idx).centroid.coords
        })
        / selected.len() as f32;

    let vertices: Vec<SubgraphVertex> = selected
        .iter()
        .map(|&idx| {
            let r = catalog.get(idx);
            SubgraphVertex {
                id: r.id,
                centroid: r.centroid,
            }
        })
        .collect();

    let mut edges = Vec::new();
    for (row, &idx_a) in selected.iter().enumerate() {
        let ca = catalog.get(idx_a).centroid;
        for &(idx_b, weight) in graph.neighbors(idx_a) {
            let Some(&col) = position.get(&idx_b) else {
                continue;
            };
            if col <= row {
                continue;
            }
            let cb = catalog.get(idx_b).centroid;
            edges.push(SubgraphEdge {
                row,
                col,
                weight,
                dist: (cb - ca).norm(),
                angle: cosine_distance(ca.coords - mean, cb.coords - mean),
            });
        }
    }

    Ok(LocalSubgraph { vertices, edges })
}

/// Cosine distance `1 − cos(u, v)`.
///
/// A zero-length vector carries no direction; the pair is scored as
/// orthogonal (distance 1) instead of propagating a NaN into the output.
fn cosine_distance(u: Vector2<f32>, v: Vector2<f32>) -> f32 {
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return 1.0;
    }
    1.0 - u.dot(&v) / norms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyGraph;
    use crate::image::LabelImage;
    use crate::morphology::StructuringElement;

    fn catalog_of_pixels(w: usize, h: usize, pixels: &[(usize, usize)]) -> RegionCatalog {
        let mut labels = LabelImage::new(w, h);
        for (k, &(x, y)) in pixels.iter().enumerate() {
            labels.set(x, y, 2 + k as u32);
        }
        RegionCatalog::from_labels(&labels)
    }

    fn graph_for(catalog: &RegionCatalog, radius: f32) -> AdjacencyGraph {
        let element = StructuringElement::ellipse(3, 3);
        let dilated = catalog.dilate_all(&element);
        AdjacencyGraph::build(catalog, &dilated, radius)
    }

    #[test]
    fn selects_min_of_k_and_catalog_size() {
        let catalog = catalog_of_pixels(64, 64, &[(4, 4), (8, 4), (40, 40), (20, 20)]);
        let graph = graph_for(&catalog, 10.0);
        let sub = extract(&catalog, &graph, 2, 2).unwrap();
        assert_eq!(sub.vertex_count(), 2);
        let all = extract(&catalog, &graph, 2, 100).unwrap();
        assert_eq!(all.vertex_count(), 4);
    }

    #[test]
    fn keeps_the_nearest_regions() {
        let catalog = catalog_of_pixels(64, 64, &[(4, 4), (8, 4), (40, 40), (20, 20)]);
        let graph = graph_for(&catalog, 10.0);
        let sub = extract(&catalog, &graph, 2, 2).unwrap();
        let ids: Vec<u32> = sub.vertices.iter().map(|v| v.id).collect();
        // Center (label 2) plus its nearest neighbor (label 3).
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn equidistant_tie_breaks_by_ascending_label() {
        // Labels 3 and 4 both sit 6 pixels from the center label 2.
        let catalog = catalog_of_pixels(32, 32, &[(10, 10), (16, 10), (4, 10)]);
        let graph = graph_for(&catalog, 10.0);
        let sub = extract(&catalog, &graph, 2, 2).unwrap();
        let ids: Vec<u32> = sub.vertices.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn vertices_enumerate_in_ascending_label_order() {
        let catalog = catalog_of_pixels(64, 64, &[(30, 30), (4, 4), (32, 30)]);
        let graph = graph_for(&catalog, 10.0);
        // Center is label 4; selection is {4, 2} by distance but the
        // enumeration must come out as [2, 4].
        let sub = extract(&catalog, &graph, 4, 2).unwrap();
        let ids: Vec<u32> = sub.vertices.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn induced_edge_carries_weight_dist_and_angle() {
        // Pixels 2 apart: 3x3 cross dilations share one pixel (weight 1).
        let catalog = catalog_of_pixels(16, 16, &[(4, 4), (6, 4)]);
        let graph = graph_for(&catalog, 10.0);
        let sub = extract(&catalog, &graph, 2, 2).unwrap();
        assert_eq!(sub.edge_count(), 1);
        let e = &sub.edges[0];
        assert_eq!((e.row, e.col), (0, 1));
        assert_eq!(e.weight, 1);
        assert!((e.dist - 2.0).abs() < 1e-6);
        // Centroids sit on opposite sides of the mean: cosine distance 2.
        assert!((e.angle - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_weight_pairs_are_not_materialized() {
        // In radius but too far for the dilations to touch.
        let catalog = catalog_of_pixels(32, 32, &[(4, 4), (12, 4)]);
        let graph = graph_for(&catalog, 20.0);
        let sub = extract(&catalog, &graph, 2, 2).unwrap();
        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn duplicate_centroids_are_rejected() {
        // Label 3 has pixels at (4,5) and (6,5): centroid (5,5), identical
        // to the single-pixel label 2.
        let mut labels = LabelImage::new(16, 16);
        labels.set(5, 5, 2);
        labels.set(4, 5, 3);
        labels.set(6, 5, 3);
        let catalog = RegionCatalog::from_labels(&labels);
        let graph = graph_for(&catalog, 10.0);
        let err = extract(&catalog, &graph, 2, 4).unwrap_err();
        assert!(err.contains("share centroid"), "unexpected error: {err}");
    }

    #[test]
    fn empty_catalog_yields_empty_subgraph() {
        let catalog = RegionCatalog::from_labels(&LabelImage::new(8, 8));
        let graph = graph_for(&catalog, 10.0);
        let sub = extract(&catalog, &graph, 2, 4).unwrap();
        assert!(sub.is_empty());
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn unknown_center_is_an_error() {
        let catalog = catalog_of_pixels(16, 16, &[(4, 4)]);
        let graph = graph_for(&catalog, 10.0);
        assert!(extract(&catalog, &graph, 99, 4).is_err());
    }

    #[test]
    fn cosine_distance_of_zero_vector_is_one() {
        let zero = Vector2::new(0.0, 0.0);
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(cosine_distance(zero, v), 1.0);
        assert_eq!(cosine_distance(v, zero), 1.0);
    }

    #[test]
    fn cosine_distance_matches_hand_values() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 2.0);
        assert!((cosine_distance(x, y) - 1.0).abs() < 1e-6);
        assert!(cosine_distance(x, x).abs() < 1e-6);
        assert!((cosine_distance(x, -x) - 2.0).abs() < 1e-6);
    }
}
