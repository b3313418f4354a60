//! Flat-file serialization of extracted subgraphs.
//!
//! Each subgraph becomes two plain-text tables with no header:
//!
//! - `<run_id>_<NNN>_ed.csv` — one row per edge: `row col angle dist weight`,
//!   where `row`/`col` are 0-based positions in the vertex enumeration.
//! - `<run_id>_<NNN>_ve.csv` — one row per vertex: `x y` centroid
//!   coordinates, in the enumeration order the edge indices refer to.
//!
//! Floats are written in exponent notation, which round-trips `f32`
//! exactly. Files are created or overwritten; a failed write aborts the
//! pair with no partial-write recovery.
use crate::subgraph::LocalSubgraph;
use nalgebra::Point2;
use std::fs;
use std::path::{Path, PathBuf};

/// Edge-table file name for one center.
pub fn edge_file_name(run_id: &str, seq: usize) -> String {
    format!("{run_id}_{seq:03}_ed.csv")
}

/// Vertex-table file name for one center.
pub fn vertex_file_name(run_id: &str, seq: usize) -> String {
    format!("{run_id}_{seq:03}_ve.csv")
}

/// Write the edge and vertex tables for `graph` into `dir`.
///
/// Returns the two paths written, edge table first.
pub fn write_graph_pair(
    dir: &Path,
    run_id: &str,
    seq: usize,
    graph: &LocalSubgraph,
) -> Result<(PathBuf, PathBuf), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;

    let mut edges = String::new();
    for e in &graph.edges {
        edges.push_str(&format!(
            "{} {} {:e} {:e} {}\n",
            e.row, e.col, e.angle, e.dist, e.weight
        ));
    }
    let mut vertices = String::new();
    for v in &graph.vertices {
        vertices.push_str(&format!("{:e} {:e}\n", v.centroid.x, v.centroid.y));
    }

    let ed_path = dir.join(edge_file_name(run_id, seq));
    fs::write(&ed_path, edges)
        .map_err(|e| format!("Failed to write {}: {e}", ed_path.display()))?;
    let ve_path = dir.join(vertex_file_name(run_id, seq));
    fs::write(&ve_path, vertices)
        .map_err(|e| format!("Failed to write {}: {e}", ve_path.display()))?;
    Ok((ed_path, ve_path))
}

/// One parsed row of an edge table.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRow {
    pub row: usize,
    pub col: usize,
    pub angle: f32,
    pub dist: f32,
    pub weight: u32,
}

/// Parse an edge table written by [`write_graph_pair`].
pub fn read_edge_table(path: &Path) -> Result<Vec<EdgeRow>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(format!(
                "{}:{}: expected 5 columns, found {}",
                path.display(),
                lineno + 1,
                fields.len()
            ));
        }
        let parse = |field: &str| {
            field
                .parse::<f32>()
                .map_err(|e| format!("{}:{}: {e}", path.display(), lineno + 1))
        };
        rows.push(EdgeRow {
            row: parse(fields[0])? as usize,
            col: parse(fields[1])? as usize,
            angle: parse(fields[2])?,
            dist: parse(fields[3])?,
            weight: parse(fields[4])? as u32,
        });
    }
    Ok(rows)
}

/// Parse a vertex table written by [`write_graph_pair`].
pub fn read_vertex_table(path: &Path) -> Result<Vec<Point2<f32>>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(format!(
                "{}:{}: expected 2 columns, found {}",
                path.display(),
                lineno + 1,
                fields.len()
            ));
        }
        let parse = |field: &str| {
            field
                .parse::<f32>()
                .map_err(|e| format!("{}:{}: {e}", path.display(), lineno + 1))
        };
        points.push(Point2::new(parse(fields[0])?, parse(fields[1])?));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::{SubgraphEdge, SubgraphVertex};

    fn sample_graph() -> LocalSubgraph {
        LocalSubgraph {
            vertices: vec![
                SubgraphVertex {
                    id: 2,
                    centroid: Point2::new(4.0, 4.5),
                },
                SubgraphVertex {
                    id: 3,
                    centroid: Point2::new(6.25, 4.5),
                },
            ],
            edges: vec![SubgraphEdge {
                row: 0,
                col: 1,
                weight: 30,
                dist: 2.25,
                angle: 1.9999,
            }],
        }
    }

    #[test]
    fn file_names_embed_run_id_and_sequence() {
        assert_eq!(edge_file_name("t01", 7), "t01_007_ed.csv");
        assert_eq!(vertex_file_name("t01", 7), "t01_007_ve.csv");
    }

    #[test]
    fn written_tables_read_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let graph = sample_graph();
        let (ed, ve) = write_graph_pair(dir.path(), "sample", 0, &graph).unwrap();

        let edges = read_edge_table(&ed).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].row, 0);
        assert_eq!(edges[0].col, 1);
        assert_eq!(edges[0].weight, 30);
        assert_eq!(edges[0].dist, 2.25);
        assert_eq!(edges[0].angle, 1.9999);

        let vertices = read_vertex_table(&ve).unwrap();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0], Point2::new(4.0, 4.5));
        assert_eq!(vertices[1], Point2::new(6.25, 4.5));
    }

    #[test]
    fn empty_subgraph_writes_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let (ed, ve) =
            write_graph_pair(dir.path(), "empty", 3, &LocalSubgraph::default()).unwrap();
        assert!(read_edge_table(&ed).unwrap().is_empty());
        assert!(read_vertex_table(&ve).unwrap().is_empty());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_ed.csv");
        std::fs::write(&path, "0 1 0.5\n").unwrap();
        let err = read_edge_table(&path).unwrap_err();
        assert!(err.contains("expected 5 columns"), "unexpected error: {err}");
    }
}
