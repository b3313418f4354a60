use crate::subgraph::LocalSubgraph;
use serde::Serialize;

/// Wall-clock cost of the pipeline stages, in milliseconds.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StageTimings {
    pub catalog_ms: f64,
    pub adjacency_ms: f64,
    pub extraction_ms: f64,
}

/// In-memory result of a full pipeline pass: one subgraph per selected
/// center, in ascending label order of the centers.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionReport {
    /// Cataloged regions in the frame.
    pub region_count: usize,
    /// Labels selected as centers, ascending; `graphs[i]` belongs to
    /// `center_ids[i]`.
    pub center_ids: Vec<u32>,
    pub graphs: Vec<LocalSubgraph>,
    pub timing: StageTimings,
}

/// Result of a pipeline pass that serialized every subgraph to disk.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub region_count: usize,
    pub center_count: usize,
    /// Edge + vertex files written (two per center).
    pub files_written: usize,
    pub timing: StageTimings,
}
