#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod extractor;
pub mod image;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod adjacency;
pub mod catalog;
pub mod export;
pub mod morphology;
pub mod subgraph;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::extractor::{GraphExtractor, ExtractParams};
pub use crate::types::{ExtractionReport, RunSummary, StageTimings};

// Core data structures produced along the pipeline.
pub use crate::adjacency::AdjacencyGraph;
pub use crate::catalog::{Region, RegionCatalog};
pub use crate::subgraph::LocalSubgraph;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cell_graphs::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let mut labels = LabelImage::new(64, 64);
/// labels.set(30, 32, 2);
/// labels.set(34, 32, 3);
///
/// let extractor = GraphExtractor::new(ExtractParams::default());
/// let report = extractor.process(&labels)?;
/// println!("regions={} centers={}", report.region_count, report.center_ids.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::LabelImage;
    pub use crate::{ExtractParams, ExtractionReport, GraphExtractor, LocalSubgraph};
}
