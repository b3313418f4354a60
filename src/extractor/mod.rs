//! Pipeline driver turning a label raster into per-center neighborhood graphs.
//!
//! Overview
//! - Builds the region catalog (cropped masks + centroids) from the raster.
//! - Dilates every mask by a fixed elliptical element and weights the
//!   radius-gated candidate pairs by dilated-mask overlap.
//! - Selects centers by proximity to the frame center and extracts one
//!   nearest-K induced subgraph per center.
//! - Serializes each subgraph as an edge/vertex table pair, numbered in
//!   ascending center order.
//!
//! Modules
//! - [`params`] – configuration knobs shared by the library and CLI.
//! - `pipeline` – the [`GraphExtractor`] implementation and center selection.

pub mod params;
mod pipeline;

pub use params::ExtractParams;
pub use pipeline::{select_centers, GraphExtractor};
