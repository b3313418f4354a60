//! Parameter types configuring the extraction pipeline.
//!
//! Defaults match the production microscopy setup: 1024×1024 frames with
//! the frame center at (512, 512), a 100-pixel adjacency radius and
//! 64-vertex neighborhoods.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters controlling catalog dilation, adjacency search
/// and subgraph extraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Maximum centroid distance (pixels) for two regions to become
    /// adjacency candidates.
    pub adjacency_radius: f32,
    /// Number of nearest regions (center included) kept per subgraph.
    pub subgraph_size: usize,
    /// Side length of the elliptical structuring element used to dilate
    /// region masks before overlap scoring.
    pub dilation_size: usize,
    /// Maximum distance from `image_center` for a region to qualify as a
    /// subgraph center (strict).
    pub center_threshold: f32,
    /// Geometric center of the frame used for center selection.
    pub image_center: Point2<f32>,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            adjacency_radius: 100.0,
            subgraph_size: 64,
            dilation_size: 6,
            center_threshold: 150.0,
            image_center: Point2::new(512.0, 512.0),
        }
    }
}
