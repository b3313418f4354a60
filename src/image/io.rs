//! I/O helpers for label rasters and JSON.
//!
//! - `load_label_image`: read a grayscale PNG/TIFF into an owned label raster.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::LabelImage;
use image::DynamicImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a label raster from disk.
///
/// The file must decode to a single-channel image; 16-bit pixels are taken
/// verbatim as region ids, 8-bit pixels are widened without rescaling.
/// Anything else (RGB, float) is rejected rather than guessed at, since a
/// lossy conversion would silently merge or split labels.
pub fn load_label_image(path: &Path) -> Result<LabelImage, String> {
    let img =
        image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (w, h, data) = match img {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            let data = buf.into_raw().into_iter().map(u32::from).collect();
            (w as usize, h as usize, data)
        }
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            let data = buf.into_raw().into_iter().map(u32::from).collect();
            (w as usize, h as usize, data)
        }
        other => {
            return Err(format!(
                "Unsupported label format {:?} in {} (expected 8- or 16-bit grayscale)",
                other.color(),
                path.display()
            ))
        }
    };
    LabelImage::from_raw(w, h, data)
        .map_err(|e| format!("Failed to read label raster {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
