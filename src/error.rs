use std::path::PathBuf;

use thiserror::Error;

/// Why a single arrow asset could not produce a color.
///
/// None of these abort a run; the extractor logs them and substitutes black.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The image file does not exist.
    #[error("image not found: {}", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be opened or decoded.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Every pixel was filtered out as transparent, or the image is empty.
    #[error("no opaque pixels in {}", .0.display())]
    EmptyHistogram(PathBuf),
}
