use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use image::{ImageError, Rgba};
use tracing::{debug, error, warn};

use crate::color::Color;
use crate::error::AssetError;

/// Pixels with alpha below this are treated as transparent.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Count each distinct RGB triple among the eligible pixels.
pub fn histogram<I>(pixels: I, exclude_transparent: bool) -> HashMap<Color, u32>
where
    I: IntoIterator<Item = Rgba<u8>>,
{
    let mut counts = HashMap::new();
    for px in pixels {
        if exclude_transparent && px[3] < ALPHA_THRESHOLD {
            continue;
        }
        *counts.entry(Color::from(px)).or_insert(0u32) += 1;
    }
    counts
}

/// Most frequent color in a pixel sequence, or `None` when no pixel survives
/// the transparency filter.
///
/// Ties go to the smallest color in `(r, g, b)` order so the result does not
/// depend on hash iteration order.
pub fn dominant_of_pixels<I>(pixels: I, exclude_transparent: bool) -> Option<Color>
where
    I: IntoIterator<Item = Rgba<u8>>,
{
    histogram(pixels, exclude_transparent)
        .into_iter()
        .max_by(|(color_a, count_a), (color_b, count_b)| {
            count_a.cmp(count_b).then_with(|| color_b.cmp(color_a))
        })
        .map(|(color, _)| color)
}

/// Decode an image and return its dominant color, reporting why it failed.
pub fn sample_asset(path: &Path, exclude_transparent: bool) -> Result<Color, AssetError> {
    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref e) if e.kind() == ErrorKind::NotFound => {
            AssetError::Missing(path.to_path_buf())
        }
        source => AssetError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // Sources without alpha come back fully opaque.
    let rgba = img.to_rgba8();
    dominant_of_pixels(rgba.pixels().copied(), exclude_transparent)
        .ok_or_else(|| AssetError::EmptyHistogram(path.to_path_buf()))
}

/// Dominant color of the image at `path`, falling back to black.
///
/// Missing, undecodable and fully transparent images are logged and never
/// propagated.
pub fn dominant_color(path: &Path, exclude_transparent: bool) -> Color {
    match sample_asset(path, exclude_transparent) {
        Ok(color) => {
            debug!(path = %path.display(), %color, "extracted dominant color");
            color
        }
        Err(err @ AssetError::Missing(_)) => {
            warn!("{err}; using {}", Color::BLACK);
            Color::BLACK
        }
        Err(err @ AssetError::Decode { .. }) => {
            error!("{err}; using {}", Color::BLACK);
            Color::BLACK
        }
        Err(err @ AssetError::EmptyHistogram(_)) => {
            warn!("{err}; using {}", Color::BLACK);
            Color::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([200, 30, 30, 255]);
    const BLUE: Rgba<u8> = Rgba([30, 30, 200, 255]);

    // --- dominant_of_pixels tests ---

    #[test]
    fn uniform_pixels_return_that_color() {
        let pixels = vec![RED; 64];
        assert_eq!(
            dominant_of_pixels(pixels, true),
            Some(Color::new(200, 30, 30))
        );
    }

    #[test]
    fn majority_color_wins() {
        let mut pixels = vec![RED; 60];
        pixels.extend(vec![BLUE; 40]);
        assert_eq!(
            dominant_of_pixels(pixels, true),
            Some(Color::new(200, 30, 30))
        );
    }

    #[test]
    fn transparent_pixels_are_ignored() {
        // Blue outnumbers red but is mostly invisible.
        let mut pixels = vec![RED; 10];
        pixels.extend(vec![Rgba([30, 30, 200, 127]); 50]);
        pixels.extend(vec![BLUE; 5]);
        assert_eq!(
            dominant_of_pixels(pixels, true),
            Some(Color::new(200, 30, 30))
        );
    }

    #[test]
    fn alpha_threshold_is_inclusive() {
        let pixels = vec![Rgba([1, 2, 3, ALPHA_THRESHOLD])];
        assert_eq!(dominant_of_pixels(pixels, true), Some(Color::new(1, 2, 3)));
    }

    #[test]
    fn keep_transparent_counts_every_pixel() {
        let mut pixels = vec![RED; 10];
        pixels.extend(vec![Rgba([0, 0, 0, 0]); 50]);
        assert_eq!(dominant_of_pixels(pixels.clone(), false), Some(Color::BLACK));
        assert_eq!(
            dominant_of_pixels(pixels, true),
            Some(Color::new(200, 30, 30))
        );
    }

    #[test]
    fn fully_transparent_yields_none() {
        let pixels = vec![Rgba([255, 255, 255, 10]); 16];
        assert_eq!(dominant_of_pixels(pixels, true), None);
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(dominant_of_pixels(Vec::<Rgba<u8>>::new(), false), None);
    }

    #[test]
    fn ties_resolve_to_smallest_color() {
        let a = Rgba([10, 0, 0, 255]);
        let b = Rgba([9, 255, 255, 255]);
        let c = Rgba([10, 0, 1, 255]);
        for order in [[a, b, c], [c, b, a], [b, c, a]] {
            let pixels: Vec<_> = order.iter().flat_map(|&p| vec![p; 3]).collect();
            assert_eq!(
                dominant_of_pixels(pixels, true),
                Some(Color::new(9, 255, 255))
            );
        }
    }

    #[test]
    fn histogram_merges_alpha_variants() {
        let pixels = vec![Rgba([5, 5, 5, 255]), Rgba([5, 5, 5, 200])];
        let counts = histogram(pixels, true);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Color::new(5, 5, 5)], 2);
    }

    // --- file-backed tests ---

    #[test]
    fn solid_png_returns_its_color() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solid.png");
        RgbaImage::from_pixel(8, 8, Rgba([12, 200, 99, 255]))
            .save(&path)
            .unwrap();

        assert_eq!(dominant_color(&path, true), Color::new(12, 200, 99));
    }

    #[test]
    fn rgb_png_is_treated_as_opaque() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgb.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([7, 8, 9]))
            .save(&path)
            .unwrap();

        assert_eq!(dominant_color(&path, true), Color::new(7, 8, 9));
    }

    #[test]
    fn missing_file_falls_back_to_black() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("arrow_000.png");

        assert!(matches!(
            sample_asset(&path, true),
            Err(AssetError::Missing(_))
        ));
        assert_eq!(dominant_color(&path, true), Color::BLACK);
    }

    #[test]
    fn corrupt_file_falls_back_to_black() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("arrow_009.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let err = sample_asset(&path, true).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }), "got {err:?}");
        assert_eq!(dominant_color(&path, true), Color::BLACK);
    }

    #[test]
    fn transparent_png_falls_back_to_black() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghost.png");
        RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 100]))
            .save(&path)
            .unwrap();

        assert!(matches!(
            sample_asset(&path, true),
            Err(AssetError::EmptyHistogram(_))
        ));
        assert_eq!(dominant_color(&path, true), Color::BLACK);
        assert_eq!(dominant_color(&path, false), Color::new(255, 0, 0));
    }
}
