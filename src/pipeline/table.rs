use std::path::Path;

use tracing::info;

use crate::color::Color;
use crate::pipeline::angle::{asset_filename, ROTATION_STEPS};
use crate::pipeline::extract::dominant_color;

/// One row of the generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub index: u32,
    pub color: Color,
    /// Asset the color was taken from, relative to the assets directory.
    pub filename: String,
}

/// Rotation index to color mapping, one entry per index in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<TableEntry>,
}

impl ColorTable {
    /// Build a table by asking `color_for` for each asset filename.
    ///
    /// Always yields exactly [`ROTATION_STEPS`] entries.
    pub fn from_fn<F>(mut color_for: F) -> Self
    where
        F: FnMut(u32, &str) -> Color,
    {
        let entries = (0..ROTATION_STEPS)
            .map(|index| {
                let filename = asset_filename(index);
                let color = color_for(index, &filename);
                TableEntry {
                    index,
                    color,
                    filename,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<&TableEntry> {
        self.entries.get(index as usize)
    }
}

/// Extract the dominant color of every arrow asset in `assets_dir`.
pub fn build_table(assets_dir: &Path, exclude_transparent: bool) -> ColorTable {
    let table = ColorTable::from_fn(|_, filename| {
        dominant_color(&assets_dir.join(filename), exclude_transparent)
    });
    let fallbacks = table
        .entries()
        .iter()
        .filter(|e| e.color == Color::BLACK)
        .count();
    info!(
        assets = %assets_dir.display(),
        entries = table.len(),
        black = fallbacks,
        "built arrow color table"
    );
    table
}
