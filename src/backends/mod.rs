pub mod javascript;
pub mod typescript;

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::table::ColorTable;

/// Name of the exported table in every generated module.
pub const EXPORT_NAME: &str = "ARROW_COLOR";

/// A target language the color table can be rendered into.
pub trait TableBackend {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Conventional file extension, without the dot.
    fn extension(&self) -> &str;

    /// Render the complete generated module.
    fn serialize(&self, table: &ColorTable) -> String;

    /// Render and write the module to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    fn write_to(&self, table: &ColorTable, path: &Path) -> Result<()> {
        let content = self.serialize(table);
        std::fs::write(path, content)
            .with_context(|| format!("failed to write color table to {}", path.display()))?;
        Ok(())
    }
}

/// Header lines shared by the JavaScript-family backends.
pub(crate) fn generated_header() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "// This file is generated by {}. Do not edit it by hand;\n",
        env!("CARGO_PKG_NAME")
    ));
    out.push_str("// manual changes are overwritten the next time the generator runs.\n");
    out.push_str("// Dominant colors extracted from the arrow PNG assets.\n");
    out
}

/// Object literal body, one `index: "#RRGGBB", // From file` line per entry.
pub(crate) fn object_entries(table: &ColorTable) -> String {
    let mut out = String::new();
    for entry in table.entries() {
        out.push_str(&format!(
            "  {}: \"{}\", // From {}\n",
            entry.index,
            entry.color.to_hex(),
            entry.filename
        ));
    }
    out
}
