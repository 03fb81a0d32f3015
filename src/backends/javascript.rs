use crate::pipeline::table::ColorTable;

use super::{generated_header, object_entries, TableBackend, EXPORT_NAME};

/// ES module backend; the front-end imports the table from this file.
pub struct JavaScriptBackend;

impl TableBackend for JavaScriptBackend {
    fn name(&self) -> &str {
        "JavaScript"
    }

    fn extension(&self) -> &str {
        "js"
    }

    fn serialize(&self, table: &ColorTable) -> String {
        let mut out = generated_header();
        out.push_str(&format!("export const {EXPORT_NAME} = {{\n"));
        out.push_str(&object_entries(table));
        out.push_str("};\n");
        out
    }
}
