use crate::pipeline::table::ColorTable;

use super::{generated_header, object_entries, TableBackend, EXPORT_NAME};

/// TypeScript module backend with a typed record declaration.
pub struct TypeScriptBackend;

impl TableBackend for TypeScriptBackend {
    fn name(&self) -> &str {
        "TypeScript"
    }

    fn extension(&self) -> &str {
        "ts"
    }

    fn serialize(&self, table: &ColorTable) -> String {
        let mut out = generated_header();
        out.push_str(&format!(
            "export const {EXPORT_NAME}: Record<number, string> = {{\n"
        ));
        out.push_str(&object_entries(table));
        out.push_str("};\n");
        out
    }
}
