//! JSON rendering of a document

use crate::samx::ast::Document;

/// Pretty-printed JSON for the whole tree
pub fn to_json_str(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}
