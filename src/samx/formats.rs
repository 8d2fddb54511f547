//! Output formats for a parsed document
//!
//! - [outline]: indentation-based text, one entry per block and paragraph
//! - [treeviz]: box-drawing tree view
//! - [json]: serde_json rendering of the whole tree

pub mod json;
pub mod outline;
pub mod treeviz;

pub use json::to_json_str;
pub use outline::to_outline_str;
pub use treeviz::to_treeviz_str;
