//! AST definitions for samx documents
//!
//! A [Document] is an ordered forest of [Element]s, each either a [Block] (a named,
//! optionally described container) or a [Paragraph] (a run of text lines). The tree is
//! built once by the [builder](crate::samx::builder) and is read-only afterwards.
//!
//! ## Modules
//!
//! - `elements` - Node type definitions
//! - `traits` - Common node interface and the [Visitor] traversal protocol
//! - `position` - Byte offset to line/column conversion for diagnostics

pub mod elements;
pub mod position;
pub mod traits;

pub use elements::{Block, Document, Element, Paragraph};
pub use position::{Position, SourceLocation};
pub use traits::{visit_children, AstNode, Visitor};
