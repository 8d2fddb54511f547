//! Element definitions for the samx AST

pub mod block;
pub mod document;
pub mod element;
pub mod paragraph;

pub use block::Block;
pub use document::Document;
pub use element::Element;
pub use paragraph::Paragraph;
