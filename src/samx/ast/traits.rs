//! AST traits - Common interfaces for uniform node access

use super::elements::{Block, Element, Paragraph};

/// Visitor trait for traversing the document tree
///
/// Default implementations are empty, so you only need to override the methods you care
/// about. Children of a block are visited in order between [Visitor::visit_block] and
/// [Visitor::leave_block], which lets a visitor track nesting depth.
///
/// # Example
///
/// ```ignore
/// struct Counter(usize);
///
/// impl Visitor for Counter {
///     fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter(0);
/// document.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_block(&mut self, _block: &Block) {}
    fn leave_block(&mut self, _block: &Block) {}

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
}

/// Visit every element of `items`, in order
pub fn visit_children(visitor: &mut dyn Visitor, items: &[Element]) {
    for item in items {
        item.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
