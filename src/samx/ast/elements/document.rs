//! Document element definition

use super::super::traits::{visit_children, Visitor};
use super::block::Block;
use super::element::Element;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

/// The root of a samx AST: the ordered top-level elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.elements.iter().filter_map(Element::as_block)
    }

    pub fn iter_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(Element::as_paragraph)
    }

    /// Deepest block nesting on any path; 0 for a document without blocks
    pub fn max_depth(&self) -> usize {
        self.iter_blocks().map(Block::depth).max().unwrap_or(0)
    }

    /// Walk the whole tree in document order
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visit_children(visitor, &self.elements);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} items)", self.elements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(vec![
            Element::Paragraph(Paragraph::new("Lead.")),
            Element::Block(Block::new(
                "intro",
                "",
                vec![
                    Paragraph::new("This is text.").into(),
                    Block::new("detail", "", vec![Paragraph::new("Nested text.").into()]).into(),
                ],
            )),
        ])
    }

    #[derive(Default)]
    struct Recorder {
        depth: usize,
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit_block(&mut self, block: &Block) {
            self.events
                .push(format!("{}enter {}", "  ".repeat(self.depth), block.identifier()));
            self.depth += 1;
        }

        fn leave_block(&mut self, block: &Block) {
            self.depth -= 1;
            self.events
                .push(format!("{}leave {}", "  ".repeat(self.depth), block.identifier()));
        }

        fn visit_paragraph(&mut self, paragraph: &Paragraph) {
            self.events
                .push(format!("{}{}", "  ".repeat(self.depth), paragraph.text()));
        }
    }

    #[test]
    fn test_accept_visits_in_document_order() {
        let mut recorder = Recorder::default();
        sample().accept(&mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "Lead.",
                "enter intro",
                "  This is text.",
                "  enter detail",
                "    Nested text.",
                "  leave detail",
                "leave intro",
            ]
        );
    }

    #[test]
    fn test_iterators_and_depth() {
        let doc = sample();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.iter_blocks().count(), 1);
        assert_eq!(doc.iter_paragraphs().count(), 1);
        assert_eq!(doc.max_depth(), 2);
        assert_eq!(Document::default().max_depth(), 0);
    }

    #[test]
    fn test_serializes_with_element_tags() {
        let doc = Document::new(vec![Block::new("a", "b", vec![]).into()]);
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"{"elements":[{"type":"Block","identifier":"a","description":"b","children":[]}]}"#
        );
    }
}
