//! Fluent assertion API for document trees

use super::matchers::{TextField, TextMatch};
use crate::samx::ast::{AstNode, Block, Document, Element, Paragraph};

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_items(items: &[Element]) -> String {
    items
        .iter()
        .map(|item| format!("{}({})", item.node_type(), item.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn child_assertion<'a, F>(items: &'a [Element], index: usize, context: String, assertion: F)
where
    F: FnOnce(ElementAssertion<'a>),
{
    assert!(
        index < items.len(),
        "{}: index {} out of bounds ({} items)",
        context,
        index,
        items.len()
    );
    assertion(ElementAssertion {
        item: &items[index],
        context: format!("{}[{}]", context, index),
    });
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level elements
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(self.doc.elements())
        );
        self
    }

    /// Assert on a specific top-level element by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        child_assertion(self.doc.elements(), index, "items".to_string(), assertion);
        self
    }

    /// Assert the nesting depth of the deepest block
    pub fn max_depth(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.max_depth(),
            expected,
            "Expected maximum block depth {}",
            expected
        );
        self
    }
}

pub struct ElementAssertion<'a> {
    item: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    /// Assert this element is a Paragraph and return paragraph-specific assertions
    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.item {
            Element::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            Element::Block(block) => panic!(
                "{}: Expected Paragraph, found Block '{}'",
                self.context,
                block.display_label()
            ),
        }
    }

    /// Assert this element is a Block and return block-specific assertions
    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.item {
            Element::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            Element::Paragraph(para) => panic!(
                "{}: Expected Block, found Paragraph with text '{}'",
                self.context,
                para.display_label()
            ),
        }
    }

    pub fn is_paragraph(&self) -> bool {
        self.item.is_paragraph()
    }

    pub fn is_block(&self) -> bool {
        self.item.is_block()
    }
}

pub struct ParagraphAssertion<'a> {
    para: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    fn text_matches(self, expected: TextMatch) -> Self {
        expected.check(TextField::ParagraphText, self.para.text(), &self.context);
        self
    }

    /// Assert the joined text of the paragraph
    pub fn text(self, expected: &str) -> Self {
        self.text_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.text_matches(TextMatch::StartsWith(prefix.to_string()))
    }

    pub fn text_contains(self, substring: &str) -> Self {
        self.text_matches(TextMatch::Contains(substring.to_string()))
    }
}

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn identifier(self, expected: &str) -> Self {
        let actual = self.block.identifier();
        assert_eq!(
            actual, expected,
            "{}: Expected block identifier to be '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Assert the exact description; use `""` for a block without one
    pub fn description(self, expected: &str) -> Self {
        self.description_matches(expected)
    }

    /// Assert the description against any [TextMatch]
    pub fn description_matches(self, expected: impl Into<TextMatch>) -> Self {
        let expected: TextMatch = expected.into();
        expected.check(TextField::BlockDescription, self.block.description(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.block.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_items(self.block.children())
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        child_assertion(
            self.block.children(),
            index,
            format!("{}:children", self.context),
            assertion,
        );
        self
    }
}
