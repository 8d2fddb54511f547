//! Outline printer
//!
//! Walks the document with a [Visitor], indenting three spaces per nesting level. A block
//! prints as `identifier description`, a paragraph as its text, each followed by a blank
//! line. Leaving a block prints one more empty line.

use crate::samx::ast::{Block, Document, Paragraph, Visitor};

const INDENT: &str = "   ";

struct OutlinePrinter {
    output: String,
    level: usize,
}

impl OutlinePrinter {
    fn indent(&mut self) {
        for _ in 0..self.level {
            self.output.push_str(INDENT);
        }
    }
}

impl Visitor for OutlinePrinter {
    fn visit_block(&mut self, block: &Block) {
        self.indent();
        self.output.push_str(block.identifier());
        self.output.push(' ');
        self.output.push_str(block.description());
        self.output.push_str("\n\n");
        self.level += 1;
    }

    fn leave_block(&mut self, _block: &Block) {
        self.level -= 1;
        self.output.push('\n');
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.indent();
        self.output.push_str(paragraph.text());
        self.output.push_str("\n\n");
    }
}

pub fn to_outline_str(doc: &Document) -> String {
    let mut printer = OutlinePrinter {
        output: String::new(),
        level: 0,
    };
    doc.accept(&mut printer);
    printer.output
}
