//! Treeviz formatter for documents

use crate::samx::ast::{AstNode, Document, Element};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, doc.elements(), "");
    result
}

fn append_element(result: &mut String, item: &Element, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&item.display_label(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        item.node_type(),
        display_label
    ));

    if let Element::Block(block) = item {
        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, block.children(), &new_prefix);
    }
}

fn append_children(result: &mut String, children: &[Element], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        append_element(result, child, prefix, is_last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samx::ast::{Block, Paragraph};

    #[test]
    fn test_treeviz_nesting() {
        let doc = Document::new(vec![
            Element::Block(Block::new(
                "intro",
                "",
                vec![
                    Element::Paragraph(Paragraph::new("This is text.")),
                    Element::Block(Block::new(
                        "detail",
                        "",
                        vec![Element::Paragraph(Paragraph::new("Nested text."))],
                    )),
                ],
            )),
            Element::Paragraph(Paragraph::new("Closing words.")),
        ]);

        let expected = "\
├─ Block: intro
│ ├─ Paragraph: This is text.
│ └─ Block: detail
│   └─ Paragraph: Nested text.
└─ Paragraph: Closing words.
";
        assert_eq!(to_treeviz_str(&doc), expected);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let doc = Document::new(vec![Element::Paragraph(Paragraph::new(
            "A paragraph that goes on for quite a bit longer than thirty characters",
        ))]);
        assert_eq!(
            to_treeviz_str(&doc),
            "└─ Paragraph: A paragraph that goes on for q...\n"
        );
    }
}
