//! Sample document tests
//!
//! Every curated sample under `docs/samples/` is run through the full pipeline and its
//! tree is checked with the fluent assertions, plus a treeviz snapshot.

use samx::samx::formats::to_treeviz_str;
use samx::samx::normalizer::IndentError;
use samx::samx::testing::{assert_doc, Samples};

#[test]
fn test_000_paragraphs() {
    let processed = Samples::process("000-paragraphs.samx").unwrap();
    assert!(processed.report.is_clean());

    assert_doc(&processed.document)
        .item_count(3)
        .max_depth(0)
        .item(0, |item| {
            item.assert_paragraph()
                .text("This is the first paragraph. It continues on a second line.");
        })
        .item(1, |item| {
            item.assert_paragraph()
                .text("A second paragraph, with punctuation.");
        })
        .item(2, |item| {
            item.assert_paragraph().text("Version 2.0 adds 3 new features.");
        });

    insta::assert_snapshot!(to_treeviz_str(&processed.document), @r"
├─ Paragraph: This is the first paragraph. I...
├─ Paragraph: A second paragraph, with punct...
└─ Paragraph: Version 2.0 adds 3 new feature...
");
}

#[test]
fn test_010_blocks_flat() {
    let processed = Samples::process("010-blocks-flat.samx").unwrap();

    assert_doc(&processed.document)
        .item_count(2)
        .max_depth(1)
        .item(0, |item| {
            item.assert_block()
                .identifier("introduction")
                .description("Getting started")
                .child_count(1)
                .child(0, |child| {
                    child
                        .assert_paragraph()
                        .text("The first block holds a single paragraph.");
                });
        })
        .item(1, |item| {
            item.assert_block()
                .identifier("summary")
                .description("Wrapping up")
                .child_count(1)
                .child(0, |child| {
                    child
                        .assert_paragraph()
                        .text("The second block holds two lines of text in one paragraph.");
                });
        });

    insta::assert_snapshot!(processed.normalized, @r"
introduction: Getting started
{{
    The first block holds a single paragraph.

}}
summary: Wrapping up
{{
    The second block holds two lines
    of text in one paragraph.

}}
");
}

#[test]
fn test_020_blocks_nested() {
    let processed = Samples::process("020-blocks-nested.samx").unwrap();

    assert_doc(&processed.document)
        .item_count(2)
        .max_depth(3)
        .item(0, |item| {
            item.assert_block()
                .identifier("chapter")
                .description("One")
                .child_count(2)
                .child(0, |section| {
                    section
                        .assert_block()
                        .identifier("section")
                        .description("First")
                        .child_count(2)
                        .child(0, |child| {
                            child
                                .assert_paragraph()
                                .text("This paragraph is nested two levels deep.");
                        })
                        .child(1, |child| {
                            child
                                .assert_block()
                                .identifier("subsection")
                                .description("")
                                .child_count(1)
                                .child(0, |para| {
                                    para.assert_paragraph().text("Three levels down.");
                                });
                        });
                })
                .child(1, |section| {
                    section
                        .assert_block()
                        .identifier("section")
                        .description("Second")
                        .child_count(1);
                });
        })
        .item(1, |item| {
            item.assert_block()
                .identifier("closing")
                .child_count(1)
                .child(0, |child| {
                    child.assert_paragraph().text("The end.");
                });
        });

    insta::assert_snapshot!(to_treeviz_str(&processed.document), @r"
├─ Block: chapter One
│ ├─ Block: section First
│ │ ├─ Paragraph: This paragraph is nested two l...
│ │ └─ Block: subsection
│ │   └─ Paragraph: Three levels down.
│ └─ Block: section Second
│   └─ Paragraph: Back at the second level.
└─ Block: closing
  └─ Paragraph: The end.
");
}

#[test]
fn test_030_descriptions() {
    let processed = Samples::process("030-descriptions.samx").unwrap();

    assert_doc(&processed.document)
        .item_count(4)
        .item(0, |item| {
            item.assert_block()
                .identifier("title")
                .description("A guide to samx")
                .child_count(0);
        })
        .item(1, |item| {
            item.assert_block()
                .identifier("author")
                .description("Someone Else")
                .child_count(0);
        })
        .item(2, |item| {
            item.assert_block()
                .identifier("status")
                .description("")
                .child_count(0);
        })
        .item(3, |item| {
            item.assert_block()
                .identifier("notes")
                .child_count(1)
                .child(0, |child| {
                    child
                        .assert_paragraph()
                        .text_starts_with("Blocks may carry a description")
                        .text_contains("colon. They may");
                });
        });
}

#[test]
fn test_040_mixed_content() {
    let processed = Samples::process("040-mixed-content.samx").unwrap();

    assert_doc(&processed.document)
        .item_count(3)
        .max_depth(2)
        .item(0, |item| {
            item.assert_paragraph()
                .text("Opening paragraph before any block.");
        })
        .item(1, |item| {
            item.assert_block()
                .identifier("recipe")
                .description("Pancakes")
                .child_count(3)
                .child(0, |child| {
                    child.assert_paragraph().text("Mix 200 g flour with 2 eggs.");
                })
                .child(1, |child| {
                    child
                        .assert_block()
                        .identifier("steps")
                        .child_count(1)
                        .child(0, |para| {
                            para.assert_paragraph().text("Whisk, rest, then fry.");
                        });
                })
                .child(2, |child| {
                    child.assert_paragraph().text("Serve warm.");
                });
        })
        .item(2, |item| {
            item.assert_paragraph()
                .text("Closing paragraph after the block.");
        });

    insta::assert_snapshot!(to_treeviz_str(&processed.document), @r"
├─ Paragraph: Opening paragraph before any b...
├─ Block: recipe Pancakes
│ ├─ Paragraph: Mix 200 g flour with 2 eggs.
│ ├─ Block: steps
│ │ └─ Paragraph: Whisk, rest, then fry.
│ └─ Paragraph: Serve warm.
└─ Paragraph: Closing paragraph after the bl...
");
}

#[test]
fn test_090_malformed_dedent() {
    let processed = Samples::process("090-malformed-dedent.samx").unwrap();

    assert_eq!(processed.report.diagnostics.len(), 1);
    let diagnostic = &processed.report.diagnostics[0];
    assert_eq!(diagnostic.line, 5);
    assert_eq!(
        diagnostic.error,
        IndentError::NoMatchingLevel {
            current: 8,
            observed: 2,
            expected: 4
        }
    );

    // the misplaced line is dropped, everything around it survives
    assert_doc(&processed.document)
        .item_count(1)
        .item(0, |item| {
            item.assert_block()
                .identifier("outer")
                .child_count(2)
                .child(0, |child| {
                    child
                        .assert_block()
                        .identifier("inner")
                        .child(0, |para| {
                            para.assert_paragraph().text("Deep text.");
                        });
                })
                .child(1, |child| {
                    child.assert_paragraph().text("Back in the outer block.");
                });
        });
}

#[test]
fn test_every_sample_parses() {
    for name in Samples::list() {
        let processed = Samples::process(name)
            .unwrap_or_else(|e| panic!("Sample {} failed to process: {}", name, e));
        assert!(!processed.document.is_empty(), "Sample {} is empty", name);
    }
}
