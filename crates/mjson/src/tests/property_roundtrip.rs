use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::{Document, render};
use crate::{load_from_text, parse, tokenize};

/// Property: rendering a document and parsing it back yields the same tree,
/// whichever comma layout separates the values.
#[test]
fn document_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document, layout: u8) -> bool {
        let separator = match layout % 4 {
            0 => ",",
            1 => ", ",
            2 => ",,",
            _ => "\n ,\t",
        };
        let src = render(&doc.0, separator);
        load_from_text(&src).as_ref() == Ok(&doc.0)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(Document, u8) -> bool);
}

/// Property: arbitrary text never panics, and anything accepted has a
/// container root.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn arbitrary_text_never_panics(src: String) -> bool {
    load_from_text(&src).map_or(true, |root| root.is_container())
}

/// Property: every token buffer the lexer produces is either rejected by the
/// parser or turned into a tree, and the parser agrees with the facade.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn lexer_and_parser_compose(doc: Document, cut: usize) -> bool {
    let src = render(&doc.0, ", ");
    // truncating at a char boundary exercises every unterminated shape
    let mut end = cut % (src.len() + 1);
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    let truncated = &src[..end];
    let staged = tokenize(truncated).and_then(|tokens| parse(&tokens));
    staged == load_from_text(truncated)
}
