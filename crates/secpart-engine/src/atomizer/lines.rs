use xi_rope::Rope;

use crate::span::Span;

/// One physical line of the document, with its byte span (including the
/// trailing newline, if any) and owned text.
///
/// Grounded in the teacher's `parsing::rope::lines::LineRef`; kept as an
/// owned `String` per line rather than a zero-copy rope slice since the
/// atomizer makes a single linear pass and never re-splits under edits.
#[derive(Debug, Clone)]
pub struct LineRef {
    pub span: Span,
    pub text: String,
}

/// Splits `text` into lines with precomputed byte spans, preserving
/// newlines. Byte-accurate (UTF-8 byte offsets), matching the invariants in
/// SPEC_FULL.md section 3.
pub fn lines_with_spans(text: &str) -> Vec<LineRef> {
    let rope = Rope::from(text);
    let mut offset = 0usize;
    rope.lines_raw(..)
        .map(|line| {
            let start = offset;
            let len = line.len();
            offset += len;
            LineRef {
                span: Span::new(start, offset),
                text: line.into_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_lines() {
        assert!(lines_with_spans("").is_empty());
    }

    #[test]
    fn spans_tile_the_text() {
        let text = "first\nsecond\nthird";
        let lines = lines_with_spans(text);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span::new(0, 6));
        assert_eq!(lines[1].span, Span::new(6, 13));
        assert_eq!(lines[2].span, Span::new(13, 18));
        for l in &lines {
            assert_eq!(&text[l.span.start..l.span.end], l.text);
        }
    }
}
