use serde::Serialize;

use crate::atomizer::patterns::{
    ATX_HEADING, BLOCKQUOTE, FENCE_OPEN, HORIZONTAL_RULE, INLINE_LINK, LIST_ITEM,
};

/// Whether a document shows enough markdown structure to atomize with
/// markdown-only rules (ATX headings, tables) enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Markdown,
    Plain,
}

/// Counts how many of the six structural signals in spec.md 4.1 appear
/// anywhere in `text` and classifies it as [`Mode::Markdown`] when at least
/// two distinct signals match, else [`Mode::Plain`].
pub fn detect_mode(text: &str) -> Mode {
    let hits = [
        ATX_HEADING.is_match(text),
        FENCE_OPEN.is_match(text),
        LIST_ITEM.is_match(text),
        BLOCKQUOTE.is_match(text),
        INLINE_LINK.is_match(text),
        HORIZONTAL_RULE.is_match(text),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();

    if hits >= 2 {
        Mode::Markdown
    } else {
        Mode::Plain
    }
}
