use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! lazy_re {
    ($name:ident, $re:expr) => {
        pub static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).unwrap());
    };
}

// Mode-detector signals (spec.md 4.1) and atomizer line recognizers
// (spec.md 4.2) share the same compiled patterns where their shapes match.
lazy_re!(ATX_HEADING, r"(?m)^ {0,3}#{1,6} \S");
lazy_re!(FENCE_OPEN, r"(?m)^ {0,3}(```|~~~)");
lazy_re!(LIST_ITEM, r"(?m)^ {0,3}([-*+] \S|\d+\. \S)");
lazy_re!(BLOCKQUOTE, r"(?m)^ {0,3}> \S");
lazy_re!(INLINE_LINK, r"\[[^\]]+\]\([^)]+\)");
lazy_re!(HORIZONTAL_RULE, r"(?m)^ {0,3}(-{3,}|\*{3,}|_{3,}) *$");

// Single-line (non-multiline) recognizers used by the classifier, applied
// to one already-trimmed-of-newline line at a time.
lazy_re!(HEADING_LINE, r"^ {0,3}(#{1,6}) +(.*?) *$");
lazy_re!(HR_LINE, r"^ {0,3}(-{3,}|\*{3,}|_{3,}) *$");
lazy_re!(FENCE_OPEN_LINE, r"^( {0,3})(`{3,}|~{3,})\s*(\S*)\s*$");
lazy_re!(LIST_ITEM_LINE, r"^ {0,3}([-*+] \S.*|\d+\. \S.*)$");
lazy_re!(LIST_CONTINUATION_LINE, r"^ {2,}\S");
lazy_re!(TABLE_ROW_LINE, r"^\s*\|.*\|\s*$");
lazy_re!(
    TABLE_SEP_LINE,
    r"^\s*\|?(\s*:?-+:?\s*\|)+\s*:?-+:?\s*\|?\s*$"
);
lazy_re!(BOLD_HEADING_LINE, r"^\*\*(.+?)\*\*$");

/// Matches a fence-close line for a given marker character (backtick or
/// tilde) and minimum length: up to 3 leading spaces, a run of at least
/// `min_len` of that character, then only trailing whitespace.
pub fn fence_closes(line: &str, marker_char: char, min_len: usize) -> bool {
    let trimmed_start = line.trim_start_matches(' ');
    if line.len() - trimmed_start.len() > 3 {
        return false;
    }
    let run_len = trimmed_start
        .chars()
        .take_while(|&c| c == marker_char)
        .count();
    if run_len < min_len {
        return false;
    }
    trimmed_start[run_len..].trim().is_empty()
}

/// Detects `**Title**` filling an entire trimmed line.
pub fn standalone_bold_heading(trimmed: &str) -> Option<String> {
    let caps = BOLD_HEADING_LINE.captures(trimmed)?;
    let title = caps.get(1)?.as_str().trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Detects an "ALL CAPS"-like pseudo-heading line, matching the original's
/// `re.fullmatch(r"[A-Z0-9][A-Z0-9 \-:,'\".()]+", trimmed)`: the first
/// character must be `[A-Z0-9]` (no leading space or punctuation), at least
/// two characters total, every character in the wider class, at least one
/// letter, and more than 80% of letters uppercase.
pub fn allcaps_heading(trimmed: &str) -> Option<String> {
    if trimmed.len() > 80 {
        return None;
    }
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if !(first.is_ascii_uppercase() || first.is_ascii_digit()) {
        return None;
    }
    let rest_allowed = |c: char| {
        c.is_ascii_uppercase()
            || c.is_ascii_digit()
            || matches!(c, ' ' | '-' | ':' | ',' | '\'' | '"' | '.' | '(' | ')')
    };
    let rest: Vec<char> = chars.collect();
    if rest.is_empty() || !rest.iter().all(|&c| rest_allowed(c)) {
        return None;
    }
    let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return None;
    }
    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    if (upper as f64) / (letters.len() as f64) > 0.8 {
        Some(trimmed.to_string())
    } else {
        None
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
