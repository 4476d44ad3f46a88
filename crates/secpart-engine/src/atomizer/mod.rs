pub mod heading_stack;
pub mod lines;
pub mod patterns;

use crate::atom::{Atom, AtomType, SectionRegistry};
use crate::mode::{Mode, detect_mode};
use heading_stack::HeadingStack;
use lines::{LineRef, lines_with_spans};
use patterns::{
    FENCE_OPEN_LINE, HEADING_LINE, HR_LINE, LIST_CONTINUATION_LINE, LIST_ITEM_LINE,
    TABLE_ROW_LINE, TABLE_SEP_LINE, allcaps_heading, count_words, fence_closes,
    standalone_bold_heading,
};

/// Walks `text` line by line, maintaining a heading stack, and emits the
/// linear atom stream plus its section registry.
///
/// See SPEC_FULL.md section 4.2 for the dispatch rules this follows.
pub fn atomize(text: &str, mode: Option<Mode>) -> (Vec<Atom>, SectionRegistry) {
    let mode = mode.unwrap_or_else(|| detect_mode(text));
    let lines = lines_with_spans(text);
    tracing::debug!(mode = ?mode, lines = lines.len(), "atomizing document");
    let mut state = AtomizerState::new(text, lines, mode);
    state.run();
    state.finish()
}

struct AtomizerState<'a> {
    text: &'a str,
    lines: Vec<LineRef>,
    mode: Mode,
    heading_stack: HeadingStack,
    atoms: Vec<Atom>,
    registry: SectionRegistry,
}

impl<'a> AtomizerState<'a> {
    fn new(text: &'a str, lines: Vec<LineRef>, mode: Mode) -> Self {
        Self {
            text,
            lines,
            mode,
            heading_stack: HeadingStack::new(),
            atoms: Vec::new(),
            registry: SectionRegistry::new(),
        }
    }

    /// Line text with its trailing line terminator stripped.
    fn line_text(&self, i: usize) -> &str {
        self.lines[i].text.trim_end_matches(['\r', '\n'])
    }

    fn start_byte_of(&self, line_idx: usize) -> usize {
        self.lines
            .get(line_idx)
            .map(|l| l.span.start)
            .unwrap_or(self.text.len())
    }

    fn end_byte_after(&self, end_line: usize) -> usize {
        self.lines
            .get(end_line + 1)
            .map(|l| l.span.start)
            .unwrap_or(self.text.len())
    }

    fn emit(
        &mut self,
        atom_type: AtomType,
        start_line: usize,
        end_line: usize,
        depth: u8,
        can_cut_before: bool,
        boundary_strength: f64,
    ) {
        let start_byte = self.start_byte_of(start_line);
        let end_byte = self.end_byte_after(end_line);
        let text = self.text[start_byte..end_byte].to_string();
        let weight_chars = text.chars().count();
        let weight_words = count_words(&text);

        let atom = Atom {
            idx: self.atoms.len(),
            atom_type,
            start_byte,
            end_byte,
            start_line,
            end_line,
            text,
            weight_chars,
            weight_words,
            depth,
            section_path: self.heading_stack.path_titles(),
            section_path_ids: self.heading_stack.path_ids(),
            section_node_id: self.heading_stack.node_id(),
            can_cut_before,
            boundary_strength,
            keywords: Vec::new(),
        };
        self.atoms.push(atom);
    }

    /// Registers the most recently emitted atom (a heading/pseudo-heading)
    /// in the section registry under the id the heading stack just minted.
    fn register_last_as_section(&mut self) {
        let node_id = self
            .heading_stack
            .node_id()
            .expect("heading_stack.push was just called");
        let atom_idx = self.atoms.len() - 1;
        self.registry.insert(node_id, atom_idx);
    }

    fn run(&mut self) {
        let n = self.lines.len();
        let mut i = 0usize;
        while i < n {
            let line = self.line_text(i).to_string();

            // 1. blank line
            if line.trim().is_empty() {
                self.emit(AtomType::Blank, i, i, 0, false, 0.0);
                i += 1;
                continue;
            }

            // 2. horizontal rule
            if HR_LINE.is_match(&line) {
                self.emit(AtomType::Hr, i, i, 0, true, 0.9);
                i += 1;
                continue;
            }

            // 3. fenced code
            if let Some(caps) = FENCE_OPEN_LINE.captures(&line) {
                let marker = caps.get(2).unwrap().as_str();
                let marker_char = marker.chars().next().unwrap();
                let min_len = marker.len();
                let start = i;
                let mut j = i + 1;
                while j < n {
                    if fence_closes(self.line_text(j), marker_char, min_len) {
                        j += 1;
                        break;
                    }
                    j += 1;
                }
                let end = j.saturating_sub(1).max(start);
                self.emit(AtomType::CodeFence, start, end, 0, true, 0.6);
                i = j;
                continue;
            }

            // 4. ATX heading (markdown mode only)
            if self.mode == Mode::Markdown
                && let Some(caps) = HEADING_LINE.captures(&line)
            {
                let depth = caps.get(1).unwrap().as_str().len() as u8;
                let title = caps.get(2).unwrap().as_str().trim().to_string();
                self.heading_stack.push(depth, title);
                self.emit(AtomType::Heading, i, i, depth, true, 1.0);
                self.register_last_as_section();
                i += 1;
                continue;
            }

            // 5. pseudo-heading
            let trimmed = line.trim();
            if let Some(title) =
                standalone_bold_heading(trimmed).or_else(|| allcaps_heading(trimmed))
            {
                let parent_depth = self.heading_stack.top_depth();
                let pseudo_depth = if parent_depth > 0 {
                    (parent_depth + 1).min(6)
                } else {
                    1
                };
                self.heading_stack.push(pseudo_depth, title);
                self.emit(AtomType::PseudoHeading, i, i, pseudo_depth, true, 0.95);
                self.register_last_as_section();
                i += 1;
                continue;
            }

            // 6. table (markdown mode only)
            if self.mode == Mode::Markdown
                && TABLE_ROW_LINE.is_match(&line)
                && i + 1 < n
                && TABLE_SEP_LINE.is_match(self.line_text(i + 1))
            {
                let start = i;
                let mut j = i + 2;
                while j < n && TABLE_ROW_LINE.is_match(self.line_text(j)) {
                    j += 1;
                }
                self.emit(AtomType::Table, start, j - 1, 0, true, 0.6);
                i = j;
                continue;
            }

            // 7. list
            if LIST_ITEM_LINE.is_match(&line) {
                let start = i;
                let mut j = i + 1;
                while j < n {
                    let nxt = self.line_text(j);
                    if nxt.trim().is_empty() {
                        break;
                    }
                    if LIST_ITEM_LINE.is_match(nxt) || LIST_CONTINUATION_LINE.is_match(nxt) {
                        j += 1;
                        continue;
                    }
                    break;
                }
                self.emit(AtomType::List, start, j - 1, 0, true, 0.5);
                i = j;
                continue;
            }

            // 8. paragraph (default)
            let start = i;
            let mut j = i + 1;
            while j < n {
                let nxt = self.line_text(j);
                if nxt.trim().is_empty() || HR_LINE.is_match(nxt) || FENCE_OPEN_LINE.is_match(nxt)
                {
                    break;
                }
                if self.mode == Mode::Markdown && HEADING_LINE.is_match(nxt) {
                    break;
                }
                let nxt_trimmed = nxt.trim();
                if standalone_bold_heading(nxt_trimmed).is_some()
                    || allcaps_heading(nxt_trimmed).is_some()
                {
                    break;
                }
                if LIST_ITEM_LINE.is_match(nxt) {
                    break;
                }
                if self.mode == Mode::Markdown
                    && TABLE_ROW_LINE.is_match(nxt)
                    && j + 1 < n
                    && TABLE_SEP_LINE.is_match(self.line_text(j + 1))
                {
                    break;
                }
                j += 1;
            }
            self.emit(AtomType::Paragraph, start, j - 1, 0, false, 0.1);
            i = j;
        }
    }

    /// Post-construction sanity pass over the section registry (spec.md
    /// 4.2). Violations are implementation bugs, not recoverable errors.
    fn finish(self) -> (Vec<Atom>, SectionRegistry) {
        for (&node_id, &atom_idx) in self.registry.iter() {
            debug_assert!(atom_idx < self.atoms.len(), "registry atom index out of range");
            let atom = &self.atoms[atom_idx];
            debug_assert_eq!(
                atom.section_node_id,
                Some(node_id),
                "registry/atom section id mismatch"
            );
            debug_assert!(
                atom.atom_type.is_heading_like(),
                "registry points at a non-heading atom"
            );
        }
        (self.atoms, self.registry)
    }
}
