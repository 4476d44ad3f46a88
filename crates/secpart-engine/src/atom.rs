use std::collections::BTreeMap;

use serde::Serialize;

use crate::span::Span;

/// Identifier of a section node (the node defined by a heading or
/// pseudo-heading atom). Assigned monotonically from 1 in document order;
/// 0 is reserved for a synthetic root used only by external renderers and
/// is never assigned here.
pub type SectionNodeId = u32;

/// Maps every assigned section node id to the index of its defining atom.
pub type SectionRegistry = BTreeMap<SectionNodeId, usize>;

/// The type of an [`Atom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomType {
    Heading,
    PseudoHeading,
    Paragraph,
    List,
    CodeFence,
    Table,
    Hr,
    Blank,
}

impl AtomType {
    /// `true` for the two atom types that define a section node.
    pub fn is_heading_like(self) -> bool {
        matches!(self, AtomType::Heading | AtomType::PseudoHeading)
    }
}

/// The smallest indivisible block unit produced by the atomizer.
///
/// See SPEC_FULL.md section 3 for the full set of invariants this type
/// must satisfy across an entire atom stream.
#[derive(Debug, Clone, Serialize)]
pub struct Atom {
    pub idx: usize,
    pub atom_type: AtomType,

    pub start_byte: usize,
    pub end_byte: usize,
    pub start_line: usize,
    pub end_line: usize,

    pub text: String,

    pub weight_chars: usize,
    pub weight_words: usize,

    /// Heading nesting depth in `1..=6` for heading/pseudo-heading atoms,
    /// `0` otherwise.
    pub depth: u8,

    /// Ordered ancestor section titles, root excluded. For a heading atom
    /// this includes the heading's own title as the last element.
    pub section_path: Vec<String>,
    /// Ordered ancestor section node ids, parallel to `section_path`.
    pub section_path_ids: Vec<SectionNodeId>,
    /// Id of the nearest enclosing section; `None` only for atoms that
    /// precede any heading.
    pub section_node_id: Option<SectionNodeId>,

    /// Whether "start a new segment here" is a structurally valid cut.
    pub can_cut_before: bool,
    /// `[0, 1]` debug-only measure of structural boundary strength.
    pub boundary_strength: f64,

    /// Reserved for future use.
    pub keywords: Vec<String>,
}

impl Atom {
    pub fn byte_span(&self) -> Span {
        Span::new(self.start_byte, self.end_byte)
    }
}
