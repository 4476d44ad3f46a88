use crate::atom::{Atom, AtomType};

/// Which non-heading atom types are admitted as cut candidates.
///
/// Headings are always admitted (when `can_cut_before`); every other flag
/// here gates one additional class, from strongest to weakest structural
/// signal, matching the relaxation protocol in SPEC_FULL.md 4.4.
#[derive(Debug, Clone, Copy)]
pub struct CandidatePolicy {
    pub allow_pseudo: bool,
    pub allow_hr: bool,
    pub allow_list_table_code: bool,
    pub allow_paragraph_fallback: bool,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        Self {
            allow_pseudo: true,
            allow_hr: true,
            allow_list_table_code: false,
            allow_paragraph_fallback: false,
        }
    }
}

impl CandidatePolicy {
    /// Strict policy with headings, pseudo-headings and hrs only.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Stage-1 relaxation: also admit list/table/code-fence cuts.
    pub fn relax_stage_one(self) -> Self {
        Self {
            allow_list_table_code: true,
            ..self
        }
    }

    /// Stage-2 relaxation: additionally admit paragraph cuts.
    pub fn relax_stage_two(self) -> Self {
        Self {
            allow_list_table_code: true,
            allow_paragraph_fallback: true,
            ..self
        }
    }
}

/// Computes the sorted set of atom indices in `[1, atoms.len())` eligible
/// as segment starts under `policy`.
pub fn build_cut_candidates(atoms: &[Atom], policy: CandidatePolicy) -> Vec<usize> {
    atoms
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, a)| a.atom_type != AtomType::Blank && a.can_cut_before)
        .filter(|(_, a)| match a.atom_type {
            AtomType::Heading => true,
            AtomType::PseudoHeading => policy.allow_pseudo,
            AtomType::Hr => policy.allow_hr,
            AtomType::List | AtomType::Table | AtomType::CodeFence => {
                policy.allow_list_table_code
            }
            AtomType::Paragraph => policy.allow_paragraph_fallback,
            AtomType::Blank => false,
        })
        .map(|(i, _)| i)
        .collect()
}
