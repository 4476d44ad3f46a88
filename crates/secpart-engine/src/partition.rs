use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use serde::ser::SerializeTuple;

use crate::atom::{Atom, AtomType, SectionNodeId};
use crate::error::PartitionError;

/// Per-tier penalty applied to a non-heading cut, indexed by [`cut_tier`].
/// Index 0 (heading) is present for completeness but never consulted,
/// since headings are always the cheapest possible cut.
#[derive(Debug, Clone, Copy)]
pub struct PartitionWeights {
    pub non_heading_penalty: f64,
    pub tier_penalties: [f64; 4],
}

impl Default for PartitionWeights {
    fn default() -> Self {
        Self {
            non_heading_penalty: 1.0,
            tier_penalties: [0.0, 0.2, 0.5, 1.0],
        }
    }
}

/// Structural tier of a candidate cut. Smaller is better.
fn cut_tier(atom: &Atom) -> usize {
    match atom.atom_type {
        AtomType::Heading => 0,
        AtomType::PseudoHeading => 1,
        AtomType::Hr => 2,
        _ => 3,
    }
}

/// The lexicographic triple the partitioner minimizes:
/// `(non_heading_cuts, max_segment_words, penalty_sum)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    pub non_heading_cuts: usize,
    pub max_words: usize,
    pub penalty_sum: f64,
}

impl Objective {
    const INFEASIBLE: Objective = Objective {
        non_heading_cuts: usize::MAX,
        max_words: usize::MAX,
        penalty_sum: f64::INFINITY,
    };

    fn is_feasible(self) -> bool {
        self.non_heading_cuts != usize::MAX
    }
}

impl Eq for Objective {}

impl Ord for Objective {
    fn cmp(&self, other: &Self) -> Ordering {
        self.non_heading_cuts
            .cmp(&other.non_heading_cuts)
            .then_with(|| self.max_words.cmp(&other.max_words))
            .then_with(|| self.penalty_sum.total_cmp(&other.penalty_sum))
    }
}

impl PartialOrd for Objective {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Objective {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.non_heading_cuts)?;
        tup.serialize_element(&self.max_words)?;
        tup.serialize_element(&self.penalty_sum)?;
        tup.end()
    }
}

/// One contiguous range of atoms produced by the partitioner.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub seg_idx: usize,
    pub start_atom: usize,
    pub end_atom_excl: usize,
    pub words: usize,
    pub start_path_ids: Vec<SectionNodeId>,
    pub start_path_titles: Vec<String>,
}

/// The chosen cuts, the resulting segments, and the achieved objective.
#[derive(Debug, Clone, Serialize)]
pub struct PartitionResult {
    pub cuts: Vec<usize>,
    pub segments: Vec<Segment>,
    pub objective: Objective,
}

/// Chooses exactly `n - 1` cuts from `candidates` minimizing the
/// lexicographic objective, via the DP in SPEC_FULL.md section 4.4.
pub fn partition_into_n(
    atoms: &[Atom],
    n: i64,
    candidates: &[usize],
    weights: Option<PartitionWeights>,
) -> Result<PartitionResult, PartitionError> {
    if n < 1 {
        return Err(PartitionError::InvalidSegmentCount { n });
    }
    let n = n as usize;
    let weights = weights.unwrap_or_default();
    let m = atoms.len();

    if n == 1 {
        let words: usize = atoms.iter().map(|a| a.weight_words).sum();
        let (start_path_ids, start_path_titles) = atoms
            .first()
            .map(|a| (a.section_path_ids.clone(), a.section_path.clone()))
            .unwrap_or_default();
        let segment = Segment {
            seg_idx: 0,
            start_atom: 0,
            end_atom_excl: m,
            words,
            start_path_ids,
            start_path_titles,
        };
        return Ok(PartitionResult {
            cuts: Vec::new(),
            segments: vec![segment],
            objective: Objective {
                non_heading_cuts: 0,
                max_words: words,
                penalty_sum: 0.0,
            },
        });
    }

    let mut pos_set: BTreeSet<usize> = candidates.iter().copied().collect();
    pos_set.insert(0);
    pos_set.insert(m);
    let pos: Vec<usize> = pos_set.into_iter().collect();
    let l = pos.len();
    let available = l.saturating_sub(2);

    tracing::debug!(n, l, available, "partitioning into segments");

    let mut prefix_words = vec![0usize; m + 1];
    for (i, a) in atoms.iter().enumerate() {
        prefix_words[i + 1] = prefix_words[i] + a.weight_words;
    }
    let seg_words = |j: usize, i: usize| prefix_words[pos[i]] - prefix_words[pos[j]];

    let cut_cost = |boundary_pos: usize| -> (usize, f64) {
        if boundary_pos == 0 || boundary_pos == m {
            return (0, 0.0);
        }
        let atom = &atoms[boundary_pos];
        let is_non_heading = if atom.atom_type == AtomType::Heading { 0 } else { 1 };
        (is_non_heading, weights.tier_penalties[cut_tier(atom)])
    };

    let mut dp = vec![vec![Objective::INFEASIBLE; l]; n + 1];
    let mut parent = vec![vec![usize::MAX; l]; n + 1];

    for i in 1..l {
        dp[1][i] = Objective {
            non_heading_cuts: 0,
            max_words: seg_words(0, i),
            penalty_sum: 0.0,
        };
        parent[1][i] = 0;
    }

    for k in 2..=n {
        for i in 1..l {
            let mut best = Objective::INFEASIBLE;
            let mut best_j = usize::MAX;
            for j in 0..i {
                let prev = dp[k - 1][j];
                if !prev.is_feasible() {
                    continue;
                }
                let w = seg_words(j, i);
                let (non_head, penalty) = cut_cost(pos[j]);
                let candidate = Objective {
                    non_heading_cuts: prev.non_heading_cuts + non_head,
                    max_words: prev.max_words.max(w),
                    penalty_sum: prev.penalty_sum
                        + weights.non_heading_penalty * non_head as f64
                        + penalty,
                };
                if candidate < best {
                    best = candidate;
                    best_j = j;
                }
            }
            dp[k][i] = best;
            parent[k][i] = best_j;
        }
    }

    let objective = dp[n][l - 1];
    if !objective.is_feasible() {
        return Err(PartitionError::Infeasible {
            requested: n,
            available,
        });
    }

    let mut boundaries = Vec::with_capacity(n - 1);
    let mut cur_i = l - 1;
    for k in (2..=n).rev() {
        let j = parent[k][cur_i];
        debug_assert_ne!(j, usize::MAX, "DP reconstruction failed");
        boundaries.push(pos[j]);
        cur_i = j;
    }
    boundaries.reverse();

    let mut starts = vec![0usize];
    starts.extend_from_slice(&boundaries);
    let mut ends = boundaries.clone();
    ends.push(m);

    let segments = starts
        .iter()
        .zip(ends.iter())
        .enumerate()
        .map(|(seg_idx, (&s, &e))| {
            let words = prefix_words[e] - prefix_words[s];
            let (start_path_ids, start_path_titles) = if s < m {
                (atoms[s].section_path_ids.clone(), atoms[s].section_path.clone())
            } else {
                (Vec::new(), Vec::new())
            };
            Segment {
                seg_idx,
                start_atom: s,
                end_atom_excl: e,
                words,
                start_path_ids,
                start_path_titles,
            }
        })
        .collect();

    Ok(PartitionResult {
        cuts: boundaries,
        segments,
        objective,
    })
}
