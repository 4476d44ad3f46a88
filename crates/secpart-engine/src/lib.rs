//! Structure-aware, balanced partitioning of plain-text and lightly
//! marked-up documents.
//!
//! `atomize` turns a document into a linear stream of typed [`Atom`]s with
//! an inferred section hierarchy; `partition_into_n` then chooses `N - 1`
//! cut points from a candidate set to balance the resulting segments. Both
//! are pure functions of their inputs — no I/O, no shared mutable state.

pub mod atom;
pub mod atomizer;
pub mod candidates;
pub mod error;
pub mod mode;
pub mod partition;
pub mod span;

pub use atom::{Atom, AtomType, SectionNodeId, SectionRegistry};
pub use atomizer::atomize;
pub use candidates::{CandidatePolicy, build_cut_candidates};
pub use error::PartitionError;
pub use mode::{Mode, detect_mode};
pub use partition::{Objective, PartitionResult, PartitionWeights, Segment, partition_into_n};
pub use span::Span;
