pub mod args;
pub mod report;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use secpart_engine::{
    CandidatePolicy, Mode, Objective, PartitionResult, Segment, build_cut_candidates,
    partition_into_n,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Resolves the document text from a parsed [`args::Args`], reading `--file`
/// from disk when given rather than relying on `--text`.
pub fn resolve_text(args: &args::Args) -> Result<String> {
    match &args.file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
        }
        None => Ok(args
            .text
            .clone()
            .expect("parse() enforces --file xor --text")),
    }
}

pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Markdown => "markdown",
        Mode::Plain => "plain",
    }
}

/// Runs the strict-candidate partition, relaxing in stages (list/table/code,
/// then paragraphs) when `relax` is set and the stricter attempt is
/// infeasible. Mirrors the original's relax-on-`ValueError` control flow.
pub fn run_split(
    atoms: &[secpart_engine::Atom],
    n: i64,
    relax: bool,
    no_pseudo: bool,
    no_hr: bool,
) -> Result<PartitionResult> {
    let base_policy = CandidatePolicy {
        allow_pseudo: !no_pseudo,
        allow_hr: !no_hr,
        allow_list_table_code: false,
        allow_paragraph_fallback: false,
    };

    let strict = build_cut_candidates(atoms, base_policy);
    match partition_into_n(atoms, n, &strict, None) {
        Ok(r) => Ok(r),
        Err(_) if relax => {
            let stage1 = build_cut_candidates(atoms, base_policy.relax_stage_one());
            match partition_into_n(atoms, n, &stage1, None) {
                Ok(r) => Ok(r),
                Err(_) => {
                    let stage2 = build_cut_candidates(atoms, base_policy.relax_stage_two());
                    partition_into_n(atoms, n, &stage2, None)
                        .context("partition remained infeasible after full relaxation")
                }
            }
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Serialize)]
struct SplitPayload<'a> {
    #[serde(rename = "N")]
    n: i64,
    objective: &'a Objective,
    cuts: &'a [usize],
    segments: &'a [Segment],
}

/// Writes the split result to `path` as pretty-printed JSON with the schema
/// `{N, objective, cuts, segments}`, indented by `indent` spaces.
pub fn write_split_json(
    path: &Path,
    n: i64,
    result: &PartitionResult,
    indent: usize,
) -> Result<()> {
    let payload = SplitPayload {
        n,
        objective: &result.objective,
        cuts: &result.cuts,
        segments: &result.segments,
    };

    let indent_bytes = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_bytes.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    payload.serialize(&mut ser)?;

    fs::write(path, buf).with_context(|| format!("writing '{}'", path.display()))
}
