use secpart_engine::{Atom, PartitionResult};

/// Collapses internal whitespace and truncates to `max_chars`, matching the
/// atom-preview convention used across the debug tooling.
fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > max_chars {
        let truncated: String = collapsed.chars().take(max_chars).collect();
        format!("{truncated}\u{2026}")
    } else {
        collapsed
    }
}

pub fn print_atoms(atoms: &[Atom], max_preview: usize) {
    println!(
        "{:>4}  {:<14} {:<11} {:<12} {:>6} {:>6} {:>3} {:>3} {:>4} {:>4} {:<12}  preview",
        "idx", "type", "lines", "bytes", "words", "chars", "dep", "cut", "bnd", "sid", "pid"
    );
    println!("{}", "-".repeat(140));

    for a in atoms {
        let lines = format!("{}-{}", a.start_line, a.end_line);
        let bytes = format!("{}-{}", a.start_byte, a.end_byte);
        let sid = a
            .section_node_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let pid = if a.section_path_ids.is_empty() {
            "-".to_string()
        } else {
            a.section_path_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("/")
        };

        println!(
            "{:>4}  {:<14} {:<11} {:<12} {:>6} {:>6} {:>3} {:>3} {:>4.2} {:>4} {:<12}  {}",
            a.idx,
            format!("{:?}", a.atom_type).to_lowercase(),
            lines,
            bytes,
            a.weight_words,
            a.weight_chars,
            a.depth,
            a.can_cut_before as u8,
            a.boundary_strength,
            sid,
            pid,
            preview(&a.text, max_preview),
        );
    }
}

pub fn print_split(res: &PartitionResult) {
    println!("\nSplit result");
    println!("{}", "-".repeat(80));
    println!(
        "Objective (non_heading_cuts, max_words, penalty_sum): ({}, {}, {})",
        res.objective.non_heading_cuts, res.objective.max_words, res.objective.penalty_sum
    );
    println!("Cuts (start atom indices for sections 2..N): {:?}", res.cuts);
    println!();

    for seg in &res.segments {
        let title = if seg.start_path_titles.is_empty() {
            "-".to_string()
        } else {
            seg.start_path_titles.join("/")
        };
        println!(
            "Section {:02}: atoms [{}:{}) words={:4}  start_path={}",
            seg.seg_idx + 1,
            seg.start_atom,
            seg.end_atom_excl,
            seg.words,
            title
        );
    }
}
