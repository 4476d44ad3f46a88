use std::io::Write;

use secpart_cli::{args, resolve_text, run_split, write_split_json};

fn write_temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn parse_requires_file_or_text() {
    let err = args::parse(&[]).unwrap_err();
    assert!(err.to_string().contains("provide --file or --text"));
}

#[test]
fn parse_rejects_file_and_text_together() {
    let raw = vec![
        "--file".to_string(),
        "a.md".to_string(),
        "--text".to_string(),
        "hi".to_string(),
    ];
    let err = args::parse(&raw).unwrap_err();
    assert!(err.to_string().contains("mutually exclusive"));
}

#[test]
fn parse_rejects_unknown_flag() {
    let raw = vec!["--bogus".to_string()];
    let err = args::parse(&raw).unwrap_err();
    assert!(err.to_string().contains("unrecognized argument"));
}

#[test]
fn resolve_text_reads_from_file() {
    let file = write_temp_file("# Title\n\nbody text\n");
    let raw = vec![
        "--file".to_string(),
        file.path().to_string_lossy().to_string(),
    ];
    let parsed = args::parse(&raw).unwrap();
    let text = resolve_text(&parsed).unwrap();
    assert_eq!(text, "# Title\n\nbody text\n");
}

#[test]
fn resolve_text_errors_on_missing_file() {
    let raw = vec!["--file".to_string(), "/no/such/path.md".to_string()];
    let parsed = args::parse(&raw).unwrap();
    assert!(resolve_text(&parsed).is_err());
}

#[test]
fn run_split_relaxes_through_stages_to_reach_n() {
    // Two headings only: strict candidates give one cut, not enough for N=4.
    let text = "# A\n\npar one\n\n- item 1\n- item 2\n\n---\n\npar two\n\n# B\n\npar three\n";
    let (atoms, _) = secpart_engine::atomize(text, Some(secpart_engine::Mode::Markdown));

    assert!(run_split(&atoms, 4, false, false, false).is_err());

    let result = run_split(&atoms, 4, true, false, false).unwrap();
    assert_eq!(result.segments.len(), 4);
    assert_eq!(result.cuts.len(), 3);
}

#[test]
fn run_split_without_relax_stays_infeasible() {
    let text = "# A\n\npar one\n\n# B\n\npar two\n";
    let (atoms, _) = secpart_engine::atomize(text, Some(secpart_engine::Mode::Markdown));
    // Only one non-trivial candidate cut exists; N=3 needs two.
    let err = run_split(&atoms, 3, false, false, false).unwrap_err();
    assert!(err.to_string().contains("infeasible") || err.to_string().contains("relax"));
}

#[test]
fn write_split_json_uses_uppercase_n_key() {
    let text = "# A\n\npar1\n\n# B\n\npar2\n";
    let (atoms, _) = secpart_engine::atomize(text, Some(secpart_engine::Mode::Markdown));
    let result = run_split(&atoms, 2, false, false, false).unwrap();

    let out = tempfile::NamedTempFile::new().unwrap();
    write_split_json(out.path(), 2, &result, 2).unwrap();

    let contents = std::fs::read_to_string(out.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value.get("N").and_then(|v| v.as_i64()), Some(2));
    assert!(value.get("n").is_none());
    assert!(value.get("objective").is_some());
    assert!(value.get("cuts").is_some());
    assert!(value.get("segments").is_some());
}
