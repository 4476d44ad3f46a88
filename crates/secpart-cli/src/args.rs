use std::path::PathBuf;

use anyhow::{Result, bail};

/// Parsed command-line invocation. Parsing is hand-rolled rather than via a
/// derive macro, matching this workspace's preference for a thin CLI layer
/// over the engine.
#[derive(Debug)]
pub struct Args {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub max_preview: usize,
    pub no_print: bool,
    pub split: Option<i64>,
    pub split_relax: bool,
    pub split_no_pseudo: bool,
    pub split_no_hr: bool,
    pub split_json_out: Option<PathBuf>,
    pub json_indent: usize,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            file: None,
            text: None,
            max_preview: 60,
            no_print: false,
            split: None,
            split_relax: false,
            split_no_pseudo: false,
            split_no_hr: false,
            split_json_out: None,
            json_indent: 2,
        }
    }
}

const USAGE: &str = "\
Usage: secpart (--file PATH | --text STRING) [OPTIONS]

Options:
  --file PATH             Path to input text/markdown file.
  --text STRING           Inline text (alternative to --file).
  --max-preview N         Max preview chars per atom (default 60).
  --no-print              Do not print the atoms table.
  --split N               Split into N sections (choose N-1 cut boundaries).
  --split-relax           Relax candidate cuts in stages if N is infeasible.
  --split-no-pseudo       Do not use pseudo headings as cut candidates.
  --split-no-hr           Do not use horizontal rules as cut candidates.
  --split-json-out PATH   Write the split result (cuts + segments) to JSON.
  --json-indent N         Indent width for --split-json-out (default 2).
";

pub fn parse(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            "--file" => args.file = Some(PathBuf::from(next_value(&mut iter, flag)?)),
            "--text" => args.text = Some(next_value(&mut iter, flag)?.clone()),
            "--max-preview" => args.max_preview = next_value(&mut iter, flag)?.parse()?,
            "--no-print" => args.no_print = true,
            "--split" => args.split = Some(next_value(&mut iter, flag)?.parse()?),
            "--split-relax" => args.split_relax = true,
            "--split-no-pseudo" => args.split_no_pseudo = true,
            "--split-no-hr" => args.split_no_hr = true,
            "--split-json-out" => {
                args.split_json_out = Some(PathBuf::from(next_value(&mut iter, flag)?))
            }
            "--json-indent" => args.json_indent = next_value(&mut iter, flag)?.parse()?,
            other => bail!("unrecognized argument '{other}'\n\n{USAGE}"),
        }
    }

    if args.file.is_none() && args.text.is_none() {
        bail!("provide --file or --text\n\n{USAGE}");
    }
    if args.file.is_some() && args.text.is_some() {
        bail!("--file and --text are mutually exclusive\n\n{USAGE}");
    }

    Ok(args)
}

fn next_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| anyhow::anyhow!("'{flag}' expects a value"))
}
