use std::process;

use anyhow::{Context, Result};
use secpart_cli::{args, report, resolve_text, run_split, write_split_json};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = args::parse(&raw)?;

    let text = resolve_text(&args)?;
    let mode = secpart_engine::detect_mode(&text);
    let (atoms, registry) = secpart_engine::atomize(&text, Some(mode));

    println!("Detected mode: {}", secpart_cli::mode_label(mode));
    println!("Num atoms: {}", atoms.len());
    println!("Num sections: {}", registry.len());

    if !args.no_print {
        report::print_atoms(&atoms, args.max_preview);
    }

    let mut split_result = None;

    if let Some(n) = args.split {
        let result = run_split(
            &atoms,
            n,
            args.split_relax,
            args.split_no_pseudo,
            args.split_no_hr,
        )?;
        report::print_split(&result);
        split_result = Some(result);
    }

    if let Some(out_path) = &args.split_json_out {
        let result = split_result
            .as_ref()
            .context("--split-json-out requires --split")?;
        write_split_json(out_path, args.split.unwrap(), result, args.json_indent)?;
        println!("\nWrote split JSON to: {}", out_path.display());
    }

    Ok(())
}
