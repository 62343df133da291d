//! Command-line front end for the outline-to-novel-project converter.
//!
//! # Responsibility
//! - Parse arguments, confirm destructive-looking situations, report the
//!   outcome, and map failures to a non-zero exit status.
//! - Keep all conversion logic inside `novelseed_core`.

use clap::Parser;
use novelseed_core::{
    default_log_level, default_output_path, init_logging, ConvertOptions, ConvertOutcome,
    ConvertService, IconMap,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "novelseed")]
#[command(about = "Create a novel project skeleton from a mind-map outline")]
#[command(version)]
struct Args {
    /// Path of the serialized outline file
    source: PathBuf,

    /// Output project directory (default: the source path with a `.novel`
    /// extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop part containers without a notes/todo icon and hoist their
    /// chapters to the top level
    #[arg(long)]
    suppress_normal_parts: bool,

    /// Skip the novel structure (parts, chapters, scenes)
    #[arg(long)]
    no_scenes: bool,

    /// Skip main and minor characters
    #[arg(long)]
    no_characters: bool,

    /// Skip locations
    #[arg(long)]
    no_locations: bool,

    /// Skip items
    #[arg(long)]
    no_items: bool,

    /// Custom icon-name table (JSON file)
    #[arg(long)]
    icons: Option<PathBuf>,

    /// Write diagnostic logs into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Back up an existing output directory without asking
    #[arg(short, long)]
    force: bool,

    /// Suppress console output; failure is reported via exit status only.
    /// Implies --force.
    #[arg(long)]
    silent: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(Some(outcome)) => {
            if !args.silent {
                report_outcome(&outcome);
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            // Declined confirmation counts as a failed run.
            if !args.silent {
                eprintln!("FAIL: action canceled by user");
            }
            ExitCode::FAILURE
        }
        Err(message) => {
            if !args.silent {
                eprintln!("FAIL: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Option<ConvertOutcome>, String> {
    if let Some(log_dir) = &args.log_dir {
        init_logging(default_log_level(), log_dir)?;
    }

    let icons = match &args.icons {
        Some(path) => load_icon_map(path)?,
        None => IconMap::default(),
    };
    let options = ConvertOptions {
        suppress_normal_parts: args.suppress_normal_parts,
        export_scenes: !args.no_scenes,
        export_characters: !args.no_characters,
        export_locations: !args.no_locations,
        export_items: !args.no_items,
        icons,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.source));

    if output.exists() && !args.force && !args.silent && !confirm_backup(&output)? {
        return Ok(None);
    }

    ConvertService::new(options)
        .convert_file(&args.source, &output)
        .map(Some)
        .map_err(|err| err.to_string())
}

fn load_icon_map(path: &Path) -> Result<IconMap, String> {
    let body = fs::read_to_string(path)
        .map_err(|err| format!("can not read icon table `{}`: {err}", path.display()))?;
    serde_json::from_str(&body)
        .map_err(|err| format!("can not parse icon table `{}`: {err}", path.display()))
}

fn confirm_backup(output: &Path) -> Result<bool, String> {
    print!(
        "WARNING: `{}` already exists and will be renamed to a backup. Continue? (y/n) ",
        output.display()
    );
    io::stdout()
        .flush()
        .map_err(|err| format!("can not write to console: {err}"))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|err| format!("can not read from console: {err}"))?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn report_outcome(outcome: &ConvertOutcome) {
    if let Some(backup) = &outcome.backup_path {
        println!("Backup folder saved: \"{}\"", backup.display());
    }
    println!(
        "Project created: \"{}\" ({} chapters, {} scenes, {} entities)",
        outcome.output_path.display(),
        outcome.chapter_count,
        outcome.scene_count,
        outcome.entity_count
    );
}
