// src/cli.rs
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::classify::{self, CATALOGUE};
use crate::config::consts::{OUTPUT_PATH, SOURCE_HOST, SOURCE_URL};
use crate::core::net;
use crate::emit;
use crate::error::Result;
use crate::file::write_output;
use crate::progress::Progress;
use crate::specs::pokedex;

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub parsed: usize,
    pub tables: usize,
    pub path: PathBuf,
}

/// Fetch, parse, classify and write to the fixed output path.
pub fn run(progress: &mut dyn Progress) -> Result<RunSummary> {
    progress.log(&format!("Downloading Pokemon table from {SOURCE_HOST}..."));
    match net::http_get(SOURCE_URL) {
        Ok(html_doc) => run_with(&html_doc, Path::new(OUTPUT_PATH), progress),
        Err(e) => {
            progress.finish();
            Err(e)
        }
    }
}

/// Everything after the download. Takes the page markup and the output path
/// so it runs headless against fixtures. `progress.finish()` runs on both paths.
pub fn run_with(html_doc: &str, out: &Path, progress: &mut dyn Progress) -> Result<RunSummary> {
    let result = export(html_doc, out, progress);
    progress.finish();
    result
}

fn export(html_doc: &str, out: &Path, progress: &mut dyn Progress) -> Result<RunSummary> {
    progress.log("Parsing table...");
    let entries = pokedex::parse_entries(html_doc)?;
    progress.parsed(entries.real_count());

    progress.log("Generating C++ array with names...");
    let base = classify::base_bucket(&entries, CATALOGUE);
    let buckets = classify::classify(&entries, CATALOGUE);
    for b in buckets.iter().filter(|b| !b.is_empty()) {
        logd!("{}: {} entries", b.table, b.len());
    }
    let text = emit::render(&base, &buckets);

    let path = write_output(out, &text)?;
    progress.log(&format!("Done! File saved to:\n{}", path.display()));

    Ok(RunSummary { parsed: entries.real_count(), tables: buckets.len() + 1, path })
}

/// Hold the console window open until Enter, but only for a human at a terminal.
pub fn wait_for_key() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    println!("\nPress any key to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}
