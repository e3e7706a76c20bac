//! Scan command implementation

use super::{parse_file, ScanOptions};
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tome_core::MangaFormat;
use walkdir::{DirEntry, WalkDir};

/// Parse every supported file below a directory and print a JSON array
pub fn scan(input_dir: &str, options: &ScanOptions) -> Result<()> {
    let input_path = Path::new(input_dir);
    if !input_path.is_dir() {
        bail!("Not a directory: {}", input_dir);
    }

    let mut walk_errors = 0usize;
    let mut files: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(input_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_supported(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                walk_errors += 1;
                tracing::warn!("Error accessing entry: {}", e);
            }
        }
    }

    tracing::info!("Found {} files to parse", files.len());

    let mut options = options.clone();
    if options.library_root.is_none() {
        options.library_root = Some(input_path.to_string_lossy().into_owned());
    }
    let parser = options.parser();

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let unparseable = AtomicUsize::new(0);

    rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build_global()
        .ok(); // Ignore if already configured

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file_path| {
            let info = parse_file(&parser, file_path, &options);
            if info.is_none() {
                unparseable.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Unparseable: {}", file_path.display());
            }
            progress.inc(1);
            info
        })
        .collect();

    progress.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&results)?);

    let unparseable = unparseable.load(Ordering::Relaxed);
    tracing::info!(
        "Scan complete: {} parsed, {} unparseable, {} errors",
        results.len(),
        unparseable,
        walk_errors
    );

    if walk_errors > 0 {
        bail!("Scan completed with {} errors", walk_errors);
    }

    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name == "__MACOSX")
        .unwrap_or(false)
}

fn is_supported(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| MangaFormat::from_path(name).is_supported())
        .unwrap_or(false)
}
