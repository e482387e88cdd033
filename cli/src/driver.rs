use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use gallery_prep_core::config::{BatchConfig, COMPRESSED_DIR, THUMBNAIL_DIR};
use gallery_prep_core::processor::process_image;

use crate::report::{format_size, FileOutcome, Report};
use crate::scan::collect_entries;

/// Run one batch over the top-level image files of `root`.
///
/// Creating the output directories is the only fatal failure; every per-file
/// error is logged, recorded in the report, and never stops the pool.
pub fn run(root: &Path, config: &BatchConfig) -> Result<Report> {
    // Jobs assume these exist, so they are created before anything is scheduled.
    fs::create_dir_all(root.join(THUMBNAIL_DIR))
        .with_context(|| format!("failed to create '{}' directory", THUMBNAIL_DIR))?;
    fs::create_dir_all(root.join(COMPRESSED_DIR))
        .with_context(|| format!("failed to create '{}' directory", COMPRESSED_DIR))?;

    let scan = collect_entries(root).context("failed to list input directory")?;

    for path in &scan.skipped {
        println!("Skipping {} - not a supported format", path.display());
    }

    let mut report = Report::new();
    report.skipped = scan.skipped.len();

    if scan.supported.is_empty() {
        println!("No supported image files found in the current directory.");
        return Ok(report);
    }

    println!("Found {} image file(s) to process.", scan.supported.len());

    let pb = ProgressBar::new(scan.supported.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let report = Mutex::new(report);

    scan.supported.par_iter().for_each(|path| {
        match process_image(path, root, config) {
            Ok(outcome) => {
                pb.println(format!("Created thumbnail: {}", outcome.thumbnail_path.display()));
                pb.println(format!(
                    "Created compressed image: {}",
                    outcome.compressed_path.display()
                ));
                pb.println(format!(
                    "Original: {}, Compressed: {} - compression ratio: {:.2}%",
                    format_size(outcome.original_size),
                    format_size(outcome.compressed_size),
                    outcome.compression_ratio
                ));
                pb.set_message(format!(
                    "{} ({:.2}%)",
                    path.file_name().unwrap_or_default().to_string_lossy(),
                    outcome.compression_ratio
                ));
                report.lock().unwrap().add(FileOutcome {
                    path: path.clone(),
                    original_size: outcome.original_size,
                    compressed_size: outcome.compressed_size,
                    compression_ratio: outcome.compression_ratio,
                    error: None,
                });
            }
            Err(e) => {
                log::error!("Error processing {}: {}", path.display(), e);
                report.lock().unwrap().add(FileOutcome {
                    path: path.clone(),
                    original_size: 0,
                    compressed_size: 0,
                    compression_ratio: 0.0,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done!");

    let report = report.into_inner().unwrap();
    report.print_summary(config);
    Ok(report)
}
