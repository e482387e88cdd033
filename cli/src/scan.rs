use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use gallery_prep_core::format::SourceFormat;

/// Outcome of listing the input directory once, before any processing.
pub struct ScanResult {
    /// Regular files with a supported image extension.
    pub supported: Vec<PathBuf>,
    /// Regular files with some other extension; reported as skips.
    pub skipped: Vec<PathBuf>,
}

/// List the top level of `dir` and split regular files into supported and
/// skipped sets. Directories (and symlinks resolving to directories) are
/// ignored outright. No ordering is imposed.
pub fn collect_entries(dir: &Path) -> Result<ScanResult> {
    let mut supported = Vec::new();
    let mut skipped = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if SourceFormat::from_path(&path).is_some() {
            supported.push(path);
        } else {
            skipped.push(path);
        }
    }

    Ok(ScanResult { supported, skipped })
}
