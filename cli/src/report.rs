use std::path::PathBuf;

use gallery_prep_core::config::{BatchConfig, COMPRESSED_DIR, THUMBNAIL_DIR};

/// Result of processing a single file.
pub struct FileOutcome {
    pub path: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub compression_ratio: f64,
    pub error: Option<String>,
}

/// Aggregate report for one batch run. Advisory only; the exit status never
/// depends on its contents.
pub struct Report {
    pub results: Vec<FileOutcome>,
    pub skipped: usize,
}

impl Report {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            skipped: 0,
        }
    }

    pub fn add(&mut self, result: FileOutcome) {
        self.results.push(result);
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_none()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }

    pub fn total_original(&self) -> u64 {
        self.results
            .iter()
            .filter(|r| r.error.is_none())
            .map(|r| r.original_size)
            .sum()
    }

    pub fn total_compressed(&self) -> u64 {
        self.results
            .iter()
            .filter(|r| r.error.is_none())
            .map(|r| r.compressed_size)
            .sum()
    }

    pub fn total_savings_pct(&self) -> f64 {
        let orig = self.total_original();
        if orig == 0 {
            return 0.0;
        }
        (1.0 - self.total_compressed() as f64 / orig as f64) * 100.0
    }

    pub fn print_summary(&self, config: &BatchConfig) {
        println!("\n--- Summary ---");
        println!(
            "Processed: {} | Skipped: {} | Errors: {}",
            self.success_count(),
            self.skipped,
            self.error_count()
        );
        println!(
            "Thumbnails are in '{}/' - {}px width, {}% quality",
            THUMBNAIL_DIR, config.thumbnail.target_width, config.thumbnail.quality
        );
        println!(
            "Compressed images are in '{}/' - {}px width, {}% quality",
            COMPRESSED_DIR, config.fullsize.target_width, config.fullsize.quality
        );

        if self.success_count() > 0 {
            println!(
                "Total: {} → {} ({:.2}% reduction)",
                format_size(self.total_original()),
                format_size(self.total_compressed()),
                self.total_savings_pct()
            );
        }

        for r in &self.results {
            if let Some(ref err) = r.error {
                println!("  ERROR {}: {}", r.path.display(), err);
            }
        }
    }
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
