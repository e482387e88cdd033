use std::env;

use anyhow::{Context, Result};

use gallery_prep::driver;
use gallery_prep_core::config::BatchConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Starting image compression and thumbnail generation...");

    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let config = BatchConfig::default();

    // Per-file failures are already in the report; only directory creation
    // or an unreadable cwd aborts with a nonzero status.
    driver::run(&cwd, &config)?;

    Ok(())
}
