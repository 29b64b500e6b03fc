//! Prints the JSON schema of the sketchboard config file.
//!
//! Usage: `dump_config_schema [OUTPUT]`; writes to stdout when no path is given.

use anyhow::{Context, Result};
use std::fs;

fn main() -> Result<()> {
    let schema = sketchboard::Config::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match std::env::args_os().nth(1) {
        Some(path) => fs::write(&path, json + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{json}"),
    }
    Ok(())
}
