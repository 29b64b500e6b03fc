//! PNG export of the committed board.

use crate::config::ExportConfig;
use crate::draw::{Surface, SurfaceError};
use crate::input::{CanvasState, ExportRequest};
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Where an export request should be written.
///
/// An explicit path wins; otherwise a timestamped name in the configured
/// directory.
pub fn resolve_path(request: &ExportRequest, config: &ExportConfig) -> PathBuf {
    match &request.path {
        Some(path) => path.clone(),
        None => expand_tilde(&config.directory)
            .join(generate_filename(&config.filename_template, "png")),
    }
}

/// Encodes `surface` as PNG at `path`, creating missing parent directories.
pub fn export_png(surface: &Surface, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    surface.write_png(&mut out)?;
    out.flush()?;

    let written_size = fs::metadata(path)?.len();
    log::info!("Exported board to {} ({} bytes)", path.display(), written_size);

    Ok(path.to_path_buf())
}

/// Writes the committed layer of `state` for `request`.
///
/// The grid overlay and any stroke still being dragged are not part of the
/// export.
pub fn export_canvas(
    state: &CanvasState,
    request: &ExportRequest,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let path = resolve_path(request, config);
    export_png(state.committed(), &path)
}
