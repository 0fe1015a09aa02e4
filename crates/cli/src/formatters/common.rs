//! Shared output delivery.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a rendered result to `output_file`, or to stdout when none is given.
///
/// A trailing newline is appended in both cases.
pub fn output_result(output: &str, output_file: Option<&Path>) -> Result<()> {
    let content = format!("{output}\n");

    if let Some(path) = output_file {
        write_to_file(&content, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Results written to file");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

/// Write content to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    // If path has no parent (e.g., just "results.json"), use current directory
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
