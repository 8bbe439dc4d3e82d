//! Filesystem operations
//!
//! Handles build directory setup: creation, asset merging and removal of
//! stale outputs. None of these are transactional; a failure partway
//! through leaves whatever was already written.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use walkdir::WalkDir;

use crate::error::SetupError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), SetupError> {
    std::fs::create_dir_all(path).map_err(|e| SetupError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a file if it exists
///
/// Returns whether a file was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool, SetupError> {
    if !path.is_file() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|e| SetupError::RemoveExecutable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(true)
}

/// Merge-copy the tree at `source` into `destination`
///
/// Directories are created as needed and files already present at the
/// destination are overwritten. Files at the destination with no
/// counterpart in `source` are left alone. Returns the number of files
/// copied.
pub fn merge_copy(source: &Path, destination: &Path) -> Result<usize, SetupError> {
    if !source.is_dir() {
        return Err(SetupError::AssetsNotFound {
            path: source.to_path_buf(),
        });
    }

    let files = collect_files(source)?;
    let progress = copy_bar(files.len() as u64);

    create_dir_all(destination)?;
    for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| SetupError::WalkAssets {
            path: source.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            create_dir_all(&target_path(source, destination, entry.path()))?;
        }
    }

    for file in &files {
        let target = target_path(source, destination, file);
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        std::fs::copy(file, &target).map_err(|e| SetupError::CopyFile {
            from: file.clone(),
            to: target.clone(),
            error: e.to_string(),
        })?;
        tracing::trace!("Copied {} -> {}", file.display(), target.display());
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(files.len())
}

fn collect_files(source: &Path) -> Result<Vec<PathBuf>, SetupError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| SetupError::WalkAssets {
            path: source.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn target_path(source: &Path, destination: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(source) {
        Ok(relative) => destination.join(relative),
        Err(_) => destination.join(path.file_name().unwrap_or_default()),
    }
}

/// Progress bar for asset copies, drawn only on a terminal
fn copy_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} assets")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
