//! Review collection loading.
//!
//! Reviews come as JSON objects with a `Reviews` array whose entries carry
//! the review text in `Content`. The input path may be a single file or a
//! directory of such files.

use crate::models::Review;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct ReviewCollection {
    #[serde(rename = "Reviews", default)]
    reviews: Vec<Review>,
}

/// Load all reviews under `path`, in a stable order.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    if !path.exists() {
        anyhow::bail!("Input path does not exist: {}", path.display());
    }

    if path.is_file() {
        return load_review_file(path);
    }

    let files = collect_json_files(path)?;
    info!("Found {} review files in {}", files.len(), path.display());

    let mut reviews = Vec::new();
    for file in &files {
        reviews.extend(load_review_file(file)?);
    }

    Ok(reviews)
}

/// Parse one review collection file.
pub fn load_review_file(path: &Path) -> Result<Vec<Review>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read review file: {}", path.display()))?;

    let collection: ReviewCollection = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse review file: {}", path.display()))?;

    debug!(
        "Loaded {} reviews from {}",
        collection.reviews.len(),
        path.display()
    );
    Ok(collection.reviews)
}

/// All `*.json` files below `dir`, sorted by path. Hidden entries are skipped.
pub fn collect_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
