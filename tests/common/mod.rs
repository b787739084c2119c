/*!
 * Common test utilities for the voscript test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A short commercial read with numbers, a price and a URL
pub const SAMPLE_SCRIPT: &str = "Introducing the new Aurora blender.\n\
Only $49.99 for a limited time, that's 30% off!\n\
\n\
Visit https://www.aurora.com today. [beat] Aurora... blend better.";

/// Creates the sample script file for testing
pub fn create_test_script(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SCRIPT)
}

/// Draft and final versions of a short script
pub const DRAFT_SCRIPT: &str = "Welcome to the show. Tonight we talk about coffee.";
pub const FINAL_SCRIPT: &str = "Welcome back to the show. Tonight we talk about tea.";
