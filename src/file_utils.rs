use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ScriptError;

// @module: Script file and directory utilities

/// Extensions treated as plain-text scripts
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["txt", "md"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @checks: Extension is one of SCRIPT_EXTENSIONS and the file is not a generated report
    pub fn is_script_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        let is_report = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(".report"));
        if is_report {
            return false;
        }

        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                SCRIPT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    // @generates: Report path mirroring the script's place under `input_root`,
    // e.g. `scripts/ep1/ad.txt` with root `scripts` -> `out/ep1/ad.report.json`
    // @params: script_file, input_root, output_dir, extension
    pub fn generate_report_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        script_file: P1,
        input_root: P2,
        output_dir: P3,
        extension: &str,
    ) -> PathBuf {
        Self::report_path(
            script_file.as_ref(),
            input_root.as_ref(),
            output_dir.as_ref(),
            extension,
            false,
        )
    }

    // @generates: Same as `generate_report_path` but keeps the script extension,
    // e.g. `ad.md` -> `ad.md.report.json`
    pub fn generate_qualified_report_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        script_file: P1,
        input_root: P2,
        output_dir: P3,
        extension: &str,
    ) -> PathBuf {
        Self::report_path(
            script_file.as_ref(),
            input_root.as_ref(),
            output_dir.as_ref(),
            extension,
            true,
        )
    }

    fn report_path(
        script_file: &Path,
        input_root: &Path,
        output_dir: &Path,
        extension: &str,
        keep_extension: bool,
    ) -> PathBuf {
        // Scripts outside the root (or the root itself) land directly in output_dir
        let relative_dir = script_file
            .strip_prefix(input_root)
            .ok()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));

        let name = if keep_extension {
            script_file.file_name()
        } else {
            script_file.file_stem()
        }
        .unwrap_or_default();

        let mut report_filename = name.to_string_lossy().to_string();
        report_filename.push_str(".report.");
        report_filename.push_str(extension.trim_start_matches('.'));

        output_dir.join(relative_dir).join(report_filename)
    }

    /// Find script files in a directory, sorted by path
    pub fn find_script_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::is_script_file(path) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a script file.
    ///
    /// Missing files, non-UTF-8 content and files holding only whitespace are
    /// reported as [`ScriptError`]s.
    pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let text = Self::read_revision(path)?;

        if text.trim().is_empty() {
            return Err(ScriptError::Empty(path.display().to_string()).into());
        }

        Ok(text)
    }

    /// Read one side of a comparison; unlike `read_script`, blank files are allowed
    pub fn read_revision<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(ScriptError::NotFound(path.display().to_string()).into());
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| ScriptError::InvalidEncoding(path.display().to_string()))?;

        Ok(text)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
