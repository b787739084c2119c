use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::{compare_texts, ComparisonStats, DiffStats, ScriptAnalysis};
use crate::app_config::Config;
use crate::cache::AnalysisCache;
use crate::file_utils::FileManager;
use crate::pricing::{calculate_quote, PricingConfig, PricingModel, QuoteResult};
use crate::report::{self, AnalysisReport, CompareReport, ReportFormat};
use crate::worker::DiffWorker;

// @module: Application controller for script analysis

/// Main application controller for script analysis, comparison and quoting
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Finished analyses keyed by text and settings
    cache: AnalysisCache,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let cache = AnalysisCache::with_capacity(true, config.cache_capacity);
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Analyze script text with the configured speed and expansion options
    pub fn analyze_text(&self, text: &str) -> ScriptAnalysis {
        self.cache
            .get_or_analyze(text, self.config.wpm, &self.config.expansion)
    }

    /// Analyze one script file
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let text = FileManager::read_script(path)?;
        let analysis = self.analyze_text(&text);

        debug!(
            "{}: {} words, {} pauses",
            path.display(),
            analysis.word_count,
            analysis.pause_analysis.count
        );

        Ok(AnalysisReport {
            source: path.display().to_string(),
            analysis,
        })
    }

    /// Analyze every script file under a directory.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn analyze_folder<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<AnalysisReport>> {
        let dir = dir.as_ref();
        if !FileManager::dir_exists(dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", dir));
        }

        let script_files = FileManager::find_script_files(dir)?;
        if script_files.is_empty() {
            return Err(anyhow!("No script files found in directory: {:?}", dir));
        }

        let folder_pb = ProgressBar::new(script_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scripts ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("=>-"));

        let mut reports = Vec::with_capacity(script_files.len());
        let mut error_count = 0;

        for script_file in &script_files {
            let file_name = script_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(file_name.clone());

            match self.analyze_file(script_file) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!("Error analyzing {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Analysis complete");

        let total_words: usize = reports.iter().map(|r| r.analysis.word_count).sum();
        info!(
            "Analyzed {} scripts ({} words total), {} errors",
            reports.len(),
            total_words,
            error_count
        );

        Ok(reports)
    }

    /// Compare two revisions of a script.
    ///
    /// The diff runs on a blocking thread.
    pub async fn compare_texts(&self, original: String, revised: String) -> Result<CompareReport> {
        let original_analysis = self.analyze_text(&original);
        let revised_analysis = self.analyze_text(&revised);

        let comparison = tokio::task::spawn_blocking(move || compare_texts(&original, &revised))
            .await
            .context("Diff task panicked")?;

        let stats = ComparisonStats::between(&original_analysis, &revised_analysis);
        let diff_stats = DiffStats::from_result(&comparison);

        Ok(CompareReport {
            original: original_analysis,
            revised: revised_analysis,
            comparison,
            stats,
            diff_stats,
        })
    }

    /// Compare two script files. Either may be blank.
    pub async fn compare_files<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        original: P1,
        revised: P2,
    ) -> Result<CompareReport> {
        let original_text = FileManager::read_revision(original.as_ref())?;
        let revised_text = FileManager::read_revision(revised.as_ref())?;

        info!(
            "Comparing {} with {}",
            original.as_ref().display(),
            revised.as_ref().display()
        );

        self.compare_texts(original_text, revised_text).await
    }

    /// Price script text.
    // @returns: None when there is nothing to read aloud
    pub fn quote_text(&self, text: &str, model: Option<PricingModel>) -> Option<QuoteResult> {
        let analysis = self.analyze_text(text);
        if analysis.word_count == 0 {
            return None;
        }

        let pricing = PricingConfig {
            model: model.unwrap_or(self.config.pricing.model),
            ..self.config.pricing.clone()
        };

        Some(calculate_quote(
            analysis.word_count,
            analysis.reading_minutes,
            &analysis.reading_time,
            &pricing,
        ))
    }

    /// Price a script file
    pub fn quote_file<P: AsRef<Path>>(
        &self,
        path: P,
        model: Option<PricingModel>,
    ) -> Result<Option<QuoteResult>> {
        let text = FileManager::read_script(path)?;
        Ok(self.quote_text(&text, model))
    }

    /// Background diff worker using the configured debounce window
    pub fn diff_worker(&self) -> DiffWorker {
        DiffWorker::new(Duration::from_millis(self.config.debounce_ms))
    }

    /// Write analysis reports into `output_dir`, one per script.
    ///
    /// Reports mirror each script's location under `input_root`. When two
    /// scripts in one folder share a stem (`spot.txt`, `spot.md`) the later
    /// report keeps the script extension in its name; a collision beyond that
    /// is an error.
    // @returns: Paths written
    pub fn write_reports<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        reports: &[AnalysisReport],
        input_root: P1,
        output_dir: P2,
        format: ReportFormat,
    ) -> Result<Vec<PathBuf>> {
        let input_root = input_root.as_ref();
        let output_dir = output_dir.as_ref();
        FileManager::ensure_dir(output_dir)?;

        let mut used = HashSet::with_capacity(reports.len());
        let mut written = Vec::with_capacity(reports.len());
        for entry in reports {
            let (content, extension) = match format {
                ReportFormat::Text => (report::render_analysis_text(entry), "txt"),
                ReportFormat::Json => (report::to_json(entry)?, "json"),
            };

            let mut path =
                FileManager::generate_report_path(&entry.source, input_root, output_dir, extension);
            if !used.insert(path.clone()) {
                let qualified = FileManager::generate_qualified_report_path(
                    &entry.source,
                    input_root,
                    output_dir,
                    extension,
                );
                debug!("{:?} already written; using {:?}", path, qualified);
                if !used.insert(qualified.clone()) {
                    return Err(anyhow!(
                        "Report for {} would overwrite {:?}",
                        entry.source,
                        qualified
                    ));
                }
                path = qualified;
            }

            FileManager::write_to_file(&path, &content)?;
            written.push(path);
        }

        info!("Wrote {} reports to {}", written.len(), output_dir.display());
        Ok(written)
    }
}
