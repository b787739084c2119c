// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use voscript::analysis::ExpansionKind;
use voscript::app_config::{self, Config};
use voscript::app_controller::Controller;
use voscript::pricing::PricingModel;
use voscript::report::{self, ReportFormat};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for ExpansionKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExpansionKind {
    Numbers,
    Dates,
    Currencies,
    Percentages,
    Urls,
    Measurements,
}

impl From<CliExpansionKind> for ExpansionKind {
    fn from(cli_kind: CliExpansionKind) -> Self {
        match cli_kind {
            CliExpansionKind::Numbers => ExpansionKind::Numbers,
            CliExpansionKind::Dates => ExpansionKind::Dates,
            CliExpansionKind::Currencies => ExpansionKind::Currencies,
            CliExpansionKind::Percentages => ExpansionKind::Percentages,
            CliExpansionKind::Urls => ExpansionKind::Urls,
            CliExpansionKind::Measurements => ExpansionKind::Measurements,
        }
    }
}

/// CLI Wrapper for PricingModel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliPricingModel {
    PerWord,
    PerMinute,
    PerProject,
}

impl From<CliPricingModel> for PricingModel {
    fn from(cli_model: CliPricingModel) -> Self {
        match cli_model {
            CliPricingModel::PerWord => PricingModel::PerWord,
            CliPricingModel::PerMinute => PricingModel::PerMinute,
            CliPricingModel::PerProject => PricingModel::PerProject,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Options shared by every analysis command
#[derive(Args, Debug)]
struct SharedArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Reading speed in words per minute (75-200)
    #[arg(short, long, global = true)]
    wpm: Option<i32>,

    /// Turn an expansion on (repeatable)
    #[arg(long, value_enum, global = true)]
    expand: Vec<CliExpansionKind>,

    /// Turn an expansion off (repeatable)
    #[arg(long, value_enum, global = true)]
    no_expand: Vec<CliExpansionKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count spoken words and estimate reading time for a script or folder
    Analyze {
        /// Script file or directory of scripts
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Also write one report per script into this directory, mirroring subfolders
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show a word-level diff and timing changes between two revisions (either may be empty)
    Compare {
        /// Original script
        #[arg(value_name = "ORIGINAL")]
        original: PathBuf,

        /// Revised script
        #[arg(value_name = "REVISED")]
        revised: PathBuf,
    },

    /// Price a script using the configured rates
    Quote {
        /// Script file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Pricing model to use instead of the configured one
        #[arg(short, long, value_enum)]
        model: Option<CliPricingModel>,
    },

    /// List the spoken-form expansions and whether each is on
    Expansions,

    /// Generate shell completions for voscript
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// voscript - script timing for voice actors
///
/// Counts the words a script actually takes to read aloud, estimates reading
/// time with pauses, prices the job and diffs script revisions.
#[derive(Parser, Debug)]
#[command(name = "voscript")]
#[command(version)]
#[command(about = "Script timing, pricing and revision diffing for voice-over work")]
#[command(long_about = "voscript spells out numbers, dates, currencies, percentages and measurements
before counting words, so reading-time estimates match what is actually spoken.

EXAMPLES:
    voscript analyze spot.txt                    # Word count and reading time
    voscript analyze scripts/ -o reports/        # Whole folder, one report per script
    voscript analyze spot.txt --wpm 120 -f json  # Slower read, JSON output
    voscript analyze spot.txt --expand urls      # Also read URLs aloud
    voscript compare draft.txt final.txt         # Inline diff with timing deltas
    voscript quote spot.txt -m per-minute        # Price by started minute
    voscript expansions --no-expand dates        # Show which expansions apply
    voscript completions bash > voscript.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    shared: SharedArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself accepts everything; `set_max_level` does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info; the config or --log-level may change it below
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "voscript", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli.shared)?;
    log::set_max_level(config.log_level.to_level_filter());

    let format: ReportFormat = cli.shared.format.into();
    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Analyze { path, output_dir } => {
            run_analyze(&controller, path, output_dir, format)
        }
        Commands::Compare { original, revised } => {
            run_compare(&controller, original, revised, format).await
        }
        Commands::Quote { path, model } => {
            run_quote(&controller, path, model.map(Into::into), format)
        }
        Commands::Expansions => {
            print!("{}", report::render_expansions_text(&controller.config().expansion));
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load or create the config file, then apply command-line overrides
fn load_config(options: &SharedArgs) -> Result<Config> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(wpm) = options.wpm {
        config.wpm = wpm;
    }

    for kind in &options.expand {
        config.expansion.set(kind.clone().into(), true);
    }
    for kind in &options.no_expand {
        config.expansion.set(kind.clone().into(), false);
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn run_analyze(
    controller: &Controller,
    path: PathBuf,
    output_dir: Option<PathBuf>,
    format: ReportFormat,
) -> Result<()> {
    let reports = if path.is_file() {
        vec![controller.analyze_file(&path)?]
    } else if path.is_dir() {
        controller.analyze_folder(&path)?
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", path));
    };

    match format {
        ReportFormat::Text => {
            for entry in &reports {
                println!("{}", report::render_analysis_text(entry));
            }
        }
        ReportFormat::Json => {
            if reports.len() == 1 {
                println!("{}", report::to_json(&reports[0])?);
            } else {
                println!("{}", report::to_json(&reports)?);
            }
        }
    }

    if let Some(output_dir) = output_dir {
        controller.write_reports(&reports, &path, output_dir, format)?;
    }

    Ok(())
}

async fn run_compare(
    controller: &Controller,
    original: PathBuf,
    revised: PathBuf,
    format: ReportFormat,
) -> Result<()> {
    let compare_report = controller.compare_files(&original, &revised).await?;

    match format {
        ReportFormat::Text => print!("{}", report::render_compare_text(&compare_report)),
        ReportFormat::Json => println!("{}", report::to_json(&compare_report)?),
    }

    Ok(())
}

fn run_quote(
    controller: &Controller,
    path: PathBuf,
    model: Option<PricingModel>,
    format: ReportFormat,
) -> Result<()> {
    match controller.quote_file(&path, model)? {
        Some(quote) => {
            match format {
                ReportFormat::Text => print!("{}", report::render_quote_text(&quote)),
                ReportFormat::Json => println!("{}", report::to_json(&quote)?),
            }
            info!("Quote ready for {}", path.display());
        }
        None => warn!("{} has no spoken words; nothing to quote", path.display()),
    }

    Ok(())
}
