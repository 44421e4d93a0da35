//! Workout CLI - Command-line interface for Workout Flux
//!
//! Commands:
//! - summarize: Compute the summary line for one workout package
//! - batch: Process a file of workout packages
//! - demo: Run the built-in sample packages
//! - codes: List supported workout codes and their parameters

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use workout_flux::formatter::{format_summary_localized, Locale};
use workout_flux::package::{sample_packages, PackageAdapter, WorkoutPackage};
use workout_flux::pipeline::{workout_to_summary, WorkoutProcessor};
use workout_flux::types::WorkoutType;
use workout_flux::{ComputeError, FLUX_VERSION};

/// Workout - compute distance, speed and calories from raw sensor readings
#[derive(Parser)]
#[command(name = "workout")]
#[command(author = "Synheart AI Inc")]
#[command(version = FLUX_VERSION)]
#[command(about = "Summarize workouts from raw sensor packages", long_about = None)]
struct Cli {
    /// Log verbosity (written to stderr)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the summary line for one workout package
    Summarize {
        /// Workout code (RUN, WLK or SWM)
        code: String,

        /// Positional readings for the workout type
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,

        /// Label language
        #[arg(long, default_value = "en")]
        locale: LocaleArg,

        /// Print the summary as JSON instead of a text line
        #[arg(long)]
        json: bool,
    },

    /// Process a file of workout packages
    Batch {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "json")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Label language
        #[arg(long, default_value = "en")]
        locale: LocaleArg,
    },

    /// Run the built-in sample packages
    Demo {
        /// Label language
        #[arg(long, default_value = "en")]
        locale: LocaleArg,
    },

    /// List supported workout codes and their parameters
    Codes,
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// JSON array of packages
    Json,
    /// Newline-delimited JSON (one package per line)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per package
    Text,
    /// JSON report
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    /// English labels
    En,
    /// Russian labels
    Ru,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Ru => Locale::Russian,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    match cli.command {
        Commands::Summarize {
            code,
            params,
            locale,
            json,
        } => cmd_summarize(&code, &params, locale.into(), json),
        Commands::Batch {
            input,
            output,
            input_format,
            output_format,
            locale,
        } => cmd_batch(&input, &output, input_format, output_format, locale.into()),
        Commands::Demo { locale } => cmd_demo(locale.into()),
        Commands::Codes => cmd_codes(),
    }
}

fn cmd_summarize(
    code: &str,
    params: &[f64],
    locale: Locale,
    json: bool,
) -> Result<(), WorkoutCliError> {
    let summary = workout_to_summary(code, params)?;

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{}", format_summary_localized(&summary, locale));
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    locale: Locale,
) -> Result<(), WorkoutCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(WorkoutCliError::NoPipedInput);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Json => PackageAdapter::parse_array(&input_data)?,
        InputFormat::Ndjson => PackageAdapter::parse_ndjson(&input_data)?,
    };

    if packages.is_empty() {
        return Err(WorkoutCliError::NoPackages);
    }

    tracing::info!(packages = packages.len(), "read workout packages");

    let output_data = format_output(&packages, &output_format, locale)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_demo(locale: Locale) -> Result<(), WorkoutCliError> {
    let processor = WorkoutProcessor::with_locale(locale);
    for line in processor.messages(&sample_packages())? {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_codes() -> Result<(), WorkoutCliError> {
    println!("Supported workout codes");
    println!("=======================");
    for workout_type in WorkoutType::ALL {
        println!(
            "  {} ({}): {}",
            workout_type.code(),
            workout_type.label(),
            workout_type.parameter_names().join(", ")
        );
    }

    Ok(())
}

// Helper functions

fn format_output(
    packages: &[WorkoutPackage],
    format: &OutputFormat,
    locale: Locale,
) -> Result<String, WorkoutCliError> {
    let processor = WorkoutProcessor::with_locale(locale);
    match format {
        OutputFormat::Text => Ok(processor.messages(packages)?.join("\n") + "\n"),
        OutputFormat::Json => Ok(processor.report_json(packages)? + "\n"),
    }
}

// Error types

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    NoPackages,
    NoPipedInput,
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<ComputeError> for WorkoutCliError {
    fn from(e: ComputeError) -> Self {
        WorkoutCliError::Compute(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WorkoutCliError::Compute(e) => {
                let hint = match &e {
                    ComputeError::UnknownWorkoutType(_) => {
                        "Run 'workout codes' for supported codes"
                    }
                    ComputeError::ArityMismatch { .. } | ComputeError::InvalidParameter { .. } => {
                        "Check parameter order with 'workout codes'"
                    }
                    ComputeError::DivisionByZero(_) => "Duration and height must be non-zero",
                    ComputeError::JsonError(_) | ComputeError::InvalidPackage(_) => {
                        "Packages look like {\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}"
                    }
                };
                CliError {
                    code: "COMPUTE_ERROR".to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No workout packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            WorkoutCliError::NoPipedInput => CliError {
                code: "NO_INPUT".to_string(),
                message: "stdin is a terminal, nothing to read".to_string(),
                hint: Some("Pipe packages into the command or pass --input <file>".to_string()),
            },
        }
    }
}
