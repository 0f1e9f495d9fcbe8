use clap::{Parser, ValueEnum};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use vnfinfo::config::{DEFAULT_VIM, DEFAULT_ZONE_ID};
use vnfinfo::params::DEFAULT_SCHEMA_COMPILER;
use vnfinfo::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ParameterSourceCli {
    /// Keys of topology_template.inputs
    Model,
    /// Leaves declared in schema groupings
    Schema,
    /// Model inputs, then schema leaves not already listed
    Combined,
}

impl From<ParameterSourceCli> for ParameterSource {
    fn from(source: ParameterSourceCli) -> Self {
        match source {
            ParameterSourceCli::Model => ParameterSource::Model,
            ParameterSourceCli::Schema => ParameterSource::Schema,
            ParameterSourceCli::Combined => ParameterSource::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevelCli {
    Debug,
    Info,
    Warning,
}

impl From<LogLevelCli> for tracing::Level {
    fn from(level: LogLevelCli) -> Self {
        match level {
            LogLevelCli::Debug => tracing::Level::DEBUG,
            LogLevelCli::Info => tracing::Level::INFO,
            LogLevelCli::Warning => tracing::Level::WARN,
        }
    }
}

/// Service template to SOL6 VNF Info converter (XML)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The SOL001 service template (YAML) to be processed
    #[arg(short = 's', long = "sol001-file", visible_alias = "sol001file")]
    sol001_file: PathBuf,

    /// The vnf-info template (XML) to populate
    #[arg(short = 't', long = "template-file", visible_alias = "templatefile")]
    template_file: PathBuf,

    /// SOL003 automation parameters (JSON)
    #[arg(short = 'a', long = "sol003-file", visible_alias = "sol003file")]
    sol003_file: Option<PathBuf>,

    /// Schema providing parameter groupings (.yin, or any file the schema compiler accepts)
    #[arg(short = 'y', long)]
    schema_file: Option<PathBuf>,

    /// Command used to compile non-YIN schema files to YIN
    #[arg(long, default_value = DEFAULT_SCHEMA_COMPILER)]
    schema_compiler: String,

    /// Only use leaves of these schema groupings (repeatable)
    #[arg(short, long)]
    grouping: Vec<String>,

    /// Where additional-parameters ids come from
    #[arg(short, long, value_enum, default_value_t = ParameterSourceCli::Model)]
    parameter_source: ParameterSourceCli,

    /// Drop elements left without a value
    #[arg(long)]
    prune: bool,

    /// Output file for the generated VNF Info; stdout if not specified
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level for console logging
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = LogLevelCli::Info)]
    log_level: LogLevelCli,

    /// Also append log lines to this file (parent directories are created)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// VIM connection
    #[arg(short, long, default_value = DEFAULT_VIM)]
    vim: String,

    /// Availability zone
    #[arg(short, long, visible_alias = "zone_id", default_value = DEFAULT_ZONE_ID)]
    zone_id: String,
}

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.log_level, cli.log_file.as_deref());

    let config = ConvertConfig::default()
        .with_vim(cli.vim)
        .with_zone_id(cli.zone_id)
        .with_prune(cli.prune)
        .with_parameter_source(cli.parameter_source.into())
        .with_groupings(cli.grouping);

    let inputs = ConversionInputs::new(cli.sol001_file, cli.template_file)
        .with_automation(cli.sol003_file)
        .with_schema(cli.schema_file)
        .with_schema_compiler(cli.schema_compiler);

    let start = Instant::now();
    let document = convert(&inputs, &config)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    info!(
        "Projected {} in {:?}",
        ProjectionSummary::of(&document),
        start.elapsed()
    );

    match cli.output {
        Some(path) => {
            document
                .write_to(&path, config.prune)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            info!("Wrote VNF Info to {}", path.display());
        }
        None => {
            let xml = document
                .to_pretty_string(config.prune)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(xml.as_bytes())
                .and_then(|_| stdout.flush())
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write to stdout: {}", e)));
        }
    }
}

/// Console logging on stderr, leaving stdout for the document, plus an
/// optional plain-text copy in `log_file`.
fn setup_logger(level: LogLevelCli, log_file: Option<&Path>) {
    let file_layer = log_file.map(|path| {
        let file = open_log_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Cannot open log file {}: {}", path.display(), e))
        });
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(file_layer)
        .with(LevelFilter::from_level(level.into()))
        .init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
