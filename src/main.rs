use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use refscan::config::{Config, RulesConfig};
use refscan::discovery::FileFinder;
use refscan::engine;
use refscan::metrics;
use refscan::parser::parse_workspace;
use refscan::report::{ReportFormat, Reporter};
use refscan::semantic::{SourceIndex, Workspace};

/// refscan - Unused-declaration detection for JavaScript/TypeScript
#[derive(Parser, Debug)]
#[command(name = "refscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target directories to analyze (can be specified multiple times)
    #[arg(short, long)]
    target: Vec<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json/sarif formats)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rules to run, by declaration target (comma-separated or repeated);
    /// overrides the [rules] toggles in the config file
    #[arg(short, long, value_enum, value_delimiter = ',')]
    rules: Vec<RuleTarget>,

    /// Print type metrics as JSON instead of running rules
    #[arg(long)]
    metrics: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RuleTarget {
    Variable,
    Function,
    Class,
    Field,
    Method,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Sarif,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Sarif => ReportFormat::Sarif,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("refscan v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let workspace = parse_project(&config, &cli)?;

    if cli.metrics {
        let metrics = metrics::collect(&workspace);
        println!(
            "{}",
            serde_json::to_string_pretty(&metrics).map_err(|e| miette::miette!("{e}"))?
        );
        return Ok(());
    }

    let rules = engine::enabled_rules(&config);
    let index = SourceIndex::build(&workspace);
    let findings = engine::run_rules(&rules, &index, &workspace).await;

    let reporter = Reporter::new(report_format(&cli, &config), cli.output.clone())
        .with_snippets(config.report.show_snippets);
    reporter.report(&findings)?;

    if !findings.is_empty() {
        info!("{} findings reported", findings.len());
    }
    Ok(())
}

/// Discover and parse all analyzable sources
fn parse_project(config: &Config, cli: &Cli) -> Result<Workspace> {
    let finder = FileFinder::new(config);
    let roots = if config.targets.is_empty() {
        vec![cli.path.clone()]
    } else {
        config.targets.clone()
    };

    let mut files = Vec::new();
    for root in &roots {
        files.extend(finder.find(root)?);
    }

    if files.is_empty() {
        println!("{}", "No analyzable source files found.".yellow());
    }
    parse_workspace(files)
}

fn report_format(cli: &Cli, config: &Config) -> ReportFormat {
    match &cli.format {
        Some(format) => format.clone().into(),
        None => match config.report.format.as_str() {
            "json" => ReportFormat::Json,
            "sarif" => ReportFormat::Sarif,
            _ => ReportFormat::Terminal,
        },
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // CLI arguments override file values
    if !cli.target.is_empty() {
        config.targets = cli.target.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.iter().cloned());
    }
    if !cli.rules.is_empty() {
        let mut rules = RulesConfig {
            unused_variable: false,
            unused_function: false,
            unused_class: false,
            unused_field: false,
            unused_method: false,
        };
        for target in &cli.rules {
            match target {
                RuleTarget::Variable => rules.unused_variable = true,
                RuleTarget::Function => rules.unused_function = true,
                RuleTarget::Class => rules.unused_class = true,
                RuleTarget::Field => rules.unused_field = true,
                RuleTarget::Method => rules.unused_method = true,
            }
        }
        config.rules = rules;
    }

    Ok(config)
}
