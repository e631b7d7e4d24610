//! green-score: environmental green score for food recipes
//!
//! Scores a recipe document against a directory of reference data.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use green_score::{
    cli,
    config::{
        discover_config_file, file::CONFIG_FILE_NAMES, generate_full_example_config,
        generate_json_schema, load_or_default, AppConfig, ScoreConfig,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with reference data info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nRecipe Formats:",
        "\n  JSON, YAML",
        "\n\nReference Files:",
        "\n  agribalise-ref.json, labels.json, country-origin-ref.json,",
        "\n  country-transport-ref.json, packagings-ref.json, fao-zones-ref.json,",
        "\n  threatened-species-ref.json",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "green-score")]
#[command(version, long_version = build_long_version())]
#[command(about = "Environmental green score for food recipes", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Recipe scored
    1  Green score below --min-score
    2  Unknown reference names with --strict
    3  Error occurred

EXAMPLES:
    # Score a recipe against the reference data in ./public
    green-score score recipe.yaml --data-dir public

    # CI check with a minimum grade B
    green-score score recipe.yaml --data-dir public --min-score 60 --strict

    # Export JSON for processing
    green-score score recipe.yaml -o json > score.json

    # Inspect what a reference directory contains
    green-score catalog public")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the recipe document (JSON or YAML)
    recipe: PathBuf,

    /// Directory holding the reference JSON files
    #[arg(short, long, env = "GREEN_SCORE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the green score is below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// Exit with code 2 when the recipe names unknown reference records
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `catalog` subcommand
#[derive(Parser)]
struct CatalogArgs {
    /// Directory holding the reference JSON files
    #[arg(env = "GREEN_SCORE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format (json prints the raw load report)
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a recipe and print its green score report
    Score(ScoreArgs),

    /// Load a reference directory and report what it contains
    Catalog(CatalogArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .green-score.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let overrides = AppConfig::builder()
                .data_dir(args.data_dir)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .strict_lookups(args.strict)
                .min_score(args.min_score)
                .quiet(cli.quiet)
                .build();

            let (app, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            cli::run_score(ScoreConfig::from_app_config(args.recipe, app))
        }

        Commands::Catalog(args) => {
            let (app, _) = load_or_default(cli.config.as_deref());
            let data_dir = args
                .data_dir
                .or(app.reference.data_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            cli::run_catalog(&data_dir, args.output, args.output_file, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "green-score", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema().context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(action, cli.config),

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config(action: ConfigAction, config_path: Option<PathBuf>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = load_or_default(config_path.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("green-score").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match discover_config_file(config_path.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".green-score.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
