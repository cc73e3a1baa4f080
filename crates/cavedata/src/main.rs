use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cavedata_core::columns::unique_in_order;
use cavedata_core::{check, run, CleanerConfig, InputEncoding};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cave survey CSV cleaner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Strip the mis-decoded character, keep the export columns and write the result
    Clean(SourceArgs),
    /// Report missing columns and pending cleanup without writing anything
    Check(SourceArgs),
    /// Print the effective output column order
    Columns(ConfigArgs),
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// TOML file with cleaner settings; unset keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    #[command(flatten)]
    config: ConfigArgs,
    /// Source CSV (overrides the config file)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Destination CSV (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Replace invalid UTF-8 in the source instead of failing
    #[arg(long)]
    lossy_utf8: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Clean(args) => handle_clean(args),
        Command::Check(args) => handle_check(args),
        Command::Columns(args) => handle_columns(args),
    }
}

fn load_config(args: &ConfigArgs) -> Result<CleanerConfig> {
    match &args.config {
        Some(path) => CleanerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CleanerConfig::default()),
    }
}

fn resolve_config(args: SourceArgs) -> Result<CleanerConfig> {
    let mut config = load_config(&args.config)?;
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.lossy_utf8 {
        config.encoding = InputEncoding::LossyUtf8;
    }
    Ok(config)
}

fn handle_clean(args: SourceArgs) -> Result<()> {
    let config = resolve_config(args)?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "starting cleaning run"
    );

    let report = run(&config).with_context(|| {
        format!(
            "failed to clean {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn handle_check(args: SourceArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let report = check(&config)
        .with_context(|| format!("failed to check {}", config.input.display()))?;

    let mut table = Table::new();
    table.set_header(vec!["Column", "Status"]);
    for name in &report.present {
        table.add_row(vec![name.as_str(), "present"]);
    }
    for name in &report.missing {
        table.add_row(vec![name.as_str(), "MISSING"]);
    }

    println!("{}", report.input.display());
    println!("{table}");
    println!("Rows: {}", report.rows);
    println!(
        "Cells in '{}' containing {:?}: {}",
        config.clean_column, config.strip, report.cells_to_clean
    );

    if !report.is_ready() {
        bail!(
            "{} required column(s) missing: {}",
            report.missing.len(),
            report.missing.join(", ")
        );
    }
    Ok(())
}

fn handle_columns(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args)?;
    for line in column_lines(&config) {
        println!("{line}");
    }
    Ok(())
}

fn column_lines(config: &CleanerConfig) -> Vec<String> {
    unique_in_order(&config.columns)
        .into_iter()
        .enumerate()
        .map(|(idx, name)| format!("{:>2}. {}", idx + 1, name))
        .collect()
}
