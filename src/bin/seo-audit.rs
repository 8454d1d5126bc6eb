//! CLI tool for auditing a single web page

use anyhow::Context;
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use seo_page_audit::{audit_url, parse_target, render, AuditConfig, AuditError, ReportFormat};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "seo-audit")]
#[command(about = "Audit a web page for basic SEO and technical issues", long_about = None)]
#[command(version)]
struct Cli {
    /// URL of the page to audit (prompted for when omitted)
    url: Option<String>,

    /// Path to custom configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: text, json or markdown
    #[arg(short = 'f', long, default_value = "text")]
    format: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        match AuditConfig::from_toml_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{} Failed to load config: {}", "Error:".red().bold(), e);
                process::exit(1);
            }
        }
    } else {
        AuditConfig::default()
    };

    let input = match cli.url {
        Some(url) => url,
        None => match prompt_for_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("{} Failed to read URL: {:#}", "Error:".red().bold(), e);
                process::exit(1);
            }
        },
    };

    let target = match parse_target(&input) {
        Ok(target) => target,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    // Run audit
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Fetching {}...", target));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = audit_url(&target, &config).await;

    spinner.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e @ AuditError::FetchFailure { .. }) => {
            println!("[ERROR] {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} Audit failed: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let content = match render(&report, cli.format) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{} Failed to render report: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    if let Some(output_path) = cli.output {
        if let Err(e) = write_report(&output_path, &content) {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
        println!("Report written to: {}", output_path.display());
    } else {
        print!("{}", content);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter the URL to audit: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn write_report(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
