//! Archaudit CLI - audit an app bundle for store-rejected architectures.

use anyhow::Result;
use archaudit_cli::auditor::Auditor;
use archaudit_cli::inspector::HostTools;
use archaudit_common::Error;
use archaudit_report::{render_presence_table, BundleReport};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "archaudit")]
#[command(
    author,
    version,
    about = "Audit an app bundle for architectures rejected by store submission"
)]
struct Cli {
    /// Path to the .app bundle to audit
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Increase diagnostic detail (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format (json, text)
    #[arg(long, default_value = "text")]
    format: String,

    /// Per-tool invocation timeout in seconds
    #[arg(long, default_value = "30")]
    tool_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let Some(bundle) = cli.file else {
        return Err(Error::Config("the file parameter (--file) is required".to_string()).into());
    };

    let inspector = HostTools::new(Duration::from_secs(cli.tool_timeout));
    let auditor = Auditor::new(Box::new(inspector));
    let report = auditor.audit(&bundle).await?;

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text_report(&report),
    }

    if !report.is_compliant() {
        std::process::exit(1);
    }
    info!("Audit complete");
    Ok(())
}

fn print_text_report(report: &BundleReport) {
    if !report.app_compliant() {
        println!(
            "The application contains architectures rejected for store submission: {}",
            report.app_architectures
        );
        return;
    }

    println!(
        "Your application supports these architectures: {}",
        report.app_architectures
    );
    if !report.app_symbols.is_empty() {
        println!(
            ">>>>>> Main executable uses watch-listed symbols: {}",
            report.app_symbols.join(" ")
        );
    }

    println!();
    println!("All frameworks architectures found report:");
    println!("{}", render_presence_table(&report.framework_entries));
    println!();

    for entry in &report.framework_entries {
        if !entry.found_symbols.is_empty() {
            println!(
                ">>>>>> {} uses watch-listed symbols: {}",
                entry.name,
                entry.found_symbols.join(" ")
            );
        }
    }

    let bad = report.non_compliant_entries();
    if bad.is_empty() {
        println!("Your application is ready for the store submission.");
    } else {
        println!("There are some wrong architectures in your application:");
        for entry in bad {
            println!("  {} ({})", entry.name, entry.architectures);
        }
    }
}
