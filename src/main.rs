use anyhow::Result;
use clap::Parser;
use sitecheck::config::cli::{Cli, Command, OutputFormat};
use sitecheck::core::roundtrip;
use sitecheck::domain::model::ProbeOutcome;
use sitecheck::utils::logger;
use sitecheck::utils::validation::{validate_positive_number, Validate};
use sitecheck::{Checker, FsDocs, HttpProber, NavEntry, ProbeEngine, SiteConfig, SiteError};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Loading configuration from {}", cli.config.display());

    let config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => fail(&e, 2),
    };
    if let Err(e) = config.validate() {
        fail(&e, 2);
    }

    let docs_root = cli
        .config
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(config.docs_dir());
    let docs = FsDocs::new(docs_root);
    let config_path = cli.config.display().to_string();

    match cli.command {
        Command::Check { format } => {
            let report = match Checker::new(&config, &docs, &config_path).run() {
                Ok(report) => report,
                Err(e) => fail(&e, 2),
            };

            match format {
                OutputFormat::Json => match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&e, 2),
                },
                OutputFormat::Text => {
                    for violation in &report.violations {
                        println!("[{}] {}", violation.code, violation.message);
                        println!("    💡 {}", violation.hint);
                    }
                    if report.is_clean() {
                        println!("✅ {}: no violations", config_path);
                    } else {
                        println!(
                            "❌ {}: {} violation(s)",
                            config_path,
                            report.violations.len()
                        );
                    }
                }
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Command::Probe {
            concurrent_requests,
            timeout_seconds,
        } => {
            if let Err(e) = validate_positive_number("concurrent_requests", concurrent_requests, 1)
            {
                fail(&e, 2);
            }

            let urls = config.external_urls();
            if urls.is_empty() {
                println!("✅ No external URLs to probe");
                return Ok(());
            }

            tracing::info!("Probing {} external URL(s)", urls.len());
            let prober = match HttpProber::new(Duration::from_secs(timeout_seconds)) {
                Ok(prober) => prober,
                Err(e) => fail(&e, 2),
            };
            let engine = ProbeEngine::new(prober, concurrent_requests);
            let report = engine.run(&urls).await;

            for result in &report.results {
                match &result.outcome {
                    ProbeOutcome::Reachable { status } if result.is_ok() => {
                        println!("✅ {} ({})", result.url, status);
                    }
                    ProbeOutcome::Reachable { status } => {
                        println!("❌ {} ({})", result.url, status);
                    }
                    ProbeOutcome::Unreachable { reason } => {
                        println!("❌ {} ({})", result.url, reason);
                    }
                }
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Command::Fmt { write } => {
            let raw = match std::fs::read_to_string(&cli.config) {
                Ok(raw) => raw,
                Err(e) => fail(&SiteError::IoError(e), 2),
            };
            let normalized = match roundtrip::normalize_content(&raw) {
                Ok(normalized) => normalized,
                Err(e) => fail(&e, 2),
            };
            if write {
                std::fs::write(&cli.config, &normalized)?;
                println!("✅ Normalized {}", config_path);
            } else {
                print!("{}", normalized);
            }
        }
        Command::Nav => {
            print_nav(&config.nav, 0);
        }
    }

    Ok(())
}

fn print_nav(entries: &[NavEntry], depth: usize) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            NavEntry::Page { title, path } => println!("{}{} -> {}", indent, title, path),
            NavEntry::Section { title, pages } => {
                println!("{}{}", indent, title);
                print_nav(pages, depth + 1);
            }
        }
    }
}

fn fail(e: &SiteError, exit_code: i32) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code);
}
