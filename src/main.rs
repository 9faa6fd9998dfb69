use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use colored::*;
use starred_export::cli::Cli;
use starred_export::output::{CsvWriter, JsonLinesWriter, OutputFormat};
use starred_export::GitHubClient;
use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_path = cli.output_path(Utc::now());

    let client = GitHubClient::with_options(
        cli.token.clone(),
        &cli.api_url,
        Duration::from_secs(cli.timeout),
    )
    .context("Failed to create GitHub client")?;

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    info!(username = %cli.username, output = %output_path.display(), "Exporting starred repositories");

    let repos = match cli.format {
        OutputFormat::Csv => {
            let mut sink = CsvWriter::new(writer);
            sink.write_header()
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            let repos = client
                .fetch_all_starred(&cli.username, Some(&mut sink))
                .await
                .with_context(|| format!("Failed to export stars for {}", cli.username))?;
            sink.into_inner()?.get_ref().sync_all()?;
            repos
        }
        OutputFormat::JsonLines => {
            let mut sink = JsonLinesWriter::new(writer);
            let repos = client
                .fetch_all_starred(&cli.username, Some(&mut sink))
                .await
                .with_context(|| format!("Failed to export stars for {}", cli.username))?;
            sink.into_inner()?.get_ref().sync_all()?;
            repos
        }
    };

    println!(
        "{} {} starred repositories for {} written to {}",
        "✅".green(),
        repos.len().to_string().bold(),
        cli.username.cyan(),
        output_path.display().to_string().bold()
    );

    Ok(())
}
