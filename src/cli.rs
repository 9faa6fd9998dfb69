use crate::github::API_BASE_URL;
use crate::output::OutputFormat;
use chrono::{DateTime, Utc};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starred-export")]
#[command(about = "Export every repository a GitHub user has starred")]
#[command(version)]
pub struct Cli {
    /// GitHub username whose stars are exported
    #[arg(short, long, env = "GITHUB_USERNAME", value_parser = NonEmptyStringValueParser::new())]
    pub username: String,

    /// GitHub token sent as a bearer credential
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub token: String,

    /// Output file [default: starred-<username>-<unix time>.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// GitHub REST API root, e.g. https://github.example.com/api/v3
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl Cli {
    pub fn output_path(&self, now: DateTime<Utc>) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.username, self.format, now))
    }
}

pub fn default_output_path(username: &str, format: OutputFormat, now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "starred-{}-{}.{}",
        username,
        now.timestamp(),
        format.extension()
    ))
}
