use crate::error::BoxError;
use crate::starred::PageSink;
use crate::types::StarredRepo;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use std::borrow::Cow;
use std::io::Write;

pub const CSV_HEADER: [&str; 10] = [
    "name",
    "full_name",
    "html_url",
    "description",
    "stargazers_count",
    "forks_count",
    "topics",
    "language",
    "created_at",
    "updated_at",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    #[value(name = "jsonl")]
    JsonLines,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::JsonLines => "jsonl",
        }
    }
}

/// Quote a CSV field when it contains a separator or a line break, doubling
/// any embedded quotes. Other fields pass through untouched.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Writes one CSV line per starred repository.
pub struct CsvWriter<W: Write> {
    writer: W,
    rows_written: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{}", CSV_HEADER.join(","))
    }

    pub fn write_repo(&mut self, repo: &StarredRepo) -> std::io::Result<()> {
        let stars = repo.stargazers_count.to_string();
        let forks = repo.forks_count.to_string();
        let topics = repo.topics.join(",");
        let created_at = format_timestamp(&repo.created_at);
        let updated_at = format_timestamp(&repo.updated_at);

        let fields = [
            repo.name.as_str(),
            repo.full_name.as_str(),
            repo.html_url.as_str(),
            repo.description.as_deref().unwrap_or_default(),
            stars.as_str(),
            forks.as_str(),
            topics.as_str(),
            repo.language.as_deref().unwrap_or_default(),
            created_at.as_str(),
            updated_at.as_str(),
        ];

        let line = fields
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{}", line)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PageSink for CsvWriter<W> {
    fn write_page(&mut self, repos: &[StarredRepo]) -> Result<(), BoxError> {
        for repo in repos {
            self.write_repo(repo)?;
        }
        // Keep partial results on disk if a later page fails.
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes each starred repository as a JSON object on its own line, extra
/// API fields included.
pub struct JsonLinesWriter<W: Write> {
    writer: W,
    rows_written: usize,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PageSink for JsonLinesWriter<W> {
    fn write_page(&mut self, repos: &[StarredRepo]) -> Result<(), BoxError> {
        for repo in repos {
            serde_json::to_writer(&mut self.writer, repo)?;
            self.writer.write_all(b"\n")?;
            self.rows_written += 1;
        }
        self.writer.flush()?;
        Ok(())
    }
}
