//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::console::ClaimRow;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use warden_domain::Catalog;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format active claims.
    pub fn format_claims(&self, rows: &[ClaimRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Table => Ok(self.format_claims_table(rows)),
        }
    }

    fn format_claims_table(&self, rows: &[ClaimRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No active claims.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["POI", "Name", "Owner", "Claimed"]);
        for row in rows {
            builder.push_record([&row.poi, &row.display_name, &row.owner, &row.claimed]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format the POI catalog.
    pub fn format_catalog(&self, catalog: &Catalog) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog.pois())?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["POI", "Aliases", "Claimable"]);
                for poi in catalog.pois() {
                    let aliases = poi.aliases.join(", ");
                    let claimable = if poi.excluded { "no" } else { "yes" };
                    builder.push_record([poi.id.as_str(), aliases.as_str(), claimable]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a reply from the arbiter.
    pub fn response(&self, message: &str) -> String {
        self.colorize(&format!("> {}", message), "green")
    }

    /// Format an expiry notice.
    pub fn notice(&self, message: &str) -> String {
        self.colorize(&format!("! {}", message), "yellow")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
