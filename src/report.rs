/*!
 * Reporting functionality for elves
 *
 * Summarizes a completed tree creation as a console table
 * using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::materializer::MaterializeStats;
use crate::types::DeclaredCounts;

/// Summary of a tree creation run
#[derive(Debug, Clone)]
pub struct CreateReport {
    /// Directory the tree was created under
    pub root: String,
    /// Mode applied to created directories
    pub permission: u32,
    /// Time taken to create the tree
    pub duration: Duration,
    /// Entries actually created
    pub stats: MaterializeStats,
    /// Counters declared by the document, if any
    pub declared: DeclaredCounts,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for creation results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, report: &CreateReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &CreateReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &CreateReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Root".to_string(),
                value: report.root.clone(),
            },
            SummaryRow {
                key: "🔒 Permission".to_string(),
                value: format!("{:o}", report.permission),
            },
            SummaryRow {
                key: "📁 Directories Created".to_string(),
                value: report.stats.directories.to_string(),
            },
        ];

        if report.stats.marker_files > 0 {
            rows.push(SummaryRow {
                key: "📌 Marker Files Created".to_string(),
                value: report.stats.marker_files.to_string(),
            });
        }

        if let Some(declared) = report.declared.directories {
            rows.push(SummaryRow {
                key: "📋 Declared Directories".to_string(),
                value: declared.to_string(),
            });
        }

        if let Some(files) = report.declared.files {
            rows.push(SummaryRow {
                key: "📄 Declared Files (skipped)".to_string(),
                value: files.to_string(),
            });
        }

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &CreateReport) -> String {
        format!(
            "✅  TREE CREATED\n{}",
            self.create_summary_table(report)
        )
    }
}
