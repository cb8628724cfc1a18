//! Utilisation Report
//!
//! Runs the full pipeline over a record sequence and holds the finished
//! column list and rows for the presentation layer.

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::display::render_table;
use crate::error::{TableError, TableResult};
use crate::models::{ColumnDescriptor, RawRecord, TableRow, WorkerKind};
use crate::services::{build_columns, discover_months, PipelineOptions, RowNormalizer};

/// Record counts by worker kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Total number of records (and rows)
    pub total: usize,
    pub employees: usize,
    pub externals: usize,
    /// Records with neither employee nor external info
    pub unclassified: usize,
}

impl ReportSummary {
    fn from_records(records: &[RawRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                summary.total += 1;
                match record.kind() {
                    Some(WorkerKind::Employee) => summary.employees += 1,
                    Some(WorkerKind::External) => summary.externals += 1,
                    None => summary.unclassified += 1,
                }
                summary
            })
    }
}

/// Utilisation table for one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilisationReport {
    /// Ordered column descriptors
    pub columns: Vec<ColumnDescriptor>,
    /// One row per input record, same order
    pub rows: Vec<TableRow>,
    /// Record counts
    pub summary: ReportSummary,
}

impl UtilisationReport {
    /// Generate the report
    ///
    /// Months are discovered once and shared by the column builder and
    /// every row.
    pub fn generate(records: &[RawRecord], options: &PipelineOptions) -> Self {
        let months = discover_months(records, options.month_limit);
        let columns = build_columns(&months);
        let rows = RowNormalizer::new(&months, options).normalize_all(records);
        let summary = ReportSummary::from_records(records);

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            employees = summary.employees,
            externals = summary.externals,
            "generated utilisation report"
        );

        Self {
            columns,
            rows,
            summary,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = render_table(&self.columns, &self.rows);
        output.push('\n');
        output.push_str(&format!(
            "{} people ({} employees, {} externals",
            self.summary.total, self.summary.employees, self.summary.externals
        ));
        if self.summary.unclassified > 0 {
            output.push_str(&format!(", {} unclassified", self.summary.unclassified));
        }
        output.push_str(")\n");
        output
    }

    /// Export the report to CSV format
    ///
    /// The header row holds display labels; cells follow column order.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TableResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(self.columns.iter().map(|c| c.display_label.as_str()))
            .map_err(|e| TableError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record(row.cells(&self.columns))
                .map_err(|e| TableError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| TableError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records() -> Vec<RawRecord> {
        vec![
            RawRecord::from_value(json!({
                "employeeInfo": {
                    "name": "Ada Lovelace",
                    "workforceUtilisation": {
                        "rateLastTwelveMonths": 0.8,
                        "rateYearToDate": 0.7,
                        "monthlyBreakdown": [
                            {"month": "May", "utilisationRate": 0.9},
                            {"month": "June", "utilisationRate": 0.6}
                        ]
                    },
                    "costsByMonth": {"potentialEarningsByMonth": [
                        {"month": "2024-05", "costs": "1000"},
                        {"month": "2024-06", "costs": "1200.5"}
                    ]}
                }
            })),
            RawRecord::from_value(json!({
                "externalInfo": {
                    "name": "Jane Doe",
                    "workforceUtilisation": {
                        "rateLastTwelveMonths": "0.5",
                        "monthlyBreakdown": [
                            {"month": "July", "utilisationRate": 0.4},
                            {"month": "May", "utilisationRate": 0.3}
                        ]
                    }
                }
            })),
            RawRecord::default(),
        ]
    }

    #[test]
    fn test_generate_report() {
        let report = UtilisationReport::generate(&sample_records(), &PipelineOptions::default());

        let keys: Vec<_> = report.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["person", "past12Months", "y2d", "may", "june", "july", "netEarningsPrevMonth"]
        );

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].net_earnings_prev_month, "1200.50 EUR");
        assert_eq!(report.rows[1].get("june"), Some("0%"));
        assert_eq!(report.rows[1].get("july"), Some("40%"));
        assert_eq!(report.rows[1].y2d, "0%");
        assert_eq!(report.rows[2].person, "\u{2013}");
    }

    #[test]
    fn test_summary_counts() {
        let report = UtilisationReport::generate(&sample_records(), &PipelineOptions::default());
        assert_eq!(
            report.summary,
            ReportSummary {
                total: 3,
                employees: 1,
                externals: 1,
                unclassified: 1,
            }
        );
    }

    #[test]
    fn test_month_limit_option() {
        let options = PipelineOptions {
            month_limit: 1,
            ..PipelineOptions::default()
        };
        let report = UtilisationReport::generate(&sample_records(), &options);
        assert_eq!(report.columns.len(), 5);
        assert_eq!(report.rows[0].months.len(), 1);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let records = sample_records();
        let options = PipelineOptions::default();
        let first = serde_json::to_string(&UtilisationReport::generate(&records, &options)).unwrap();
        let second = serde_json::to_string(&UtilisationReport::generate(&records, &options)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset() {
        let report = UtilisationReport::generate(&[], &PipelineOptions::default());
        assert_eq!(report.columns.len(), 4);
        assert!(report.rows.is_empty());
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn test_format_terminal() {
        let report = UtilisationReport::generate(&sample_records(), &PipelineOptions::default());
        let output = report.format_terminal();
        assert!(output.contains("Net Earnings Prev Month"));
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("3 people (1 employees, 1 externals, 1 unclassified)"));
    }

    #[test]
    fn test_export_csv() {
        let report = UtilisationReport::generate(&sample_records(), &PipelineOptions::default());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Person,Past 12 Months,YTD,May,June,July,Net Earnings Prev Month"
        );
        assert_eq!(lines[1], "Ada Lovelace,80%,70%,90%,60%,0%,1200.50 EUR");
        assert_eq!(lines[2], "Jane Doe,50%,0%,30%,0%,40%,\u{2013}");
    }
}
