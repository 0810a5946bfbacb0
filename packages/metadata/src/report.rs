//! Display-oriented view of a metadata record.
//!
//! Records from the core are full length. Truncation for display happens
//! here and nowhere else.

use serde::Serialize;
use textwrap::{fill, Options};

use crate::config::{
    REPORT_CONTENT_WIDTH, REPORT_DESCRIPTION_WIDTH, REPORT_SECTION_ROWS, REPORT_TITLE_WIDTH,
    TEXT_WRAP_WIDTH,
};
use crate::text::truncate_with_ellipsis;
use crate::types::{AmendmentRecord, MetadataRecord, SectionRecord};

/// Shown in place of missing values.
pub const UNKNOWN: &str = "Unknown";

/// A section row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    pub number: String,
    pub kind: String,
    pub title: String,
    pub content: String,
}

/// An amendment row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmendmentRow {
    pub id: String,
    pub kind: String,
    pub affected_provisions: String,
    pub description: String,
}

/// Truncated, display-ready copy of a [`MetadataRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub title: String,
    pub long_title: String,
    pub year: String,
    pub legislation_type: String,
    pub legislation_number: String,
    pub document_uri: String,
    pub sections_count: usize,
    pub schedules_count: usize,
    pub sections: Vec<SectionRow>,

    /// Sections left out of `sections` by the row limit.
    pub omitted_sections: usize,

    pub amendments: Vec<AmendmentRow>,
}

impl ReportView {
    /// Build the view, applying the display limits.
    #[must_use]
    pub fn from_record(record: &MetadataRecord) -> Self {
        let sections: Vec<SectionRow> = record
            .sections
            .iter()
            .take(REPORT_SECTION_ROWS)
            .map(section_row)
            .collect();

        Self {
            title: record.title.clone(),
            long_title: record.long_title.clone(),
            year: record
                .year
                .map_or_else(|| UNKNOWN.to_string(), |year| year.to_string()),
            legislation_type: or_unknown(&record.legislation_type),
            legislation_number: or_unknown(
                record.legislation_number.as_deref().unwrap_or_default(),
            ),
            document_uri: record.document_uri.clone(),
            sections_count: record.sections_count,
            schedules_count: record.schedules_count,
            omitted_sections: record.sections.len().saturating_sub(sections.len()),
            sections,
            amendments: record.amendments.iter().map(amendment_row).collect(),
        }
    }

    /// Render the view as wrapped plain text.
    #[must_use]
    pub fn render_summary(&self) -> String {
        let heading = Options::new(TEXT_WRAP_WIDTH).subsequent_indent("    ");
        let row = Options::new(TEXT_WRAP_WIDTH)
            .initial_indent("  ")
            .subsequent_indent("      ");

        let mut lines: Vec<String> = vec![fill(&self.title, &heading)];
        if !self.long_title.is_empty() {
            lines.push(fill(&self.long_title, &heading));
        }
        lines.push(String::new());
        lines.push(format!("  Year:       {}", self.year));
        lines.push(format!("  Type:       {}", self.legislation_type));
        lines.push(format!("  Number:     {}", self.legislation_number));
        if !self.document_uri.is_empty() {
            lines.push(format!("  URI:        {}", self.document_uri));
        }
        lines.push(format!("  Sections:   {}", self.sections_count));
        lines.push(format!("  Schedules:  {}", self.schedules_count));

        if !self.sections.is_empty() {
            lines.push(String::new());
            lines.push("Sections".to_string());
            for section in &self.sections {
                let line = format!("{} [{}] {}", section.number, section.kind, section.title);
                lines.push(fill(&line, &row));
            }
            if self.omitted_sections > 0 {
                lines.push(format!("  ... and {} more", self.omitted_sections));
            }
        }

        if !self.amendments.is_empty() {
            lines.push(String::new());
            lines.push("Amendments".to_string());
            for amendment in &self.amendments {
                let fields = [
                    amendment.id.as_str(),
                    amendment.kind.as_str(),
                    amendment.affected_provisions.as_str(),
                    amendment.description.as_str(),
                ];
                let line = fields
                    .iter()
                    .filter(|f| !f.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(fill(&line, &row));
            }
        }

        format!("{}\n", lines.join("\n"))
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

fn section_row(section: &SectionRecord) -> SectionRow {
    SectionRow {
        number: section.number.clone(),
        kind: section.kind.clone(),
        title: truncate_with_ellipsis(&section.title, REPORT_TITLE_WIDTH),
        content: truncate_with_ellipsis(&section.content, REPORT_CONTENT_WIDTH),
    }
}

fn amendment_row(amendment: &AmendmentRecord) -> AmendmentRow {
    AmendmentRow {
        id: amendment.id.clone(),
        kind: amendment.kind.clone(),
        affected_provisions: amendment.affected_provisions.clone(),
        description: truncate_with_ellipsis(&amendment.description, REPORT_DESCRIPTION_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sections: usize) -> MetadataRecord {
        let sections: Vec<SectionRecord> = (1..=sections)
            .map(|n| SectionRecord {
                id: format!("section-{n}"),
                kind: "P1".to_string(),
                number: n.to_string(),
                title: "t".repeat(100),
                content: "c".repeat(600),
            })
            .collect();
        MetadataRecord {
            title: "Test Act 2020".to_string(),
            long_title: String::new(),
            year: None,
            document_uri: String::new(),
            legislation_type: String::new(),
            legislation_number: None,
            status: None,
            category: None,
            sections_count: sections.len(),
            sections,
            schedules_count: 0,
            amendments: vec![AmendmentRecord {
                id: "E1".to_string(),
                description: "d".repeat(200),
                ..AmendmentRecord::default()
            }],
        }
    }

    #[test]
    fn test_missing_values_shown_as_unknown() {
        let view = ReportView::from_record(&record(0));
        assert_eq!(view.year, "Unknown");
        assert_eq!(view.legislation_type, "Unknown");
        assert_eq!(view.legislation_number, "Unknown");
    }

    #[test]
    fn test_display_truncation() {
        let view = ReportView::from_record(&record(25));

        assert_eq!(view.sections.len(), 20);
        assert_eq!(view.omitted_sections, 5);
        assert_eq!(view.sections_count, 25);
        assert_eq!(view.sections[0].title.chars().count(), 83);
        assert!(view.sections[0].title.ends_with("..."));
        assert_eq!(view.sections[0].content.chars().count(), 503);
        assert_eq!(view.amendments[0].description.chars().count(), 123);
    }

    #[test]
    fn test_short_values_untouched() {
        let mut source = record(1);
        source.sections[0].title = "Citation".to_string();
        source.year = Some(2020);
        let view = ReportView::from_record(&source);

        assert_eq!(view.sections[0].title, "Citation");
        assert_eq!(view.year, "2020");
    }

    #[test]
    fn test_render_summary() {
        let mut source = record(21);
        source.sections[0].title = "Citation".to_string();
        let summary = ReportView::from_record(&source).render_summary();

        assert!(summary.starts_with("Test Act 2020\n"));
        assert!(summary.contains("  Year:       Unknown"));
        assert!(summary.contains("  1 [P1] Citation"));
        assert!(summary.contains("... and 1 more"));
        assert!(summary.contains("Amendments"));
    }
}
