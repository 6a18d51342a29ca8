//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! 01-intro: Kafka in Pratica 1
//!     Category: Kafka Series (series 'kafka')
//!     Colors: #8B5CF6 → #F59E0B
//!     Read time: ~3 min
//!     Template: minimal
//!     linkedin 1200x627 → covers/01-intro-linkedin.png
//!     blog 1280x720 → covers/01-intro-blog.png
//! ```
//!
//! ## Batch
//!
//! ```text
//! Found 2 articles in 'kafka':
//!     001 01-intro
//!     002 02-producers
//! 001 01-intro: Kafka in Pratica 1
//!     linkedin 1200x627 → covers/01-intro-linkedin.png
//! 002 02-producers FAILED
//!     Error: no title found in front matter of content/posts/kafka/02-producers
//! Completed: 1 successful, 1 failed
//! ```
//!
//! ## Export
//!
//! ```text
//! 01-blueprint.html (Blueprint)
//!     Preview: 01-blueprint.png
//! ...
//! Gallery → templates/index.html
//! Exported 16 templates
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::batch::{BatchEvent, BatchReport, SeriesSummary};
use crate::cover::{CoverReport, GeneratedFile};
use crate::export::ExportReport;
use crate::templates::TemplateRegistry;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_line(file: &GeneratedFile) -> String {
    format!(
        "{}{} {} \u{2192} {}",
        indent(1),
        file.format.name(),
        file.dimensions,
        file.path.display()
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// generate
// ============================================================================

/// Format the summary of one generated cover.
pub fn format_cover_report(report: &CoverReport) -> Vec<String> {
    let data = &report.data;
    let mut lines = vec![
        format!("{}: {}", report.slug, data.title),
        format!("{}Category: {} ({})", indent(1), data.category_label, report.source),
        format!("{}Colors: {}", indent(1), data.colors.join(" \u{2192} ")),
        format!("{}Read time: ~{} min", indent(1), data.read_time),
        format!("{}Template: {}", indent(1), report.template),
    ];
    lines.extend(report.files.iter().map(file_line));
    lines
}

pub fn print_cover_report(report: &CoverReport) {
    for line in format_cover_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// templates
// ============================================================================

/// Format the template list: id padded to a column, then display name.
pub fn format_template_list(registry: &TemplateRegistry) -> Vec<String> {
    let width = registry.ids().map(str::len).max().unwrap_or(0);
    registry
        .iter()
        .map(|def| format!("{:<width$}  {}", def.id, def.name))
        .collect()
}

pub fn print_template_list(registry: &TemplateRegistry) {
    println!("Available templates:");
    for line in format_template_list(registry) {
        println!("{}{}", indent(1), line);
    }
}

// ============================================================================
// batch
// ============================================================================

/// Format the series overview shown when `batch` is run without a series.
pub fn format_series_list(series: &[SeriesSummary], content_dir: &Path) -> Vec<String> {
    if series.is_empty() {
        return vec![format!("No series found in {}", content_dir.display())];
    }
    let mut lines = vec![format!("Available series in {}:", content_dir.display())];
    lines.extend(series.iter().map(|s| {
        let noun = if s.article_count == 1 { "article" } else { "articles" };
        format!("{}{} ({} {})", indent(1), s.name, s.article_count, noun)
    }));
    lines
}

pub fn print_series_list(series: &[SeriesSummary], content_dir: &Path) {
    for line in format_series_list(series, content_dir) {
        println!("{}", line);
    }
}

/// Format a single batch progress event as display lines.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Started { series, articles } => {
            let mut lines = vec![format!("Found {} articles in '{}':", articles.len(), series)];
            lines.extend(
                articles
                    .iter()
                    .enumerate()
                    .map(|(i, a)| format!("{}{} {}", indent(1), format_index(i + 1), file_name(a))),
            );
            lines
        }
        BatchEvent::Generated { index, report } => {
            let mut lines = vec![format!(
                "{} {}: {}",
                format_index(*index),
                report.slug,
                report.data.title
            )];
            lines.extend(report.files.iter().map(file_line));
            lines
        }
        BatchEvent::Failed {
            index,
            article,
            error,
        } => vec![
            format!("{} {} FAILED", format_index(*index), file_name(article)),
            format!("{}Error: {}", indent(1), error),
        ],
    }
}

/// Format the closing success/failure counts of a batch.
pub fn format_batch_summary(report: &BatchReport) -> Vec<String> {
    vec![format!(
        "Completed: {} successful, {} failed",
        report.succeeded.len(),
        report.failed.len()
    )]
}

pub fn print_batch_summary(report: &BatchReport) {
    for line in format_batch_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// export
// ============================================================================

/// Format the export summary: one entry per template, then failures.
pub fn format_export_report(report: &ExportReport) -> Vec<String> {
    let mut lines = Vec::new();
    for template in &report.exported {
        lines.push(format!("{} ({})", file_name(&template.html_file), template.name));
        if let Some(preview) = &template.preview {
            lines.push(format!("{}Preview: {}", indent(1), file_name(preview)));
        }
    }
    for failure in &report.failures {
        lines.push(format!("{} FAILED", failure.file_name));
        lines.push(format!("{}Error: {}", indent(1), failure.error));
    }
    lines.push(format!("Gallery \u{2192} {}", report.index_file.display()));
    lines.push(format!("Exported {} templates", report.exported.len()));
    lines
}

pub fn print_export_report(report: &ExportReport) {
    for line in format_export_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
