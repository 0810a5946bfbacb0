//! Command-line interface for the metadata extractor.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::atom::parse_atom_feed;
use crate::config::ExtractionConfig;
use crate::error::{ExtractorError, Result};
use crate::extractor::MetadataExtractor;
use crate::report::ReportView;
use crate::structure::check_structure;
use crate::types::MetadataRecord;
use crate::xml::parse_bytes;

/// Legislation Metadata - Extract structured metadata from UK legislation XML.
#[derive(Parser)]
#[command(name = "legislation-metadata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract metadata records from legislation XML files.
    Extract {
        /// Legislation XML files (e.g. data.xml downloads)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Only the leading provisions, with shortened titles
        #[arg(long)]
        key_sections: bool,
    },

    /// List the entries of an Atom feed.
    Feed {
        /// Atom feed file
        file: PathBuf,
    },

    /// Check a document for expected namespaces and metadata elements.
    Check {
        /// Legislation XML file
        file: PathBuf,
    },
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
    Summary,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            files,
            format,
            key_sections,
        } => extract_command(&files, format, key_sections),
        Commands::Feed { file } => feed_command(&file),
        Commands::Check { file } => check_command(&file),
    }
}

/// Execute the extract command.
fn extract_command(files: &[PathBuf], format: OutputFormat, key_sections: bool) -> Result<()> {
    let extractor = MetadataExtractor::new(ExtractionConfig::new())?;

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.green} {pos}/{len} {msg}")
                .expect("valid template"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::new();
    let mut failed = 0;
    for file in files {
        pb.set_message(file.display().to_string());
        match extract_file(&extractor, file, key_sections) {
            Ok(record) => records.push(record),
            Err(e) => {
                failed += 1;
                pb.suspend(|| {
                    eprintln!("{} {}: {e}", style("Failed").red().bold(), file.display());
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    for record in &records {
        print!("{}", render(record, format)?);
    }

    if failed > 0 {
        return Err(ExtractorError::BatchFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn extract_file(
    extractor: &MetadataExtractor,
    path: &Path,
    key_sections: bool,
) -> Result<MetadataRecord> {
    let bytes = std::fs::read(path)?;
    let doc = parse_bytes(&bytes)?;

    let record = if key_sections {
        extractor.key_sections(&doc)
    } else {
        extractor.extract_document(&doc)
    };
    Ok(record)
}

/// Render one record in the requested format.
fn render(record: &MetadataRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(format!("---\n{}", to_yaml(record)?)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
        OutputFormat::Summary => {
            let view = ReportView::from_record(record);
            Ok(format!("{}\n", view.render_summary()))
        }
    }
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Execute the feed command.
fn feed_command(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let xml = std::str::from_utf8(&bytes)?;
    let entries = parse_atom_feed(xml)?;

    println!(
        "{} {}",
        style(entries.len()).bold(),
        style("entries").bold()
    );
    for entry in &entries {
        println!(
            "  {} {}",
            style(entry.updated.format("%Y-%m-%d")).dim(),
            style(&entry.title).green()
        );
        println!("             {}", style(&entry.uri).cyan());
    }
    Ok(())
}

/// Execute the check command.
fn check_command(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let doc = parse_bytes(&bytes)?;
    let report = check_structure(&doc);

    println!("{}", style("Namespaces").bold());
    for ns in &report.namespaces {
        println!(
            "  {} {}",
            style(ns.prefix.as_deref().unwrap_or("(default)")).cyan(),
            ns.uri
        );
    }

    if report.is_clean() {
        println!("{}", style("No structural warnings").green().bold());
    } else {
        println!(
            "{} {}",
            style("Warnings:").yellow().bold(),
            report.warnings.len()
        );
        for warning in &report.warnings {
            println!("  {warning}");
        }
    }
    Ok(())
}
