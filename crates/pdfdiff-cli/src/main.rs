// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfdiff — compare two PDFs visually, writing a new PDF whose pages
// highlight the differences.
//
// Entry point. Initialises logging, parses arguments, and runs the
// comparison pipeline.

use std::path::PathBuf;

use clap::Parser;

use pdfdiff_core::config::{CompareOptions, GeometryPolicy, PageCountPolicy};
use pdfdiff_core::error::PdfDiffError;
use pdfdiff_core::types::DiffMethod;
use pdfdiff_document::{Rasterizer, compare_files};

#[derive(Debug, Parser)]
#[command(
    name = "pdfdiff",
    version,
    about = "Compare two PDFs page by page, producing a PDF that highlights the visual differences"
)]
struct Cli {
    /// First input PDF
    pdf_1: PathBuf,

    /// Second input PDF
    pdf_2: PathBuf,

    /// The resulting diff of the PDFs
    #[arg(long, default_value = "diff.pdf")]
    output: PathBuf,

    /// The method to use for visualizing differences: "any" paints changed
    /// pixels red, "xor" tints them by the raw difference
    #[arg(long, default_value = "any")]
    method: String,

    /// DPI (resolution) to use for comparisons
    #[arg(long, default_value_t = 192.0)]
    dpi: f32,

    /// Abort instead of truncating when the documents have different page counts
    #[arg(long)]
    fail_on_page_count: bool,

    /// Abort instead of logging when a page pair has different rectangles
    #[arg(long)]
    fail_on_geometry: bool,

    /// Logging verbosity
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Logging verbosity
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    fn compare_options(&self) -> Result<CompareOptions, PdfDiffError> {
        Ok(CompareOptions {
            dpi: self.dpi,
            method: self.method.parse::<DiffMethod>()?,
            page_count_policy: if self.fail_on_page_count {
                PageCountPolicy::Fail
            } else {
                PageCountPolicy::Truncate
            },
            geometry_policy: if self.fail_on_geometry {
                GeometryPolicy::Abort
            } else {
                GeometryPolicy::Tolerate
            },
        })
    }
}

fn main() -> Result<(), PdfDiffError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_level())),
        )
        .init();

    // Reject a bad method before any document is opened.
    let options = cli.compare_options()?;

    tracing::info!(
        dpi = options.dpi,
        method = %options.method,
        output = %cli.output.display(),
        "pdfdiff starting"
    );

    let rasterizer = Rasterizer::new()?;
    let output = compare_files(&rasterizer, &cli.pdf_1, &cli.pdf_2, &options)?;
    output.save(&cli.output)?;

    Ok(())
}
