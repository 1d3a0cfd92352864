#![doc = include_str!("../README.md")]
use std::{path::Path, time::Instant};

mod catalogue;
mod error;
mod matcher;
mod records;
mod report;
mod usd;

pub use catalogue::{read_catalogue, Catalogue, CatalogueEntry};
pub use error::{Error, Result};
pub use matcher::{find_match, Match};
pub use records::read_records;
pub use report::{read_sales, Report, Sale};
pub use usd::Usd;

/// Reads the catalogue at `catalogue_path` and the sales log at `sales_path`,
/// and totals the sales.
///
/// The returned report's elapsed time covers reading both documents as well
/// as the totalling. Nothing is written anywhere; use
/// [`Report::write_results`] for that.
///
/// # Errors
///
/// Returns any errors from [`read_catalogue`] or [`read_sales`]. The
/// catalogue is read first, so if both documents are bad, the catalogue's
/// error is the one reported.
pub fn run(catalogue_path: impl AsRef<Path>, sales_path: impl AsRef<Path>) -> Result<Report> {
    let start = Instant::now();
    let catalogue = read_catalogue(catalogue_path)?;
    let sales = read_sales(sales_path)?;
    let report = Report::accumulate(&sales, &catalogue);
    Ok(report.with_elapsed(start.elapsed()))
}
