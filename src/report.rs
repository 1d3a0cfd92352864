use serde::Deserialize;
use tracing::info;

use std::{
    fmt::Display,
    io::Write,
    path::Path,
    time::Duration,
};

use crate::{
    catalogue::Catalogue,
    error::Result,
    matcher::{find_match, Match},
    records::read_records,
    usd::Usd,
};

/// Defines the JSON format for sales data.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Sale {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub qty: f64,
}

impl Sale {
    pub fn new(product: impl Into<String>, qty: f64) -> Self {
        Self {
            product: product.into(),
            qty,
        }
    }
}

/// Reads the sales log from the JSON document at `path`.
///
/// The document is an array of objects, each with at least a `Product`
/// string and a numeric `Quantity`.
///
/// # Errors
///
/// Returns any errors from [`read_records`].
pub fn read_sales(path: impl AsRef<Path>) -> Result<Vec<Sale>> {
    read_records(path)
}

/// Holds the outcome of totalling a sales log against a catalogue.
///
/// To create a `Report`, use [`Report::accumulate`].
///
/// To get the printable result lines, use its [`Display`] implementation, or
/// [`Report::write_results`] to send them to a file.
#[derive(Debug, Default)]
pub struct Report {
    total: Usd,
    warnings: Vec<String>,
    matched: usize,
    elapsed: Duration,
}

impl Report {
    /// Totals `sales` against `catalogue`.
    ///
    /// Each sale that matches a catalogue entry (see [`find_match`]) adds the
    /// entry's price times the sale's quantity to the total. Quantities and
    /// prices are used as given, including negative or fractional ones. Each
    /// sale that doesn't match adds one warning instead, in sale order.
    ///
    /// The elapsed time is left at zero; set it with [`Report::with_elapsed`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use salestotal::{Catalogue, CatalogueEntry, Report, Sale, Usd};
    /// let catalogue = Catalogue::build(vec![CatalogueEntry::new("Milk", 2.0)]);
    /// let report = Report::accumulate(
    ///     &[Sale::new("milk", 3.0), Sale::new("Bread", 1.0)],
    ///     &catalogue,
    /// );
    /// assert_eq!(report.total(), Usd::new(6.0));
    /// assert_eq!(
    ///     report.warnings(),
    ///     ["Warning: Product 'Bread' not found in price catalog."]
    /// );
    /// ```
    #[must_use]
    pub fn accumulate(sales: &[Sale], catalogue: &Catalogue) -> Self {
        let mut report = Self::default();
        for sale in sales {
            match find_match(&sale.product, catalogue) {
                Match::Matched { price, .. } => {
                    report.total += price * sale.qty;
                    report.matched += 1;
                }
                Match::Unmatched { product } if product.is_empty() => report
                    .warnings
                    .push("Warning: Product '' has an empty name and was not matched.".into()),
                Match::Unmatched { product } => report.warnings.push(format!(
                    "Warning: Product '{product}' not found in price catalog."
                )),
            }
        }
        info!(
            catalogue = catalogue.len(),
            sales = sales.len(),
            matched = report.matched,
            unmatched = report.warnings.len(),
            total = %report.total,
            "totalled sales"
        );
        report
    }

    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    #[must_use]
    pub fn total(&self) -> Usd {
        self.total
    }

    /// Returns one warning per unmatched sale, in sale order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Writes the result lines to `sink`, without a trailing newline.
    ///
    /// Warnings are not included.
    ///
    /// # Errors
    ///
    /// Returns any errors from writing to `sink`.
    pub fn write_results(&self, mut sink: impl Write) -> Result<()> {
        write!(sink, "{self}")?;
        sink.flush()?;
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Sales: ${}", self.total)?;
        write!(
            f,
            "Execution Time: {:.2} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}
