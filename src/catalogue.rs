use serde::Deserialize;

use std::{collections::HashMap, path::Path};

use crate::{
    error::{Error, Result},
    records::read_records,
    usd::Usd,
};

/// Defines the JSON format for a price catalogue entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogueEntry {
    #[serde(rename = "title")]
    pub name: String,
    pub price: Usd,
}

impl CatalogueEntry {
    pub fn new(name: impl Into<String>, price: impl Into<Usd>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug)]
struct Indexed {
    entry: CatalogueEntry,
    folded: String,
}

/// Looks up prices by catalogue name.
///
/// Entries keep the order in which their names first appeared. If a name
/// appears more than once, the later price replaces the earlier one but the
/// entry stays where the name was first seen.
///
/// To create a `Catalogue`, use [`Catalogue::build`] or [`read_catalogue`].
#[derive(Debug, Default)]
pub struct Catalogue {
    entries: Vec<Indexed>,
    positions: HashMap<String, usize>,
}

impl Catalogue {
    /// Builds the index from `entries`, in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use salestotal::{Catalogue, CatalogueEntry, Usd};
    /// let catalogue = Catalogue::build(vec![
    ///     CatalogueEntry::new("Milk", 2.0),
    ///     CatalogueEntry::new("Milk", 2.5),
    /// ]);
    /// assert_eq!(catalogue.len(), 1);
    /// assert_eq!(catalogue.price("Milk"), Some(Usd::new(2.5)));
    /// ```
    #[must_use]
    pub fn build(entries: impl IntoIterator<Item = CatalogueEntry>) -> Self {
        let mut catalogue = Self::default();
        for entry in entries {
            if let Some(&pos) = catalogue.positions.get(&entry.name) {
                catalogue.entries[pos].entry.price = entry.price;
            } else {
                catalogue
                    .positions
                    .insert(entry.name.clone(), catalogue.entries.len());
                catalogue.entries.push(Indexed {
                    folded: entry.name.to_lowercase(),
                    entry,
                });
            }
        }
        catalogue
    }

    /// Returns the price recorded for exactly `name` (case-sensitive), if any.
    #[must_use]
    pub fn price(&self, name: &str) -> Option<Usd> {
        self.positions
            .get(name)
            .map(|&pos| self.entries[pos].entry.price)
    }

    /// Iterates over the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter().map(|i| &i.entry)
    }

    /// Iterates over the entries in index order, paired with their lower-cased
    /// names.
    pub(crate) fn iter_folded(&self) -> impl Iterator<Item = (&CatalogueEntry, &str)> {
        self.entries.iter().map(|i| (&i.entry, i.folded.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads a price catalogue from the JSON document at `path`.
///
/// The document is an array of objects, each with at least a `title` string
/// and a numeric `price`:
///
/// ```json
/// [{"title": "Sweet fresh strawberry", "price": 3.50}]
/// ```
///
/// # Errors
///
/// Returns any errors from [`read_records`], and [`Error::MalformedRecord`]
/// for an entry whose `title` is empty.
pub fn read_catalogue(path: impl AsRef<Path>) -> Result<Catalogue> {
    let path = path.as_ref();
    let entries: Vec<CatalogueEntry> = read_records(path)?;
    if let Some(index) = entries.iter().position(|e| e.name.is_empty()) {
        return Err(Error::MalformedRecord {
            path: path.to_path_buf(),
            index,
            reason: "empty title".into(),
        });
    }
    Ok(Catalogue::build(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fn_keeps_document_order() {
        let catalogue = Catalogue::build(vec![
            CatalogueEntry::new("Banana", 0.5),
            CatalogueEntry::new("Apple", 1.0),
        ]);
        let names: Vec<_> = catalogue.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Banana", "Apple"]);
    }

    #[test]
    fn build_fn_lets_last_duplicate_price_win_in_first_position() {
        let catalogue = Catalogue::build(vec![
            CatalogueEntry::new("Apple", 1.0),
            CatalogueEntry::new("Pear", 2.0),
            CatalogueEntry::new("Apple", 1.25),
        ]);
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.price("Apple"), Some(Usd::new(1.25)));
        let first = catalogue.iter().next().unwrap();
        assert_eq!(first, &CatalogueEntry::new("Apple", 1.25));
    }

    #[test]
    fn build_fn_treats_names_differing_in_case_as_distinct() {
        let catalogue = Catalogue::build(vec![
            CatalogueEntry::new("apple", 1.0),
            CatalogueEntry::new("Apple", 2.0),
        ]);
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.price("apple"), Some(Usd::new(1.0)));
        assert_eq!(catalogue.price("APPLE"), None);
    }

    #[test]
    fn read_catalogue_fn_correctly_parses_catalogue_data() {
        let catalogue = read_catalogue("testdata/catalogue_c.json").unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.price("Green Apple"), Some(Usd::new(1.5)));
    }

    #[test]
    fn read_catalogue_fn_rejects_entry_without_price() {
        let err = read_catalogue("testdata/catalogue_missing_price.json").unwrap_err();
        assert!(
            matches!(err, Error::MalformedRecord { index: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn read_catalogue_fn_rejects_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.json");
        std::fs::write(&path, r#"[{"title": "", "price": 1.0}]"#).unwrap();
        let err = read_catalogue(&path).unwrap_err();
        assert!(
            matches!(err, Error::MalformedRecord { index: 0, .. }),
            "{err:?}"
        );
    }
}
