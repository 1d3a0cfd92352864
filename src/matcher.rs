use tracing::debug;

use crate::{catalogue::Catalogue, usd::Usd};

/// The outcome of looking up one sale's product in the catalogue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Match<'a> {
    Matched { name: &'a str, price: Usd },
    Unmatched { product: &'a str },
}

/// Finds the catalogue entry for the sold product `product`.
///
/// Returns the first entry, in catalogue order, whose name contains
/// `product` ignoring case. Only this direction is tried: a short label like
/// `strawberry` finds `Sweet fresh strawberry`, never the other way round.
/// Later entries are not considered once a match is found, even if they would
/// fit more closely.
///
/// An empty `product` is never matched.
///
/// # Examples
///
/// ```
/// # use salestotal::{find_match, Catalogue, CatalogueEntry, Match, Usd};
/// let catalogue = Catalogue::build(vec![
///     CatalogueEntry::new("Apple", 1.0),
///     CatalogueEntry::new("Green Apple", 1.5),
/// ]);
/// assert_eq!(
///     find_match("apple", &catalogue),
///     Match::Matched { name: "Apple", price: Usd::new(1.0) }
/// );
/// assert_eq!(
///     find_match("Bread", &catalogue),
///     Match::Unmatched { product: "Bread" }
/// );
/// ```
#[must_use]
pub fn find_match<'a>(product: &'a str, catalogue: &'a Catalogue) -> Match<'a> {
    if product.is_empty() {
        debug!("empty product name, not matching");
        return Match::Unmatched { product };
    }
    let needle = product.to_lowercase();
    catalogue
        .iter_folded()
        .find(|(_, folded)| folded.contains(&needle))
        .map_or(Match::Unmatched { product }, |(entry, _)| {
            debug!(product = %product, matched = %entry.name, "matched sale");
            Match::Matched {
                name: &entry.name,
                price: entry.price,
            }
        })
}
