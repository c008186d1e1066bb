// crates/trails-core/src/filter.rs

//! The two pure derivation functions behind the explore view.
//!
//! Both are free functions over a borrowed collection so they stay testable
//! independent of any transport or UI layer; [`crate::Explorer`] calls them
//! whenever its tracked inputs change.

use crate::model::Place;
use crate::text::fold_key;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Derives the category picker entries for a collection.
///
/// Returns `["All"]` followed by every distinct non-empty category value in
/// first-seen order. Records without a category are silently skipped.
pub fn derive_categories(items: &[Place]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for place in items {
        if place.category.is_empty() {
            continue;
        }
        if !out[1..].contains(&place.category) {
            out.push(place.category.clone());
        }
    }
    out
}

/// Derives the filtered view of a collection.
///
/// A record survives when:
/// - `category` is empty or [`ALL_CATEGORIES`], or equals the record's
///   category exactly, AND
/// - `query` (trimmed) is empty, or its folded form is a substring of the
///   folded name, city, region, description, or space-joined tag list.
///
/// Substring containment only, no tokenization, no ranking; the source
/// order is preserved. Never fails.
pub fn apply_filter<'a>(items: &'a [Place], query: &str, category: &str) -> Vec<&'a Place> {
    let term = fold_key(query.trim());
    let any_category = category.is_empty() || category == ALL_CATEGORIES;

    items
        .iter()
        .filter(|place| {
            let match_cat = any_category || place.category == category;
            let match_q = term.is_empty() || matches_query(place, &term);
            match_cat && match_q
        })
        .collect()
}

/// Checks the folded query term against every searchable field of a place.
fn matches_query(place: &Place, term: &str) -> bool {
    let fields = [
        place.name.as_str(),
        place.city.as_str(),
        place.region.as_deref().unwrap_or(""),
        place.description.as_deref().unwrap_or(""),
    ];

    if fields.iter().any(|f| fold_key(f).contains(term)) {
        return true;
    }

    fold_key(&place.tags.join(" ")).contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, city: &str, category: &str, tags: &[&str]) -> Place {
        Place {
            name: name.to_string(),
            city: city.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Place::default()
        }
    }

    fn sample() -> Vec<Place> {
        vec![
            place("Mysore Palace", "Mysuru", "Palace", &["royal"]),
            place("Hampi", "Hampi", "Ruins", &["unesco"]),
        ]
    }

    #[test]
    fn categories_start_with_all() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
        assert_eq!(derive_categories(&sample()), vec!["All", "Palace", "Ruins"]);
    }

    #[test]
    fn categories_keep_first_seen_order_without_duplicates() {
        let items = vec![
            place("Gol Gumbaz", "Vijayapura", "Tomb", &[]),
            place("Mysore Palace", "Mysuru", "Palace", &[]),
            place("Bara Kaman", "Vijayapura", "Tomb", &[]),
        ];
        assert_eq!(derive_categories(&items), vec!["All", "Tomb", "Palace"]);
    }

    #[test]
    fn empty_categories_are_skipped() {
        let items = vec![
            place("Unknown Site", "Somewhere", "", &[]),
            place("Hampi", "Hampi", "Ruins", &[]),
        ];
        assert_eq!(derive_categories(&items), vec!["All", "Ruins"]);
    }

    #[test]
    fn empty_filter_is_identity() {
        let items = sample();
        let out = apply_filter(&items, "", "");
        assert_eq!(out.len(), items.len());
        assert_eq!(out[0].name, "Mysore Palace");
        assert_eq!(out[1].name, "Hampi");
    }

    #[test]
    fn all_sentinel_is_unrestricted() {
        let items = sample();
        assert_eq!(apply_filter(&items, "", ALL_CATEGORIES).len(), items.len());
    }

    #[test]
    fn category_filter_matches_exactly() {
        let items = sample();
        let out = apply_filter(&items, "", "Palace");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Mysore Palace");

        // Exact equality, not folded: case-mismatched selection matches nothing.
        assert!(apply_filter(&items, "", "palace").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let items = sample();
        let upper = apply_filter(&items, "MYSORE", "");
        let lower = apply_filter(&items, "mysore", "");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, lower[0].name);
    }

    #[test]
    fn query_is_trimmed() {
        let items = sample();
        let out = apply_filter(&items, "  hampi  ", "");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Hampi");
    }

    #[test]
    fn query_checks_tags() {
        let items = vec![place("Chennakeshava Temple", "Belur", "Temple", &["hoysala"])];
        let out = apply_filter(&items, "hoysala", "");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn query_checks_region_and_description() {
        let mut temple = place("Durga Temple", "Aihole", "Temple", &[]);
        temple.region = Some("Bagalkot".to_string());
        temple.description = Some("Chalukyan experiment in apsidal design".to_string());
        let items = vec![temple];

        assert_eq!(apply_filter(&items, "bagalkot", "").len(), 1);
        assert_eq!(apply_filter(&items, "chalukyan", "").len(), 1);
    }

    #[test]
    fn query_and_category_combine() {
        let items = sample();
        assert_eq!(apply_filter(&items, "unesco", "Ruins").len(), 1);
        assert!(apply_filter(&items, "unesco", "Palace").is_empty());
    }

    // Scenario from the original demo data set.
    #[test]
    fn unesco_query_returns_hampi() {
        let items = sample();
        assert_eq!(derive_categories(&items), vec!["All", "Palace", "Ruins"]);
        let out = apply_filter(&items, "unesco", "");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Hampi");
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let items = sample();
        assert!(apply_filter(&items, "zzz-no-match", "").is_empty());
        assert!(apply_filter(&items, "", "Fort").is_empty());
    }
}
