//! Search filter state and the price-range reference data.
//!
//! `SearchFilters` is the single source of truth for the search page: it is
//! parsed from the URL query string on every request and serialized back into
//! the links the page emits, so bookmarks and back/forward navigation always
//! reproduce the same state. Every field is present even when empty; an empty
//! string means "no constraint" and is omitted from serialized query strings.

use serde::{Deserialize, Serialize};

/// The complete set of search constraints a visitor can apply.
///
/// Field values are kept as raw strings exactly as they appear in the query
/// string. Typed accessors parse on demand and treat malformed input the same
/// as an absent constraint, so a hand-edited URL can never break the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Category identifier, or empty for any category.
    #[serde(default, rename = "categoryId", skip_serializing_if = "String::is_empty")]
    pub category_id: String,
    /// Free-text location term (an address fragment or a pinned `lat,lon`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Opaque price bucket token, resolved to bounds server-side.
    #[serde(default, rename = "priceRange", skip_serializing_if = "String::is_empty")]
    pub price_range: String,
    /// Minimum bedroom count as a numeric string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bedroom: String,
}

impl SearchFilters {
    /// Returns true when no dimension carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.category_id.is_empty()
            && self.location.is_empty()
            && self.price_range.is_empty()
            && self.bedroom.is_empty()
    }

    /// Parsed category id, `None` when empty or malformed.
    pub fn category_id(&self) -> Option<i32> {
        self.category_id.trim().parse().ok()
    }

    /// Trimmed location term, `None` when empty.
    pub fn location(&self) -> Option<&str> {
        let trimmed = self.location.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// The price bucket the token refers to, `None` for empty or unknown
    /// tokens.
    pub fn price_range(&self) -> Option<&'static PriceRange> {
        resolve_price_range(self.price_range.trim())
    }

    /// Parsed minimum bedroom count, `None` when empty or malformed.
    pub fn bedroom(&self) -> Option<i32> {
        self.bedroom.trim().parse().ok()
    }

    /// Serializes the filters into a query string containing only the
    /// non-empty fields. An unconstrained filter serializes to `""`.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

/// A price bucket offered by the filter panel.
///
/// The `value` token is all a client ever sends back; the bounds are applied
/// when the listing query is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub value: &'static str,
    pub label: &'static str,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Reference list of price buckets, in display order.
pub const PRICE_RANGES: &[PriceRange] = &[
    PriceRange {
        value: "under-500",
        label: "Under $500",
        min: None,
        max: Some(500),
    },
    PriceRange {
        value: "500-1000",
        label: "$500 - $1,000",
        min: Some(500),
        max: Some(1000),
    },
    PriceRange {
        value: "1000-2000",
        label: "$1,000 - $2,000",
        min: Some(1000),
        max: Some(2000),
    },
    PriceRange {
        value: "2000-3500",
        label: "$2,000 - $3,500",
        min: Some(2000),
        max: Some(3500),
    },
    PriceRange {
        value: "over-3500",
        label: "Over $3,500",
        min: Some(3500),
        max: None,
    },
];

/// Looks up a bucket by its token.
pub fn resolve_price_range(token: &str) -> Option<&'static PriceRange> {
    PRICE_RANGES.iter().find(|range| range.value == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> SearchFilters {
        serde_html_form::from_str(query).expect("query string should deserialize")
    }

    #[test]
    fn query_string_round_trip() {
        let filters = SearchFilters {
            category_id: "3".into(),
            location: "Miami".into(),
            price_range: "500-1000".into(),
            bedroom: "2".into(),
        };

        let query = filters.to_query_string();
        assert_eq!(parse(&query), filters);
        assert_eq!(parse(&query).to_query_string(), query);
    }

    #[test]
    fn empty_fields_collapse_to_absent_parameters() {
        let filters = SearchFilters {
            category_id: "1".into(),
            bedroom: "2".into(),
            ..SearchFilters::default()
        };

        assert_eq!(filters.to_query_string(), "categoryId=1&bedroom=2");
    }

    #[test]
    fn unconstrained_filters_serialize_to_nothing() {
        assert!(SearchFilters::default().is_empty());
        assert_eq!(SearchFilters::default().to_query_string(), "");
    }

    #[test]
    fn absent_parameters_default_to_empty_fields() {
        let filters = parse("bedroom=3");
        assert_eq!(filters.bedroom, "3");
        assert!(filters.category_id.is_empty());
        assert!(filters.location.is_empty());
        assert!(filters.price_range.is_empty());
    }

    #[test]
    fn malformed_values_act_as_no_constraint() {
        let filters = SearchFilters {
            category_id: "abc".into(),
            bedroom: "two".into(),
            price_range: "mystery-bucket".into(),
            ..SearchFilters::default()
        };

        assert_eq!(filters.category_id(), None);
        assert_eq!(filters.bedroom(), None);
        assert!(filters.price_range().is_none());
    }

    #[test]
    fn location_is_trimmed() {
        let filters = SearchFilters {
            location: "  Austin  ".into(),
            ..SearchFilters::default()
        };
        assert_eq!(filters.location(), Some("Austin"));
        assert_eq!(SearchFilters::default().location(), None);
    }

    #[test]
    fn price_tokens_resolve_to_bounds() {
        let range = resolve_price_range("1000-2000").expect("known token");
        assert_eq!(range.min, Some(1000));
        assert_eq!(range.max, Some(2000));

        let open_ended = resolve_price_range("over-3500").expect("known token");
        assert_eq!(open_ended.max, None);

        assert!(resolve_price_range("").is_none());
        assert!(resolve_price_range("not-a-bucket").is_none());
    }
}
