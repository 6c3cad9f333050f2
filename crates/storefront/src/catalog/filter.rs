//! Pure product filtering.
//!
//! Two predicates compose by logical AND: a case-insensitive substring match
//! on the title, and an exact (case-sensitive) category match. Category
//! labels come verbatim from the API, which is why that side stays
//! case-sensitive while search text does not.

use crate::fakestore::Product;

/// The category axis of the filter criteria.
///
/// `All` is the sentinel meaning "no category filter applied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category constraint.
    All,
    /// Only products whose category equals this label exactly.
    Named(String),
}

impl CategorySelection {
    /// Parse a selector value; empty input and the literal `all` mean no
    /// constraint, anything else is a verbatim category label.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => Self::All,
            label => Self::Named(label.to_string()),
        }
    }

    /// The selector value this selection round-trips to.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Named(label) => label,
        }
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::All
    }
}

/// Session filter criteria: search text plus selected category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Search text, stored trimmed. Empty imposes no constraint.
    pub query: String,
    /// Category selection.
    pub category: CategorySelection,
}

impl FilterCriteria {
    /// Build criteria from raw user input (query text is trimmed).
    #[must_use]
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            category: CategorySelection::parse(category),
        }
    }

    /// True when neither predicate constrains the catalog.
    ///
    /// Gates the clear-filters affordance.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.category == CategorySelection::All
    }
}

/// Compute the visible subset of `all` under `criteria`.
///
/// Pure and deterministic; the output preserves the relative order of `all`
/// and is always a subsequence of it. An empty result is valid.
#[must_use]
pub fn filter<'a>(all: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let query = criteria.query.to_lowercase();

    all.iter()
        .filter(|product| {
            query.is_empty() || product.title.to_lowercase().contains(&query)
        })
        .filter(|product| match &criteria.category {
            CategorySelection::All => true,
            CategorySelection::Named(label) => product.category == *label,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;
    use verdant_core::{Price, ProductId, Rating};

    use super::*;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            category: category.to_string(),
            price: Price::usd(Decimal::new(999, 2)),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            description: String::new(),
            rating: Rating::new(4.0, 10),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing"),
            product(2, "Solid Gold Petite Micropave", "jewelery"),
            product(3, "WD 2TB Elements Portable External Hard Drive", "electronics"),
            product(4, "Opna Women's Short Sleeve Moisture Shirt", "women's clothing"),
            product(5, "SanDisk SSD PLUS 1TB Internal SSD", "electronics"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let all = sample();
        let visible = filter(&all, &FilterCriteria::new("", "all"));
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_output_preserves_order() {
        let all = sample();
        let visible = filter(&all, &FilterCriteria::new("s", "all"));
        let got = ids(&visible);
        let mut sorted = got.clone();
        sorted.sort_unstable();
        assert_eq!(got, sorted, "filter must not reorder products");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let all = sample();
        let upper = filter(&all, &FilterCriteria::new("SHIRT", "all"));
        let lower = filter(&all, &FilterCriteria::new("shirt", "all"));
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), vec![1, 4]);
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let all = sample();

        let mens = filter(&all, &FilterCriteria::new("", "men's clothing"));
        assert_eq!(ids(&mens), vec![1]);

        let womens = filter(&all, &FilterCriteria::new("", "women's clothing"));
        assert_eq!(ids(&womens), vec![4]);

        // Case differs from the verbatim label: no match.
        let cased = filter(&all, &FilterCriteria::new("", "Men's Clothing"));
        assert!(cased.is_empty());
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let all = sample();
        let visible = filter(&all, &FilterCriteria::new("ssd", "electronics"));
        assert_eq!(ids(&visible), vec![5]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let criteria = FilterCriteria::new("shirt", "women's clothing");

        let once: Vec<Product> = filter(&all, &criteria).into_iter().cloned().collect();
        let twice = filter(&once, &criteria);
        assert_eq!(ids(&twice), vec![4]);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let all = sample();
        let visible = filter(&all, &FilterCriteria::new("zzzz", "all"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let criteria = FilterCriteria::new("  shirt  ", "all");
        assert_eq!(criteria.query, "shirt");
        assert!(!criteria.is_default());
    }

    #[test]
    fn test_is_default() {
        assert!(FilterCriteria::new("", "all").is_default());
        assert!(FilterCriteria::new("   ", "").is_default());
        assert!(!FilterCriteria::new("x", "all").is_default());
        assert!(!FilterCriteria::new("", "jewelery").is_default());
    }
}
