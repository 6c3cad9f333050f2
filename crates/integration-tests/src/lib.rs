//! Integration tests for Verdant Market.
//!
//! The tests exercise the storefront library across module boundaries:
//! catalog load-state transitions, filtering, and the view models the
//! templates render. They run without the network; upstream payload parsing
//! is covered by fixture tests inside the storefront crate.
//!
//! # Test Categories
//!
//! - `catalog_flow` - load, filter, count, and clear-filters flows
//! - `load_states` - loading/error/retry state machine flows

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use verdant_core::{Price, ProductId, Rating};
use verdant_storefront::catalog::Catalog;
use verdant_storefront::fakestore::Product;

/// Build a deterministic test catalog with the given number of products per
/// category, ids assigned in listing order starting at 1.
#[must_use]
pub fn seed_catalog(counts: &[(&str, usize)]) -> Catalog {
    let mut products = Vec::new();
    let mut id: i64 = 0;

    for (category, count) in counts {
        for _ in 0..*count {
            id += 1;
            products.push(Product {
                id: ProductId::new(id),
                title: format!("{category} item {id}"),
                category: (*category).to_string(),
                price: Price::usd(Decimal::new(id * 100 + 99, 2)),
                image: format!("https://fakestoreapi.com/img/{id}.jpg"),
                description: format!("Test product {id}"),
                rating: Rating::new(3.5, 10),
            });
        }
    }

    Catalog {
        products,
        categories: counts.iter().map(|(category, _)| (*category).to_string()).collect(),
    }
}
