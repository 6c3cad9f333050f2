//! Catalog page and grid fragment handlers.
//!
//! The page renders whichever load state the catalog is in; the grid
//! fragment re-renders the visible product set for the current filter
//! criteria. Filtering always recomputes from the full loaded collection.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{Catalog, CatalogState, FilterCriteria, filter};
use crate::filters;
use crate::state::AppState;

use super::products::ProductView;

/// Filter query parameters, shared by the page and the grid fragment.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Search text.
    #[serde(default)]
    pub q: String,
    /// Selected category, or "all".
    #[serde(default)]
    pub category: String,
}

impl CatalogQuery {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.q, &self.category)
    }
}

/// One option in the category selector.
#[derive(Debug, Clone)]
pub struct CategoryOptionView {
    pub value: String,
    pub selected: bool,
}

/// The visible product set plus its derived affordances.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Result count line, e.g. "Showing 6 of 20 products".
    pub results_label: String,
    /// Whether the clear-filters control is shown.
    pub filters_active: bool,
    pub products: Vec<ProductView>,
}

impl GridView {
    /// Recompute the visible product set for `criteria`.
    #[must_use]
    pub fn build(catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        let visible = filter(&catalog.products, criteria);

        Self {
            results_label: results_label(visible.len(), catalog.products.len()),
            filters_active: !criteria.is_default(),
            products: visible.into_iter().map(ProductView::from).collect(),
        }
    }
}

/// Everything the loaded catalog page shows: controls plus grid.
#[derive(Debug, Clone)]
pub struct LoadedView {
    /// Current search text, echoed into the input.
    pub query: String,
    /// Category selector options ("all" first, then fetched labels).
    pub category_options: Vec<CategoryOptionView>,
    pub grid: GridView,
}

impl LoadedView {
    /// Build the loaded-page view for `criteria`.
    #[must_use]
    pub fn build(catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        let selected = criteria.category.as_str();

        let mut category_options = Vec::with_capacity(catalog.categories.len() + 1);
        category_options.push(CategoryOptionView {
            value: "all".to_string(),
            selected: selected == "all",
        });
        for label in &catalog.categories {
            category_options.push(CategoryOptionView {
                value: label.clone(),
                selected: selected == label,
            });
        }

        Self {
            query: criteria.query.clone(),
            category_options,
            grid: GridView::build(catalog, criteria),
        }
    }
}

/// Result count line shown above the grid.
#[must_use]
pub fn results_label(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Showing all {total} products")
    } else {
        format!("Showing {shown} of {total} products")
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/catalog.html")]
pub struct CatalogPageTemplate {
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: Option<LoadedView>,
}

/// Grid fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct GridTemplate {
    pub grid: GridView,
}

/// Display the catalog page in its current load state.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogPageTemplate {
    match state.catalog().snapshot() {
        CatalogState::Loading => CatalogPageTemplate {
            loading: true,
            error: None,
            loaded: None,
        },
        CatalogState::Error(message) => CatalogPageTemplate {
            loading: false,
            error: Some(message),
            loaded: None,
        },
        CatalogState::Loaded(catalog) => CatalogPageTemplate {
            loading: false,
            error: None,
            loaded: Some(LoadedView::build(&catalog, &query.criteria())),
        },
    }
}

/// Re-render the grid fragment for the current filter criteria (HTMX).
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>, Query(query): Query<CatalogQuery>) -> Response {
    match state.catalog().snapshot() {
        CatalogState::Loaded(catalog) => GridTemplate {
            grid: GridView::build(&catalog, &query.criteria()),
        }
        .into_response(),
        // The catalog flipped out of Loaded under this fragment; send the
        // browser back to the full page, which renders the current state.
        CatalogState::Loading | CatalogState::Error(_) => {
            (StatusCode::OK, [("HX-Redirect", "/")], "").into_response()
        }
    }
}

/// Re-attempt the full catalog load, then land back on the page.
#[instrument(skip(state))]
pub async fn retry(State(state): State<AppState>) -> Redirect {
    state.start_catalog_load();
    Redirect::to("/")
}
