//! Product route handlers and display models.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;
use verdant_core::ProductId;

use crate::catalog::CatalogState;
use crate::error::{AppError, Result};
use crate::fakestore::Product;
use crate::filters;
use crate::state::AppState;

/// One of the five star symbols in a rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// CSS class rendered on the star glyph.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Full => "star star-full",
            Self::Half => "star star-half",
            Self::Empty => "star star-empty",
        }
    }

    /// Glyph for the star; half stars are clipped by CSS.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Full | Self::Half => "\u{2605}",
            Self::Empty => "\u{2606}",
        }
    }
}

/// Format a 0-5 rating as five star symbols.
///
/// Position `i` is full when `i < floor(rate)`, half when `i == floor(rate)`
/// and the fractional part is at least one half, empty otherwise.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stars(rate: f64) -> [Star; 5] {
    let rate = rate.clamp(0.0, 5.0);
    let full = rate.floor() as usize;
    let has_half = rate.fract() >= 0.5;

    std::array::from_fn(|position| {
        if position < full {
            Star::Full
        } else if position == full && has_half {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

/// Map a category label to its badge style.
///
/// Unrecognized labels fall back to the electronics style, matching the
/// observed storefront behavior for categories added upstream later.
#[must_use]
pub fn category_badge_class(category: &str) -> &'static str {
    match category {
        "jewelery" => "category-jewelery",
        "men's clothing" => "category-mens-clothing",
        "women's clothing" => "category-womens-clothing",
        _ => "category-electronics",
    }
}

/// Product display data for templates.
///
/// A pure projection of a [`Product`]; building one touches no network or
/// mutable state.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub category_class: &'static str,
    pub price: String,
    pub image: String,
    pub description: String,
    pub rating_rate: String,
    pub rating_count: u64,
    pub stars: [Star; 5],
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            category_class: category_badge_class(&product.category),
            price: product.price.display(),
            image: product.image.clone(),
            description: product.description.clone(),
            rating_rate: format!("{:.1}", product.rating.rate()),
            rating_count: product.rating.count(),
            stars: stars(product.rating.rate()),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Quick view modal fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: ProductView,
}

/// Look up a product in the loaded catalog.
fn find_product(state: &AppState, id: i64) -> Result<ProductView> {
    match state.catalog().snapshot() {
        CatalogState::Loaded(catalog) => catalog
            .products
            .iter()
            .find(|product| product.id == ProductId::new(id))
            .map(ProductView::from)
            .ok_or_else(|| AppError::NotFound(format!("product {id}"))),
        CatalogState::Loading => Err(AppError::CatalogUnavailable(
            "catalog is still loading".to_string(),
        )),
        CatalogState::Error(message) => Err(AppError::CatalogUnavailable(message)),
    }
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ProductShowTemplate> {
    let product = find_product(&state, id)?;
    Ok(ProductShowTemplate { product })
}

/// Display quick view modal fragment (for HTMX).
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<QuickViewTemplate> {
    let product = find_product(&state, id)?;
    Ok(QuickViewTemplate { product })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use verdant_core::{Price, Rating};

    use super::*;

    #[test]
    fn test_stars_with_half() {
        // 3.7: three full, one half, one empty
        assert_eq!(
            stars(3.7),
            [Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
    }

    #[test]
    fn test_stars_fraction_below_half_rounds_down() {
        // 3.4: three full, no half, two empty
        assert_eq!(
            stars(3.4),
            [Star::Full, Star::Full, Star::Full, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn test_stars_extremes() {
        assert_eq!(stars(0.0), [Star::Empty; 5]);
        assert_eq!(stars(5.0), [Star::Full; 5]);
    }

    #[test]
    fn test_stars_half_at_zero() {
        assert_eq!(
            stars(0.5),
            [Star::Half, Star::Empty, Star::Empty, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn test_category_badge_classes() {
        assert_eq!(category_badge_class("electronics"), "category-electronics");
        assert_eq!(category_badge_class("jewelery"), "category-jewelery");
        assert_eq!(
            category_badge_class("men's clothing"),
            "category-mens-clothing"
        );
        assert_eq!(
            category_badge_class("women's clothing"),
            "category-womens-clothing"
        );
    }

    #[test]
    fn test_category_badge_class_fallback() {
        assert_eq!(category_badge_class("garden tools"), "category-electronics");
    }

    #[test]
    fn test_product_view_projection() {
        let product = Product {
            id: ProductId::new(14),
            title: "Acer SB220Q bi 21.5 inches Full HD IPS Monitor".to_string(),
            category: "electronics".to_string(),
            price: Price::usd(Decimal::new(599, 1)), // 59.9
            image: "https://fakestoreapi.com/img/14.jpg".to_string(),
            description: "75 hertz".to_string(),
            rating: Rating::new(2.9, 250),
        };

        let view = ProductView::from(&product);
        assert_eq!(view.price, "$59.90");
        assert_eq!(view.rating_rate, "2.9");
        assert_eq!(view.rating_count, 250);
        assert_eq!(view.category_class, "category-electronics");
        assert_eq!(
            view.stars,
            [Star::Full, Star::Full, Star::Half, Star::Empty, Star::Empty]
        );
    }
}
