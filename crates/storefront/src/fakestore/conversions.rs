//! Wire-to-domain conversion functions.
//!
//! Prices arrive as JSON floats and are re-anchored as decimals here; a
//! price that is not representable (NaN/infinite) or negative fails the
//! whole load rather than producing a half-trusted catalog.

use rust_decimal::Decimal;
use verdant_core::{Price, ProductId, Rating};

use super::FakeStoreError;
use super::types::Product;
use super::wire::ApiProduct;

/// Convert a raw product listing into domain products.
pub(crate) fn convert_products(raw: Vec<ApiProduct>) -> Result<Vec<Product>, FakeStoreError> {
    raw.into_iter().map(convert_product).collect()
}

/// Convert a single raw product into a domain `Product`.
pub(crate) fn convert_product(raw: ApiProduct) -> Result<Product, FakeStoreError> {
    let amount = Decimal::try_from(raw.price).map_err(|e| {
        FakeStoreError::InvalidData(format!("product {}: unparseable price: {e}", raw.id))
    })?;
    let price = Price::usd(amount);
    if price.is_negative() {
        return Err(FakeStoreError::InvalidData(format!(
            "product {}: negative price {amount}",
            raw.id
        )));
    }

    Ok(Product {
        id: ProductId::new(raw.id),
        title: raw.title,
        category: raw.category,
        price,
        image: raw.image,
        description: raw.description,
        rating: Rating::new(raw.rating.rate, raw.rating.count),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::wire::ApiRating;
    use super::*;

    fn raw_product(price: f64) -> ApiProduct {
        ApiProduct {
            id: 9,
            title: "WD 2TB Elements Portable External Hard Drive".to_string(),
            price,
            description: "USB 3.0 and USB 2.0 compatibility".to_string(),
            category: "electronics".to_string(),
            image: "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg".to_string(),
            rating: ApiRating {
                rate: 3.3,
                count: 203,
            },
        }
    }

    #[test]
    fn test_convert_product() {
        let product = convert_product(raw_product(64.0)).unwrap();
        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.category, "electronics");
        assert_eq!(product.price.display(), "$64.00");
        assert!((product.rating.rate() - 3.3).abs() < f64::EPSILON);
        assert_eq!(product.rating.count(), 203);
    }

    #[test]
    fn test_convert_keeps_cents_exact() {
        let product = convert_product(raw_product(109.95)).unwrap();
        assert_eq!(product.price.display(), "$109.95");
    }

    #[test]
    fn test_convert_rejects_negative_price() {
        let result = convert_product(raw_product(-1.0));
        assert!(matches!(result, Err(FakeStoreError::InvalidData(_))));
    }

    #[test]
    fn test_convert_rejects_nan_price() {
        let result = convert_product(raw_product(f64::NAN));
        assert!(matches!(result, Err(FakeStoreError::InvalidData(_))));
    }

    #[test]
    fn test_convert_products_fails_on_first_bad_record() {
        let raw = vec![raw_product(10.0), raw_product(-2.0)];
        assert!(convert_products(raw).is_err());
    }

    #[test]
    fn test_convert_clamps_out_of_scale_rating() {
        let mut raw = raw_product(5.0);
        raw.rating.rate = 9.9;
        let product = convert_product(raw).unwrap();
        assert!((product.rating.rate() - 5.0).abs() < f64::EPSILON);
    }
}
