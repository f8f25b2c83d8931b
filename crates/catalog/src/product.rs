//! Product data model: a closed set of product shapes.
//!
//! Every product is exactly one of two variants (physical or digital). The
//! set is closed on purpose: classification dispatches over it with
//! exhaustive `match`, so there is no "unknown product kind" branch anywhere
//! in the domain.

use serde::{Deserialize, Serialize};

use pedidos_core::{DomainError, DomainResult};

/// A physical product: has a shipping weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProduct {
    pub name: String,
    /// Price in the order's currency. Non-negative.
    pub price: f64,
    /// Shipping weight in kilograms. Non-negative.
    pub weight_in_kg: f64,
}

impl PhysicalProduct {
    /// Create a physical product, rejecting negative price or weight.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight_in_kg: f64,
    ) -> DomainResult<Self> {
        if price < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        if weight_in_kg < 0.0 {
            return Err(DomainError::validation("weight must be non-negative"));
        }
        Ok(Self {
            name: name.into(),
            price,
            weight_in_kg,
        })
    }
}

/// A digital product: delivered via download, never shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalProduct {
    pub name: String,
    /// Price in the order's currency. Non-negative.
    pub price: f64,
    pub download_link: String,
}

impl DigitalProduct {
    /// Create a digital product, rejecting a negative price.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        download_link: impl Into<String>,
    ) -> DomainResult<Self> {
        if price < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(Self {
            name: name.into(),
            price,
            download_link: download_link.into(),
        })
    }
}

/// A product in an order: physical or digital, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Product {
    Physical(PhysicalProduct),
    Digital(DigitalProduct),
}

impl Product {
    /// Create a physical product wrapped in the `Product` sum.
    pub fn physical(
        name: impl Into<String>,
        price: f64,
        weight_in_kg: f64,
    ) -> DomainResult<Self> {
        Ok(Self::Physical(PhysicalProduct::new(name, price, weight_in_kg)?))
    }

    /// Create a digital product wrapped in the `Product` sum.
    pub fn digital(
        name: impl Into<String>,
        price: f64,
        download_link: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self::Digital(DigitalProduct::new(name, price, download_link)?))
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Physical(p) => &p.name,
            Product::Digital(d) => &d.name,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Product::Physical(p) => p.price,
            Product::Digital(d) => d.price,
        }
    }

    /// Project the physical variant, if any.
    ///
    /// Weight aggregation filters on this: digital products are excluded
    /// from the sum entirely, not treated as zero-weight physicals.
    pub fn as_physical(&self) -> Option<&PhysicalProduct> {
        match self {
            Product::Physical(p) => Some(p),
            Product::Digital(_) => None,
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, Product::Physical(_))
    }

    pub fn is_digital(&self) -> bool {
        matches!(self, Product::Digital(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_constructor_accepts_valid_values() {
        let product = Product::physical("Smartphone", 600.0, 0.5).unwrap();
        assert_eq!(product.name(), "Smartphone");
        assert_eq!(product.price(), 600.0);
        assert!(product.is_physical());
        assert!(!product.is_digital());
        assert_eq!(product.as_physical().unwrap().weight_in_kg, 0.5);
    }

    #[test]
    fn digital_constructor_accepts_valid_values() {
        let product = Product::digital("Ebook", 50.0, "http://download.link/ebook").unwrap();
        assert_eq!(product.name(), "Ebook");
        assert_eq!(product.price(), 50.0);
        assert!(product.is_digital());
        assert!(product.as_physical().is_none());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Product::physical("X", -1.0, 0.5).unwrap_err();
        assert_eq!(err, DomainError::validation("price must be non-negative"));

        let err = Product::digital("Y", -0.01, "link").unwrap_err();
        assert_eq!(err, DomainError::validation("price must be non-negative"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = Product::physical("X", 1.0, -0.5).unwrap_err();
        assert_eq!(err, DomainError::validation("weight must be non-negative"));
    }

    #[test]
    fn zero_price_and_zero_weight_are_valid() {
        assert!(Product::physical("Brinde", 0.0, 0.0).is_ok());
        assert!(Product::digital("Gratuito", 0.0, "link").is_ok());
    }

    #[test]
    fn serde_tags_the_variant() {
        let product = Product::digital("Ebook", 50.0, "http://download.link/ebook").unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["kind"], "digital");
        assert_eq!(json["download_link"], "http://download.link/ebook");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any non-negative price/weight pair constructs a
            /// physical product that echoes its inputs back unchanged.
            #[test]
            fn non_negative_physical_always_constructs(
                price in 0.0f64..1_000_000.0,
                weight in 0.0f64..10_000.0
            ) {
                let product = Product::physical("Item", price, weight).unwrap();
                prop_assert_eq!(product.price(), price);
                prop_assert_eq!(product.as_physical().unwrap().weight_in_kg, weight);
            }

            /// Property: a negative price is rejected for both variants.
            #[test]
            fn negative_price_never_constructs(price in -1_000_000.0f64..-f64::EPSILON) {
                prop_assert!(Product::physical("Item", price, 1.0).is_err());
                prop_assert!(Product::digital("Item", price, "link").is_err());
            }
        }
    }
}
