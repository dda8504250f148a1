use super::OpenGraphObject;
use crate::render::{MetaTag, ToMetaTags};

/// `og:type=product` with price information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub og: OpenGraphObject,
    /// Decimal amount, e.g. `"29.99"`.
    pub price: String,
    /// ISO 4217 code, e.g. `"USD"`.
    pub price_currency: String,
}

impl Product {
    pub fn new(og: OpenGraphObject, price: impl Into<String>, price_currency: impl Into<String>) -> Self {
        Self {
            og,
            price: price.into(),
            price_currency: price_currency.into(),
        }
    }
}

impl ToMetaTags for Product {
    fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = self.og.base_tags("product");
        tags.push(MetaTag::new("product:price:amount", &self.price));
        tags.push(MetaTag::new("product:price:currency", &self.price_currency));
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_meta_tags() {
        let product = Product::new(
            OpenGraphObject::new(
                "Example Product",
                "https://www.example.com/product/example-product",
                "",
                "",
            ),
            "29.99",
            "USD",
        );
        let html = product.to_meta_tags().unwrap();

        assert!(html.starts_with(r#"<meta property="og:type" content="product"/>"#));
        assert!(html.ends_with(concat!(
            r#"<meta property="product:price:amount" content="29.99"/>"#,
            r#"<meta property="product:price:currency" content="USD"/>"#,
        )));
    }

    #[test]
    fn test_missing_price_skipped() {
        let html = Product::default().to_meta_tags().unwrap();
        assert!(!html.contains("product:price"));
    }
}
