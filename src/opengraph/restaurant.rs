use super::OpenGraphObject;
use crate::render::{MetaTag, ToMetaTags};

/// `og:type=restaurant` with `place:contact_data:*` and `restaurant:*` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restaurant {
    pub og: OpenGraphObject,
    pub street_address: String,
    /// City.
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub menu_url: String,
    pub reservation_url: String,
}

impl Restaurant {
    pub fn new(og: OpenGraphObject) -> Self {
        Self {
            og,
            ..Default::default()
        }
    }
}

impl ToMetaTags for Restaurant {
    fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = self.og.base_tags("restaurant");
        tags.extend([
            MetaTag::new("place:contact_data:street_address", &self.street_address),
            MetaTag::new("place:contact_data:locality", &self.locality),
            MetaTag::new("place:contact_data:region", &self.region),
            MetaTag::new("place:contact_data:postal_code", &self.postal_code),
            MetaTag::new("place:contact_data:country_name", &self.country),
            MetaTag::new("place:contact_data:phone_number", &self.phone),
            MetaTag::new("restaurant:menu", &self.menu_url),
            MetaTag::new("restaurant:reservation", &self.reservation_url),
        ]);
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_meta_tags() {
        let restaurant = Restaurant {
            locality: "Rome".into(),
            country: "Italy".into(),
            menu_url: "https://example.com/menu".into(),
            ..Restaurant::new(OpenGraphObject::new(
                "Trattoria",
                "https://example.com",
                "",
                "",
            ))
        };
        let html = restaurant.to_meta_tags().unwrap();

        assert!(html.starts_with(r#"<meta property="og:type" content="restaurant"/>"#));
        assert!(html.ends_with(concat!(
            r#"<meta property="place:contact_data:locality" content="Rome"/>"#,
            r#"<meta property="place:contact_data:country_name" content="Italy"/>"#,
            r#"<meta property="restaurant:menu" content="https://example.com/menu"/>"#,
        )));
        assert!(!html.contains("restaurant:reservation"));
        assert!(!html.contains("street_address"));
    }

    #[test]
    fn test_default_has_only_type() {
        let html = Restaurant::default().to_meta_tags().unwrap();
        assert_eq!(html, r#"<meta property="og:type" content="restaurant"/>"#);
    }
}
