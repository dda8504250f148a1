//! <https://schema.org/LocalBusiness>

use super::{
    AggregateRating, GeoCoordinates, ImageObject, PostalAddress, Review, SchemaValidator,
    defaults, require,
};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::local_business())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telephone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,

    /// e.g. `"Mo-Fr 09:00-17:00"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review: Vec<Review>,
}

impl LocalBusiness {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        telephone: impl Into<String>,
        address: Option<PostalAddress>,
    ) -> Self {
        let mut business = Self {
            name: name.into(),
            description: description.into(),
            telephone: telephone.into(),
            address,
            ..Default::default()
        };
        business.ensure_defaults();
        business
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::local_business();
        }
        if let Some(logo) = &mut self.logo {
            logo.ensure_defaults();
        }
        if let Some(address) = &mut self.address {
            address.ensure_defaults();
        }
        if let Some(geo) = &mut self.geo {
            geo.ensure_defaults();
        }
        if let Some(rating) = &mut self.aggregate_rating {
            rating.ensure_defaults();
        }
        for review in &mut self.review {
            review.ensure_defaults();
        }
    }
}

impl SchemaValidator for LocalBusiness {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.name.is_empty(), "name");
        require(&mut warnings, self.address.is_none(), "address");
        require(&mut warnings, self.telephone.is_empty(), "telephone");
        require(&mut warnings, self.description.is_empty(), "description");
        warnings
    }
}

impl ToJsonLd for LocalBusiness {
    fn id_prefix(&self) -> &'static str {
        "localBusiness"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untyped<T>(mut value: T, clear: impl FnOnce(&mut T)) -> T {
        clear(&mut value);
        value
    }

    #[test]
    fn test_ensure_defaults_nested() {
        let mut business = LocalBusiness {
            context: String::new(),
            kind: String::new(),
            logo: Some(untyped(ImageObject::new("https://example.com/logo.png"), |i| i.kind.clear())),
            address: Some(untyped(PostalAddress::default(), |a| a.kind.clear())),
            geo: Some(untyped(GeoCoordinates::new(45.0, 12.0), |g| g.kind.clear())),
            aggregate_rating: Some(untyped(AggregateRating::new(4.5, 100), |r| r.kind.clear())),
            review: vec![untyped(Review::default(), |r| r.kind.clear())],
            ..Default::default()
        };
        business.ensure_defaults();

        assert_eq!(business.context, "https://schema.org");
        assert_eq!(business.kind, "LocalBusiness");
        assert_eq!(business.logo.unwrap().kind, "ImageObject");
        assert_eq!(business.address.unwrap().kind, "PostalAddress");
        assert_eq!(business.geo.unwrap().kind, "GeoCoordinates");
        assert_eq!(business.aggregate_rating.unwrap().kind, "AggregateRating");
        assert_eq!(business.review[0].kind, "Review");
    }

    #[test]
    fn test_validate() {
        let shop = LocalBusiness::new("Shop", "desc", "+1-800", Some(PostalAddress::default()));
        assert!(shop.validate().is_empty());

        assert_eq!(
            LocalBusiness::default().validate(),
            [
                "missing recommended field: name",
                "missing recommended field: address",
                "missing recommended field: telephone",
                "missing recommended field: description",
            ]
        );

        let no_address = LocalBusiness::new("x", "z", "y", None);
        assert_eq!(no_address.validate(), ["missing recommended field: address"]);
    }

    #[test]
    fn test_json_field_names() {
        let business = LocalBusiness {
            opening_hours: vec!["Mo-Fr 09:00-17:00".into()],
            geo: Some(GeoCoordinates::new(45.0, 12.0)),
            aggregate_rating: Some(AggregateRating::new(4.5, 100)),
            ..LocalBusiness::new("Shop", "", "", None)
        };
        let value = serde_json::to_value(&business).unwrap();

        assert_eq!(value["openingHours"][0], "Mo-Fr 09:00-17:00");
        assert_eq!(value["geo"]["latitude"], 45.0);
        assert_eq!(value["aggregateRating"]["reviewCount"], 100);
        assert!(value.get("review").is_none());
    }

    #[test]
    fn test_json_ld_prefix() {
        let html = LocalBusiness::new("Shop", "", "", None).to_json_ld().unwrap();
        assert!(html.starts_with(r#"<script id="localBusiness-"#));
    }
}
