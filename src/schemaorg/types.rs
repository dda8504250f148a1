//! Nested Schema.org types shared by several entities.

use super::{Person, defaults};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// <https://schema.org/ImageObject>
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::image_object())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::image_object();
        }
    }
}

/// <https://schema.org/ContactPoint>
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::contact_point())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telephone: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub area_served: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub available_language: String,
}

impl ContactPoint {
    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::contact_point();
        }
    }
}

/// <https://schema.org/PostalAddress>
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::postal_address())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_locality: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_region: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_country: String,
}

impl PostalAddress {
    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::postal_address();
        }
    }
}

/// <https://schema.org/ListItem>, the element type of a `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct ListItem {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::list_item())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub position: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Target URL of the breadcrumb.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item: String,
}

impl ListItem {
    pub fn new(position: u32, name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            item: item.into(),
            ..Default::default()
        }
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::list_item();
        }
    }
}

/// <https://schema.org/GeoCoordinates>
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::geo_coordinates())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub latitude: f64,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::geo_coordinates();
        }
    }
}

/// <https://schema.org/AggregateRating>
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::aggregate_rating())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub rating_value: f64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub review_count: u32,
}

impl AggregateRating {
    pub fn new(rating_value: f64, review_count: u32) -> Self {
        Self {
            rating_value,
            review_count,
            ..Default::default()
        }
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::aggregate_rating();
        }
    }
}

/// <https://schema.org/Rating>
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::rating())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub rating_value: f64,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub best_rating: f64,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub worst_rating: f64,
}

impl Rating {
    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::rating();
        }
    }
}

/// <https://schema.org/Review>
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::review())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_published: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub review_body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_rating: Option<Rating>,
}

impl Review {
    pub(crate) fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::review();
        }
        if let Some(author) = &mut self.author {
            author.ensure_defaults();
        }
        if let Some(rating) = &mut self.review_rating {
            rating.ensure_defaults();
        }
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// Zero stands for "not set", as for the string fields.
fn is_unset(n: &f64) -> bool {
    *n == 0.0
}
