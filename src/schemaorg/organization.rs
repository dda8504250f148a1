//! <https://schema.org/Organization>

use super::{ContactPoint, ImageObject, SchemaValidator, defaults, require};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::organization())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,

    #[serde(rename = "contactPoint", default, skip_serializing_if = "Vec::is_empty")]
    pub contact_points: Vec<ContactPoint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>, url: impl Into<String>, logo: Option<ImageObject>) -> Self {
        let mut org = Self {
            name: name.into(),
            url: url.into(),
            logo,
            ..Default::default()
        };
        org.ensure_defaults();
        org
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::organization();
        }
        if let Some(logo) = &mut self.logo {
            logo.ensure_defaults();
        }
        for contact in &mut self.contact_points {
            contact.ensure_defaults();
        }
    }
}

impl SchemaValidator for Organization {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.name.is_empty(), "name");
        require(&mut warnings, self.url.is_empty(), "url");
        require(
            &mut warnings,
            self.logo.as_ref().is_none_or(|logo| logo.url.is_empty()),
            "logo.url",
        );
        warnings
    }
}

impl ToJsonLd for Organization {
    fn id_prefix(&self) -> &'static str {
        "org"
    }
}
