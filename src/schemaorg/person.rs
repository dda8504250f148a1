//! <https://schema.org/Person>

use super::{ImageObject, Organization, PostalAddress, SchemaValidator, defaults, require};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::person())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageObject>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub job_title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub works_for: Option<Organization>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telephone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>, job_title: impl Into<String>) -> Self {
        let mut person = Self {
            name: name.into(),
            email: email.into(),
            job_title: job_title.into(),
            ..Default::default()
        };
        person.ensure_defaults();
        person
    }

    /// Set the employer.
    pub fn works_for(mut self, org: Organization) -> Self {
        self.works_for = Some(org);
        self.ensure_defaults();
        self
    }

    pub(crate) fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::person();
        }
        if let Some(image) = &mut self.image {
            image.ensure_defaults();
        }
        if let Some(org) = &mut self.works_for {
            org.ensure_defaults();
        }
        if let Some(address) = &mut self.address {
            address.ensure_defaults();
        }
    }
}

impl SchemaValidator for Person {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.name.is_empty(), "name");
        require(&mut warnings, self.email.is_empty(), "email");
        require(&mut warnings, self.job_title.is_empty(), "jobTitle");
        warnings
    }
}

impl ToJsonLd for Person {
    fn id_prefix(&self) -> &'static str {
        "person"
    }
}
