//! <https://schema.org/WebSite> with an optional sitelinks search box.
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "WebSite",
//!   "url": "https://www.example.com",
//!   "name": "Example",
//!   "potentialAction": {
//!     "@type": "SearchAction",
//!     "target": { "@type": "EntryPoint", "urlTemplate": "https://www.example.com/search?q={search_term_string}" },
//!     "query-input": "required name=search_term_string"
//!   }
//! }
//! ```

use super::{SchemaValidator, defaults, require};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `EntryPoint` of an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::entry_point())]
    pub kind: String,

    #[serde(default)]
    pub url_template: String,
}

impl Target {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            ..Default::default()
        }
    }

    fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::entry_point();
        }
    }
}

/// `potentialAction` of a [`WebSite`]; usually `SearchAction`.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct Action {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::action())]
    pub kind: String,

    #[serde(default)]
    pub target: Option<Target>,

    #[serde(rename = "query-input", default)]
    pub query_input: String,
}

impl Action {
    /// A `SearchAction` for `url_template` with its `query-input` declaration.
    pub fn search(url_template: impl Into<String>, query_input: impl Into<String>) -> Self {
        Self {
            kind: "SearchAction".into(),
            target: Some(Target::new(url_template)),
            query_input: query_input.into(),
        }
    }

    fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::action();
        }
        if let Some(target) = &mut self.target {
            target.ensure_defaults();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::web_site())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alternate_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<Action>,
}

impl WebSite {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        potential_action: Option<Action>,
    ) -> Self {
        let mut site = Self {
            url: url.into(),
            name: name.into(),
            description: description.into(),
            potential_action,
            ..Default::default()
        };
        site.ensure_defaults();
        site
    }

    fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::web_site();
        }
        if let Some(action) = &mut self.potential_action {
            action.ensure_defaults();
        }
    }
}

impl SchemaValidator for WebSite {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.url.is_empty(), "url");
        require(&mut warnings, self.name.is_empty(), "name");
        require(&mut warnings, self.description.is_empty(), "description");

        if let Some(action) = &self.potential_action
            && action.target.as_ref().is_none_or(|t| t.url_template.is_empty())
        {
            warnings.push(
                "potentialAction.target.urlTemplate is recommended when potentialAction is set"
                    .to_owned(),
            );
        }
        warnings
    }
}

impl ToJsonLd for WebSite {
    fn id_prefix(&self) -> &'static str {
        "website"
    }
}
