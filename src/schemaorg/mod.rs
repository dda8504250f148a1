//! Schema.org JSON-LD entities.
//!
//! Each entity:
//! - fills `@context` / `@type` through its `Default` impl and constructor
//! - reports missing recommended fields via [`SchemaValidator::validate`]
//! - renders as `<script type="application/ld+json">` via [`ToJsonLd`]
//!
//! The navigation list lives in [`crate::navigation`] and plugs into the
//! same traits.
//!
//! [`ToJsonLd`]: crate::render::ToJsonLd

mod article;
mod breadcrumb;
pub mod defaults;
mod faq_page;
mod local_business;
mod organization;
mod person;
mod types;
mod webpage;
mod website;

pub use article::Article;
pub use breadcrumb::{BreadcrumbError, BreadcrumbList};
pub use faq_page::{Answer, FaqPage, Question};
pub use local_business::LocalBusiness;
pub use organization::Organization;
pub use person::Person;
pub use types::{
    AggregateRating, ContactPoint, GeoCoordinates, ImageObject, ListItem, PostalAddress, Rating,
    Review,
};
pub use webpage::WebPage;
pub use website::{Action, Target, WebSite};

use crate::log;

/// Types that can be checked for recommended Schema.org fields.
pub trait SchemaValidator {
    /// Warning messages for missing recommended or required fields.
    fn validate(&self) -> Vec<String>;
}

/// Log every validation warning of `value` under the `schema` prefix.
///
/// Returns the number of warnings logged.
pub fn log_validation_warnings(value: &impl SchemaValidator) -> usize {
    let warnings = value.validate();
    for warning in &warnings {
        log!("schema"; "warning: {warning}");
    }
    warnings.len()
}

/// Push `missing recommended field: <name>` when `missing` is true.
pub(crate) fn require(warnings: &mut Vec<String>, missing: bool, name: &str) {
    if missing {
        warnings.push(format!("missing recommended field: {name}"));
    }
}
