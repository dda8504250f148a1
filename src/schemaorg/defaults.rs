//! Default `@context` / `@type` values for Schema.org entities.
//!
//! Used by `educe` for `Default` impls and by the `ensure_defaults` helpers.

pub fn context() -> String {
    "https://schema.org".into()
}

// ============================================================================
// Entity Types
// ============================================================================

pub fn article() -> String {
    "Article".into()
}

pub fn organization() -> String {
    "Organization".into()
}

pub fn person() -> String {
    "Person".into()
}

pub fn web_page() -> String {
    "WebPage".into()
}

pub fn item_list() -> String {
    "ItemList".into()
}

pub fn breadcrumb_list() -> String {
    "BreadcrumbList".into()
}

pub fn web_site() -> String {
    "WebSite".into()
}

pub fn faq_page() -> String {
    "FAQPage".into()
}

pub fn local_business() -> String {
    "LocalBusiness".into()
}

pub fn site_navigation_element() -> String {
    "SiteNavigationElement".into()
}

// ============================================================================
// Nested Types
// ============================================================================

pub fn list_item() -> String {
    "ListItem".into()
}

pub fn image_object() -> String {
    "ImageObject".into()
}

pub fn contact_point() -> String {
    "ContactPoint".into()
}

pub fn postal_address() -> String {
    "PostalAddress".into()
}

pub fn action() -> String {
    "Action".into()
}

pub fn entry_point() -> String {
    "EntryPoint".into()
}

pub fn question() -> String {
    "Question".into()
}

pub fn answer() -> String {
    "Answer".into()
}

pub fn geo_coordinates() -> String {
    "GeoCoordinates".into()
}

pub fn aggregate_rating() -> String {
    "AggregateRating".into()
}

pub fn review() -> String {
    "Review".into()
}

pub fn rating() -> String {
    "Rating".into()
}
