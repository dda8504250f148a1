use super::OpenGraphObject;
use crate::render::{MetaTag, ToMetaTags};

/// `og:type=article` with the `article:*` namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub og: OpenGraphObject,
    /// ISO 8601 datetime.
    pub published_time: String,
    pub modified_time: String,
    pub expiration_time: String,
    /// Profile URLs; one `article:author` tag each.
    pub authors: Vec<String>,
    pub section: String,
    /// One `article:tag` tag each.
    pub tags: Vec<String>,
}

impl Article {
    pub fn new(og: OpenGraphObject, published_time: impl Into<String>) -> Self {
        Self {
            og,
            published_time: published_time.into(),
            ..Default::default()
        }
    }
}

impl ToMetaTags for Article {
    fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = self.og.base_tags("article");
        tags.push(MetaTag::new("article:published_time", &self.published_time));
        tags.push(MetaTag::new("article:modified_time", &self.modified_time));
        tags.push(MetaTag::new("article:expiration_time", &self.expiration_time));
        tags.extend(
            self.authors
                .iter()
                .filter(|author| !author.is_empty())
                .map(|author| MetaTag::new("article:author", author)),
        );
        tags.push(MetaTag::new("article:section", &self.section));
        tags.extend(
            self.tags
                .iter()
                .filter(|tag| !tag.is_empty())
                .map(|tag| MetaTag::new("article:tag", tag)),
        );
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            modified_time: "2024-09-15T10:00:00Z".into(),
            expiration_time: "2024-12-31T23:59:59Z".into(),
            authors: vec!["https://example.com/authors/jane-doe".into(), String::new()],
            section: "Technology".into(),
            tags: vec!["tag1".into(), String::new(), "tag2".into()],
            ..Article::new(
                OpenGraphObject::new("Example Article", "https://example.com/article", "", ""),
                "2024-09-15T09:00:00Z",
            )
        }
    }

    #[test]
    fn test_meta_tags_skip_empty_list_entries() {
        let tags = sample().meta_tags();

        let authors: Vec<_> = tags.iter().filter(|t| t.property == "article:author").collect();
        let keywords: Vec<_> = tags.iter().filter(|t| t.property == "article:tag").collect();
        assert_eq!(authors.len(), 1);
        assert_eq!(keywords.len(), 2);
        assert!(keywords.iter().all(|t| !t.content.is_empty()));
    }

    #[test]
    fn test_to_meta_tags() {
        let html = sample().to_meta_tags().unwrap();

        assert!(html.starts_with(r#"<meta property="og:type" content="article"/>"#));
        assert!(html.contains(r#"<meta property="article:published_time" content="2024-09-15T09:00:00Z"/>"#));
        assert!(html.contains(r#"<meta property="article:section" content="Technology"/>"#));
        assert!(html.ends_with(r#"<meta property="article:tag" content="tag2"/>"#));
        assert!(!html.contains("og:description"));
    }
}
