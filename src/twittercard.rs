//! Twitter (X) card meta tags.
//!
//! <https://developer.x.com/en/docs/x-for-websites/cards/overview/markup>

use crate::render::{MetaTag, ToMetaTags};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardType {
    #[default]
    Summary,
    SummaryLargeImage,
    App,
    Player,
}

impl CardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: CardType,
    pub title: String,
    pub description: String,
    /// Image URL.
    pub image: String,
    /// `@username` of the website.
    pub site: String,
    /// `@username` of the content creator.
    pub creator: String,
    /// iPhone app id, app cards only.
    pub app_id: String,
    /// Player iframe URL, player cards only.
    pub player_url: String,
}

impl TwitterCard {
    pub fn new(
        card: CardType,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        site: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            card,
            title: title.into(),
            description: description.into(),
            image: image.into(),
            site: site.into(),
            creator: creator.into(),
            ..Default::default()
        }
    }

    pub fn summary(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        site: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self::new(CardType::Summary, title, description, image, site, creator)
    }

    pub fn summary_large_image(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        site: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self::new(CardType::SummaryLargeImage, title, description, image, site, creator)
    }

    pub fn app(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        site: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            ..Self::new(CardType::App, title, description, image, site, "")
        }
    }

    pub fn player(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        site: impl Into<String>,
        player_url: impl Into<String>,
    ) -> Self {
        Self {
            player_url: player_url.into(),
            ..Self::new(CardType::Player, title, description, image, site, "")
        }
    }
}

impl ToMetaTags for TwitterCard {
    fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![
            MetaTag::new("twitter:card", self.card.as_str()),
            MetaTag::new("twitter:title", &self.title),
            MetaTag::new("twitter:description", &self.description),
            MetaTag::new("twitter:image", &self.image),
            MetaTag::new("twitter:site", &self.site),
            MetaTag::new("twitter:creator", &self.creator),
        ];
        if !self.app_id.is_empty() {
            tags.push(MetaTag::new("twitter:app:id:iphone", &self.app_id));
        }
        if !self.player_url.is_empty() {
            tags.push(MetaTag::new("twitter:player", &self.player_url));
        }
        tags
    }
}
