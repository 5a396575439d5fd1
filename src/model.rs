//! Page content models.
//! Sections and their cards are loaded from `content/site.json`, which is
//! bundled into the binary at compile time.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::error::SiteError;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

/// Which scrollable grid a section renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    Team,
    Portfolio,
    Services,
    Reviews,
    Certifications,
    Recognition,
}

impl GridKind {
    /// CSS class of the scrollable grid element.
    pub fn grid_class(self) -> &'static str {
        match self {
            GridKind::Team => "team-grid",
            GridKind::Portfolio => "portfolio-grid",
            GridKind::Services => "services-grid",
            GridKind::Reviews => "review-grid",
            GridKind::Certifications => "cert-grid",
            GridKind::Recognition => "recognition-grid",
        }
    }

    /// CSS class of the wrapper holding the grid and its arrow buttons.
    pub fn container_class(self) -> &'static str {
        match self {
            GridKind::Team => "team-container",
            GridKind::Portfolio => "portfolio-container",
            GridKind::Services => "services-container",
            GridKind::Reviews => "review-container",
            GridKind::Certifications => "cert-container",
            GridKind::Recognition => "recognition-container",
        }
    }

    /// CSS class of each card inside the grid.
    pub fn item_class(self) -> &'static str {
        match self {
            GridKind::Team => "team-member",
            GridKind::Portfolio => "portfolio-item",
            GridKind::Services => "service-card",
            GridKind::Reviews => "review-card",
            GridKind::Certifications => "cert-card",
            GridKind::Recognition => "recognition-card",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Image URL, relative to the site root.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, used by in-page navigation links.
    pub id: String,
    pub kind: GridKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Overrides the grid's default carousel behaviour.
    #[serde(default)]
    pub carousel: Option<CarouselConfig>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn config(&self) -> CarouselConfig {
        self.carousel.unwrap_or_else(|| CarouselConfig::for_grid(self.kind))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub sections: Vec<Section>,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> Result<Self, SiteError> {
        Self::from_json(BUNDLED_CONTENT)
    }
}
