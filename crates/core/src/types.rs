//! Addon protocol value objects.
//!
//! These are built fresh for every request and only ever serialized. Fields
//! that could not be resolved upstream are empty strings or empty lists, never
//! `null` and never omitted.

use serde::{Deserialize, Serialize};

/// Content type advertised to the addon client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Movie,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog row, as rendered in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    pub poster: String,
    pub background: String,
}

/// Full metadata for the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMeta {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    pub poster: String,
    pub description: String,
    pub background: String,
    /// `"<N> min"`
    pub runtime: String,
    /// Release year.
    pub release_info: String,
    pub cast: Vec<String>,
    pub writer: Vec<String>,
    pub director: Vec<String>,
    pub genres: Vec<String>,
}

impl FullMeta {
    /// Stub returned when the title could not be looked up: only the id and
    /// type are filled in.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntry {
    /// Addon display name.
    pub name: String,
    pub title: String,
    pub external_url: String,
}

/// `{ "metas": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<CatalogEntry>,
}

/// `{ "meta": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: FullMeta,
}

/// `{ "streams": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamsResponse {
    pub streams: Vec<StreamEntry>,
}
