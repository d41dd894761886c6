//! Static addon manifest.

use std::sync::LazyLock;

use serde::Serialize;

use crate::types::ContentType;

pub const ADDON_ID: &str = "com.stremio.bioskoponline.addon";
pub const ADDON_NAME: &str = "Bioskop Online";
pub const ADDON_DESCRIPTION: &str = "Search Indonesian movies that available on BioskopOnline";
pub const CATALOG_ID: &str = "bioskopOnlineMovies";
pub const CATALOG_NAME: &str = "Bioskop Online Movies";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub catalogs: Vec<CatalogDescriptor>,
    pub resources: Vec<String>,
    pub types: Vec<ContentType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub id: String,
    pub name: String,
    pub extra: Vec<CatalogExtra>,
    pub extra_supported: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExtra {
    pub name: String,
    pub is_required: bool,
}

static MANIFEST: LazyLock<Manifest> = LazyLock::new(|| Manifest {
    id: ADDON_ID.to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
    name: ADDON_NAME.to_string(),
    description: ADDON_DESCRIPTION.to_string(),
    catalogs: vec![CatalogDescriptor {
        content_type: ContentType::Movie,
        id: CATALOG_ID.to_string(),
        name: CATALOG_NAME.to_string(),
        extra: vec![CatalogExtra {
            name: "search".to_string(),
            is_required: true,
        }],
        extra_supported: vec!["search".to_string()],
    }],
    resources: ["catalog", "meta", "stream"]
        .into_iter()
        .map(String::from)
        .collect(),
    types: vec![ContentType::Movie],
});

/// The process-wide manifest. Built on first access, never mutated.
pub fn manifest() -> &'static Manifest {
    &MANIFEST
}
