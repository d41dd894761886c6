//! Identifier codec.
//!
//! The addon client appends a type suffix (`.json`) to every path segment it
//! sends, and also asks every addon about ids from the IMDb namespace (`tt…`).
//! Catalog keys never contain a `.`.

use thiserror::Error;

/// Prefix of ids owned by the film-database namespace this addon does not serve.
pub const FOREIGN_ID_PREFIX: &str = "tt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("id {0:?} belongs to a foreign namespace")]
    ForeignNamespace(String),
}

/// A catalog key with the protocol suffix removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey(String);

impl CatalogKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drop everything from the first `.` onward.
pub fn strip_type_suffix(raw: &str) -> &str {
    raw.split_once('.').map_or(raw, |(head, _)| head)
}

/// Normalize a protocol id into a catalog key, rejecting foreign ids.
pub fn normalize(raw: &str) -> Result<CatalogKey, IdError> {
    let key = strip_type_suffix(raw);
    if key.starts_with(FOREIGN_ID_PREFIX) {
        return Err(IdError::ForeignNamespace(key.to_string()));
    }
    Ok(CatalogKey(key.to_string()))
}

/// Pull the search term out of a `search=<term>.json` path segment.
///
/// A segment without `=` yields an empty keyword.
pub fn extract_search_keyword(raw: &str) -> String {
    raw.split('=')
        .nth(1)
        .map(strip_type_suffix)
        .unwrap_or_default()
        .to_string()
}
