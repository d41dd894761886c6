use crate::{CatalogError, UpstreamTitle};

/// Read-only access to the movie catalog.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Full-text search over the catalog.
    async fn search_titles(&self, keyword: &str) -> Result<Vec<UpstreamTitle>, CatalogError>;

    /// Fetch one title by its hashed id.
    async fn get_title(&self, hashed_id: &str) -> Result<UpstreamTitle, CatalogError>;
}
