use crate::domain::model::ProbeResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the docs directory a configuration points at.
pub trait DocsRepository: Send + Sync {
    fn dir_exists(&self) -> bool;

    fn exists(&self, relative_path: &str) -> bool;

    /// All markdown files under the docs directory, as paths relative to
    /// it, in sorted order.
    fn markdown_paths(&self) -> Result<Vec<String>>;
}

#[async_trait]
pub trait UrlProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}
