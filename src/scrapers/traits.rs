use crate::error::RenderError;
use async_trait::async_trait;

/// Loads a URL and returns the fully rendered HTML document
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<String, RenderError>;
}
