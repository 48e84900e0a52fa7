use crate::error::PublishError;
use async_trait::async_trait;

/// Posts a short status message to a social network
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, message: &str) -> Result<(), PublishError>;

    /// Name of the destination, for log lines
    fn destination(&self) -> &'static str;
}
