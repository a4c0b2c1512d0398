mod memory;
mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Campaign, CampaignChanges, Message, MessageChanges, NewCampaign, NewMessage};

/// The record store behind the HTTP layer.
///
/// Implementations own write ordering and atomicity; callers never lock around these calls.
/// `update_*` and `delete_*` report a missing record as `None`/`false` rather than an error.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, anyhow::Error>;

    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, anyhow::Error>;

    async fn campaign_exists(&self, id: Uuid) -> Result<bool, anyhow::Error>;

    async fn insert_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, anyhow::Error>;

    async fn update_campaign(
        &self,
        id: Uuid,
        changes: &CampaignChanges,
    ) -> Result<Option<Campaign>, anyhow::Error>;

    async fn delete_campaign(&self, id: Uuid) -> Result<bool, anyhow::Error>;

    async fn list_messages(&self) -> Result<Vec<Message>, anyhow::Error>;

    async fn get_message(&self, id: Uuid) -> Result<Option<Message>, anyhow::Error>;

    async fn message_exists(&self, id: Uuid) -> Result<bool, anyhow::Error>;

    async fn insert_message(&self, message: &NewMessage) -> Result<Message, anyhow::Error>;

    async fn update_message(
        &self,
        id: Uuid,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, anyhow::Error>;

    async fn delete_message(&self, id: Uuid) -> Result<bool, anyhow::Error>;

    /// Releases the underlying connections, if any. Called once, after the server has stopped.
    /// Stored records are not touched.
    async fn close(&self);
}
