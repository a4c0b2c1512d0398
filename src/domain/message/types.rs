use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::MessageStatus;

#[derive(sqlx::FromRow)]
pub struct MessageRecord {
    pub id: Uuid,
    pub content: String,
    pub campaign_id: Uuid,
    pub status: String,
    pub scheduled_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored outreach message scheduled against a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub campaign_id: Uuid,
    pub status: MessageStatus,
    pub scheduled_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<MessageRecord> for Message {
    type Error = anyhow::Error;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        let status = MessageStatus::parse(&record.status).map_err(anyhow::Error::msg)?;

        Ok(Self {
            id: record.id,
            content: record.content,
            campaign_id: record.campaign_id,
            status,
            scheduled_time: record.scheduled_time,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub content: Option<Value>,
    pub campaign_id: Option<Value>,
    pub status: Option<Value>,
    pub scheduled_time: Option<Value>,
}
