use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::CampaignStatus;

#[derive(sqlx::FromRow)]
pub struct CampaignRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub leads: Vec<String>,
    pub account_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored campaign as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub leads: Vec<String>,
    #[serde(rename = "accountIDs")]
    pub account_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CampaignRecord> for Campaign {
    type Error = anyhow::Error;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        let status = CampaignStatus::parse(&record.status).map_err(anyhow::Error::msg)?;

        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            status,
            leads: record.leads,
            account_ids: record.account_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

// Body of both create and update; which fields are mandatory is decided when parsing.
// Fields stay untyped so a value of the wrong JSON type is reported against its field.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub status: Option<Value>,
    pub leads: Option<Value>,
    #[serde(rename = "accountIDs")]
    pub account_ids: Option<Value>,
}
