mod message_content;
mod message_status;
mod scheduled_time;
mod types;

pub use message_content::MessageContent;
pub use message_status::MessageStatus;
pub use scheduled_time::ScheduledTime;
pub use types::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{ValidationErrors, required, string};

fn parse_campaign_id(s: String) -> Result<Uuid, String> {
    Uuid::parse_str(s.trim())
        .map_err(|_| "Invalid campaignId: must be a valid campaign identifier.".to_string())
}

/// A validated message. Whether `campaign_id` resolves is checked against the store, not here.
#[derive(Debug)]
pub struct NewMessage {
    pub content: MessageContent,
    pub campaign_id: Uuid,
    pub status: MessageStatus,
    pub scheduled_time: ScheduledTime,
}

impl TryFrom<MessagePayload> for NewMessage {
    type Error = ValidationErrors;

    fn try_from(payload: MessagePayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let content = errors.check(
            "content",
            required("content", payload.content)
                .and_then(|v| string("content", v))
                .and_then(MessageContent::parse),
        );
        let campaign_id = errors.check(
            "campaignId",
            required("campaignId", payload.campaign_id)
                .and_then(|v| string("campaignId", v))
                .and_then(parse_campaign_id),
        );
        let scheduled_time = errors.check(
            "scheduledTime",
            required("scheduledTime", payload.scheduled_time)
                .and_then(|v| string("scheduledTime", v))
                .and_then(|s| ScheduledTime::parse(&s)),
        );
        let status = match payload.status {
            Some(v) => errors.check(
                "status",
                string("status", v).and_then(|s| MessageStatus::parse(&s)),
            ),
            None => Some(MessageStatus::default()),
        };

        match (content, campaign_id, status, scheduled_time) {
            (Some(content), Some(campaign_id), Some(status), Some(scheduled_time)) => Ok(Self {
                content,
                campaign_id,
                status,
                scheduled_time,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default)]
pub struct MessageChanges {
    pub content: Option<MessageContent>,
    pub campaign_id: Option<Uuid>,
    pub status: Option<MessageStatus>,
    pub scheduled_time: Option<ScheduledTime>,
}

impl MessageChanges {
    pub fn apply_to(&self, message: &mut Message, now: DateTime<Utc>) {
        if let Some(content) = &self.content {
            message.content = content.as_ref().to_string();
        }
        if let Some(campaign_id) = self.campaign_id {
            message.campaign_id = campaign_id;
        }
        if let Some(status) = self.status {
            message.status = status;
        }
        if let Some(scheduled_time) = self.scheduled_time {
            message.scheduled_time = scheduled_time.instant();
        }
        message.updated_at = now;
    }
}

impl TryFrom<MessagePayload> for MessageChanges {
    type Error = ValidationErrors;

    fn try_from(payload: MessagePayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let changes = Self {
            content: errors.check_supplied("content", payload.content, |v| {
                string("content", v).and_then(MessageContent::parse)
            }),
            campaign_id: errors.check_supplied("campaignId", payload.campaign_id, |v| {
                string("campaignId", v).and_then(parse_campaign_id)
            }),
            status: errors.check_supplied("status", payload.status, |v| {
                string("status", v).and_then(|s| MessageStatus::parse(&s))
            }),
            scheduled_time: errors.check_supplied("scheduledTime", payload.scheduled_time, |v| {
                string("scheduledTime", v).and_then(|s| ScheduledTime::parse(&s))
            }),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}
