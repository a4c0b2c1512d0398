mod campaign_description;
mod campaign_name;
mod campaign_status;
mod target_list;
mod types;

pub use campaign_description::CampaignDescription;
pub use campaign_name::CampaignName;
pub use campaign_status::CampaignStatus;
pub use target_list::{AccountIds, Leads};
pub use types::*;

use chrono::{DateTime, Utc};

use crate::domain::{ValidationErrors, required, string, string_list};

#[derive(Debug)]
pub struct NewCampaign {
    pub name: CampaignName,
    pub description: CampaignDescription,
    pub status: CampaignStatus,
    pub leads: Leads,
    pub account_ids: AccountIds,
}

impl TryFrom<CampaignPayload> for NewCampaign {
    type Error = ValidationErrors;

    fn try_from(payload: CampaignPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let name = errors.check(
            "name",
            required("name", payload.name)
                .and_then(|v| string("name", v))
                .and_then(CampaignName::parse),
        );
        let description = errors.check(
            "description",
            required("description", payload.description)
                .and_then(|v| string("description", v))
                .and_then(CampaignDescription::parse),
        );
        let leads = errors.check(
            "leads",
            required("leads", payload.leads)
                .and_then(|v| string_list("leads", v))
                .and_then(Leads::parse),
        );
        let account_ids = errors.check(
            "accountIDs",
            required("accountIDs", payload.account_ids)
                .and_then(|v| string_list("accountIDs", v))
                .and_then(AccountIds::parse),
        );
        let status = match payload.status {
            Some(v) => errors.check(
                "status",
                string("status", v).and_then(|s| CampaignStatus::parse(&s)),
            ),
            None => Some(CampaignStatus::default()),
        };

        match (name, description, status, leads, account_ids) {
            (Some(name), Some(description), Some(status), Some(leads), Some(account_ids)) => {
                Ok(Self {
                    name,
                    description,
                    status,
                    leads,
                    account_ids,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Default)]
pub struct CampaignChanges {
    pub name: Option<CampaignName>,
    pub description: Option<CampaignDescription>,
    pub status: Option<CampaignStatus>,
    pub leads: Option<Leads>,
    pub account_ids: Option<AccountIds>,
}

impl CampaignChanges {
    pub fn apply_to(&self, campaign: &mut Campaign, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            campaign.name = name.as_ref().to_string();
        }
        if let Some(description) = &self.description {
            campaign.description = description.as_ref().to_string();
        }
        if let Some(status) = self.status {
            campaign.status = status;
        }
        if let Some(leads) = &self.leads {
            campaign.leads = leads.as_ref().to_vec();
        }
        if let Some(account_ids) = &self.account_ids {
            campaign.account_ids = account_ids.as_ref().to_vec();
        }
        campaign.updated_at = now;
    }
}

impl TryFrom<CampaignPayload> for CampaignChanges {
    type Error = ValidationErrors;

    fn try_from(payload: CampaignPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let changes = Self {
            name: errors.check_supplied("name", payload.name, |v| {
                string("name", v).and_then(CampaignName::parse)
            }),
            description: errors.check_supplied("description", payload.description, |v| {
                string("description", v).and_then(CampaignDescription::parse)
            }),
            status: errors.check_supplied("status", payload.status, |v| {
                string("status", v).and_then(|s| CampaignStatus::parse(&s))
            }),
            leads: errors.check_supplied("leads", payload.leads, |v| {
                string_list("leads", v).and_then(Leads::parse)
            }),
            account_ids: errors.check_supplied("accountIDs", payload.account_ids, |v| {
                string_list("accountIDs", v).and_then(AccountIds::parse)
            }),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}
