// Run with: cargo fuzz run fuzz_campaign_json
// Purpose: fuzz CampaignPayload JSON -> NewCampaign / CampaignChanges
#![no_main]

use campaignhub::domain::{CampaignChanges, CampaignPayload, NewCampaign};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<CampaignPayload>(data) {
        if let Err(errors) = NewCampaign::try_from(payload) {
            assert!(!errors.is_empty());
        }
    }
    if let Ok(payload) = serde_json::from_slice::<CampaignPayload>(data) {
        let _ = CampaignChanges::try_from(payload);
    }
});
