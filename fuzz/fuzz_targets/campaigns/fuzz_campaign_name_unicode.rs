// Run with: cargo fuzz run fuzz_campaign_name_unicode
// Purpose: grapheme counting and trimming on arbitrary (lossy) UTF-8
#![no_main]

use campaignhub::domain::{CampaignDescription, CampaignName};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data).to_string();

    let _ = CampaignName::parse(input.clone());
    let _ = CampaignDescription::parse(input);
});
