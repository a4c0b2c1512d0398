// Run with: cargo fuzz run fuzz_profile_json
// Purpose: the outreach generator is deterministic over any profile that validates
#![no_main]

use campaignhub::domain::{ProfilePayload, generate_outreach_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<ProfilePayload>(data) else {
        return;
    };

    if let Ok(first) = generate_outreach_message(payload.clone()) {
        let second = generate_outreach_message(payload).expect("same input must validate again");
        assert_eq!(first, second);
        assert!(first.starts_with("Hi "));
        assert!(first.ends_with("[Your Name]"));
    }
});
