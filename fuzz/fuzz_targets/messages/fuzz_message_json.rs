// Run with: cargo fuzz run fuzz_message_json
// Purpose: fuzz MessagePayload JSON -> NewMessage / MessageChanges
#![no_main]

use campaignhub::domain::{MessageChanges, MessagePayload, NewMessage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<MessagePayload>(data) {
        let _ = NewMessage::try_from(payload);
    }
    if let Ok(payload) = serde_json::from_slice::<MessagePayload>(data) {
        let _ = MessageChanges::try_from(payload);
    }
});
