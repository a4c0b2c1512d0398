// Run with: cargo fuzz run fuzz_scheduled_time
// Purpose: accepted timestamps must survive RFC 3339 output unchanged
#![no_main]

use campaignhub::domain::ScheduledTime;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if let Ok(parsed) = ScheduledTime::parse(&input) {
        let rendered = parsed.instant().to_rfc3339();
        let reparsed = ScheduledTime::parse(&rendered).expect("RFC 3339 output must parse");
        assert_eq!(parsed.instant(), reparsed.instant());
    }
});
