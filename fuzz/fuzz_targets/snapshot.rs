#![no_main]

use libfuzzer_sys::fuzz_target;
use v8heapconst::{LoadConfig, Snapshot};

fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = Snapshot::from_mem_with_config(data.to_vec(), LoadConfig::lenient()) {
        // Whatever loads must survive its own output
        let reread = Snapshot::parse_with_config(&snapshot.to_source(), LoadConfig::lenient());
        let reread = reread.ok();
        assert_eq!(reread.as_ref(), Some(&snapshot));
        assert_eq!(reread.map(|s| s.fingerprint()), Some(snapshot.fingerprint()));
    }
});
