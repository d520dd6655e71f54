#![no_main]
use libfuzzer_sys::fuzz_target;
use subsys_registry::{Record, Registry, StatusMask};

// Arbitrary mask text must either parse cleanly or be rejected, never panic
fuzz_target!(|data: &[u8]| {
    let Ok(spec) = std::str::from_utf8(data) else {
        return;
    };

    let mut registry = Registry::new();
    for bits in [0x00u8, 0x80, 0x40, 0xFF, 0x5A] {
        let _ = registry.append(Record::new(format!("S{:02X}", bits), bits));
    }

    match registry.filter(spec) {
        Ok(filtered) => {
            let mask = StatusMask::parse(spec).unwrap();
            assert_eq!(mask.to_string(), spec);
            assert!(filtered.iter().all(|r| mask.matches(r.status())));
            assert!(filtered.len() <= registry.len());
        }
        Err(_) => assert!(StatusMask::parse(spec).is_err()),
    }
});
