//! Concurrent access through SharedRegistry

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use subsys_registry::{Record, Registry, SharedRegistry, StatusField, MAX_ARR};

#[test]
fn test_concurrent_data_producers_and_consumers() {
    let shared = SharedRegistry::new(Registry::new());
    for i in 0..4 {
        shared.append(Record::new(format!("QUEUE{}", i), 0)).unwrap();
    }

    let taken = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let shared = shared.clone();
            let taken = taken.clone();
            std::thread::spawn(move || {
                let name = format!("QUEUE{}", thread_id % 4);
                for i in 0..200u32 {
                    if thread_id < 4 {
                        // Producer
                        shared
                            .with_mut(|registry| registry.lookup_mut(&name).map(|r| r.set_data(i)))
                            .unwrap();
                    } else {
                        // Consumer
                        let result =
                            shared.with_mut(|registry| registry.lookup_mut(&name)?.take_data());
                        if result.is_ok() {
                            taken.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    // Every record is either holding data or drained; DATA bit agrees with presence
    shared.with(|registry| {
        for record in registry {
            assert_eq!(record.has_data(), record.peek_data().is_some());
            assert_eq!(record.field(StatusField::Data) == 1, record.has_data());
        }
    });
    assert!(taken.load(Ordering::Relaxed) <= 4 * 200);
    assert_eq!(shared.len(), 4);
}

#[test]
fn test_concurrent_append_remove_stays_bounded() {
    let shared = SharedRegistry::new(Registry::new());

    let handles: Vec<_> = (0..6)
        .map(|thread_id| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for i in 0..100 {
                    if thread_id % 2 == 0 {
                        let _ = shared.append(Record::new(format!("T{}_{}", thread_id, i), 0x80));
                    } else {
                        let _ = shared.with_mut(|registry| registry.remove(0));
                    }
                    assert!(shared.len() <= MAX_ARR);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert!(snapshot.len() <= MAX_ARR);
    assert_eq!(snapshot.filter("1*******").unwrap().len(), snapshot.len());
}
