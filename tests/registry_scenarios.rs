//! End-to-end registry scenarios
//!
//! Exercises the public API the way a front-end drives it: construct,
//! append, look up by name, mutate through the indexed accessor, filter.

use subsys_registry::{Record, Registry, RegistryError, StatusField, MAX_ARR};

fn names(registry: &Registry) -> Vec<String> {
    registry
        .iter()
        .map(|r| r.name().as_str().to_string())
        .collect()
}

#[test]
fn test_sensor_lifecycle_through_registry() {
    let mut registry = Registry::new();
    registry.append(Record::new("SENSOR", 0x00)).unwrap();

    let index = registry.find("SENSOR").unwrap();
    let sensor = registry.get_mut(index).unwrap();

    sensor.set_field(StatusField::Power, 1).unwrap();
    assert_eq!(sensor.status().bits(), 0x80);

    sensor.set_field(StatusField::Resource, 3).unwrap();
    assert_eq!(sensor.status().bits(), 0x83);

    sensor.set_data(0xDEADBEEF);
    assert_eq!(sensor.status().bits(), 0xC3);

    assert_eq!(sensor.take_data().unwrap(), 0xDEADBEEF);
    assert_eq!(sensor.status().bits(), 0x83);
    assert!(matches!(sensor.take_data(), Err(RegistryError::NoData)));
}

#[test]
fn test_fill_to_capacity() {
    let mut registry = Registry::new();
    for i in 0..MAX_ARR {
        registry.append(Record::new(format!("SUB{:02}", i), 0)).unwrap();
    }

    assert!(matches!(
        registry.append(Record::new("OVERFLOW", 0)),
        Err(RegistryError::Full { .. })
    ));
    assert_eq!(registry.len(), MAX_ARR);

    // Removing one frees exactly one slot
    registry.remove(0).unwrap();
    registry.append(Record::new("LATE", 0)).unwrap();
    assert_eq!(registry.len(), MAX_ARR);
    assert_eq!(registry.find("LATE"), Some(MAX_ARR - 1));
}

#[test]
fn test_remove_keeps_order_and_rejects_bad_indices() {
    let mut registry = Registry::new();
    for name in ["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO"] {
        registry.append(Record::new(name, 0)).unwrap();
    }

    registry.remove(2).unwrap();
    assert_eq!(names(&registry), ["ALPHA", "BRAVO", "DELTA", "ECHO"]);

    let len = registry.len() as isize;
    assert!(matches!(
        registry.remove(len),
        Err(RegistryError::OutOfRange { .. })
    ));
    assert!(matches!(
        registry.remove(-3),
        Err(RegistryError::OutOfRange { .. })
    ));
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_filter_scenarios() {
    let mut registry = Registry::new();
    registry.append(Record::new("POWER_ONLY", 0x80)).unwrap();
    registry.append(Record::new("DATA_ONLY", 0x40)).unwrap();
    registry.append(Record::new("IDLE", 0x00)).unwrap();
    registry.append(Record::new("EVERYTHING", 0xFF)).unwrap();

    assert_eq!(
        names(&registry.filter("1*******").unwrap()),
        ["POWER_ONLY", "EVERYTHING"]
    );
    assert_eq!(
        names(&registry.filter("*1******").unwrap()),
        ["DATA_ONLY", "EVERYTHING"]
    );
    assert_eq!(names(&registry.filter("00000000").unwrap()), ["IDLE"]);
    assert_eq!(names(&registry.filter("********").unwrap()), names(&registry));
    assert!(registry.filter("0000000x").is_err());

    // Filtering never mutates the source
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_filter_on_empty_registry() {
    let registry = Registry::new();
    let filtered = registry.filter("********").unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn test_pending_data_filter_tracks_take() {
    let mut registry = Registry::new();
    registry.append(Record::new("GPS", 0)).unwrap();
    registry.append(Record::new("RADIO", 0)).unwrap();

    registry.lookup_mut("RADIO").unwrap().set_data(7);
    assert_eq!(names(&registry.filter("*1******").unwrap()), ["RADIO"]);

    // Rendering leaves the data in place
    let _ = registry.render();
    assert_eq!(names(&registry.filter("*1******").unwrap()), ["RADIO"]);

    registry.lookup_mut("RADIO").unwrap().take_data().unwrap();
    assert!(registry.filter("*1******").unwrap().is_empty());
}

#[test]
fn test_duplicate_names_resolve_to_first() {
    let mut registry = Registry::new();
    registry.append(Record::new("DUP", 0x01)).unwrap();
    registry.append(Record::new("DUP", 0x02)).unwrap();

    assert_eq!(registry.lookup("DUP").unwrap().status().bits(), 0x01);

    registry.remove_named("DUP").unwrap();
    assert_eq!(registry.lookup("DUP").unwrap().status().bits(), 0x02);
}

#[test]
fn test_long_names_match_after_truncation() {
    let long = "A".repeat(40);
    let mut registry = Registry::new();
    registry.append(Record::new(long.as_str(), 0)).unwrap();

    assert_eq!(registry.find(&long), None);
    assert_eq!(registry.find(&long[..31]), Some(0));
}
