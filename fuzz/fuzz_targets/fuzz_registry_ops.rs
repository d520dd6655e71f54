#![no_main]
use libfuzzer_sys::{fuzz_target, arbitrary::{Arbitrary, Unstructured}};
use subsys_registry::{Record, Registry, StatusField, MAX_ARR};

#[derive(Debug, Arbitrary)]
enum Op {
    Append { name_idx: u8, status: u8 },
    Remove { index: i8 },
    SetField { name_idx: u8, field_id: u8, value: u8 },
    SetData { name_idx: u8, value: u32 },
    TakeData { name_idx: u8 },
    Render,
}

// Random operation sequences must keep the registry bounded and consistent
fuzz_target!(|input: &[u8]| {
    let mut u = Unstructured::new(input);

    let ops: Vec<Op> = match u.arbitrary() {
        Ok(ops) => ops,
        Err(_) => return,
    };

    let mut registry = Registry::new();

    for op in ops.iter().take(256) {
        match op {
            Op::Append { name_idx, status } => {
                let was_full = registry.is_full();
                let result = registry.append(Record::new(format!("S{}", name_idx % 16), *status));
                assert_eq!(result.is_err(), was_full);
            }
            Op::Remove { index } => {
                let before = registry.len();
                match registry.remove(*index as isize) {
                    Ok(_) => assert_eq!(registry.len(), before - 1),
                    Err(_) => assert_eq!(registry.len(), before),
                }
            }
            Op::SetField { name_idx, field_id, value } => {
                if let Ok(record) = registry.lookup_mut(&format!("S{}", name_idx % 16)) {
                    let before = record.status();
                    if record.set_field_by_id(*field_id, *value).is_err() {
                        assert_eq!(record.status(), before);
                    } else if let Some(field) = StatusField::from_id(*field_id) {
                        assert_eq!(record.field(field), *value);
                    }
                }
            }
            Op::SetData { name_idx, value } => {
                if let Ok(record) = registry.lookup_mut(&format!("S{}", name_idx % 16)) {
                    record.set_data(*value);
                    assert_eq!(record.peek_data(), Some(*value));
                }
            }
            Op::TakeData { name_idx } => {
                if let Ok(record) = registry.lookup_mut(&format!("S{}", name_idx % 16)) {
                    let had = record.peek_data();
                    assert_eq!(record.take_data().ok(), had);
                    assert!(!record.has_data());
                }
            }
            Op::Render => {
                let output = registry.render();
                assert_eq!(output.lines().count(), registry.len());
            }
        }

        assert!(registry.len() <= MAX_ARR);
    }
});
