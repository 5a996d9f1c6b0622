use chrono::Utc;
use tategu_core::{DoorAction, OperationLog, OperationRecord};

fn record(fitting_id: u32, action: DoorAction) -> OperationRecord {
    OperationRecord {
        fitting_id,
        fitting_name: format!("fitting {fitting_id}"),
        device_id: format!("DV-{fitting_id:04}"),
        action,
        at: Utc::now(),
    }
}

#[test]
fn test_push_keeps_newest_first() {
    let mut log = OperationLog::new();
    assert!(log.is_empty());

    log.push(record(1, DoorAction::Open));
    log.push(record(2, DoorAction::Close));

    assert_eq!(log.len(), 2);
    assert_eq!(log.latest().unwrap().fitting_id, 2);
    assert_eq!(log.records()[1].fitting_id, 1);
}

#[test]
fn test_capacity_drops_oldest() {
    let mut log = OperationLog::new();
    for i in 0..(OperationLog::CAPACITY as u32 + 5) {
        log.push(record(i, DoorAction::Open));
    }

    assert_eq!(log.len(), OperationLog::CAPACITY);
    // Newest survives, the very first pushes are gone
    assert_eq!(
        log.latest().unwrap().fitting_id,
        OperationLog::CAPACITY as u32 + 4
    );
    assert!(log.records().iter().all(|r| r.fitting_id >= 5));
}

#[test]
fn test_export_serializes_actions_lowercase() {
    let mut log = OperationLog::new();
    log.push(record(1, DoorAction::Open));
    log.push(record(2, DoorAction::Close));

    let json = log.export_json().unwrap();
    assert!(json.contains("\"open\""));
    assert!(json.contains("\"close\""));
    assert!(json.contains("DV-0001"));
}
