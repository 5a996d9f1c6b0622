use tategu_core::{Catalog, DoorKind, FittingKind, FittingStatus, Permission};

const SAMPLE: &str = r#"[
  {
    "area": "北口",
    "detailLocation": "改札内 コンコース",
    "deviceId": "DV-1001",
    "fittingId": 1,
    "fittingName": "北口シャッターA",
    "fittingPermissionName": 0,
    "fittingType": 0,
    "isfavorite": 1,
    "stationBuildingName": "東京駅",
    "status": 1
  },
  {
    "area": "南口",
    "detailLocation": "2F 通路",
    "deviceId": "DV-1002",
    "fittingId": 2,
    "fittingName": "南口ドアB",
    "fittingPermissionName": 2,
    "fittingType": 1,
    "isfavorite": 0,
    "stationBuildingName": "東京駅",
    "status": 3
  }
]"#;

// =============================================================================
// Catalog Parsing Tests
// =============================================================================

#[test]
fn test_catalog_parses_upstream_field_names() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    assert_eq!(catalog.len(), 2);

    let first = &catalog.fittings()[0];
    assert_eq!(first.fitting_id, 1);
    assert_eq!(first.device_id, "DV-1001");
    assert_eq!(first.fitting_name, "北口シャッターA");
    assert_eq!(first.area, "北口");
    assert_eq!(first.station_building_name, "東京駅");
    assert_eq!(first.kind, FittingKind::Shutter);
    assert_eq!(first.status, FittingStatus::FullyClosed);
    assert_eq!(first.permission, Permission::FullControl);
    assert!(first.favorite);

    let second = &catalog.fittings()[1];
    assert_eq!(second.kind, FittingKind::DoorAutoLock);
    assert_eq!(second.status, FittingStatus::Unlocked);
    assert_eq!(second.permission, Permission::OpenCloseOnly);
    assert!(!second.favorite);
}

#[test]
fn test_unknown_codes_are_rejected() {
    let bad_kind = r#"[{
        "area": "a", "detailLocation": "d", "deviceId": "DV-1", "fittingId": 1,
        "fittingName": "n", "fittingPermissionName": 0, "fittingType": 9,
        "isfavorite": 0, "stationBuildingName": "s", "status": 0
    }]"#;
    let err = Catalog::from_json(bad_kind).unwrap_err();
    assert!(err.to_string().contains("fittingType"), "{err}");

    let bad_status = bad_kind.replace("\"fittingType\": 9", "\"fittingType\": 0");
    let bad_status = bad_status.replace("\"status\": 0", "\"status\": 7");
    let err = Catalog::from_json(&bad_status).unwrap_err();
    assert!(err.to_string().contains("status"), "{err}");
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(Catalog::from_json("not json").is_err());
    assert!(Catalog::from_json("{}").is_err());
}

#[test]
fn test_round_trip_preserves_source_shape() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    let value = serde_json::to_value(&catalog.fittings()[0]).unwrap();

    assert_eq!(value["fittingId"], 1);
    assert_eq!(value["deviceId"], "DV-1001");
    assert_eq!(value["fittingType"], 0);
    assert_eq!(value["fittingPermissionName"], 0);
    assert_eq!(value["isfavorite"], 1);
    assert_eq!(value["stationBuildingName"], "東京駅");
    assert_eq!(value["detailLocation"], "改札内 コンコース");
}

// =============================================================================
// Code Table Tests
// =============================================================================

#[test]
fn test_labels_follow_code_tables() {
    assert_eq!(FittingKind::Shutter.label(), "シャッター");
    assert_eq!(FittingKind::DoorAutoLock.label(), "ドア(自動施錠あり)");
    assert_eq!(FittingKind::DoorManualLock.label(), "ドア(自動施錠なし)");

    assert_eq!(FittingStatus::FullyOpen.label(), "全開");
    assert_eq!(FittingStatus::Locked.label(), "施錠");

    assert_eq!(Permission::FullControl.label(), "フルコントロール");
    assert_eq!(Permission::OpenCloseOnly.label(), "開閉のみ");
}

#[test]
fn test_codes_round_trip() {
    for code in 0..=2u8 {
        assert_eq!(FittingKind::try_from(code).unwrap().code(), code);
        assert_eq!(Permission::try_from(code).unwrap().code(), code);
    }
    for code in 0..=4u8 {
        assert_eq!(FittingStatus::try_from(code).unwrap().code(), code);
    }
    assert!(FittingKind::try_from(3).is_err());
    assert!(FittingStatus::try_from(5).is_err());
    assert!(Permission::try_from(3).is_err());
}

#[test]
fn test_kind_maps_to_operation_panel() {
    assert_eq!(FittingKind::Shutter.door_kind(), DoorKind::Shutter);
    assert_eq!(FittingKind::DoorAutoLock.door_kind(), DoorKind::Door);
    assert_eq!(FittingKind::DoorManualLock.door_kind(), DoorKind::Door);
}

// =============================================================================
// Catalog Mutation Tests
// =============================================================================

#[test]
fn test_lookup_by_device_id() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    assert_eq!(catalog.get("DV-1002").unwrap().fitting_id, 2);
    assert!(catalog.get("DV-9999").is_none());
}

#[test]
fn test_toggle_favorite_flips_flag() {
    let mut catalog = Catalog::from_json(SAMPLE).unwrap();
    assert_eq!(catalog.toggle_favorite("DV-1002"), Some(true));
    assert_eq!(catalog.toggle_favorite("DV-1002"), Some(false));
    assert_eq!(catalog.toggle_favorite("DV-9999"), None);
}
