use std::collections::BTreeMap;

use jobforge_core::StaffingKey;

#[test]
fn encode_decode_round_trip() {
    let key = StaffingKey::new("Associate", "Data Engineer");
    let encoded = key.encode();
    assert_eq!(encoded, "Associate Data Engineer");

    let decoded = StaffingKey::decode(&encoded).expect("decode");
    assert_eq!(decoded, key);
}

#[test]
fn decode_splits_on_first_space_only() {
    let decoded = StaffingKey::decode("Manager Quality Assurance Lead").expect("decode");
    assert_eq!(decoded.level, "Manager");
    assert_eq!(decoded.role, "Quality Assurance Lead");
}

#[test]
fn decode_rejects_malformed_keys() {
    assert!(StaffingKey::decode("Associate").is_none());
    assert!(StaffingKey::decode("").is_none());
    assert!(StaffingKey::decode(" Engineer").is_none());
    assert!(StaffingKey::decode("Associate ").is_none());
}

#[test]
fn staffing_map_serializes_as_flat_json_object() {
    let mut reqs: BTreeMap<StaffingKey, u32> = BTreeMap::new();
    reqs.insert(StaffingKey::new("Consultant", "Cloud Architect"), 2);
    reqs.insert(StaffingKey::new("Associate", "Software Engineer"), 3);

    let json = serde_json::to_string(&reqs).expect("serialize");
    assert_eq!(
        json,
        r#"{"Associate Software Engineer":3,"Consultant Cloud Architect":2}"#
    );

    let back: BTreeMap<StaffingKey, u32> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, reqs);
}

#[test]
fn staffing_map_deserialization_rejects_malformed_keys() {
    let result: Result<BTreeMap<StaffingKey, u32>, _> =
        serde_json::from_str(r#"{"Associate": 1}"#);
    assert!(result.is_err());
}
