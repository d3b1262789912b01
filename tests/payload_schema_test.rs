use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trip_planner_rs::{
    payload_schema,
    schema::PayloadSchema,
    MemoryStore, SlotStore, TripPlan, TripRequest, TripStore, Validator,
};

/// Packing list saved next to a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema]
struct PackingList {
    /// Who the list belongs to
    owner: String,
    /// Items still to pack
    #[serde(rename = "toPack")]
    to_pack: Vec<String>,
    #[serde(default)]
    checked: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema(name = "Note", description = "Free-form trip note")]
#[allow(dead_code)]
struct TripNote {
    text: String,
}

#[test]
fn test_schema_carries_doc_comments() {
    let handle = PackingList::schema();
    let schema = handle.schema_json();

    assert_eq!(handle.schema_name(), "PackingList");
    assert_eq!(handle.type_name(), "PackingList");
    assert_eq!(schema["title"], "PackingList");
    assert_eq!(schema["description"], "Packing list saved next to a trip");
    assert_eq!(
        schema["properties"]["owner"]["description"],
        "Who the list belongs to"
    );
    assert_eq!(
        schema["properties"]["toPack"]["description"],
        "Items still to pack"
    );
}

#[test]
fn test_explicit_name_and_description() {
    let handle = TripNote::schema();
    assert_eq!(handle.schema_name(), "Note");
    assert_eq!(handle.schema_json()["description"], "Free-form trip note");
}

#[test]
fn test_schema_handle_is_cached() {
    assert!(std::ptr::eq(PackingList::schema(), PackingList::schema()));
}

#[test]
fn test_handle_validates_payloads() {
    assert!(PackingList::schema()
        .validate(&json!({"owner": "Alice", "toPack": ["hat"]}))
        .is_ok());

    let err = PackingList::schema()
        .validate(&json!({"owner": 3}))
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_custom_payload_through_trip_store() {
    let list = PackingList {
        owner: "Alice".to_string(),
        to_pack: vec!["sunscreen".to_string(), "umbrella".to_string()],
        checked: 0,
    };

    let mut store = TripStore::new(MemoryStore::new());
    store.save("packing", &list).unwrap();
    assert_eq!(store.load::<PackingList>("packing").unwrap(), Some(list));
    assert!(store.load::<PackingList>("missing").unwrap().is_none());
}

#[test]
fn test_serde_first_reports_path() {
    let mut inner = MemoryStore::new();
    inner
        .set("packing", r#"{"owner": "Alice", "toPack": [1]}"#.to_string())
        .unwrap();
    let store = TripStore::new(inner).with_validator(Validator::SerdeFirst);

    let err = store.load::<PackingList>("packing").unwrap_err();
    assert!(err.to_string().contains("toPack"));
}

#[test]
fn test_builtin_payload_schemas() {
    let request = TripRequest::schema().schema_json();
    let required = request["required"].as_array().unwrap();
    assert!(required.contains(&json!("main_contact")));
    assert!(!required.contains(&json!("special_requests")));

    assert_eq!(TripPlan::schema().schema_name(), "TripPlan");
}
