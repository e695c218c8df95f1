// Model serialization tests (JSON snake_case wire format)

use statusd::models::*;

#[test]
fn test_snapshot_serialization_snake_case() {
    let snapshot = StatusSnapshot {
        cpu_usage: 12.5,
        memory_used: 512,
        memory_total: 1024,
        network_in: 300,
        network_out: 200,
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"cpu_usage\""));
    assert!(json.contains("\"memory_used\""));
    assert!(json.contains("\"memory_total\""));
    assert!(json.contains("\"network_in\""));
    assert!(json.contains("\"network_out\""));
    let back: StatusSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_snapshot_byte_fields_serialize_as_integers() {
    let snapshot = StatusSnapshot {
        cpu_usage: 0.0,
        memory_used: 1,
        memory_total: 2,
        network_in: 3,
        network_out: 4,
    };
    let value: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
    assert!(value["cpu_usage"].is_number());
    assert!(value["memory_used"].is_u64());
    assert!(value["memory_total"].is_u64());
    assert!(value["network_in"].is_u64());
    assert!(value["network_out"].is_u64());
}
