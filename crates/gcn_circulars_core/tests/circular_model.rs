use gcn_circulars_core::{Circular, CircularMetadata};

#[test]
fn construction_derives_the_normalized_event_id() {
    let circular = Circular::new(42, "GRB 230101A: follow-up", 1_679_056_496_789, "B", "A");
    assert_eq!(circular.sub.as_deref(), Some("GRB 230101A"));

    let unmatched = Circular::new(43, "observation report", 1_679_056_496_789, "B", "A");
    assert_eq!(unmatched.sub, None);
}

#[test]
fn metadata_projects_identity_and_subject() {
    let circular = Circular::new(42, "GRB 230101A: follow-up", 0, "B", "A");
    assert_eq!(
        circular.metadata(),
        CircularMetadata {
            circular_id: 42,
            subject: "GRB 230101A: follow-up".to_string(),
        }
    );
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let circular = Circular::new(42, "GRB 230101A: follow-up", 1_679_056_496_789, "B", "A");

    let json = serde_json::to_value(&circular).unwrap();
    assert_eq!(json["circularId"], 42);
    assert_eq!(json["subject"], "GRB 230101A: follow-up");
    assert_eq!(json["sub"], "GRB 230101A");
    assert_eq!(json["createdOn"], 1_679_056_496_789_i64);
    assert_eq!(json["body"], "B");
    assert_eq!(json["submitter"], "A");

    let decoded: Circular = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, circular);
}

#[test]
fn absent_event_id_is_omitted_from_the_wire_shape() {
    let circular = Circular::new(43, "observation report", 0, "B", "A");
    let json = serde_json::to_value(&circular).unwrap();
    assert!(json.get("sub").is_none());

    // A record stored without `sub` still deserializes.
    let decoded: Circular = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.sub, None);
}
