//! JsonSchema validation tests for entities and wire payloads.

use chrono::Utc;
use schemars::schema_for;
use ledger_core::entities::*;
use ledger_core::enums::*;
use ledger_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validates {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

validates!(
    file_evidence_validates,
    Evidence,
    Evidence {
        id: "4b1f".into(),
        entry_id: "e1".into(),
        evidence_type: EvidenceType::File,
        content: "notes.pdf".into(),
        storage_path: Some("u1/e1/4b1f.pdf".into()),
        original_filename: Some("notes.pdf".into()),
        mime_type: Some("application/pdf".into()),
        size: Some(2048),
        transcript: None,
        created_at: Utc::now(),
    }
);

validates!(
    classified_entry_validates,
    Entry,
    Entry {
        id: "e1".into(),
        user_id: "u1".into(),
        title: "Black-Scholes".into(),
        description: Some("Worked through the derivation".into()),
        intent_prompt: Some("Show I can price options".into()),
        domain: Some("Finance".into()),
        eligibility: Some(Eligibility::Eligible),
        capability_summary: Some("Explains and applies the model".into()),
        confidence_band: Some(ConfidenceBand::High),
        created_at: Utc::now(),
    }
);

validates!(
    timeline_row_validates,
    TimelineResponse,
    TimelineResponse {
        entries: vec![TimelineEntry {
            id: "e1".into(),
            created_at: Utc::now(),
            title: "Untitled".into(),
            evidence_summary: "No evidence yet".into(),
            status: EntryStatus::RecordedOnly,
            public_id: None,
            file_evidence_id: None,
        }],
    }
);

#[test]
fn public_verification_schema_excludes_owner_fields() {
    let schema = serde_json::to_value(schema_for!(PublicVerification)).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(!properties.contains_key("entry_id"));
    assert!(!properties.contains_key("user_id"));
    assert!(properties.contains_key("capabilitySummary"));
}

#[test]
fn error_envelope_shape() {
    let json = serde_json::to_value(ErrorResponse::new("FORBIDDEN", "Entry not found or access denied")).unwrap();
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Entry not found or access denied");
}
