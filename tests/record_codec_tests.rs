use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use vaultpass::api::error::ApiError;
use vaultpass::api::models::{PasswordRecord, SECRET_MAX, TITLE_MAX, URL_MAX};

fn sample_record() -> PasswordRecord {
    PasswordRecord {
        id: 7,
        title: "Bank".into(),
        username: "alice".into(),
        secret: SecretString::new("p@ss".into()),
        url: String::new(),
        notes: String::new(),
    }
}

#[test]
fn encode_omits_id_and_empty_optionals() {
    let value = serde_json::to_value(sample_record()).expect("encode record");
    let obj = value.as_object().unwrap();

    assert_eq!(obj.get("title"), Some(&json!("Bank")));
    assert_eq!(obj.get("username"), Some(&json!("alice")));
    assert_eq!(obj.get("password"), Some(&json!("p@ss")));
    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("url"));
    assert!(!obj.contains_key("notes"));
}

#[test]
fn encode_keeps_non_empty_optionals() {
    let mut record = sample_record();
    record.url = "https://bank.example".into();
    record.notes = "main account".into();

    let value = serde_json::to_value(&record).expect("encode record");
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("url"), Some(&json!("https://bank.example")));
    assert_eq!(obj.get("notes"), Some(&json!("main account")));
}

#[test]
fn decode_null_and_omitted_optionals_are_equivalent() {
    let with_null: PasswordRecord = serde_json::from_value(json!({
        "id": 7, "title": "T", "username": "U", "password": "P", "url": null, "notes": null
    }))
    .expect("decode with nulls");
    let omitted: PasswordRecord = serde_json::from_value(json!({
        "id": 7, "title": "T", "username": "U", "password": "P"
    }))
    .expect("decode with keys omitted");

    assert_eq!(with_null.url, "");
    assert_eq!(with_null.notes, "");
    assert_eq!(with_null.url, omitted.url);
    assert_eq!(with_null.notes, omitted.notes);
    assert_eq!(with_null.title, omitted.title);
}

#[test]
fn decode_missing_or_non_numeric_id_reads_as_zero() {
    let missing: PasswordRecord = serde_json::from_value(json!({
        "title": "T", "username": "U", "password": "P"
    }))
    .expect("decode without id");
    assert_eq!(missing.id, 0);

    let non_numeric: PasswordRecord = serde_json::from_value(json!({
        "id": "42", "title": "T", "username": "U", "password": "P"
    }))
    .expect("decode with string id");
    assert_eq!(non_numeric.id, 0);
}

#[test]
fn decode_missing_strings_read_as_empty() {
    let record: PasswordRecord = serde_json::from_value(json!({"id": 3})).expect("decode bare id");
    assert_eq!(record.title, "");
    assert_eq!(record.username, "");
    assert_eq!(record.secret.expose_secret(), "");
}

#[test]
fn round_trip_preserves_every_field_except_id() {
    let mut record = sample_record();
    record.id = 99;
    record.url = "https://bank.example".into();
    record.notes = "main".into();

    let decoded: PasswordRecord =
        serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();

    // id is never encoded, so it comes back as the default
    assert_eq!(decoded.id, 0);
    assert_eq!(decoded.title, record.title);
    assert_eq!(decoded.username, record.username);
    assert_eq!(decoded.secret.expose_secret(), record.secret.expose_secret());
    assert_eq!(decoded.url, record.url);
    assert_eq!(decoded.notes, record.notes);
}

#[test]
fn validate_rejects_oversized_fields() {
    let mut record = sample_record();
    record.title = "x".repeat(TITLE_MAX + 1);
    match record.validate() {
        Err(ApiError::FieldTooLong { field, len, max }) => {
            assert_eq!(field, "title");
            assert_eq!(len, TITLE_MAX + 1);
            assert_eq!(max, TITLE_MAX);
        }
        other => panic!("expected FieldTooLong, got {other:?}"),
    }

    let mut record = sample_record();
    record.secret = SecretString::new("s".repeat(SECRET_MAX + 1).into());
    assert!(matches!(
        record.validate(),
        Err(ApiError::FieldTooLong {
            field: "password",
            ..
        })
    ));

    let mut record = sample_record();
    record.url = "u".repeat(URL_MAX + 1);
    assert!(matches!(
        record.validate(),
        Err(ApiError::FieldTooLong { field: "url", .. })
    ));
}

#[test]
fn validate_accepts_fields_at_capacity() {
    let mut record = sample_record();
    record.title = "x".repeat(TITLE_MAX);
    record.secret = SecretString::new("s".repeat(SECRET_MAX).into());
    record.url = "u".repeat(URL_MAX);
    assert!(record.validate().is_ok());
}
