use serde_json::json;

use super::*;

const FIELDS: CustomFieldIds = CustomFieldIds {
    fr_epr_reg_number: 22305,
    de_lucid_reg_number: 22316,
};

fn record(value: Value) -> SellerRecord {
    serde_json::from_value(value).expect("fixture should deserialize")
}

#[test]
fn decodes_both_registration_numbers() {
    let rec = record(json!({
        "id": 42,
        "id_country": { "iso_code": "FR" },
        "custom_fields": r#"{"22305": {"value": "FR-IDU-1"}, "22316": {"value": "DE-LUCID-9"}}"#
    }));

    let seller = decode_seller(&rec, FIELDS).unwrap();

    assert_eq!(seller.id(), SellerId(42));
    assert_eq!(seller.shipping().ships_from_country(), Some("FR"));
    assert_eq!(seller.compliance().fr_epr_reg_number(), Some("FR-IDU-1"));
    assert_eq!(seller.compliance().de_lucid_reg_number(), Some("DE-LUCID-9"));
    assert!(seller.shipping().ships_to_countries().is_empty());
}

#[test]
fn empty_value_is_treated_as_absent() {
    let rec = record(json!({
        "id": 1,
        "custom_fields": r#"{"22305": {"value": ""}, "22316": {"label": "LUCID"}}"#
    }));

    let seller = decode_seller(&rec, FIELDS).unwrap();

    assert_eq!(seller.compliance().fr_epr_reg_number(), None);
    assert_eq!(seller.compliance().de_lucid_reg_number(), None);
}

#[test]
fn non_string_values_are_treated_as_absent() {
    let rec = record(json!({
        "id": 1,
        "custom_fields": r#"{"22305": {"value": 0}, "22316": {"value": 12345}}"#
    }));

    let seller = decode_seller(&rec, FIELDS).unwrap();

    assert_eq!(seller.compliance().fr_epr_reg_number(), None);
    assert_eq!(seller.compliance().de_lucid_reg_number(), None);
}

#[test]
fn empty_array_custom_fields_means_no_fields() {
    let rec = record(json!({ "id": 7, "custom_fields": "[]" }));

    let seller = decode_seller(&rec, FIELDS).unwrap();

    assert_eq!(seller.compliance(), &ComplianceProfile::default());
}

#[test]
fn custom_field_ids_are_configurable() {
    let rec = record(json!({
        "id": 7,
        "custom_fields": r#"{"1": {"value": "FR-A"}, "2": {"value": "DE-B"}}"#
    }));
    let fields = CustomFieldIds {
        fr_epr_reg_number: 1,
        de_lucid_reg_number: 2,
    };

    let seller = decode_seller(&rec, fields).unwrap();

    assert_eq!(seller.compliance().fr_epr_reg_number(), Some("FR-A"));
    assert_eq!(seller.compliance().de_lucid_reg_number(), Some("DE-B"));
}

#[test]
fn missing_or_null_country_is_tolerated() {
    let missing = record(json!({ "id": 1, "custom_fields": "{}" }));
    let null = record(json!({ "id": 2, "id_country": null, "custom_fields": "{}" }));
    let empty = record(json!({ "id": 3, "id_country": [], "custom_fields": "{}" }));

    for rec in [missing, null, empty] {
        let seller = decode_seller(&rec, FIELDS).unwrap();
        assert_eq!(seller.shipping().ships_from_country(), None);
    }
}

#[test]
fn unparseable_custom_fields_is_fatal() {
    let rec = record(json!({ "id": 9, "custom_fields": "{not json" }));

    let err = decode_seller(&rec, FIELDS).unwrap_err();

    assert!(
        matches!(err, MvmError::MalformedCustomFields { seller_id: SellerId(9), .. }),
        "expected MalformedCustomFields, got: {err:?}"
    );
}

#[test]
fn missing_custom_fields_is_fatal() {
    let rec = record(json!({ "id": 9 }));

    let err = decode_seller(&rec, FIELDS).unwrap_err();

    assert!(matches!(err, MvmError::MalformedCustomFields { .. }));
}

#[test]
fn non_object_custom_fields_is_fatal() {
    let rec = record(json!({ "id": 9, "custom_fields": "[1, 2]" }));

    let err = decode_seller(&rec, FIELDS).unwrap_err();

    assert!(matches!(err, MvmError::MalformedCustomFields { .. }));
}
