//! Decoding of listing-page records into [`Seller`] values.

use epr_core::{ComplianceProfile, Seller, SellerId};
use serde_json::{Map, Value};

use crate::client::CustomFieldIds;
use crate::error::MvmError;
use crate::types::SellerRecord;

/// Builds a [`Seller`] from one `sellers.json` record.
///
/// Registration numbers are read from the custom fields identified by
/// `fields`; a field counts only when its `value` is a non-empty string.
///
/// # Errors
///
/// Returns [`MvmError::MalformedCustomFields`] if `custom_fields` is missing,
/// not valid JSON, or not a JSON object.
pub fn decode_seller(record: &SellerRecord, fields: CustomFieldIds) -> Result<Seller, MvmError> {
    let custom_fields = parse_custom_fields(record.id, record.custom_fields.as_ref())?;

    let compliance = ComplianceProfile::new(
        custom_field_value(&custom_fields, fields.fr_epr_reg_number),
        custom_field_value(&custom_fields, fields.de_lucid_reg_number),
    );

    Ok(Seller::new(
        record.id,
        record.ships_from_country(),
        compliance,
    ))
}

fn parse_custom_fields(
    seller_id: SellerId,
    raw: Option<&Value>,
) -> Result<Map<String, Value>, MvmError> {
    let malformed = |reason: String| MvmError::MalformedCustomFields { seller_id, reason };

    let decoded = match raw {
        Some(Value::String(s)) => serde_json::from_str::<Value>(s)
            .map_err(|e| malformed(format!("not valid JSON: {e}")))?,
        Some(other) => other.clone(),
        None => return Err(malformed("field is missing".to_owned())),
    };

    match decoded {
        Value::Object(map) => Ok(map),
        // Sellers without any custom fields are serialised as an empty array.
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        other => Err(malformed(format!("expected a JSON object, got {other}"))),
    }
}

fn custom_field_value(custom_fields: &Map<String, Value>, field_id: u64) -> Option<String> {
    custom_fields
        .get(&field_id.to_string())?
        .get("value")?
        .as_str()
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
