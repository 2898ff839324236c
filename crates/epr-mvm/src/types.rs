//! MVM API response types for the seller listing and shipping endpoints.
//!
//! ## Observed quirks
//!
//! ### `custom_fields`
//! Delivered as a JSON-encoded **string**, not a nested object. A seller with
//! no custom fields gets `"[]"` (the platform serialises empty maps as empty
//! arrays). Populated fields are keyed by the numeric custom-field id:
//! `{"22305": {"value": "FR123"}}`.
//!
//! ### `id_country`
//! An object with `iso_code` for most sellers, but may be `null` or absent
//! on sellers that never completed their store profile. Kept as a raw
//! [`serde_json::Value`] so any of those shapes decodes.
//!
//! ### `shipping`
//! `{"shipping": {"available_shipping": [...]}}` for sellers with shipping
//! methods; `{}` or `{"shipping": []}` otherwise.
//!
//! ### `range-price`
//! Every channel carries `country_ranges`. A body without it is rejected
//! rather than read as a channel that ships nowhere.

use epr_core::{SellerId, ShippingChannelId};
use serde::Deserialize;

/// Top-level response from `GET sellers.json`.
#[derive(Debug, Deserialize)]
pub struct SellersResponse {
    pub sellers: Vec<SellerRecord>,
}

/// A single seller from the listing endpoint. Only consumed fields are modelled.
#[derive(Debug, Deserialize)]
pub struct SellerRecord {
    pub id: SellerId,

    #[serde(default)]
    pub id_country: Option<serde_json::Value>,

    /// Either the JSON-encoded string the API documents, or an already
    /// decoded object.
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,
}

impl SellerRecord {
    /// `id_country.iso_code`, when present and a string.
    #[must_use]
    pub fn ships_from_country(&self) -> Option<String> {
        self.id_country
            .as_ref()
            .and_then(|c| c.get("iso_code"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }
}

/// Non-empty `shipping` section of `GET feature-apps/shipping/{seller_id}.json`.
#[derive(Debug, Deserialize)]
pub struct ShippingSection {
    pub available_shipping: Vec<AvailableShipping>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableShipping {
    pub seller_shipping_id: ShippingChannelId,
}

/// Response from `GET feature-apps/shipping/range-price/{seller_id}.json`.
#[derive(Debug, Deserialize)]
pub struct RangePriceResponse {
    #[serde(rename = "range-price")]
    pub range_price: RangePrice,
}

#[derive(Debug, Deserialize)]
pub struct RangePrice {
    pub country_ranges: Vec<CountryRange>,
}

#[derive(Debug, Deserialize)]
pub struct CountryRange {
    pub country_iso_code: String,
}
