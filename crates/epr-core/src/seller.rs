//! Seller record as assembled from the MVM listing and shipping endpoints.
//!
//! A [`Seller`] is created once from a listing-page record and then enriched
//! in place with shipping destinations. Its id and compliance profile are
//! fixed at construction; the shipping profile only grows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MVM numeric seller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub i64);

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MVM `seller_shipping_id` identifying one configured shipping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingChannelId(pub i64);

impl fmt::Display for ShippingChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingProfile {
    ships_from_country: Option<String>,
    ships_to_countries: Vec<String>,
    shipping_channel_ids: Vec<ShippingChannelId>,
}

impl ShippingProfile {
    #[must_use]
    pub fn new(ships_from_country: Option<String>) -> Self {
        Self {
            ships_from_country,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ships_from_country(&self) -> Option<&str> {
        self.ships_from_country.as_deref()
    }

    /// Destination ISO codes in the order they were first reported.
    #[must_use]
    pub fn ships_to_countries(&self) -> &[String] {
        &self.ships_to_countries
    }

    #[must_use]
    pub fn shipping_channel_ids(&self) -> &[ShippingChannelId] {
        &self.shipping_channel_ids
    }

    #[must_use]
    pub fn ships_to(&self, country_iso_code: &str) -> bool {
        self.ships_to_countries.iter().any(|c| c == country_iso_code)
    }

    #[must_use]
    pub fn ships_to_any(&self, country_iso_codes: &[&str]) -> bool {
        country_iso_codes.iter().any(|code| self.ships_to(code))
    }

    /// Adds a destination country. Returns `false` if it was already present.
    pub fn add_ships_to_country(&mut self, country_iso_code: impl Into<String>) -> bool {
        let code = country_iso_code.into();
        if self.ships_to(&code) {
            return false;
        }
        self.ships_to_countries.push(code);
        true
    }

    pub fn add_shipping_channel_id(&mut self, id: ShippingChannelId) {
        self.shipping_channel_ids.push(id);
    }
}

/// Packaging-waste registration numbers read from seller custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceProfile {
    fr_epr_reg_number: Option<String>,
    de_lucid_reg_number: Option<String>,
}

impl ComplianceProfile {
    /// Empty strings are stored as absent.
    #[must_use]
    pub fn new(fr_epr_reg_number: Option<String>, de_lucid_reg_number: Option<String>) -> Self {
        Self {
            fr_epr_reg_number: fr_epr_reg_number.filter(|v| !v.is_empty()),
            de_lucid_reg_number: de_lucid_reg_number.filter(|v| !v.is_empty()),
        }
    }

    /// French EPR unique identifier (IDU).
    #[must_use]
    pub fn fr_epr_reg_number(&self) -> Option<&str> {
        self.fr_epr_reg_number.as_deref()
    }

    /// German LUCID packaging register number.
    #[must_use]
    pub fn de_lucid_reg_number(&self) -> Option<&str> {
        self.de_lucid_reg_number.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    id: SellerId,
    shipping: ShippingProfile,
    compliance: ComplianceProfile,
}

impl Seller {
    #[must_use]
    pub fn new(
        id: SellerId,
        ships_from_country: Option<String>,
        compliance: ComplianceProfile,
    ) -> Self {
        Self {
            id,
            shipping: ShippingProfile::new(ships_from_country),
            compliance,
        }
    }

    #[must_use]
    pub fn id(&self) -> SellerId {
        self.id
    }

    #[must_use]
    pub fn shipping(&self) -> &ShippingProfile {
        &self.shipping
    }

    pub fn shipping_mut(&mut self) -> &mut ShippingProfile {
        &mut self.shipping
    }

    #[must_use]
    pub fn compliance(&self) -> &ComplianceProfile {
        &self.compliance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_ships_to_country_suppresses_duplicates() {
        let mut profile = ShippingProfile::new(Some("FR".to_owned()));
        assert!(profile.add_ships_to_country("DE"));
        assert!(profile.add_ships_to_country("FR"));
        assert!(!profile.add_ships_to_country("DE"));
        assert_eq!(profile.ships_to_countries(), ["DE", "FR"]);
    }

    #[test]
    fn ships_to_any_matches_single_member() {
        let mut profile = ShippingProfile::default();
        profile.add_ships_to_country("WR");
        assert!(profile.ships_to_any(&["FR", "WR"]));
        assert!(!profile.ships_to_any(&["FR", "DE"]));
    }

    #[test]
    fn shipping_channel_ids_keep_order() {
        let mut profile = ShippingProfile::default();
        profile.add_shipping_channel_id(ShippingChannelId(7));
        profile.add_shipping_channel_id(ShippingChannelId(3));
        assert_eq!(
            profile.shipping_channel_ids(),
            [ShippingChannelId(7), ShippingChannelId(3)]
        );
    }

    #[test]
    fn compliance_profile_drops_empty_strings() {
        let profile = ComplianceProfile::new(Some(String::new()), Some("DE123".to_owned()));
        assert_eq!(profile.fr_epr_reg_number(), None);
        assert_eq!(profile.de_lucid_reg_number(), Some("DE123"));
    }

    #[test]
    fn seller_enrichment_leaves_id_and_compliance_untouched() {
        let compliance = ComplianceProfile::new(Some("FR001".to_owned()), None);
        let mut seller = Seller::new(SellerId(42), Some("FR".to_owned()), compliance.clone());
        seller.shipping_mut().add_ships_to_country("FR");

        assert_eq!(seller.id(), SellerId(42));
        assert_eq!(seller.compliance(), &compliance);
        assert_eq!(seller.shipping().ships_from_country(), Some("FR"));
        assert!(seller.shipping().ships_to("FR"));
    }

    #[test]
    fn seller_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&SellerId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
