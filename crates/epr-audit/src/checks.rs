//! Compliance rules evaluated against a single enriched seller.

use epr_core::{ComplianceProfile, Seller, SellerId};
use thiserror::Error;

/// Destination code meaning "ships everywhere", which covers every
/// regulated market.
pub const WORLDWIDE: &str = "WR";

pub const CAN_SELL_IN_DE: &str = "SellerCanSellInDE";
pub const CAN_SELL_IN_FR: &str = "SellerCanSellInFR";

const FR_OR_WORLDWIDE: &[&str] = &["FR", WORLDWIDE];

/// A seller broke a compliance rule.
///
/// This is an expected outcome recorded in the seller's result, not a
/// failure of the audit itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("seller {seller_id} failed compliance check {check_name}")]
pub struct Violation {
    pub seller_id: SellerId,
    pub check_name: String,
}

/// One independent rule. Implementations must be pure functions of the
/// seller's current state.
pub trait ComplianceCheck: Send + Sync {
    /// Stable identifier used in reports.
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns a [`Violation`] when the seller breaks the rule.
    fn evaluate(&self, seller: &Seller) -> Result<(), Violation>;
}

type RegistrationAccessor = for<'a> fn(&'a ComplianceProfile) -> Option<&'a str>;

/// "Ships into one of `markets`, therefore must hold a registration number."
pub struct MarketRegistrationCheck {
    name: &'static str,
    markets: &'static [&'static str],
    registration: RegistrationAccessor,
}

impl MarketRegistrationCheck {
    #[must_use]
    pub fn new(
        name: &'static str,
        markets: &'static [&'static str],
        registration: RegistrationAccessor,
    ) -> Self {
        Self {
            name,
            markets,
            registration,
        }
    }

    /// Germany: LUCID packaging register number.
    ///
    /// The market list matches the French check (`FR`/`WR`), not `DE`/`WR`.
    /// Kept as-is until product confirms whether German coverage should key
    /// off `DE`.
    #[must_use]
    pub fn can_sell_in_de() -> Self {
        Self::new(
            CAN_SELL_IN_DE,
            FR_OR_WORLDWIDE,
            ComplianceProfile::de_lucid_reg_number,
        )
    }

    /// France: EPR unique identifier.
    #[must_use]
    pub fn can_sell_in_fr() -> Self {
        Self::new(
            CAN_SELL_IN_FR,
            FR_OR_WORLDWIDE,
            ComplianceProfile::fr_epr_reg_number,
        )
    }
}

impl ComplianceCheck for MarketRegistrationCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, seller: &Seller) -> Result<(), Violation> {
        let ships_into_market = seller.shipping().ships_to_any(self.markets);
        let missing_registration =
            (self.registration)(seller.compliance()).is_none_or(str::is_empty);

        if ships_into_market && missing_registration {
            return Err(Violation {
                seller_id: seller.id(),
                check_name: self.name.to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(ships_to: &[&str], fr: Option<&str>, de: Option<&str>) -> Seller {
        let compliance = ComplianceProfile::new(fr.map(str::to_owned), de.map(str::to_owned));
        let mut seller = Seller::new(SellerId(1), Some("FR".to_owned()), compliance);
        for code in ships_to {
            seller.shipping_mut().add_ships_to_country(*code);
        }
        seller
    }

    #[test]
    fn sellers_outside_fr_and_worldwide_pass_without_numbers() {
        for ships_to in [&[][..], &["DE"][..], &["DE", "AT", "US"][..]] {
            let s = seller(ships_to, None, None);
            assert!(MarketRegistrationCheck::can_sell_in_fr().evaluate(&s).is_ok());
            assert!(MarketRegistrationCheck::can_sell_in_de().evaluate(&s).is_ok());
        }
    }

    #[test]
    fn fr_destination_without_fr_number_violates_fr_check() {
        let s = seller(&["FR"], None, Some("DE-1"));
        let err = MarketRegistrationCheck::can_sell_in_fr()
            .evaluate(&s)
            .unwrap_err();
        assert_eq!(
            err,
            Violation {
                seller_id: SellerId(1),
                check_name: CAN_SELL_IN_FR.to_owned(),
            }
        );
    }

    #[test]
    fn fr_destination_with_fr_number_passes_fr_check() {
        let s = seller(&["FR"], Some("FR-1"), None);
        assert!(MarketRegistrationCheck::can_sell_in_fr().evaluate(&s).is_ok());
    }

    #[test]
    fn worldwide_with_lucid_number_passes_de_check() {
        let s = seller(&["WR"], None, Some("DE-1"));
        assert!(MarketRegistrationCheck::can_sell_in_de().evaluate(&s).is_ok());
    }

    #[test]
    fn worldwide_without_lucid_number_violates_de_check() {
        let s = seller(&["WR"], Some("FR-1"), None);
        assert!(MarketRegistrationCheck::can_sell_in_de().evaluate(&s).is_err());
    }

    #[test]
    fn de_check_keys_off_fr_destination() {
        let fr_only = seller(&["FR"], Some("FR-1"), None);
        let de_only = seller(&["DE"], Some("FR-1"), None);
        assert!(MarketRegistrationCheck::can_sell_in_de().evaluate(&fr_only).is_err());
        assert!(MarketRegistrationCheck::can_sell_in_de().evaluate(&de_only).is_ok());
    }

    #[test]
    fn violation_message_names_seller_and_check() {
        let v = Violation {
            seller_id: SellerId(42),
            check_name: CAN_SELL_IN_DE.to_owned(),
        };
        assert_eq!(
            v.to_string(),
            "seller 42 failed compliance check SellerCanSellInDE"
        );
    }
}
