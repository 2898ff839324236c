//! Shipping-profile enrichment for sellers already decoded from a listing page.

use epr_core::{Seller, SellerId, ShippingChannelId};
use serde_json::Value;

use crate::error::MvmError;
use crate::types::{RangePriceResponse, ShippingSection};

use super::MvmClient;

impl MvmClient {
    /// Fills in the seller's shipping channels and destination countries.
    ///
    /// Sellers without a shipping section keep an empty destination set;
    /// that is a valid outcome, not an error. Each available channel costs
    /// one extra range-price call, so the listing record is enriched in
    /// place rather than re-fetched.
    ///
    /// # Errors
    ///
    /// Propagates transport and deserialization errors from either endpoint.
    pub async fn populate_seller(&self, seller: &mut Seller) -> Result<(), MvmError> {
        let seller_id = seller.id();
        let Some(section) = self.fetch_shipping_section(seller_id).await? else {
            tracing::debug!(%seller_id, "seller has no shipping configured");
            return Ok(());
        };

        for channel in section.available_shipping {
            let channel_id = channel.seller_shipping_id;
            seller.shipping_mut().add_shipping_channel_id(channel_id);

            let countries = self.fetch_channel_countries(seller_id, channel_id).await?;
            for country in countries {
                seller.shipping_mut().add_ships_to_country(country);
            }
        }

        tracing::debug!(
            %seller_id,
            channels = seller.shipping().shipping_channel_ids().len(),
            countries = ?seller.shipping().ships_to_countries(),
            "populated shipping details"
        );
        Ok(())
    }

    /// Returns `None` when the `shipping` key is absent, `null`, `[]` or `{}`.
    async fn fetch_shipping_section(
        &self,
        seller_id: SellerId,
    ) -> Result<Option<ShippingSection>, MvmError> {
        let url = self.endpoint_url(&format!("feature-apps/shipping/{seller_id}.json"), &[])?;
        let context = format!("feature-apps/shipping(seller_id={seller_id})");
        let body: Value = self.get_json(&url, &context).await?;

        let section = match body.get("shipping") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) if items.is_empty() => return Ok(None),
            Some(Value::Object(map)) if map.is_empty() => return Ok(None),
            Some(section) => section.clone(),
        };

        serde_json::from_value(section)
            .map(Some)
            .map_err(|e| MvmError::Deserialize { context, source: e })
    }

    async fn fetch_channel_countries(
        &self,
        seller_id: SellerId,
        channel_id: ShippingChannelId,
    ) -> Result<Vec<String>, MvmError> {
        let url = self.range_price_url(seller_id, channel_id)?;
        let response: RangePriceResponse = self
            .get_json(
                &url,
                &format!(
                    "feature-apps/shipping/range-price(seller_id={seller_id}, seller_shipping_id={channel_id})"
                ),
            )
            .await?;

        Ok(response
            .range_price
            .country_ranges
            .into_iter()
            .map(|r| r.country_iso_code)
            .collect())
    }

    pub(super) fn range_price_url(
        &self,
        seller_id: SellerId,
        channel_id: ShippingChannelId,
    ) -> Result<reqwest::Url, MvmError> {
        self.endpoint_url(
            &format!("feature-apps/shipping/range-price/{seller_id}.json"),
            &[("seller_shipping_id", &channel_id.to_string())],
        )
    }
}
