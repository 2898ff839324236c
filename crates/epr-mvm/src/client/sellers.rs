//! Seller listing endpoint (`sellers.json`).

use epr_core::Seller;

use crate::error::MvmError;
use crate::parse::decode_seller;
use crate::types::SellersResponse;

use super::MvmClient;

impl MvmClient {
    /// Fetches one page of sellers and decodes each record into a [`Seller`].
    ///
    /// `page` is 1-based. An empty `Vec` means the listing is exhausted.
    ///
    /// # Errors
    ///
    /// - Any transport error from the listing call (after retries).
    /// - [`MvmError::Deserialize`] if the page has no `sellers` array.
    /// - [`MvmError::MalformedCustomFields`] if any record's custom fields
    ///   cannot be decoded. No partial page is returned.
    pub async fn fetch_seller_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Seller>, MvmError> {
        let url = self.sellers_url(page, page_size)?;
        let response: SellersResponse = self
            .get_json(&url, &format!("sellers.json(page={page})"))
            .await?;

        let fields = self.custom_fields;
        response
            .sellers
            .iter()
            .map(|record| decode_seller(record, fields))
            .collect()
    }

    pub(super) fn sellers_url(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<reqwest::Url, MvmError> {
        self.endpoint_url(
            "sellers.json",
            &[("limit", &page_size.to_string()), ("page", &page.to_string())],
        )
    }
}
