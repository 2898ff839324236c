//! Where a sweep gets its sellers from.

use std::future::Future;

use epr_core::Seller;
use epr_mvm::{MvmClient, MvmError};

/// Paged seller listing plus per-seller enrichment.
///
/// [`MvmClient`] is the production implementation.
pub trait SellerSource {
    /// Fetches one 1-based page. An empty page ends the sweep.
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<Seller>, MvmError>> + Send;

    /// Fills in the seller's shipping destinations.
    fn populate(&self, seller: &mut Seller) -> impl Future<Output = Result<(), MvmError>> + Send;
}

impl SellerSource for MvmClient {
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<Seller>, MvmError>> + Send {
        self.fetch_seller_page(page, page_size)
    }

    fn populate(&self, seller: &mut Seller) -> impl Future<Output = Result<(), MvmError>> + Send {
        self.populate_seller(seller)
    }
}
