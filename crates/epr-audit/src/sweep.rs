//! Bounded pagination over the seller listing.
//!
//! A sweep fetches page after page until the listing returns an empty page
//! or `max_pages` is reached. Sellers already seen on an earlier page are
//! skipped, so overlapping pages never double-count a seller. Every new
//! seller is enriched and checked before the next one is touched.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use epr_core::{CheckResult, SellerId};
use epr_mvm::MvmError;
use serde::Serialize;

use crate::registry::CheckRegistry;
use crate::source::SellerSource;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound on pages per sweep, guarding against a listing that never
/// returns an empty page. 50 × 100 covers 5 000 sellers.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Why the sweep stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// `empty_page` returned no sellers; the listing was fully read.
    Exhausted { empty_page: u32 },
    /// `max_pages` pages were processed without reaching an empty page.
    /// Sellers beyond the cutoff were not analyzed.
    CutoffReached { max_pages: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub analyzed: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages_fetched: u32,
    pub termination: Termination,
    /// The sweep ended past the halfway point of `max_pages`; the cutoff
    /// should be raised before the listing outgrows it.
    pub approached_cutoff: bool,
    pub results: BTreeMap<SellerId, CheckResult>,
}

impl SweepReport {
    #[must_use]
    pub fn summary(&self) -> SweepSummary {
        let passed = self.results.values().filter(|r| r.passed_all()).count();
        SweepSummary {
            analyzed: self.results.len(),
            passed,
            failed: self.results.len() - passed,
        }
    }
}

pub struct Sweep<'a, S> {
    source: &'a S,
    registry: &'a CheckRegistry,
    page_size: u32,
    max_pages: u32,
}

impl<'a, S: SellerSource> Sweep<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, registry: &'a CheckRegistry) -> Self {
        Self {
            source,
            registry,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Runs the sweep to completion.
    ///
    /// # Errors
    ///
    /// Any fetch or enrichment error aborts the sweep. Results gathered so
    /// far are discarded; a partial report would understate the failure
    /// count.
    pub async fn run(&self) -> Result<SweepReport, MvmError> {
        let started_at = Utc::now();
        let mut seen: HashSet<SellerId> = HashSet::new();
        let mut results: BTreeMap<SellerId, CheckResult> = BTreeMap::new();
        let mut page = 1u32;

        let termination = loop {
            tracing::info!(page, analyzed = results.len(), "analyzing sellers page");
            let batch = self.source.fetch_page(page, self.page_size).await?;

            if batch.is_empty() {
                tracing::info!(page, "page is empty, all sellers have been analyzed");
                break Termination::Exhausted { empty_page: page };
            }

            for mut seller in batch {
                let seller_id = seller.id();
                if !seen.insert(seller_id) {
                    tracing::info!(%seller_id, "skipping previously seen seller");
                    continue;
                }

                tracing::debug!(%seller_id, "populating seller details");
                self.source.populate(&mut seller).await?;

                let result = self.registry.run_all(&seller);
                tracing::info!(
                    %seller_id,
                    verdict = result.verdict(),
                    "finished compliance checks"
                );
                results.insert(seller_id, result);
            }

            if page >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    analyzed = results.len(),
                    "page cutoff reached before an empty page; remaining sellers were not analyzed"
                );
                break Termination::CutoffReached {
                    max_pages: self.max_pages,
                };
            }
            page += 1;
        };

        let approached_cutoff = approaching_cutoff(page, self.max_pages);
        if approached_cutoff {
            tracing::warn!(
                page,
                max_pages = self.max_pages,
                "approaching the max page limit, consider raising it"
            );
        }

        Ok(SweepReport {
            started_at,
            finished_at: Utc::now(),
            pages_fetched: page,
            termination,
            approached_cutoff,
            results,
        })
    }
}

/// `page / max_pages > 0.5`, in integer arithmetic.
pub(crate) fn approaching_cutoff(page: u32, max_pages: u32) -> bool {
    u64::from(page) * 2 > u64::from(max_pages)
}

#[cfg(test)]
#[path = "sweep_test.rs"]
mod tests;
