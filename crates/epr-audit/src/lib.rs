//! EPR compliance audit over every seller on the marketplace.
//!
//! [`Sweep`] pages through the seller listing, enriches each new seller via a
//! [`SellerSource`], and runs the [`CheckRegistry`] against it. The resulting
//! [`SweepReport`] is returned to the caller rather than printed, so any sink
//! can consume it.

pub mod checks;
pub mod registry;
pub mod source;
pub mod sweep;

pub use checks::{ComplianceCheck, MarketRegistrationCheck, Violation};
pub use registry::CheckRegistry;
pub use source::SellerSource;
pub use sweep::{Sweep, SweepReport, SweepSummary, Termination};
