//! Ordered set of compliance checks run against every seller.

use epr_core::{CheckResult, Seller};

use crate::checks::{ComplianceCheck, MarketRegistrationCheck};

/// Checks are fixed when the registry is built and always run in
/// registration order.
pub struct CheckRegistry {
    checks: Vec<Box<dyn ComplianceCheck>>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new(checks: Vec<Box<dyn ComplianceCheck>>) -> Self {
        Self { checks }
    }

    pub fn check_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Evaluates every check against `seller`. A violation in one check does
    /// not stop the remaining checks from running.
    #[must_use]
    pub fn run_all(&self, seller: &Seller) -> CheckResult {
        let mut result = CheckResult::default();
        for check in &self.checks {
            match check.evaluate(seller) {
                Ok(()) => result.checks_passed.push(check.name().to_owned()),
                Err(violation) => {
                    tracing::debug!(check = check.name(), %violation, "compliance violation");
                    result.checks_failed.push(check.name().to_owned());
                }
            }
        }
        result
    }
}

impl Default for CheckRegistry {
    /// The EPR packaging checks for Germany and France.
    fn default() -> Self {
        Self::new(vec![
            Box::new(MarketRegistrationCheck::can_sell_in_de()),
            Box::new(MarketRegistrationCheck::can_sell_in_fr()),
        ])
    }
}
