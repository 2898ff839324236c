use serde::{Deserialize, Serialize};

/// Outcome of running every registered compliance check against one seller.
///
/// Each check name lands in exactly one of the two lists, in registration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub checks_passed: Vec<String>,
    pub checks_failed: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn passed_all(&self) -> bool {
        self.checks_failed.is_empty()
    }

    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.passed_all() {
            "PASSED"
        } else {
            "FAILED"
        }
    }
}
