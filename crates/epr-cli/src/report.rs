//! Human-readable rendering of a [`SweepReport`].

use std::io::{self, Write};

use epr_audit::{SweepReport, Termination};

/// Writes per-seller verdicts, then the totals and why the sweep ended.
pub(crate) fn write_text(out: &mut impl Write, report: &SweepReport) -> io::Result<()> {
    for (seller_id, result) in &report.results {
        writeln!(out, "Seller {seller_id} result: {}", result.verdict())?;
        writeln!(out, "Successful tests: {:?}", result.checks_passed)?;
        writeln!(out, "Failed tests: {:?}", result.checks_failed)?;
    }

    let summary = report.summary();
    writeln!(out)?;
    writeln!(out, "Summary of sellers:")?;
    writeln!(out, "Total analyzed: {}", summary.analyzed)?;
    writeln!(out, "Total passed: {}", summary.passed)?;
    writeln!(out, "Total failed: {}", summary.failed)?;

    match report.termination {
        Termination::Exhausted { empty_page } => {
            writeln!(out, "Sweep ended: listing exhausted at page {empty_page}")?;
        }
        Termination::CutoffReached { max_pages } => writeln!(
            out,
            "Sweep ended: page cutoff ({max_pages}) reached, remaining sellers were not analyzed"
        )?,
    }
    if report.approached_cutoff {
        writeln!(
            out,
            "Warning: sweep is approaching the max page limit, consider raising EPR_MAX_PAGES"
        )?;
    }

    Ok(())
}
