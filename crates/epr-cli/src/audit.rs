use anyhow::Context;
use epr_audit::{CheckRegistry, Sweep};
use epr_mvm::MvmClient;

use crate::report::write_text;
use crate::OutputFormat;

pub(crate) struct AuditOptions {
    pub page_size: u32,
    pub max_pages: u32,
    pub format: OutputFormat,
}

/// Runs one sweep with a fresh client and prints the report to stdout.
pub(crate) async fn run_audit(
    config: &epr_core::AppConfig,
    options: AuditOptions,
) -> anyhow::Result<()> {
    let client = MvmClient::from_config(config).context("failed to build MVM client")?;
    let registry = CheckRegistry::default();

    tracing::info!(
        page_size = options.page_size,
        max_pages = options.max_pages,
        checks = ?registry.check_names().collect::<Vec<_>>(),
        "starting EPR compliance sweep"
    );

    let report = Sweep::new(&client, &registry)
        .with_page_size(options.page_size)
        .with_max_pages(options.max_pages)
        .run()
        .await
        .context("compliance sweep aborted")?;

    let summary = report.summary();
    tracing::info!(
        analyzed = summary.analyzed,
        passed = summary.passed,
        failed = summary.failed,
        pages = report.pages_fetched,
        "compliance sweep finished"
    );

    match options.format {
        OutputFormat::Text => {
            write_text(&mut std::io::stdout().lock(), &report).context("failed to write report")?;
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    Ok(())
}
