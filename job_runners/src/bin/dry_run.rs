use anyhow::Context;
use mobility_report_source::ReportDirectory;
use serde::Deserialize;
use shared_kernel::configuration::config;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Settings {
    dry_run: DryRunSettings,
}

#[derive(Debug, Deserialize)]
struct DryRunSettings {
    report_directory: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry(job_runners::SERVICE_NAME);
    let result = start().await;
    if let Err(err) = &result {
        tracing::error!("{err:?}");
    }
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start() -> anyhow::Result<()> {
    let settings = config::<Settings>().context("Missing the dry_run settings")?;
    let source = ReportDirectory::new(settings.dry_run.report_directory);
    let builder = job_runners::report_builder()?;
    builder.run_for_new_documents(&source).await
}
