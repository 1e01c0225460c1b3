use mobility_report_source::configuration::Settings;
use mobility_report_source::WebPageReader;

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
    let settings = Settings::parse()?;
    let reader = WebPageReader::from_settings(&settings)?;
    let builder = job_runners::report_builder()?;
    builder.run_for_new_documents(&reader).await
}
