use dms_config::load_config;
use dms_config::shared::ExporterConfig;
use dms_telemetry::init_tracing;
use tracing::info;

use crate::startup::Application;

mod routes;
mod startup;

fn main() -> anyhow::Result<()> {
    let app_name = env!("CARGO_BIN_NAME");

    let _log_flusher = init_tracing(app_name)?;

    // We start the actix runtime after tracing so runtime failures reach the log sink.
    actix_web::rt::System::new().block_on(async_main())?;

    Ok(())
}

async fn async_main() -> anyhow::Result<()> {
    let config = load_config()?;
    config.validate()?;
    log_exporter_config(&config);

    let application = Application::build(config).await?;
    info!("starting to listen on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}

fn log_exporter_config(config: &ExporterConfig) {
    info!(
        host = config.application.host,
        port = config.application.port,
        region = config.aws.region,
        static_credentials = config.aws.has_static_credentials(),
        "exporter options",
    );
}
