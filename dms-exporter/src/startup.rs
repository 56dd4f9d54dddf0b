use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use dms_collector::client::aws::{AwsDmsClient, StaticCredentials};
use dms_collector::collector::TaskStatsCollector;
use dms_config::shared::ExporterConfig;
use secrecy::ExposeSecret;
use tracing_actix_web::TracingLogger;

use crate::routes::{health_check, metrics};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds the exporter application from its configuration.
    ///
    /// Binds the listener and establishes the DMS control plane session. A failure in
    /// either is fatal; once the application is built, upstream failures only degrade
    /// individual scrapes.
    pub async fn build(config: ExporterConfig) -> Result<Application, anyhow::Error> {
        let listener = TcpListener::bind(config.application.address())?;
        let port = listener.local_addr()?.port();

        let credentials = match (&config.aws.access_key_id, &config.aws.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id: access_key_id.clone(),
                secret_access_key: secret_access_key.expose_secret().clone(),
            }),
            _ => None,
        };

        let client = AwsDmsClient::new(config.aws.region.clone(), credentials).await?;
        let collector = TaskStatsCollector::new(Arc::new(client), config.aws.region);

        let server = run(listener, collector)?;

        Ok(Application { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(listener: TcpListener, collector: TaskStatsCollector) -> Result<Server, anyhow::Error> {
    let collector = web::Data::new(collector);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(metrics)
            .app_data(collector.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
