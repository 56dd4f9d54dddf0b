use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_databasemigration::Client;
use aws_sdk_databasemigration::config::Credentials;
use aws_sdk_databasemigration::error::{DisplayErrorContext, SdkError};
use tracing::info;

use crate::client::base::{DmsApi, ReplicationTasksPage, TableStatisticsPage};
use crate::error::{CollectorError, CollectorResult};
use crate::types::{ReplicationTask, TableStat};

/// Static credential material for the DMS control plane session.
#[derive(Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// DMS control plane client backed by the AWS SDK.
#[derive(Clone)]
pub struct AwsDmsClient {
    client: Client,
}

impl AwsDmsClient {
    /// Creates a new DMS client for `region` and verifies the control plane is reachable.
    ///
    /// When `credentials` is absent, the SDK's default credential provider chain is used.
    /// A failure here is the one fatal failure mode of the exporter; once a session is
    /// established, scrape-time failures only degrade individual scrapes.
    pub async fn new(
        region: String,
        credentials: Option<StaticCredentials>,
    ) -> CollectorResult<AwsDmsClient> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));

        if let Some(credentials) = credentials {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_key_id,
                credentials.secret_access_key,
                None,
                None,
                "static",
            ));
        }

        let config = loader.load().await;

        let dms_client = AwsDmsClient {
            client: Client::new(&config),
        };
        dms_client.test_connection().await?;

        Ok(dms_client)
    }

    /// Verifies the API session with a single task listing call.
    async fn test_connection(&self) -> CollectorResult<()> {
        info!("testing DMS control plane connection");

        self.client
            .describe_replication_tasks()
            .without_settings(true)
            .send()
            .await
            .map_err(into_api_error)?;

        info!("DMS control plane connection successful");

        Ok(())
    }
}

#[async_trait]
impl DmsApi for AwsDmsClient {
    async fn describe_replication_tasks(
        &self,
        marker: Option<String>,
    ) -> CollectorResult<ReplicationTasksPage> {
        let output = self
            .client
            .describe_replication_tasks()
            .set_marker(marker)
            .without_settings(true)
            .send()
            .await
            .map_err(into_api_error)?;

        // Records missing the arn or the identifier are unusable downstream and are skipped.
        let tasks = output
            .replication_tasks()
            .iter()
            .filter_map(|task| {
                Some(ReplicationTask {
                    arn: task.replication_task_arn()?.to_owned(),
                    identifier: task.replication_task_identifier()?.to_owned(),
                })
            })
            .collect();

        Ok(ReplicationTasksPage {
            tasks,
            marker: output.marker().map(str::to_owned),
        })
    }

    async fn describe_table_statistics(
        &self,
        task_arn: &str,
        marker: Option<String>,
    ) -> CollectorResult<TableStatisticsPage> {
        let output = self
            .client
            .describe_table_statistics()
            .replication_task_arn(task_arn)
            .set_marker(marker)
            .send()
            .await
            .map_err(into_api_error)?;

        let statistics = output
            .table_statistics()
            .iter()
            .filter_map(|stat| {
                Some(TableStat {
                    schema_name: stat.schema_name()?.to_owned(),
                    table_name: stat.table_name()?.to_owned(),
                    inserts: stat.inserts(),
                    deletes: stat.deletes(),
                    updates: stat.updates(),
                })
            })
            .collect();

        Ok(TableStatisticsPage {
            statistics,
            marker: output.marker().map(str::to_owned),
        })
    }
}

/// Flattens an SDK error into [`CollectorError::Api`], keeping the full error chain.
///
/// Every SDK operation carries its own error type, so the chain is rendered to a string at
/// the boundary instead of being preserved generically.
fn into_api_error<E>(error: SdkError<E>) -> CollectorError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CollectorError::Api(DisplayErrorContext(&error).to_string())
}
