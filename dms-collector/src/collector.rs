use std::sync::Arc;

use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, Opts};
use tracing::{error, warn};

use crate::client::base::DmsApi;
use crate::statistics::list_table_statistics;
use crate::tasks::list_replication_tasks;

/// Namespace prefixing the exported metric name.
pub const METRIC_NAMESPACE: &str = "dms";

/// Name of the per-table statistics gauge.
pub const METRIC_NAME: &str = "task_stats";

/// Help text attached to the gauge.
pub const METRIC_HELP: &str = "Gauge for dms tasks statistics";

/// Label names of the gauge, in declaration order.
pub const METRIC_LABELS: [&str; 5] = ["region", "identifier", "schema", "table", "action"];

const ACTION_INSERT: &str = "insert";
const ACTION_DELETE: &str = "delete";
const ACTION_UPDATE: &str = "update";

/// Scrape orchestrator joining task identity with table statistics into gauge samples.
///
/// The collector holds no mutable state: every scrape builds its gauge from scratch, so
/// overlapping scrapes are independent and a label set whose backing task or table has
/// disappeared from the control plane does not survive into the next snapshot.
#[derive(Clone)]
pub struct TaskStatsCollector {
    client: Arc<dyn DmsApi>,
    region: String,
}

impl TaskStatsCollector {
    /// Creates a collector reading through `client` and labeling every sample with `region`.
    pub fn new(client: Arc<dyn DmsApi>, region: String) -> TaskStatsCollector {
        TaskStatsCollector { client, region }
    }

    /// Runs one collection cycle against the control plane and returns the gathered metric
    /// families.
    ///
    /// A task listing failure yields an empty snapshot and a per-task statistics failure
    /// skips only that task; neither error propagates to the scrape transport. The next
    /// scrape is the retry mechanism.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let gauge = GaugeVec::new(
            Opts::new(METRIC_NAME, METRIC_HELP).namespace(METRIC_NAMESPACE),
            &METRIC_LABELS,
        )
        .expect("Failed to build the task_stats gauge");

        self.fill(&gauge).await;

        gauge.collect()
    }

    async fn fill(&self, gauge: &GaugeVec) {
        let tasks = match list_replication_tasks(self.client.as_ref()).await {
            Ok(tasks) => tasks,
            Err(error) => {
                error!(%error, "failed to list replication tasks, emitting an empty scrape");
                return;
            }
        };

        for task in tasks {
            let statistics = match list_table_statistics(self.client.as_ref(), &task).await {
                Ok(statistics) => statistics,
                Err(error) => {
                    warn!(
                        identifier = task.identifier,
                        %error,
                        "failed to list table statistics, skipping task"
                    );
                    continue;
                }
            };

            for stat in statistics {
                for (action, value) in [
                    (ACTION_INSERT, stat.inserts),
                    (ACTION_DELETE, stat.deletes),
                    (ACTION_UPDATE, stat.updates),
                ] {
                    gauge
                        .with_label_values(&[
                            self.region.as_str(),
                            task.identifier.as_str(),
                            stat.schema_name.as_str(),
                            stat.table_name.as_str(),
                            action,
                        ])
                        .set(value as f64);
                }
            }
        }
    }
}
