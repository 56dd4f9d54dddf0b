use async_trait::async_trait;

use crate::error::CollectorResult;
use crate::types::{ReplicationTask, TableStat};

/// One page of the replication task listing.
#[derive(Debug, Clone, Default)]
pub struct ReplicationTasksPage {
    /// Tasks on this page, in control plane return order.
    pub tasks: Vec<ReplicationTask>,
    /// Continuation marker for the next page. Absent or empty on the last page.
    pub marker: Option<String>,
}

/// One page of the table statistics listing for a single task.
#[derive(Debug, Clone, Default)]
pub struct TableStatisticsPage {
    /// Statistics on this page, in control plane return order.
    pub statistics: Vec<TableStat>,
    /// Continuation marker for the next page. Absent or empty on the last page.
    pub marker: Option<String>,
}

/// Client interface describing the DMS control plane operations used by the collector.
///
/// The seam sits at page granularity: implementations fetch exactly one page per call and
/// echo back the continuation marker, leaving the pagination loop itself to
/// [`list_replication_tasks`](crate::tasks::list_replication_tasks) and
/// [`list_table_statistics`](crate::statistics::list_table_statistics).
#[async_trait]
pub trait DmsApi: Send + Sync {
    /// Fetches one page of active replication tasks.
    ///
    /// Implementations request the variant of the listing that omits verbose per-task
    /// settings, which the collector never reads.
    async fn describe_replication_tasks(
        &self,
        marker: Option<String>,
    ) -> CollectorResult<ReplicationTasksPage>;

    /// Fetches one page of table statistics for the task identified by `task_arn`.
    async fn describe_table_statistics(
        &self,
        task_arn: &str,
        marker: Option<String>,
    ) -> CollectorResult<TableStatisticsPage>;
}
