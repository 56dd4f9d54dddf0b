use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::base::{DmsApi, ReplicationTasksPage, TableStatisticsPage};
use crate::error::{CollectorError, CollectorResult};
use crate::types::{ReplicationTask, TableStat};

/// Builds a [`ReplicationTask`] with an arn derived from the identifier.
pub fn task(identifier: &str) -> ReplicationTask {
    ReplicationTask {
        arn: format!("arn:aws:dms:task/{identifier}"),
        identifier: identifier.to_owned(),
    }
}

/// Builds a [`TableStat`] for a (schema, table) pair.
pub fn stat(schema: &str, table: &str, inserts: i64, deletes: i64, updates: i64) -> TableStat {
    TableStat {
        schema_name: schema.to_owned(),
        table_name: table.to_owned(),
        inserts,
        deletes,
        updates,
    }
}

/// [`DmsApi`] implementation replaying pre-scripted pages and failures.
///
/// Task pages are consumed in scripting order, one per call; statistics pages are scripted
/// and consumed per task arn. A call with nothing left in its script panics, which keeps
/// test setup honest. Received continuation markers are recorded so pagination behavior can
/// be asserted from the outside.
#[derive(Default)]
pub struct ScriptedDmsApi {
    task_pages: Mutex<VecDeque<CollectorResult<ReplicationTasksPage>>>,
    statistics_pages: Mutex<HashMap<String, VecDeque<CollectorResult<TableStatisticsPage>>>>,
    task_markers: Mutex<Vec<Option<String>>>,
    statistics_markers: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedDmsApi {
    pub fn new() -> ScriptedDmsApi {
        ScriptedDmsApi::default()
    }

    /// Scripts the next replication tasks page.
    pub fn with_task_page(self, tasks: Vec<ReplicationTask>, marker: Option<&str>) -> ScriptedDmsApi {
        self.task_pages
            .lock()
            .unwrap()
            .push_back(Ok(ReplicationTasksPage {
                tasks,
                marker: marker.map(str::to_owned),
            }));
        self
    }

    /// Scripts the next replication tasks call to fail.
    pub fn with_task_error(self, message: &str) -> ScriptedDmsApi {
        self.task_pages
            .lock()
            .unwrap()
            .push_back(Err(CollectorError::Api(message.to_owned())));
        self
    }

    /// Scripts the next table statistics page for `task_arn`.
    pub fn with_statistics_page(
        self,
        task_arn: &str,
        statistics: Vec<TableStat>,
        marker: Option<&str>,
    ) -> ScriptedDmsApi {
        self.statistics_pages
            .lock()
            .unwrap()
            .entry(task_arn.to_owned())
            .or_default()
            .push_back(Ok(TableStatisticsPage {
                statistics,
                marker: marker.map(str::to_owned),
            }));
        self
    }

    /// Scripts the next table statistics call for `task_arn` to fail.
    pub fn with_statistics_error(self, task_arn: &str, message: &str) -> ScriptedDmsApi {
        self.statistics_pages
            .lock()
            .unwrap()
            .entry(task_arn.to_owned())
            .or_default()
            .push_back(Err(CollectorError::Api(message.to_owned())));
        self
    }

    /// Continuation markers received by the task listing, in call order.
    pub fn task_markers(&self) -> Vec<Option<String>> {
        self.task_markers.lock().unwrap().clone()
    }

    /// Number of task listing calls served.
    pub fn task_calls(&self) -> usize {
        self.task_markers.lock().unwrap().len()
    }

    /// (arn, marker) pairs received by the statistics listing, in call order.
    pub fn statistics_markers(&self) -> Vec<(String, Option<String>)> {
        self.statistics_markers.lock().unwrap().clone()
    }
}

#[async_trait]
impl DmsApi for ScriptedDmsApi {
    async fn describe_replication_tasks(
        &self,
        marker: Option<String>,
    ) -> CollectorResult<ReplicationTasksPage> {
        self.task_markers.lock().unwrap().push(marker);

        self.task_pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("no replication tasks page scripted for this call")
    }

    async fn describe_table_statistics(
        &self,
        task_arn: &str,
        marker: Option<String>,
    ) -> CollectorResult<TableStatisticsPage> {
        self.statistics_markers
            .lock()
            .unwrap()
            .push((task_arn.to_owned(), marker));

        self.statistics_pages
            .lock()
            .unwrap()
            .get_mut(task_arn)
            .and_then(|pages| pages.pop_front())
            .unwrap_or_else(|| panic!("no table statistics page scripted for task {task_arn}"))
    }
}
