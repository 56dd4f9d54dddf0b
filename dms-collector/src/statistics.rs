use crate::client::base::DmsApi;
use crate::error::{CollectorError, CollectorResult};
use crate::tasks::MAX_PAGES;
use crate::types::{ReplicationTask, TableStat};

/// Retrieves all table statistics for one replication task.
///
/// Same pagination algorithm and failure policy as
/// [`list_replication_tasks`](crate::tasks::list_replication_tasks), scoped to the task's
/// handle: abort on the first page failure, discard partial accumulation, no retry.
pub async fn list_table_statistics(
    client: &dyn DmsApi,
    task: &ReplicationTask,
) -> CollectorResult<Vec<TableStat>> {
    let mut statistics = Vec::new();
    let mut marker = None;

    for _ in 0..MAX_PAGES {
        let page = client.describe_table_statistics(&task.arn, marker).await?;
        statistics.extend(page.statistics);

        match page.marker {
            Some(next) if !next.is_empty() => marker = Some(next),
            _ => return Ok(statistics),
        }
    }

    Err(CollectorError::PageLimitExceeded(MAX_PAGES))
}

#[cfg(test)]
mod tests {
    use super::list_table_statistics;
    use crate::error::CollectorError;
    use crate::test_utils::{ScriptedDmsApi, stat, task};

    #[tokio::test]
    async fn pages_are_concatenated_and_scoped_to_the_task() {
        let task = task("task-1");
        let client = ScriptedDmsApi::new()
            .with_statistics_page(
                &task.arn,
                vec![stat("public", "orders", 1, 2, 3)],
                Some("page-2"),
            )
            .with_statistics_page(&task.arn, vec![stat("public", "users", 4, 5, 6)], None);

        let statistics = list_table_statistics(&client, &task).await.unwrap();

        assert_eq!(
            statistics,
            [
                stat("public", "orders", 1, 2, 3),
                stat("public", "users", 4, 5, 6),
            ]
        );
        assert_eq!(
            client.statistics_markers(),
            [
                (task.arn.clone(), None),
                (task.arn.clone(), Some("page-2".to_owned())),
            ]
        );
    }

    #[tokio::test]
    async fn absent_marker_stops_after_a_single_call() {
        let task = task("task-1");
        let client = ScriptedDmsApi::new().with_statistics_page(
            &task.arn,
            vec![stat("public", "orders", 1, 2, 3)],
            None,
        );

        let statistics = list_table_statistics(&client, &task).await.unwrap();

        assert_eq!(statistics.len(), 1);
        assert_eq!(client.statistics_markers().len(), 1);
    }

    #[tokio::test]
    async fn page_failure_aborts_pagination() {
        let task = task("task-1");
        let client = ScriptedDmsApi::new()
            .with_statistics_page(
                &task.arn,
                vec![stat("public", "orders", 1, 2, 3)],
                Some("page-2"),
            )
            .with_statistics_error(&task.arn, "task is broken");

        let result = list_table_statistics(&client, &task).await;

        assert!(matches!(result, Err(CollectorError::Api(_))));
    }
}
