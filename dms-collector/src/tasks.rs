use crate::client::base::DmsApi;
use crate::error::{CollectorError, CollectorResult};
use crate::types::ReplicationTask;

/// Upper bound on pages fetched per listing operation.
///
/// A well-behaved control plane terminates pagination by omitting the continuation marker;
/// the cap bounds the loop when it does not.
pub const MAX_PAGES: usize = 1_000;

/// Retrieves the complete set of active replication tasks.
///
/// Pages through the task listing, passing each returned continuation marker back into the
/// next call and accumulating items in control plane return order. An absent or empty marker
/// terminates the loop. Any page failure aborts immediately and surfaces the error; the
/// partially accumulated list is discarded by the caller. No retry.
pub async fn list_replication_tasks(client: &dyn DmsApi) -> CollectorResult<Vec<ReplicationTask>> {
    let mut tasks = Vec::new();
    let mut marker = None;

    for _ in 0..MAX_PAGES {
        let page = client.describe_replication_tasks(marker).await?;
        tasks.extend(page.tasks);

        match page.marker {
            Some(next) if !next.is_empty() => marker = Some(next),
            _ => return Ok(tasks),
        }
    }

    Err(CollectorError::PageLimitExceeded(MAX_PAGES))
}

#[cfg(test)]
mod tests {
    use super::{MAX_PAGES, list_replication_tasks};
    use crate::error::CollectorError;
    use crate::test_utils::{ScriptedDmsApi, task};

    #[tokio::test]
    async fn pages_are_concatenated_in_order() {
        let client = ScriptedDmsApi::new()
            .with_task_page(vec![task("task-1"), task("task-2")], Some("page-2"))
            .with_task_page(vec![task("task-3")], Some("page-3"))
            .with_task_page(vec![task("task-4")], None);

        let tasks = list_replication_tasks(&client).await.unwrap();

        let identifiers: Vec<_> = tasks.iter().map(|task| task.identifier.as_str()).collect();
        assert_eq!(identifiers, ["task-1", "task-2", "task-3", "task-4"]);
        assert_eq!(
            client.task_markers(),
            [None, Some("page-2".to_owned()), Some("page-3".to_owned())]
        );
    }

    #[tokio::test]
    async fn absent_marker_stops_after_a_single_call() {
        let client = ScriptedDmsApi::new().with_task_page(vec![task("task-1")], None);

        let tasks = list_replication_tasks(&client).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(client.task_calls(), 1);
    }

    #[tokio::test]
    async fn empty_marker_is_treated_as_terminal() {
        let client = ScriptedDmsApi::new().with_task_page(vec![task("task-1")], Some(""));

        let tasks = list_replication_tasks(&client).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(client.task_calls(), 1);
    }

    #[tokio::test]
    async fn page_failure_aborts_pagination() {
        let client = ScriptedDmsApi::new()
            .with_task_page(vec![task("task-1")], Some("page-2"))
            .with_task_error("control plane down");

        let result = list_replication_tasks(&client).await;

        assert!(matches!(result, Err(CollectorError::Api(_))));
        assert_eq!(client.task_calls(), 2);
    }

    #[tokio::test]
    async fn runaway_pagination_is_capped() {
        let mut client = ScriptedDmsApi::new();
        for page in 0..MAX_PAGES {
            client = client.with_task_page(vec![], Some(&format!("page-{page}")));
        }

        let result = list_replication_tasks(&client).await;

        assert!(matches!(result, Err(CollectorError::PageLimitExceeded(_))));
        assert_eq!(client.task_calls(), MAX_PAGES);
    }
}
