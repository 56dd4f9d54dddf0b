/// An active DMS replication task, as returned by the control plane listing.
///
/// Tasks are rebuilt from the listing on every scrape and discarded when the scrape
/// completes; nothing about them is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationTask {
    /// Opaque task handle, only ever used to request the task's table statistics.
    pub arn: String,
    /// Stable, human-meaningful task name. Emitted as the `identifier` label value.
    pub identifier: String,
}

/// Row-change counters for one (schema, table) pair of a replication task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStat {
    pub schema_name: String,
    pub table_name: String,
    pub inserts: i64,
    pub deletes: i64,
    pub updates: i64,
}
