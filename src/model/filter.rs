use super::task::Priority;

/// Which completion states the view keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Sort key for the displayed task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    Created,
    /// Due date ascending, undated tasks last
    Due,
    /// Title ascending, case-insensitive
    Title,
    /// High before medium before low
    Priority,
}

/// Transient display criteria: query, status, priority, and sort key.
///
/// Session-only UI state. Deliberately not serializable — a fresh session
/// starts from the default spec, never from a persisted one.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against title and description;
    /// empty (after trimming) keeps everything
    pub query: String,
    pub status: StatusFilter,
    /// `None` keeps every priority
    pub priority: Option<Priority>,
    pub sort: SortKey,
}
