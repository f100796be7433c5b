use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};

use crate::model::filter::{FilterSpec, SortKey, StatusFilter};
use crate::model::task::Task;

/// Project the canonical collection into the displayed sequence: apply the
/// spec's predicates (AND-combined), then stable-sort by its key.
///
/// Pure with respect to its inputs — no mutation, no side effects — so it is
/// safe to recompute on every render.
pub fn project<'a>(tasks: &'a [Task], spec: &FilterSpec) -> Vec<&'a Task> {
    let query = query_matcher(&spec.query);

    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|t| matches_status(t, spec.status))
        .filter(|t| spec.priority.is_none_or(|p| t.priority == p))
        .filter(|t| matches_query(t, query.as_ref()))
        .collect();

    view.sort_by(|a, b| compare(spec.sort, a, b));
    view
}

fn matches_status(task: &Task, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Active => !task.completed,
        StatusFilter::Completed => task.completed,
    }
}

/// Case-insensitive substring matcher for the trimmed query. `None` when the
/// query is empty: everything matches regardless of the other predicates.
fn query_matcher(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    // Escaped literal, so the build cannot fail in practice
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

fn matches_query(task: &Task, query: Option<&Regex>) -> bool {
    match query {
        None => true,
        Some(re) => re.is_match(&task.title) || re.is_match(&task.description),
    }
}

/// Total order for the given sort key. Ties keep input order because the
/// caller's sort is stable.
fn compare(sort: SortKey, a: &Task, b: &Task) -> Ordering {
    match sort {
        SortKey::Created => b.created_at.cmp(&a.created_at),
        SortKey::Due => compare_due(a.due_date, b.due_date),
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
    }
}

/// Case-insensitive lexicographic order, byte order as the final tiebreak.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Due dates ascending. A task with no due date sorts after any task that
/// has one; two undated tasks are equal-ranked.
fn compare_due(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
