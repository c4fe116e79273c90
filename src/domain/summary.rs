//! Read-time aggregation over a project's task collection.

use super::{Task, TaskDuration, TaskStatus};
use std::collections::HashMap;

/// Sums the durations of the given tasks.
///
/// The aggregation sums whatever collection it is given; soft-delete
/// filtering is the caller's responsibility.
#[must_use]
pub fn total_duration(tasks: &[Task]) -> TaskDuration {
    tasks
        .iter()
        .fold(TaskDuration::default(), |total, task| {
            total.saturating_add(task.duration())
        })
}

/// Returns the status held by the plurality of the given tasks.
///
/// An empty collection defaults to [`TaskStatus::New`]. Ties are resolved
/// deterministically in favour of the status whose count reached the
/// maximum first while scanning the tasks in collection order: a later
/// status only wins by strictly exceeding the current maximum.
#[must_use]
pub fn dominant_status(tasks: &[Task]) -> TaskStatus {
    let mut counts: HashMap<TaskStatus, usize> = HashMap::new();
    let mut dominant = TaskStatus::New;
    let mut max_count = 0_usize;

    for task in tasks {
        let count = counts.entry(task.status()).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            dominant = task.status();
        }
    }

    dominant
}
