//! Aggregation tests for total duration and dominant status.

use crate::domain::{dominant_status, total_duration, Task, TaskDuration, TaskStatus};
use mockable::DefaultClock;
use rstest::rstest;

fn task_with(status: TaskStatus, millis: i64) -> Task {
    Task::new(
        "task",
        "",
        status,
        TaskDuration::from_millis(millis),
        None,
        &DefaultClock,
    )
}

#[rstest]
fn total_duration_sums_the_given_collection() {
    let tasks = vec![
        task_with(TaskStatus::Done, 7_200_000),
        task_with(TaskStatus::Done, 5_400_000),
        task_with(TaskStatus::New, 900_000),
    ];
    assert_eq!(total_duration(&tasks).as_millis(), 13_500_000);
}

#[rstest]
fn total_duration_of_empty_collection_is_zero() {
    assert_eq!(total_duration(&[]).as_millis(), 0);
}

#[rstest]
fn dominant_status_picks_the_plurality() {
    let tasks = vec![
        task_with(TaskStatus::Done, 0),
        task_with(TaskStatus::Done, 0),
        task_with(TaskStatus::New, 0),
    ];
    assert_eq!(dominant_status(&tasks), TaskStatus::Done);
}

#[rstest]
fn dominant_status_defaults_to_new_for_empty_collection() {
    assert_eq!(dominant_status(&[]), TaskStatus::New);
}

#[rstest]
fn dominant_status_tie_goes_to_first_group_to_reach_the_maximum() {
    let tasks = vec![
        task_with(TaskStatus::Done, 0),
        task_with(TaskStatus::New, 0),
    ];
    assert_eq!(dominant_status(&tasks), TaskStatus::Done);

    let reversed = vec![
        task_with(TaskStatus::New, 0),
        task_with(TaskStatus::Done, 0),
    ];
    assert_eq!(dominant_status(&reversed), TaskStatus::New);
}

#[rstest]
fn dominant_status_later_group_wins_by_strict_majority() {
    let tasks = vec![
        task_with(TaskStatus::Done, 0),
        task_with(TaskStatus::Pending, 0),
        task_with(TaskStatus::Pending, 0),
    ];
    assert_eq!(dominant_status(&tasks), TaskStatus::Pending);
}
