//! Service orchestration tests for task operations.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::{Task, TaskId, TaskStatus};
use crate::ports::{Page, RepositoryResult, TaskRepository};
use crate::services::{BoardService, TaskRequest};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService =
    BoardService<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore, DefaultClock>;

struct TestContext {
    service: TestService,
    store: InMemoryStore,
}

#[fixture]
fn context() -> TestContext {
    let store = InMemoryStore::new();
    let service = BoardService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
    );
    TestContext { service, store }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_reports_the_assigned_id(context: TestContext) {
    let envelope = context
        .service
        .create_task(
            TaskRequest::new("Write migration", TaskStatus::Pending, "2h30m")
                .with_description("Schema change for the billing tables"),
        )
        .await
        .expect("operation should not fault");

    assert!(envelope.is_success());
    assert_eq!(envelope.data, "Successfully persisted task with id: 1");

    let task = TaskRepository::find_by_id(&context.store, TaskId::new(1))
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(task.name(), "Write migration");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.duration().as_millis(), 9_000_000);
    assert!(task.project_id().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_with_malformed_duration_is_rejected(context: TestContext) {
    let envelope = context
        .service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "abc"))
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
    assert_eq!(
        envelope.data,
        "Could not persist task due to validation errors"
    );
    assert_eq!(
        envelope.validation_errors,
        vec!["The provided duration does not match the desired format".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_with_unknown_project_is_rejected(context: TestContext) {
    let envelope = context
        .service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "1h0m").with_project(77))
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
    assert_eq!(
        envelope.validation_errors,
        vec!["project not found: 77".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_accumulates_resolution_and_format_errors(context: TestContext) {
    let envelope = context
        .service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "2h").with_project(77))
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
    assert_eq!(
        envelope.validation_errors,
        vec![
            "project not found: 77".to_owned(),
            "The provided duration does not match the desired format".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_replaces_every_field(context: TestContext) {
    context
        .service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "1h0m"))
        .await
        .expect("creation should succeed");

    let envelope = context
        .service
        .update_task(
            TaskRequest::new("Run migration", TaskStatus::Done, "0h45m"),
            TaskId::new(1),
        )
        .await
        .expect("operation should not fault");

    assert!(envelope.is_success());
    assert_eq!(envelope.data, "Successfully updated task with id: 1");

    let task = TaskRepository::find_by_id(&context.store, TaskId::new(1))
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(task.name(), "Run migration");
    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.duration().as_millis(), 2_700_000);
    assert!(task.updated_at() >= task.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_with_unknown_id_does_not_create_a_record(context: TestContext) {
    let envelope = context
        .service
        .update_task(
            TaskRequest::new("Run migration", TaskStatus::Done, "0h45m"),
            TaskId::new(8),
        )
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
    assert_eq!(
        envelope.data,
        "Could not update task due to validation errors"
    );
    assert_eq!(
        envelope.validation_errors,
        vec!["task not found: 8".to_owned()]
    );
    let tasks = context
        .service
        .list_tasks(Page::default())
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_hides_it_from_listing_and_stays_idempotent(context: TestContext) {
    context
        .service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "1h0m"))
        .await
        .expect("creation should succeed");
    context
        .service
        .create_task(TaskRequest::new("Review migration", TaskStatus::New, "0h30m"))
        .await
        .expect("creation should succeed");

    let envelope = context
        .service
        .delete_task(TaskId::new(1))
        .await
        .expect("delete should not fault");
    assert!(envelope.is_success());
    assert_eq!(envelope.data, "Successfully deleted task with id: 1");

    let tasks = context
        .service
        .list_tasks(Page::default())
        .await
        .expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::name), Some("Review migration"));

    let repeat = context
        .service
        .delete_task(TaskId::new(1))
        .await
        .expect("repeat delete should not fault");
    assert!(repeat.is_success());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_task_is_reported(context: TestContext) {
    let envelope = context
        .service
        .delete_task(TaskId::new(3))
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
    assert_eq!(envelope.data, "Could not find task with id: 3");
    assert_eq!(
        envelope.validation_errors,
        vec!["task not found: 3".to_owned()]
    );
}

mockall::mock! {
    TaskRepo {}

    #[async_trait]
    impl TaskRepository for TaskRepo {
        async fn save(&self, task: Task) -> RepositoryResult<TaskId>;
        async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;
        async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Task>>;
        async fn soft_delete(&self, task: Task) -> RepositoryResult<TaskId>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_task_request_never_touches_the_store() {
    // A mock with no expectations panics on any call.
    let tasks = MockTaskRepo::new();
    let store = InMemoryStore::new();
    let service = BoardService::new(
        Arc::new(store.clone()),
        Arc::new(tasks),
        Arc::new(store.clone()),
        Arc::new(store),
        Arc::new(DefaultClock),
    );

    let envelope = service
        .create_task(TaskRequest::new("Write migration", TaskStatus::New, "nope"))
        .await
        .expect("operation should not fault");

    assert_eq!(envelope.code, 1);
}
