//! Wire-format tests for request payloads and the result envelope.

use crate::domain::{TaskStatus, ValidationError};
use crate::services::{Envelope, ProjectRequest, TaskRequest};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn project_request_accepts_camel_case_keys_and_ignores_unknown_fields() {
    let payload = json!({
        "title": "Rollout",
        "description": "Deploy",
        "clientId": 4,
        "taskIds": [1, 2],
        "somethingElse": true,
    });

    let request: ProjectRequest =
        serde_json::from_value(payload).expect("payload should deserialize");
    assert_eq!(
        request,
        ProjectRequest::new("Rollout", "Deploy")
            .with_client(4)
            .with_task_ids([1, 2])
    );
}

#[rstest]
fn project_request_sponsor_and_task_fields_default_when_absent() {
    let payload = json!({
        "title": "Rollout",
        "description": "Deploy",
        "companyId": 9,
    });

    let request: ProjectRequest =
        serde_json::from_value(payload).expect("payload should deserialize");
    assert_eq!(request, ProjectRequest::new("Rollout", "Deploy").with_company(9));
}

#[rstest]
fn task_request_accepts_camel_case_keys_and_uppercase_status() {
    let payload = json!({
        "name": "Write migration",
        "status": "PENDING",
        "duration": "2h30m",
        "projectId": 7,
        "somethingElse": "ignored",
    });

    let request: TaskRequest =
        serde_json::from_value(payload).expect("payload should deserialize");
    assert_eq!(
        request,
        TaskRequest::new("Write migration", TaskStatus::Pending, "2h30m").with_project(7)
    );
}

#[rstest]
fn task_request_description_defaults_to_empty_when_absent() {
    let payload = json!({
        "name": "Write migration",
        "status": "NEW",
        "duration": "1h0m",
    });

    let request: TaskRequest =
        serde_json::from_value(payload).expect("payload should deserialize");
    assert_eq!(request.description, "");
    assert!(request.project_id.is_none());
}

#[rstest]
fn failure_envelope_serializes_code_data_and_validation_errors() {
    let envelope = Envelope::failure(
        "Could not persist project due to validation errors",
        &[ValidationError::MissingClientAndCompany],
    );

    let value = serde_json::to_value(&envelope).expect("envelope should serialize");
    assert_eq!(
        value,
        json!({
            "code": 1,
            "data": "Could not persist project due to validation errors",
            "validation_errors": ["Missing client and company id"],
        })
    );
}

#[rstest]
fn success_envelope_serializes_an_empty_error_list() {
    let envelope = Envelope::success("Successfully persisted project with id: 1");

    let value = serde_json::to_value(&envelope).expect("envelope should serialize");
    assert_eq!(
        value,
        json!({
            "code": 0,
            "data": "Successfully persisted project with id: 1",
            "validation_errors": [],
        })
    );
}
