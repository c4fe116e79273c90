//! Structural request validation rules.
//!
//! Rules run before any store access and their errors accumulate alongside
//! resolver and codec errors; a request is rejected as a whole once any
//! error has been collected.

use super::ProjectRequest;
use crate::domain::ValidationError;

/// Checks the client/company exclusivity rule on a project request.
///
/// A project must reference exactly one of a client or a company: neither
/// and both are each reported as a violation.
#[must_use]
pub fn validate_project_request(request: &ProjectRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.client_id.is_none() && request.company_id.is_none() {
        errors.push(ValidationError::MissingClientAndCompany);
    }

    if request.client_id.is_some() && request.company_id.is_some() {
        errors.push(ValidationError::ClientAndCompanyBothSet);
    }

    errors
}
