//! Reducer-style updates to the leave request draft.
//!
//! Every mutation goes through [`apply`], which returns a new draft value.
//! Date updates re-run the duration derivation so the derived trio
//! (`duration_days`, `duration_hours`, `duration_label`) is never stale.

use crate::api::models::CreateLeaveRequest;
use crate::draft::duration::derive_duration;
use crate::draft::model::{Department, LeaveRequestDraft, LeaveType};
use crate::error::PermisoError;
use chrono::NaiveDate;

/// A single named-field update to the draft.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Employee(String),
    LeaveType(LeaveType),
    RequestDate(NaiveDate),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    Department(Department),
}

/// Result of applying an update: the new draft, plus the range warning when
/// the boundary dates are out of order. The warning is advisory; the draft
/// itself is always left in a consistent state with the duration fields
/// reset to zero.
#[derive(Debug)]
pub struct Applied {
    pub draft: LeaveRequestDraft,
    pub range_warning: Option<PermisoError>,
}

/// Apply one field update and rederive the duration fields.
pub fn apply(draft: LeaveRequestDraft, update: FieldUpdate, hours_per_workday: u32) -> Applied {
    let mut draft = draft;

    match update {
        FieldUpdate::Employee(name) => draft.employee_name = Some(name),
        FieldUpdate::LeaveType(leave_type) => draft.leave_type = Some(leave_type),
        FieldUpdate::RequestDate(date) => draft.request_date = Some(date),
        FieldUpdate::StartDate(date) => draft.start_date = Some(date),
        FieldUpdate::EndDate(date) => draft.end_date = Some(date),
        FieldUpdate::Department(department) => draft.department = Some(department),
    }

    let range_warning = rederive(&mut draft, hours_per_workday);

    Applied {
        draft,
        range_warning,
    }
}

/// Restore the empty initial draft (used after a successful submission).
pub fn reset() -> LeaveRequestDraft {
    LeaveRequestDraft::default()
}

fn rederive(draft: &mut LeaveRequestDraft, hours_per_workday: u32) -> Option<PermisoError> {
    let (Some(start), Some(end)) = (draft.start_date, draft.end_date) else {
        // Deferred state: nothing derived until both dates are set
        draft.duration_days = 0;
        draft.duration_hours = 0;
        draft.duration_label = String::new();
        return None;
    };

    match derive_duration(start, end, hours_per_workday) {
        Ok(duration) => {
            draft.duration_days = duration.days;
            draft.duration_hours = duration.hours;
            draft.duration_label = duration.label;
            None
        }
        Err(warning) => {
            draft.duration_days = 0;
            draft.duration_hours = 0;
            draft.duration_label = String::new();
            Some(warning)
        }
    }
}

/// Check the draft for completeness and build the submission payload.
///
/// Runs before any network call; an incomplete draft never leaves the
/// process.
pub fn validate_for_submit(draft: &LeaveRequestDraft) -> Result<CreateLeaveRequest, PermisoError> {
    let employee = match draft.employee_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(PermisoError::validation("no employee selected")),
    };

    let leave_type = draft
        .leave_type
        .ok_or_else(|| PermisoError::validation("leave type not set"))?;

    let request_date = draft
        .request_date
        .ok_or_else(|| PermisoError::validation("request date not set"))?;

    if draft.department.is_none() {
        return Err(PermisoError::validation("department not set"));
    }

    if draft.duration_label.is_empty() {
        return Err(PermisoError::validation(
            "leave period not set (start and end dates required)",
        ));
    }

    Ok(CreateLeaveRequest {
        employee,
        leave_type,
        request_date,
        duration_label: draft.duration_label.clone(),
    })
}
