//! Draft lifecycle commands: set fields, show, reset, submit.

use crate::OutputFormat;
use crate::api::leave::LeaveClient;
use crate::config::Config;
use crate::draft::form::{self, FieldUpdate};
use crate::draft::store::{DraftState, with_draft_lock};
use crate::platform;
use crate::session::Session;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

fn draft_paths(config: &Config) -> Result<(PathBuf, PathBuf)> {
    platform::draft_paths(config.state.state_dir_override.as_ref())
}

fn parse_update(field: &str, value: &str) -> Result<FieldUpdate> {
    let parse_date = |v: &str| -> Result<NaiveDate> {
        v.parse::<NaiveDate>()
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", v))
    };

    match field {
        "employee" => Ok(FieldUpdate::Employee(value.to_string())),
        "leave-type" => {
            let leave_type = value.parse().map_err(anyhow::Error::msg)?;
            Ok(FieldUpdate::LeaveType(leave_type))
        }
        "request-date" => Ok(FieldUpdate::RequestDate(parse_date(value)?)),
        "start-date" => Ok(FieldUpdate::StartDate(parse_date(value)?)),
        "end-date" => Ok(FieldUpdate::EndDate(parse_date(value)?)),
        "department" => {
            let department = value.parse().map_err(anyhow::Error::msg)?;
            Ok(FieldUpdate::Department(department))
        }
        other => anyhow::bail!(
            "Unknown field '{}'. Fields: employee, leave-type, request-date, \
             start-date, end-date, department",
            other
        ),
    }
}

/// Update one draft field, rederiving the duration when dates change.
pub fn set(config: &Config, field: &str, value: &str) -> Result<()> {
    let update = parse_update(field, value)?;
    let hours_per_workday = config.leave.hours_per_workday;
    let (lock_path, draft_path) = draft_paths(config)?;

    with_draft_lock(&lock_path, &draft_path, |state| {
        let applied = form::apply(state.draft.clone(), update, hours_per_workday);
        state.draft = applied.draft;

        println!("✓ Set {}", field);

        if let Some(warning) = applied.range_warning {
            // Surfaced, not fatal: the draft keeps both dates for correction
            eprintln!("⚠ {}", warning);
        } else if !state.draft.duration_label.is_empty() {
            println!(
                "Duration: {} ({} h)",
                state.draft.duration_label, state.draft.duration_hours
            );
        }

        Ok(())
    })
}

/// Show the current draft.
pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let (_lock_path, draft_path) = draft_paths(config)?;

    // Read-only: plain load, no exclusive lock needed
    let state = DraftState::load(&draft_path)?;
    let draft = &state.draft;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(draft)?);
        }
        OutputFormat::Text => {
            let unset = "(not set)".to_string();
            let opt_date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| unset.clone());

            println!("Leave request draft:");
            println!(
                "  Employee:     {}",
                draft.employee_name.as_deref().unwrap_or("(not set)")
            );
            println!(
                "  Leave type:   {}",
                draft
                    .leave_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| unset.clone())
            );
            println!(
                "  Department:   {}",
                draft
                    .department
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| unset.clone())
            );
            println!("  Request date: {}", opt_date(draft.request_date));
            println!(
                "  Period:       {} to {}",
                opt_date(draft.start_date),
                opt_date(draft.end_date)
            );
            if draft.duration_label.is_empty() {
                println!("  Duration:     (not derived)");
            } else {
                println!(
                    "  Duration:     {} ({} h)",
                    draft.duration_label, draft.duration_hours
                );
            }
        }
    }

    Ok(())
}

/// Clear the draft back to its empty initial state.
pub fn reset(config: &Config) -> Result<()> {
    let (lock_path, draft_path) = draft_paths(config)?;

    with_draft_lock(&lock_path, &draft_path, |state| {
        state.draft = form::reset();
        println!("✓ Draft cleared");
        Ok(())
    })
}

/// Validate and submit the draft to the leave API.
pub fn submit(config: &Config, dry_run: bool) -> Result<()> {
    if dry_run {
        let (lock_path, draft_path) = draft_paths(config)?;
        let payload = with_draft_lock(&lock_path, &draft_path, |state| {
            Ok(form::validate_for_submit(&state.draft)?)
        })?;

        println!("[DRY-RUN] Would submit:");
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let session = Session::load()?;
    submit_with_session(config, &session)
}

/// Full submission flow with an explicit session context.
///
/// The in-flight marker is set under the lock before the HTTP call and
/// cleared after it, so a second invocation cannot double-submit the same
/// draft. On success the draft is cleared; on failure it is kept unchanged
/// for correction. Validation happens before any network call.
pub fn submit_with_session(config: &Config, session: &Session) -> Result<()> {
    let (lock_path, draft_path) = draft_paths(config)?;

    let payload = with_draft_lock(&lock_path, &draft_path, |state| {
        let payload = form::validate_for_submit(&state.draft)?;

        let now = Utc::now();
        if state.submission_in_flight(now) {
            anyhow::bail!(
                "A submission is already in flight for this draft. \
                 Wait for it to finish before retrying."
            );
        }
        state.submission_started_at = Some(now);

        Ok(payload)
    })?;

    let client = LeaveClient::new(&config.api.leave_url);
    let outcome = client.submit(session, &payload);

    with_draft_lock(&lock_path, &draft_path, |state| {
        state.submission_started_at = None;
        if outcome.is_ok() {
            state.draft = form::reset();
        }
        Ok(())
    })?;

    let confirmation = outcome?;

    println!("✓ Leave request submitted (id: {})", confirmation.id);
    println!(
        "  {} | {} | {}",
        confirmation.employee, confirmation.leave_type, confirmation.duration_label
    );

    Ok(())
}
