//! Listing of stored (approved/pending) permissions for an employee.

use crate::OutputFormat;
use crate::api::leave::LeaveClient;
use crate::config::Config;
use crate::draft::store::DraftState;
use crate::platform;
use crate::session::Session;
use anyhow::{Context, Result};

pub fn list(config: &Config, employee: Option<String>, format: OutputFormat) -> Result<()> {
    let employee = match employee {
        Some(name) => name,
        None => {
            // Default to the name cached at login
            let (_lock, draft_path) =
                platform::draft_paths(config.state.state_dir_override.as_ref())?;
            DraftState::load(&draft_path)?
                .logged_in_employee
                .context(
                    "No employee given and none cached. \
                     Run 'permiso session login' or pass --employee",
                )?
        }
    };

    let session = Session::load()?;
    let client = LeaveClient::new(&config.api.leave_url);

    let records = client.list_permissions(&session, &employee)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No permissions found for {}.", employee);
                return Ok(());
            }

            println!("Permissions for {}:", employee);
            println!(
                "{:<10} {:<24} {:<12} {:<12} {:<20}",
                "ID", "Type", "Date", "Duration", "Department"
            );
            println!("{}", "-".repeat(80));

            for record in &records {
                println!(
                    "{:<10} {:<24} {:<12} {:<12} {:<20}",
                    record.id,
                    display_leave_type(&record.leave_type),
                    record.request_date,
                    record.duration_label,
                    record.department.as_deref().unwrap_or("(none)")
                );
            }

            println!("\n{} permission(s)", records.len());
        }
    }

    Ok(())
}

/// Stored records carry legacy type keys as well as the current wire values.
fn display_leave_type(raw: &str) -> &str {
    match raw {
        "vacation" => "Vacaciones",
        "sick" => "Permiso por Enfermedad",
        "personal" => "Permiso Personal",
        other => other,
    }
}
