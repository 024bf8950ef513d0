//! Employee directory listing.

use crate::OutputFormat;
use crate::api::directory::{DirectoryClient, filter_employees};
use crate::config::Config;
use anyhow::Result;

pub fn list(config: &Config, search: Option<String>, format: OutputFormat) -> Result<()> {
    let client = DirectoryClient::new(&config.api.directory_url);

    let mut employees = client.list_employees()?;
    if let Some(term) = search.as_deref() {
        employees = filter_employees(employees, term);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&employees)?);
        }
        OutputFormat::Text => {
            if employees.is_empty() {
                match search {
                    Some(term) => println!("No employees matching '{}'.", term),
                    None => println!("No employees found."),
                }
                return Ok(());
            }

            println!("{:<8} {:<40}", "ID", "Name");
            println!("{}", "-".repeat(48));
            for employee in &employees {
                println!("{:<8} {:<40}", employee.id, employee.name);
            }
            println!("\n{} employee(s)", employees.len());
        }
    }

    Ok(())
}
