//! Client for the employee-directory service.

use crate::api::models::Employee;
use crate::error::PermisoError;
use reqwest::blocking::Client;

pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full employee list, in the directory's own order.
    pub fn list_employees(&self) -> Result<Vec<Employee>, PermisoError> {
        let url = format!("{}/api/usuarios", self.base_url);

        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(PermisoError::Submission {
                status: response.status().as_u16(),
                message: "employee directory request failed".to_string(),
            });
        }

        let employees = response.json::<Vec<Employee>>()?;

        Ok(employees)
    }
}

/// Case-insensitive substring filter, matching the original form's
/// client-side search behavior.
pub fn filter_employees(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}
