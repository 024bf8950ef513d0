//! Client for the leave-management service (permisos + usuarios/login).

use crate::api::models::{
    Confirmation, CreateLeaveRequest, LoginRequest, LoginResponse, PermissionRecord, UserProfile,
};
use crate::error::PermisoError;
use crate::session::Session;
use reqwest::blocking::{Client, Response};

pub struct LeaveClient {
    client: Client,
    base_url: String,
}

impl LeaveClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn bearer(session: &Session) -> String {
        format!("Bearer {}", session.token)
    }

    /// Submit a completed leave request.
    ///
    /// Transport failure maps to [`PermisoError::Network`], a non-success
    /// status to [`PermisoError::Submission`] carrying the server's own
    /// message where one was sent. No retries; the caller resubmits
    /// explicitly if it wants another attempt.
    pub fn submit(
        &self,
        session: &Session,
        request: &CreateLeaveRequest,
    ) -> Result<Confirmation, PermisoError> {
        let url = format!("{}/api/permisos/crear", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", Self::bearer(session))
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        let confirmation = response.json::<Confirmation>()?;

        Ok(confirmation)
    }

    /// List stored permissions for one employee.
    pub fn list_permissions(
        &self,
        session: &Session,
        employee: &str,
    ) -> Result<Vec<PermissionRecord>, PermisoError> {
        let url = format!("{}/api/permisos/empleado/{}", self.base_url, employee);

        let response = self
            .client
            .get(&url)
            .header("Authorization", Self::bearer(session))
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        let records = response.json::<Vec<PermissionRecord>>()?;

        Ok(records)
    }

    /// Authenticate; the returned id doubles as the session token.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PermisoError> {
        let url = format!("{}/api/usuarios/login", self.base_url);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&body).send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        let login = response.json::<LoginResponse>()?;

        Ok(login)
    }

    /// Fetch the profile behind a session token.
    pub fn get_user(&self, session: &Session) -> Result<UserProfile, PermisoError> {
        let url = format!("{}/api/usuarios/{}", self.base_url, session.token);

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(rejection(response));
        }

        let profile = response.json::<UserProfile>()?;

        Ok(profile)
    }
}

/// Turn a non-success response into a [`PermisoError::Submission`],
/// preferring the server's `message` field, then the raw body, then the
/// status reason.
fn rejection(response: Response) -> PermisoError {
    let status = response.status();
    let message = response
        .text()
        .ok()
        .and_then(|body| {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                    return Some(msg.to_string());
                }
            }
            let trimmed = body.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        });

    PermisoError::Submission {
        status: status.as_u16(),
        message,
    }
}
