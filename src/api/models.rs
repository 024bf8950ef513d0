//! Wire types for the leave-management and employee-directory APIs.
//!
//! The backend speaks Spanish camelCase field names; serde renames keep the
//! Rust side idiomatic.

use crate::draft::model::LeaveType;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Body for `POST /api/permisos/crear`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLeaveRequest {
    #[serde(rename = "empleado")]
    pub employee: String,
    #[serde(rename = "tipoPermiso")]
    pub leave_type: LeaveType,
    #[serde(rename = "fechaPermiso")]
    pub request_date: NaiveDate,
    #[serde(rename = "tiempo")]
    pub duration_label: String,
}

/// Success payload returned after a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Confirmation {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(rename = "empleado")]
    pub employee: String,
    #[serde(rename = "tipoPermiso")]
    pub leave_type: String,
    #[serde(rename = "fechaPermiso")]
    pub request_date: String,
    #[serde(rename = "tiempo")]
    pub duration_label: String,
}

/// Entry from `GET /api/usuarios` (employee directory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Entry from `GET /api/permisos/empleado/{name}`.
///
/// `leave_type` stays a raw string here: stored records carry legacy keys
/// ("vacation", "sick") as well as the current wire values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(rename = "empleado")]
    pub employee: String,
    #[serde(rename = "tipoPermiso")]
    pub leave_type: String,
    #[serde(rename = "fechaPermiso")]
    pub request_date: String,
    #[serde(rename = "departamento")]
    pub department: Option<String>,
    #[serde(rename = "tiempo")]
    pub duration_label: String,
}

/// Body for `POST /api/usuarios/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
}

/// Login response; `id` doubles as the session token.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
}

/// Profile from `GET /api/usuarios/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: Option<String>,
}

/// The backend is inconsistent about numeric vs string ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Num(u64),
        Str(String),
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Num(n) => n.to_string(),
        IdValue::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_create_request_uses_wire_names() {
        let request = CreateLeaveRequest {
            employee: "Ana Pérez".to_string(),
            leave_type: LeaveType::Vacation,
            request_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            duration_label: "5 días".to_string(),
        };

        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["empleado"], "Ana Pérez");
        assert_eq!(json["tipoPermiso"], "Vacaciones");
        assert_eq!(json["fechaPermiso"], "2024-03-01");
        assert_eq!(json["tiempo"], "5 días");
    }

    #[test]
    fn test_deserialize_employee() {
        let json = json!({ "id": 7, "nombre": "Carlos Mora" });
        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.name, "Carlos Mora");
    }

    #[test]
    fn test_deserialize_permission_record_with_null_department() {
        let json = json!({
            "id": "p-1",
            "empleado": "Ana Pérez",
            "tipoPermiso": "vacation",
            "fechaPermiso": "2024-03-01",
            "departamento": null,
            "tiempo": "5 días"
        });

        let record: PermissionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.leave_type, "vacation");
        assert!(record.department.is_none());
    }

    #[test]
    fn test_login_response_accepts_numeric_id() {
        let response: LoginResponse = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(response.id, "42");

        let response: LoginResponse = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        assert_eq!(response.id, "abc");
    }

    #[test]
    fn test_serialize_login_request_renames_password() {
        let request = LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
        };
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["contrasena"], "secreto");
        assert!(json.get("password").is_none());
    }
}
