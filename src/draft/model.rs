//! Draft model for an in-progress leave request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reason for the leave. Wire values match what the leave API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Permiso Médico")]
    Medical,
    #[serde(rename = "Permiso Personal")]
    Personal,
    #[serde(rename = "Vacaciones")]
    Vacation,
}

impl LeaveType {
    pub fn wire_value(&self) -> &'static str {
        match self {
            LeaveType::Medical => "Permiso Médico",
            LeaveType::Personal => "Permiso Personal",
            LeaveType::Vacation => "Vacaciones",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medical" | "permiso médico" | "permiso medico" => Ok(LeaveType::Medical),
            "personal" | "permiso personal" => Ok(LeaveType::Personal),
            "vacation" | "vacaciones" => Ok(LeaveType::Vacation),
            other => Err(format!(
                "unknown leave type '{}' (expected medical, personal or vacation)",
                other
            )),
        }
    }
}

/// Department of the requesting employee. Fixed set, matching the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Recursos Humanos")]
    HumanResources,
    #[serde(rename = "TIC")]
    Tic,
    #[serde(rename = "Finanzas")]
    Finance,
}

impl Department {
    pub fn wire_value(&self) -> &'static str {
        match self {
            Department::HumanResources => "Recursos Humanos",
            Department::Tic => "TIC",
            Department::Finance => "Finanzas",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hr" | "human-resources" | "recursos humanos" => Ok(Department::HumanResources),
            "tic" | "it" => Ok(Department::Tic),
            "finance" | "finanzas" => Ok(Department::Finance),
            other => Err(format!(
                "unknown department '{}' (expected hr, tic or finance)",
                other
            )),
        }
    }
}

/// The in-progress leave request.
///
/// `duration_days`, `duration_hours` and `duration_label` are derived from
/// the boundary dates by the form reducer; they are zero/empty until both
/// dates are set and ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestDraft {
    pub employee_name: Option<String>,
    pub leave_type: Option<LeaveType>,
    pub request_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub department: Option<Department>,
    #[serde(default)]
    pub duration_days: u32,
    #[serde(default)]
    pub duration_hours: u32,
    #[serde(default)]
    pub duration_label: String,
}

impl LeaveRequestDraft {
    pub fn is_empty(&self) -> bool {
        *self == LeaveRequestDraft::default()
    }
}
