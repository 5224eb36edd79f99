use serde::Deserialize;

use crate::domain::assignment::Assignment;
use crate::domain::employee::Employee;
use crate::domain::production_entry::{ProductionEntry, Shift};

// Every endpoint shares the same envelope convention: `status` discriminates
// success and `message` carries the server's user-facing text.

#[derive(Debug, Deserialize)]
pub struct SendOtpResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(rename = "employeeId", default)]
    pub employee_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub employee: Option<EmployeeWire>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeWire {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub data: Vec<Assignment>,
}

#[derive(Debug, Deserialize)]
pub struct AssignMachineResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// What send-otp hands back: the token that binds the verify step plus the
/// employee the phone number resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    pub session_id: String,
    pub employee_id: String,
    pub message: String,
}

/// A successful OTP verification: the employee record and the token every
/// later request authenticates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLogin {
    pub employee: Employee,
    pub auth_token: String,
    pub message: String,
}

/// One photo picked in the submission form, held in memory until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the assign-machine endpoint needs for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineAssignmentRequest {
    pub machine_id: String,
    pub main_item_id: String,
    pub shift: Shift,
    pub employee_ids: Vec<String>,
    pub entry: ProductionEntry,
    pub photo: Option<PhotoAttachment>,
}
