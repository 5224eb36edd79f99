use async_trait::async_trait;
use tracing::error;

use crate::api::error::ApiError;
use crate::api::types::{
    AssignMachineResponse, AssignmentsResponse, MachineAssignmentRequest, OtpChallenge,
    SendOtpResponse, VerifiedLogin, VerifyOtpResponse,
};
use crate::config::AppConfig;
use crate::domain::assignment::Assignment;
use crate::domain::employee::{Employee, Role};

/// Seam over the remote API so screens can be driven by the recording mock in
/// tests.
#[async_trait]
pub trait Api: Send + Sync {
    async fn send_otp(&self, mobile: &str) -> Result<OtpChallenge, ApiError>;

    async fn verify_otp(
        &self,
        session_id: &str,
        otp: &str,
        mobile: &str,
    ) -> Result<VerifiedLogin, ApiError>;

    /// Fail-soft by contract: any fetch problem degrades to an empty list.
    /// The list view treats that as "nothing assigned".
    async fn assignments_for_employee(&self, employee_id: &str) -> Vec<Assignment>;

    /// Submits one production entry as a multipart form. Returns the server's
    /// success message.
    async fn assign_machine(&self, request: MachineAssignmentRequest) -> Result<String, ApiError>;
}

/// The real client. One `reqwest::Client` for the process; the base URL comes
/// from configuration.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_assignments(&self, employee_id: &str) -> Result<Vec<Assignment>, ApiError> {
        let response: AssignmentsResponse = self
            .client
            .get(self.url(&format!("/machines/get-asign-machine/{employee_id}")))
            .send()
            .await?
            .json()
            .await?;

        Ok(response.data)
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn send_otp(&self, mobile: &str) -> Result<OtpChallenge, ApiError> {
        let response: SendOtpResponse = self
            .client
            .post(self.url("/staff/employee/login/send-otp"))
            .json(&serde_json::json!({ "mobile": mobile }))
            .send()
            .await?
            .json()
            .await?;

        if !response.status {
            return Err(ApiError::server(
                response
                    .message
                    .unwrap_or_else(|| "Failed to send OTP.".to_string()),
            ));
        }

        Ok(OtpChallenge {
            session_id: response.session_id.unwrap_or_default(),
            employee_id: response.employee_id.unwrap_or_default(),
            message: response.message.unwrap_or_else(|| "OTP sent.".to_string()),
        })
    }

    async fn verify_otp(
        &self,
        session_id: &str,
        otp: &str,
        mobile: &str,
    ) -> Result<VerifiedLogin, ApiError> {
        let response: VerifyOtpResponse = self
            .client
            .post(self.url("/staff/employee/login/verify-otp"))
            .json(&serde_json::json!({
                "sessionId": session_id,
                "otp": otp,
                "mobile": mobile,
            }))
            .send()
            .await?
            .json()
            .await?;

        if !response.status {
            return Err(ApiError::server(
                response
                    .message
                    .unwrap_or_else(|| "OTP verification failed.".to_string()),
            ));
        }

        let wire = response.employee;
        let employee = Employee {
            id: wire.as_ref().map(|e| e.id.clone()).unwrap_or_default(),
            name: wire
                .as_ref()
                .and_then(|e| e.name.clone())
                .unwrap_or_else(|| "Employee".to_string()),
            role: Role::parse(wire.as_ref().and_then(|e| e.role.as_deref())),
        };

        Ok(VerifiedLogin {
            employee,
            auth_token: response
                .session_id
                .unwrap_or_else(|| session_id.to_string()),
            message: response
                .message
                .unwrap_or_else(|| "Login successful.".to_string()),
        })
    }

    async fn assignments_for_employee(&self, employee_id: &str) -> Vec<Assignment> {
        match self.fetch_assignments(employee_id).await {
            Ok(assignments) => assignments,
            Err(e) => {
                error!("Error fetching assignments: {e}");
                Vec::new()
            }
        }
    }

    async fn assign_machine(&self, request: MachineAssignmentRequest) -> Result<String, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("machineId", request.machine_id)
            .text("mainItemId", request.main_item_id)
            .text("shift", request.shift.as_str().to_string())
            .text(
                "employeeIds",
                serde_json::to_string(&request.employee_ids)
                    .unwrap_or_else(|_| "[]".to_string()),
            )
            .text("production", request.entry.to_production_json());

        if let Some(photo) = request.photo {
            let mime = mime_guess::from_path(&photo.file_name).first_or_octet_stream();
            let part = reqwest::multipart::Part::bytes(photo.bytes)
                .file_name(photo.file_name)
                .mime_str(mime.essence_str())?;
            form = form.part("photo", part);
        }

        let response: AssignMachineResponse = self
            .client
            .post(self.url("/machines/assign-machine"))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;

        if !response.status {
            return Err(ApiError::server(response.message.unwrap_or_else(|| {
                "Failed to save the production entry.".to_string()
            })));
        }

        Ok(response
            .message
            .unwrap_or_else(|| "Production entry saved.".to_string()))
    }
}

pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use tokio::time::{Duration, sleep};

    /// Canned-response API for tests. Records every call so tests can assert
    /// on exactly what would have gone over the wire.
    #[derive(Default)]
    pub struct MockApi {
        otp_challenge: Mutex<Option<Result<OtpChallenge, String>>>,
        verified_login: Mutex<Option<Result<VerifiedLogin, String>>>,
        assignments: Mutex<Vec<Assignment>>,
        assign_result: Mutex<Option<Result<String, String>>>,
        assign_delay_ms: Mutex<u64>,
        calls: Mutex<Vec<MockCall>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum MockCall {
        SendOtp {
            mobile: String,
        },
        VerifyOtp {
            session_id: String,
            otp: String,
            mobile: String,
        },
        Assignments {
            employee_id: String,
        },
        AssignMachine {
            machine_id: String,
            shift: String,
            production_json: String,
            has_photo: bool,
        },
    }

    impl MockApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_send_otp(&self, result: Result<OtpChallenge, String>) {
            *self.otp_challenge.lock() = Some(result);
        }

        pub fn set_verify_otp(&self, result: Result<VerifiedLogin, String>) {
            *self.verified_login.lock() = Some(result);
        }

        pub fn set_assignments(&self, assignments: Vec<Assignment>) {
            *self.assignments.lock() = assignments;
        }

        pub fn set_assign_machine(&self, result: Result<String, String>) {
            *self.assign_result.lock() = Some(result);
        }

        /// Simulated latency for assign-machine, for in-flight tests.
        pub fn set_assign_delay_ms(&self, delay_ms: u64) {
            *self.assign_delay_ms.lock() = delay_ms;
        }

        pub fn calls(&self) -> Vec<MockCall> {
            self.calls.lock().clone()
        }

        pub fn assign_machine_calls(&self) -> usize {
            self.calls
                .lock()
                .iter()
                .filter(|c| matches!(c, MockCall::AssignMachine { .. }))
                .count()
        }
    }

    fn stubbed<T: Clone>(slot: &Mutex<Option<Result<T, String>>>, name: &str) -> Result<T, ApiError> {
        match slot.lock().clone() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(ApiError::server(message)),
            None => Err(ApiError::server(format!("no stubbed {name} response"))),
        }
    }

    #[async_trait]
    impl Api for MockApi {
        async fn send_otp(&self, mobile: &str) -> Result<OtpChallenge, ApiError> {
            self.calls.lock().push(MockCall::SendOtp {
                mobile: mobile.to_string(),
            });
            stubbed(&self.otp_challenge, "send-otp")
        }

        async fn verify_otp(
            &self,
            session_id: &str,
            otp: &str,
            mobile: &str,
        ) -> Result<VerifiedLogin, ApiError> {
            self.calls.lock().push(MockCall::VerifyOtp {
                session_id: session_id.to_string(),
                otp: otp.to_string(),
                mobile: mobile.to_string(),
            });
            stubbed(&self.verified_login, "verify-otp")
        }

        async fn assignments_for_employee(&self, employee_id: &str) -> Vec<Assignment> {
            self.calls.lock().push(MockCall::Assignments {
                employee_id: employee_id.to_string(),
            });
            self.assignments.lock().clone()
        }

        async fn assign_machine(
            &self,
            request: MachineAssignmentRequest,
        ) -> Result<String, ApiError> {
            self.calls.lock().push(MockCall::AssignMachine {
                machine_id: request.machine_id.clone(),
                shift: request.shift.as_str().to_string(),
                production_json: request.entry.to_production_json(),
                has_photo: request.photo.is_some(),
            });

            let delay = *self.assign_delay_ms.lock();
            if delay > 0 {
                sleep(Duration::from_millis(delay)).await;
            }

            stubbed(&self.assign_result, "assign-machine")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockApi, MockCall};
    use super::*;

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_list() {
        // Nothing listens here; the transport error must be swallowed.
        let api = HttpApi::new(&AppConfig {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
        });

        let assignments = api.assignments_for_employee("emp-1").await;
        assert!(assignments.is_empty());
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let api = MockApi::new();
        api.set_send_otp(Ok(OtpChallenge {
            session_id: "sess-1".to_string(),
            employee_id: "emp-1".to_string(),
            message: "OTP sent.".to_string(),
        }));

        let challenge = api.send_otp("9876543210").await.unwrap();
        assert_eq!(challenge.session_id, "sess-1");
        assert_eq!(
            api.calls(),
            vec![MockCall::SendOtp {
                mobile: "9876543210".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_server_failure_carries_message() {
        let api = MockApi::new();
        api.set_verify_otp(Err("Invalid OTP.".to_string()));

        let err = api.verify_otp("sess-1", "000000", "9876543210").await;
        assert_eq!(err.unwrap_err().user_message(), "Invalid OTP.");
    }
}
