use regex::Regex;

/// Where the two-step login challenge currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    AwaitingPhone,
    AwaitingOtp,
}

/// Client-side state for the phone -> OTP challenge. The session token and
/// employee id returned by send-otp bind the verify step to the same
/// challenge; nothing here outlives the login screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginFlow {
    pub step: LoginStep,
    pub session_id: Option<String>,
    pub employee_id: Option<String>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            step: LoginStep::AwaitingPhone,
            session_id: None,
            employee_id: None,
        }
    }

    /// Records a successful send-otp response and advances to OTP entry.
    pub fn otp_sent(&mut self, session_id: String, employee_id: String) {
        self.session_id = Some(session_id);
        self.employee_id = Some(employee_id);
        self.step = LoginStep::AwaitingOtp;
    }
}

pub fn is_valid_phone(input: &str) -> bool {
    Regex::new(r"^\d{10}$").unwrap().is_match(input)
}

pub fn is_valid_otp(input: &str) -> bool {
    Regex::new(r"^\d{6}$").unwrap().is_match(input)
}
