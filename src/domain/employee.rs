/// An authenticated employee as returned by OTP verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// The small fixed set of roles the remote system hands out. Anything the
/// server sends outside this set is treated as a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Operator,
    Guest,
}

impl Role {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Admin") => Role::Admin,
            Some("Manager") => Role::Manager,
            Some("Operator") => Role::Operator,
            _ => Role::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Operator => "Operator",
            Role::Guest => "Guest",
        }
    }
}
