use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::employee::Role;
use crate::ui_dioxus::views::{AssignmentsView, DashboardView, LoginView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Login {},

    #[route("/admin-dashboard")]
    AdminDashboard {},

    #[route("/manager-dashboard")]
    ManagerDashboard {},

    #[route("/operator-dashboard")]
    OperatorDashboard {},

    #[route("/assignments")]
    Assignments {},
}

impl Route {
    /// Landing route after a successful OTP verification. Unrecognized roles
    /// fall through to the login route.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::Manager => Route::ManagerDashboard {},
            Role::Operator => Route::OperatorDashboard {},
            Role::Guest => Route::Login {},
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! { DashboardView { title: "Admin Dashboard" } }
}

#[component]
fn ManagerDashboard() -> Element {
    rsx! { DashboardView { title: "Manager Dashboard" } }
}

#[component]
fn OperatorDashboard() -> Element {
    rsx! { DashboardView { title: "Operator Dashboard" } }
}

#[component]
fn Assignments() -> Element {
    rsx! { AssignmentsView {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_routing() {
        assert_eq!(Route::for_role(Role::Admin), Route::AdminDashboard {});
        assert_eq!(Route::for_role(Role::Manager), Route::ManagerDashboard {});
        assert_eq!(Route::for_role(Role::Operator), Route::OperatorDashboard {});
        assert_eq!(Route::for_role(Role::Guest), Route::Login {});
    }

    #[test]
    fn test_unknown_server_role_lands_on_default_route() {
        let role = Role::parse(Some("Supervisor"));
        assert_eq!(Route::for_role(role), Route::Login {});
    }
}
