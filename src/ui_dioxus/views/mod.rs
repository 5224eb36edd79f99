pub mod assignments_view;
pub mod dashboard_view;
pub mod login_view;

pub use assignments_view::AssignmentsView;
pub use dashboard_view::DashboardView;
pub use login_view::LoginView;
