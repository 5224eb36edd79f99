use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::session::SessionStore;
use crate::ui_dioxus::router::Route;

/// The navigational shell every role lands on: sidebar, header, summary
/// cards. No business logic lives here.
#[component]
pub fn DashboardView(title: String) -> Element {
    let session = use_context::<Arc<SessionStore>>();
    let navigator = use_navigator();

    // Anyone without a session belongs on the login screen.
    use_effect({
        let session = session.clone();
        move || {
            if session.current().is_none() {
                navigator.push(Route::Login {});
            }
        }
    });

    let user_name = session
        .current()
        .map(|u| u.name)
        .unwrap_or_else(|| "Employee".to_string());
    let user_role = session
        .current()
        .map(|u| u.role.as_str())
        .unwrap_or("Guest");

    let handle_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            navigator.push(Route::Login {});
        }
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: #f0f2f5;",

            // Sidebar
            div {
                style: "width: 260px; background: #452983; color: white; padding: 20px;
                       display: flex; flex-direction: column;",

                div {
                    style: "display: flex; flex-direction: column; align-items: center;
                           margin-bottom: 30px; padding-bottom: 20px;
                           border-bottom: 1px solid rgba(255,255,255,0.2);",
                    span { style: "font-size: 1.2rem; font-weight: bold;", "{user_name}" }
                    span { style: "font-size: 0.9rem; color: rgba(255,255,255,0.7);", "{user_role}" }
                }

                nav {
                    style: "flex-grow: 1;",

                    SidebarItem {
                        label: "My Assignments",
                        on_click: move |_| { navigator.push(Route::Assignments {}); },
                    }
                    SidebarItem { label: "Manage Work", on_click: move |_| {} }
                    SidebarItem { label: "Send Alert", on_click: move |_| {} }
                    SidebarItem { label: "Send Report", on_click: move |_| {} }
                }

                button {
                    style: "background: #dc3545; color: white; border: none; padding: 12px 20px;
                           border-radius: 8px; font-size: 1rem; cursor: pointer; margin-bottom: 25px;",
                    onclick: handle_logout,
                    "Logout"
                }
            }

            // Main content
            div {
                style: "flex-grow: 1; padding: 20px;",

                // Header
                div {
                    style: "background: white; padding: 15px 25px; border-radius: 10px;
                           box-shadow: 0 2px 5px rgba(0,0,0,0.1); margin-bottom: 25px;
                           display: flex; justify-content: space-between; align-items: center;",

                    h1 {
                        style: "font-size: 1.8rem; font-weight: bold; color: #452983; margin: 0;",
                        "{title}"
                    }
                    span {
                        style: "font-size: 1.1rem; font-weight: 500; color: #333;",
                        "Hello, {user_name}"
                    }
                }

                // Summary cards
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                           gap: 25px;",

                    SummaryCard { title: "Assigned Task", count: 12 }
                    SummaryCard { title: "Ongoing Task", count: 5 }
                    SummaryCard { title: "Completed Task", count: 87 }
                    SummaryCard { title: "Transfer Tasks", count: 4 }
                    SummaryCard { title: "Reports", count: 15 }
                }
            }
        }
    }
}

#[component]
fn SidebarItem(label: &'static str, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; background: rgba(255,255,255,0.1);
                   padding: 15px 20px; margin-bottom: 15px; border-radius: 12px; cursor: pointer;",
            onclick: move |_| on_click.call(()),
            span { style: "font-size: 1.1rem; font-weight: 500;", "{label}" }
        }
    }
}

#[component]
fn SummaryCard(title: &'static str, count: u32) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 25px; text-align: center;
                   box-shadow: 0 4px 10px rgba(0,0,0,0.08);",

            h3 {
                style: "font-size: 1.3rem; font-weight: 600; color: #333; margin: 0 0 10px 0;",
                "{title}"
            }
            p {
                style: "font-size: 2.5rem; font-weight: bold; color: #452983; margin: 0;",
                "{count}"
            }
        }
    }
}
