use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::api::Api;
use crate::domain::assignment::Assignment;
use crate::session::SessionStore;
use crate::ui_dioxus::components::{AssignmentForm, Toast, ToastHost};
use crate::ui_dioxus::router::Route;

/// Current machine assignments for the logged-in employee, one card each.
/// Submitting a production entry re-fetches the list.
#[component]
pub fn AssignmentsView() -> Element {
    let api = use_context::<Arc<dyn Api>>();
    let session = use_context::<Arc<SessionStore>>();
    let navigator = use_navigator();

    let mut assignments = use_signal(Vec::<Assignment>::new);
    let mut loading = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);
    let mut selected = use_signal(|| None::<Assignment>);
    let mut toast = use_signal(|| None::<Toast>);

    // Load on mount and whenever a submit bumps `refresh`.
    use_effect({
        let api = api.clone();
        let session = session.clone();
        move || {
            let _tick = refresh();
            let Some(user) = session.current() else {
                navigator.push(Route::Login {});
                return;
            };
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                let list = api.assignments_for_employee(&user.employee_id).await;
                assignments.set(list);
                loading.set(false);
            });
        }
    });

    rsx! {
        div {
            style: "padding: 20px; max-width: 1000px; margin: 0 auto;",

            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center;
                       margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px;
                       box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

                h1 {
                    style: "font-size: 1.8rem; font-weight: bold; color: #452983; margin: 0;",
                    "My Assigned Tasks"
                }

                div {
                    style: "padding: 6px 12px; background: #f3f4f6; border-radius: 6px;",
                    "{assignments().len()} assignments"
                }
            }

            if loading() {
                div {
                    style: "text-align: center; padding: 40px; color: #6b7280;",
                    "Loading assignments..."
                }
            } else if assignments().is_empty() {
                div {
                    style: "text-align: center; padding: 60px; background: white; border-radius: 8px;
                           box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
                    h3 { style: "font-size: 1.2rem; font-weight: 600; margin-bottom: 8px;", "No assignments found." }
                    p { style: "color: #6b7280;", "Assignments made to you will show up here." }
                }
            } else {
                div {
                    for assignment in assignments() {
                        AssignmentCard {
                            assignment: assignment.clone(),
                            on_log: move |a: Assignment| selected.set(Some(a)),
                        }
                    }
                }
            }

            if let Some(assignment) = selected() {
                AssignmentForm {
                    assignment: assignment.clone(),
                    on_close: move |_| selected.set(None),
                    on_submitted: move |message: String| {
                        toast.set(Some(Toast::success(message)));
                        selected.set(None);
                        refresh.set(refresh() + 1);
                    },
                }
            }

            ToastHost { toast: toast }
        }
    }
}

#[component]
fn AssignmentCard(assignment: Assignment, on_log: EventHandler<Assignment>) -> Element {
    let assignment_for_log = assignment.clone();

    rsx! {
        div {
            style: "padding: 16px; background: white; border: 1px solid #e5e7eb;
                   border-radius: 8px; margin-bottom: 12px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: start;",

                div {
                    style: "flex: 1;",

                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",

                        h3 {
                            style: "font-size: 1.1rem; font-weight: 600; margin: 0;",
                            "{assignment.machine.name}"
                        }

                        div {
                            style: "padding: 4px 10px; background: #ede9fe; color: #452983;
                                   border-radius: 4px; font-size: 12px; font-weight: 600;",
                            "{assignment.main_item.shift}"
                        }
                    }

                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 20px; font-size: 13px; color: #6b7280;",

                        div { "Item: {assignment.main_item.item_no}" }
                        div { "Operator: {assignment.main_item.operator}" }
                        div { "Helper: {assignment.main_item.helper}" }
                        div { "Company: {assignment.main_item.company}" }
                        div { "Employees: {assignment.employee_names()}" }
                    }
                }

                button {
                    style: "padding: 8px 16px; border: none; background: #7853C2; color: white;
                           border-radius: 4px; cursor: pointer; font-size: 14px;",
                    onclick: move |_| on_log.call(assignment_for_log.clone()),
                    "Log Production"
                }
            }
        }
    }
}
