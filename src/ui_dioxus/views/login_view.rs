use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::api::Api;
use crate::domain::login::{LoginFlow, LoginStep, is_valid_otp, is_valid_phone};
use crate::session::{SessionStore, SessionUser};
use crate::ui_dioxus::components::{Toast, ToastHost};
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::RequestState;

const INPUT_STYLE: &str = "width: 100%; padding: 10px 14px; border: 1px solid #7853C2; \
                           border-radius: 8px; box-sizing: border-box; font-size: 1rem; \
                           margin-bottom: 15px;";

/// The two-step phone/OTP challenge. Lands on a role-specific dashboard once
/// the OTP verifies.
#[component]
pub fn LoginView() -> Element {
    let api = use_context::<Arc<dyn Api>>();
    let session = use_context::<Arc<SessionStore>>();
    let navigator = use_navigator();

    let mut mobile = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut flow = use_signal(LoginFlow::new);
    let mut submit_state = use_signal(|| RequestState::Idle);
    let mut toast = use_signal(|| None::<Toast>);

    // A persisted identity skips the challenge entirely.
    use_effect({
        let session = session.clone();
        move || {
            if let Some(user) = session.restore() {
                navigator.push(Route::for_role(user.role));
            }
        }
    });

    let awaiting_otp = flow.read().step == LoginStep::AwaitingOtp;
    let pending = submit_state.read().is_pending();

    let handle_submit = move |_| {
        if submit_state.read().is_pending() {
            return;
        }

        let step = flow.read().step;
        match step {
            LoginStep::AwaitingPhone => {
                let mobile_value = mobile.read().clone();
                if !is_valid_phone(&mobile_value) {
                    toast.set(Some(Toast::error(
                        "Please enter a valid 10-digit phone number.",
                    )));
                    return;
                }

                submit_state.set(RequestState::Pending);
                let api = api.clone();
                spawn(async move {
                    match api.send_otp(&mobile_value).await {
                        Ok(challenge) => {
                            toast.set(Some(Toast::success(challenge.message.clone())));
                            flow.write()
                                .otp_sent(challenge.session_id, challenge.employee_id);
                            submit_state.set(RequestState::Succeeded);
                        }
                        Err(e) => {
                            let message = e.user_message();
                            toast.set(Some(Toast::error(message.clone())));
                            submit_state.set(RequestState::Failed(message));
                        }
                    }
                });
            }
            LoginStep::AwaitingOtp => {
                let otp_value = otp.read().clone();
                if !is_valid_otp(&otp_value) {
                    toast.set(Some(Toast::error("Please enter a valid 6-digit OTP.")));
                    return;
                }

                submit_state.set(RequestState::Pending);
                let api = api.clone();
                let session = session.clone();
                let mobile_value = mobile.read().clone();
                let session_id = flow.read().session_id.clone().unwrap_or_default();
                spawn(async move {
                    match api.verify_otp(&session_id, &otp_value, &mobile_value).await {
                        Ok(login) => {
                            toast.set(Some(Toast::success(login.message.clone())));
                            let role = login.employee.role;
                            session.login(SessionUser {
                                employee_id: login.employee.id,
                                name: login.employee.name,
                                role,
                                auth_token: login.auth_token,
                            });
                            submit_state.set(RequestState::Succeeded);
                            navigator.push(Route::for_role(role));
                        }
                        Err(e) => {
                            let message = e.user_message();
                            toast.set(Some(Toast::error(message.clone())));
                            submit_state.set(RequestState::Failed(message));
                        }
                    }
                });
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center;
                   height: 100vh; background: #f8f9fa;",

            div {
                style: "background: #f5f5f5; border-radius: 20px; padding: 35px 25px;
                       box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3); width: 100%;
                       max-width: 350px; text-align: center;",

                h1 {
                    style: "font-size: 1.5rem; color: #452983; font-weight: 600; margin: 0 0 20px 0;",
                    "Shopfloor Console"
                }

                input {
                    r#type: "tel",
                    style: INPUT_STYLE,
                    placeholder: "Enter your phone number",
                    value: "{mobile}",
                    maxlength: "10",
                    oninput: move |e| mobile.set(e.value()),
                    // The phone is locked in once the OTP goes out.
                    disabled: pending || awaiting_otp,
                }

                if awaiting_otp {
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        placeholder: "Enter OTP",
                        value: "{otp}",
                        maxlength: "6",
                        oninput: move |e| otp.set(e.value()),
                        disabled: pending,
                    }
                }

                button {
                    style: format!(
                        "width: 100%; padding: 12px; background-color: {}; color: white;
                         border: none; border-radius: 8px; font-size: 1rem; cursor: pointer;
                         margin-top: 10px;",
                        if pending { "#a991d8" } else { "#7853C2" }
                    ),
                    onclick: handle_submit,
                    disabled: pending,
                    if pending {
                        if awaiting_otp { "Verifying OTP..." } else { "Sending OTP..." }
                    } else {
                        if awaiting_otp { "Verify OTP" } else { "Send OTP" }
                    }
                }
            }

            ToastHost { toast: toast }
        }
    }
}
