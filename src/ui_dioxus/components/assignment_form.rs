use chrono::Local;
use dioxus::prelude::*;
use std::sync::Arc;

use crate::api::Api;
use crate::api::types::{MachineAssignmentRequest, PhotoAttachment};
use crate::domain::assignment::Assignment;
use crate::domain::production_entry::{Shift, SubmissionDraft, TIME_SLOTS};
use crate::ui_dioxus::state::{PhotoPicker, RequestState};

const LABEL_STYLE: &str = "display: block; margin-bottom: 5px; font-weight: 500;";
const INPUT_STYLE: &str = "width: 100%; padding: 8px 12px; border: 1px solid #ddd; \
                           border-radius: 4px; font-size: 14px; box-sizing: border-box;";

/// The production-entry form, opened from an assignment card. Identity fields
/// come from the assignment and stay read-only; everything else is collected
/// here, validated client-side, and posted as one multipart request.
#[component]
pub fn AssignmentForm(
    assignment: Assignment,
    on_close: EventHandler<()>,
    on_submitted: EventHandler<String>,
) -> Element {
    let api = use_context::<Arc<dyn Api>>();

    // Local state for form fields
    let mut time = use_signal(|| TIME_SLOTS[0].to_string());
    let mut shift = use_signal(|| None::<Shift>);
    let mut frame_input = use_signal(String::new);
    let mut number_of_box = use_signal(|| 1u32);
    let mut box_weight = use_signal(|| 0.0f64);
    let mut frame_weight = use_signal(|| 0.0f64);
    let mut description = use_signal(String::new);
    let mut confirmed = use_signal(|| false);
    let mut photo = use_signal(PhotoPicker::default);
    let mut submit_state = use_signal(|| RequestState::Idle);
    let mut error = use_signal(|| None::<String>);

    let assignment_for_submit = assignment.clone();
    let handle_submit = move |_| {
        // One in-flight submission at a time.
        if submit_state.read().is_pending() {
            return;
        }

        let draft = SubmissionDraft {
            time: time.read().clone(),
            shift: *shift.read(),
            frame_lengths_input: frame_input.read().clone(),
            number_of_box: *number_of_box.read(),
            box_weight: *box_weight.read(),
            frame_weight: *frame_weight.read(),
            description: description.read().clone(),
            confirmed: *confirmed.read(),
        };

        let entry = match draft.to_entry(&assignment_for_submit, Local::now().date_naive()) {
            Ok(entry) => entry,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        submit_state.set(RequestState::Pending);

        let request = MachineAssignmentRequest {
            machine_id: assignment_for_submit.machine.id.clone(),
            main_item_id: assignment_for_submit.main_item.id.clone(),
            shift: entry.shift,
            employee_ids: assignment_for_submit.employee_ids(),
            entry,
            photo: photo.read().attachment.clone(),
        };

        let api = api.clone();
        spawn(async move {
            match api.assign_machine(request).await {
                Ok(message) => {
                    photo.write().clear();
                    submit_state.set(RequestState::Succeeded);
                    on_submitted.call(message);
                }
                Err(e) => {
                    let message = e.user_message();
                    submit_state.set(RequestState::Failed(message.clone()));
                    error.set(Some(message));
                }
            }
        });
    };

    let on_photo_change = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            let names = file_engine.files();
            if let Some(name) = names.first().cloned() {
                spawn(async move {
                    if let Some(bytes) = file_engine.read_file(&name).await {
                        photo.write().select(
                            PhotoAttachment {
                                file_name: name.clone(),
                                bytes,
                            },
                            name,
                        );
                    }
                });
            }
        }
    };

    rsx! {
        // Modal backdrop
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 999;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),

            // Modal content
            div {
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 600px; max-height: 85vh; overflow-y: auto;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                    h2 {
                        style: "margin: 0; font-size: 24px; font-weight: 600; color: #452983;",
                        "Log Production"
                    }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer; padding: 0; width: 30px; height: 30px;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                // Error message
                if let Some(err) = error.read().as_ref() {
                    div {
                        style: "background: #fee; color: #c00; padding: 10px; border-radius: 4px; margin-bottom: 15px;",
                        "{err}"
                    }
                }

                // Read-only identity from the selected assignment
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 20px;",

                    div {
                        label { style: LABEL_STYLE, "Machine" }
                        input {
                            r#type: "text",
                            style: INPUT_STYLE,
                            value: "{assignment.machine.name}",
                            disabled: true,
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, "Item No" }
                        input {
                            r#type: "text",
                            style: INPUT_STYLE,
                            value: "{assignment.main_item.item_no}",
                            disabled: true,
                        }
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 20px;",

                    div {
                        label { style: LABEL_STYLE, "Operator" }
                        input {
                            r#type: "text",
                            style: INPUT_STYLE,
                            value: "{assignment.main_item.operator}",
                            disabled: true,
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, "Helper" }
                        input {
                            r#type: "text",
                            style: INPUT_STYLE,
                            value: "{assignment.main_item.helper}",
                            disabled: true,
                        }
                    }
                }

                div {
                    style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, "Employees" }
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{assignment.employee_names()}",
                        disabled: true,
                    }
                }

                // Time slot and shift
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 20px;",

                    div {
                        label { style: LABEL_STYLE, "Time Slot" }
                        select {
                            style: INPUT_STYLE,
                            value: "{time}",
                            onchange: move |e| time.set(e.value()),
                            for slot in TIME_SLOTS {
                                option { value: "{slot}", selected: *time.read() == slot, "{slot}" }
                            }
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, "Shift" }
                        select {
                            style: INPUT_STYLE,
                            value: shift.read().map(|s| s.as_str()).unwrap_or(""),
                            onchange: move |e| shift.set(Shift::parse(&e.value())),
                            option { value: "", selected: shift.read().is_none(), "Select shift" }
                            option { value: "Day", selected: *shift.read() == Some(Shift::Day), "Day" }
                            option { value: "Night", selected: *shift.read() == Some(Shift::Night), "Night" }
                        }
                    }
                }

                // Frame lengths
                div {
                    style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, "Frame Lengths" }
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{frame_input}",
                        oninput: move |e| frame_input.set(e.value()),
                        placeholder: "e.g. 455,455,452,454",
                    }
                }

                // Counts and weights
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 20px; margin-bottom: 20px;",

                    div {
                        label { style: LABEL_STYLE, "No. of Boxes" }
                        input {
                            r#type: "number",
                            style: INPUT_STYLE,
                            value: "{number_of_box}",
                            min: "1",
                            oninput: move |e| {
                                if let Ok(n) = e.value().parse::<u32>() {
                                    number_of_box.set(n);
                                }
                            },
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, "Box Weight (kg)" }
                        input {
                            r#type: "number",
                            style: INPUT_STYLE,
                            value: "{box_weight}",
                            min: "0",
                            step: "0.1",
                            oninput: move |e| {
                                if let Ok(w) = e.value().parse::<f64>() {
                                    box_weight.set(w);
                                }
                            },
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, "Frame Weight (kg)" }
                        input {
                            r#type: "number",
                            style: INPUT_STYLE,
                            value: "{frame_weight}",
                            min: "0",
                            step: "0.1",
                            oninput: move |e| {
                                if let Ok(w) = e.value().parse::<f64>() {
                                    frame_weight.set(w);
                                }
                            },
                        }
                    }
                }

                // Description
                div {
                    style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, "Description" }
                    textarea {
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd;
                               border-radius: 4px; font-size: 14px; min-height: 80px;
                               resize: vertical; font-family: inherit; box-sizing: border-box;",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                        placeholder: "Left blank, this is recorded as NA",
                    }
                }

                // Photo
                div {
                    style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, "Photo (optional)" }

                    if let Some(preview) = photo.read().preview.clone() {
                        div {
                            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                            img {
                                src: "{preview}",
                                style: "max-width: 160px; max-height: 120px; border-radius: 4px; border: 1px solid #ddd;",
                            }
                            button {
                                r#type: "button",
                                style: "padding: 6px 12px; border: 1px solid #ddd; background: white;
                                       color: #333; border-radius: 4px; cursor: pointer; font-size: 13px;",
                                onclick: move |_| photo.write().clear(),
                                "Remove photo"
                            }
                        }
                    }

                    input {
                        key: "{photo.read().epoch}",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_photo_change,
                    }
                }

                // Confirmation
                div {
                    style: "margin-bottom: 20px; display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "checkbox",
                        checked: *confirmed.read(),
                        onchange: move |e| confirmed.set(e.value() == "true"),
                    }
                    label { "I confirm this entry is correct" }
                }

                // Buttons
                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px; margin-top: 10px;",

                    button {
                        r#type: "button",
                        style: "padding: 8px 20px; border: 1px solid #ddd;
                               background: white; color: #333; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_close.call(()),
                        disabled: submit_state.read().is_pending(),
                        "Cancel"
                    }

                    button {
                        style: "padding: 8px 20px; border: none;
                               background: #7853C2; color: white; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: handle_submit,
                        disabled: submit_state.read().is_pending(),
                        if submit_state.read().is_pending() {
                            "Saving..."
                        } else {
                            "Submit Entry"
                        }
                    }
                }
            }
        }
    }
}
