use dioxus::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification, green for success and red for failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Renders the current toast anchored to the bottom of the screen and clears
/// it after a few seconds.
#[component]
pub fn ToastHost(toast: Signal<Option<Toast>>) -> Element {
    use_effect(move || {
        if toast.read().is_some() {
            spawn(async move {
                tokio::time::sleep(Duration::from_secs(4)).await;
                toast.set(None);
            });
        }
    });

    let current = toast.read().clone();

    rsx! {
        if let Some(t) = current {
            div {
                style: "position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;",

                div {
                    style: format!(
                        "min-width: 250px; padding: 15px; border-radius: 8px; color: white;
                         font-size: 1rem; text-align: center; box-shadow: 0 4px 8px rgba(0,0,0,0.2);
                         background-color: {};",
                        match t.kind {
                            ToastKind::Success => "#28a745",
                            ToastKind::Error => "#dc3545",
                        }
                    ),
                    "{t.message}"
                }
            }
        }
    }
}
