use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::api::{Api, HttpApi};
use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::ui_dioxus::router::Route;

#[component]
pub fn App() -> Element {
    // One API client and one session store for the whole tree; every screen
    // picks them up from context.
    use_context_provider(|| {
        let config = AppConfig::from_env();
        Arc::new(HttpApi::new(&config)) as Arc<dyn Api>
    });
    use_context_provider(|| Arc::new(SessionStore::new()));

    rsx! {
        Router::<Route> {}
    }
}
