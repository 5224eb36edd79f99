use shopfloor::ui_dioxus::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus_desktop::launch::launch(App, vec![], dioxus_desktop::Config::default());
}
