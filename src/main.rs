#[cfg(not(target_arch = "wasm32"))]
fn init_environment() {
    // A local .env file overrides the bundled config during development
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_environment() {}

fn main() {
    jbpotato::logging::init();
    init_environment();
    dioxus::launch(jbpotato::ui::App);
}
