//! Log output.
//!
//! Native builds print through `tracing-subscriber`'s fmt layer. The web
//! build leaves logging to the logger `dioxus::launch` installs, since the
//! fmt timer reads the system clock, which wasm32 does not have.

/// Install the fmt subscriber. Returns `false` when nothing was installed,
/// either because a global subscriber already exists or on the web build.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() -> bool {
    tracing_subscriber::fmt().try_init().is_ok()
}

#[cfg(target_arch = "wasm32")]
pub fn init() -> bool {
    false
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn installs_once_and_tolerates_repeat_calls() {
        assert!(init());
        assert!(!init());
        tracing::info!("still logging after a repeated init");
    }
}
