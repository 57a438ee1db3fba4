#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_LOG_FILTER: &str = "census_viewer=info";

/// Installs the process-wide tracing subscriber. `RUST_LOG` overrides the
/// default filter on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Runs before launch; `try_init` keeps any subscriber installed earlier.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    dioxus::logger::initialize_default();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn init_tolerates_an_installed_subscriber() {
        super::init();
        super::init();
        tracing::info!("logging initialised twice");
    }
}
