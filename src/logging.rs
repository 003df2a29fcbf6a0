pub use log::{debug, error, info, trace, warn};

/// Installs env_logger as the global logger. Call once from the binary.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}
