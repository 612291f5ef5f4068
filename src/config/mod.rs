mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;

pub use env_overrides::{ENV_API_KEY, ENV_BACKEND_URL};
pub use loader::default_config_path;
pub use types::{BackendConfig, Config, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS, LogConfig};
