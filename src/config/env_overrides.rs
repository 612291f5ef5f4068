use super::Config;

pub const ENV_BACKEND_URL: &str = "PRESSROOM_URL";
pub const ENV_API_KEY: &str = "PRESSROOM_API_KEY";

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_BACKEND_URL)
            && !url.is_empty()
        {
            self.backend.url = url;
        }

        if let Ok(key) = std::env::var(ENV_API_KEY)
            && !key.is_empty()
        {
            self.backend.api_key = Some(key);
        }
    }
}
