use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("REPORTREEL_WEBHOOK_URL")
            && !url.is_empty()
        {
            self.webhook.url = url;
        }

        if let Ok(timeout_str) = std::env::var("REPORTREEL_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.trim().parse::<u64>()
        {
            self.webhook.timeout_secs = timeout;
        }

        if let Ok(tag) = std::env::var("REPORTREEL_SOURCE_TAG")
            && !tag.is_empty()
        {
            self.webhook.source_tag = tag;
        }
    }
}
