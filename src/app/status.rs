use reportreel::config::Config;

pub fn render_config(config: &Config) -> String {
    let lines = [
        "◆ reportreel configuration".to_string(),
        String::new(),
        format!("Version      {}", env!("CARGO_PKG_VERSION")),
        format!("Config       {}", config.config_path.display()),
        String::new(),
        "[webhook]".to_string(),
        format!("  url          {}", config.webhook.url),
        format!("  timeout      {}s", config.webhook.timeout_secs),
        format!("  source tag   {}", config.webhook.source_tag),
        String::new(),
        "[wizard]".to_string(),
        format!(
            "  lock back while submitting   {}",
            if config.wizard.lock_back_while_submitting {
                "yes"
            } else {
                "no"
            }
        ),
    ];
    lines.join("\n")
}
