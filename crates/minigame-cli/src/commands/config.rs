use anyhow::Result;
use minigame::ReporterConfig;

use crate::settings::{Settings, default_config_path};

const MASK: &str = "********";

pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let shown = masked(&settings.reporter);
    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    match default_config_path() {
        Some(path) => println!("# default file: {}", path.display()),
        None => println!("# no config directory on this platform"),
    }
    if settings.dry_run {
        println!("# dry run");
    }
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

/// Credentials are never echoed.
fn masked(config: &ReporterConfig) -> ReporterConfig {
    let mask = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|_| MASK.to_string())
    };
    ReporterConfig {
        csrf_token: mask(&config.csrf_token),
        session_cookie: mask(&config.session_cookie),
        ..config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_credentials() {
        let config = ReporterConfig {
            csrf_token: Some("secret".to_string()),
            session_cookie: Some(String::new()),
            ..ReporterConfig::default()
        };
        let shown = masked(&config);
        assert_eq!(shown.csrf_token.as_deref(), Some(MASK));
        assert_eq!(shown.session_cookie, None);
        assert_eq!(shown.base_url, config.base_url);
    }
}
