//! Reporter settings resolution: args/env > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use minigame::{ApplicationId, PageMeta, ReporterConfig};
use tracing::{debug, warn};

use crate::cli::Args;

pub struct Settings {
    pub reporter: ReporterConfig,
    pub dry_run: bool,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub application_id: Option<u64>,
    pub csrf_token: Option<String>,
    pub session_cookie: Option<String>,
}

impl Overrides {
    fn from_args(args: &Args) -> Self {
        Self {
            base_url: args.base_url.clone(),
            application_id: args.app_id,
            csrf_token: args.csrf_token.clone(),
            session_cookie: args.session_cookie.clone(),
        }
    }

    pub fn apply(self, mut config: ReporterConfig) -> ReporterConfig {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if self.application_id.is_some() {
            config.application_id = self.application_id;
        }
        if self.csrf_token.is_some() {
            config.csrf_token = self.csrf_token;
        }
        if self.session_cookie.is_some() {
            config.session_cookie = self.session_cookie;
        }
        config
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("minigame").join("config.toml"))
}

impl Settings {
    pub fn resolve(args: &Args) -> Result<Self> {
        let file_config = match &args.config {
            // An explicit path must load
            Some(path) => ReporterConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => load_default_config(),
        };

        Ok(Self {
            reporter: Overrides::from_args(args).apply(file_config),
            dry_run: args.dry_run,
        })
    }

    pub fn application_id(&self) -> Result<ApplicationId> {
        self.reporter.application_id.map(ApplicationId).context(
            "No application id. Use --app-id, MINIGAME_APP_ID env, or set server.application_id in the config file.",
        )
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            csrf_token: self.reporter.csrf_token().map(str::to_string),
        }
    }
}

fn load_default_config() -> ReporterConfig {
    let Some(path) = default_config_path().filter(|p| p.exists()) else {
        debug!("No config file, using defaults");
        return ReporterConfig::default();
    };
    match ReporterConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config {}: {}, using defaults", path.display(), e);
            ReporterConfig::default()
        }
    }
}
