use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use stopwatch_engine::schedule::RefreshConfig;
use stopwatch_ui::prelude::{PanelConfig, ResetPolicy};

/// Studio settings, read from the environment.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub refresh_interval: Duration,
    pub reset_policy: ResetPolicy,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            refresh_interval: RefreshConfig::default().interval,
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl StudioConfig {
    pub const REFRESH_MS: &'static str = "STOPWATCH_REFRESH_MS";
    pub const RESET_WHILE_RUNNING: &'static str = "STOPWATCH_RESET_WHILE_RUNNING";

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key → value lookup; missing keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, Self::REFRESH_MS)? {
            if ms == 0 {
                bail!("{} must be greater than zero", Self::REFRESH_MS);
            }
            config.refresh_interval = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(Self::RESET_WHILE_RUNNING) {
            config.reset_policy = if parse_flag(&raw)
                .with_context(|| format!("invalid {} {raw:?}", Self::RESET_WHILE_RUNNING))?
            {
                ResetPolicy::AlwaysEnabled
            } else {
                ResetPolicy::DisabledWhileRunning
            };
        }

        Ok(config)
    }

    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig {
            refresh: RefreshConfig { interval: self.refresh_interval },
            reset_policy: self.reset_policy,
            ..PanelConfig::default()
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {key} {raw:?}")),
        None => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true/false, got {other:?}"),
    }
}
