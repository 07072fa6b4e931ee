//! Frontend configuration module
//!
//! Values are fixed at build time through `option_env!`, so the same wasm
//! bundle behaves identically on every page load.

use log::LevelFilter;
use once_cell::unsync::OnceCell;
use shared::config::InteractionConfig;
use std::rc::Rc;

thread_local! {
    static SHARED_CONFIG: OnceCell<Rc<FrontendConfig>> = OnceCell::new();
}

/// Frontend configuration for logging and page interactions
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
    /// Thresholds and timings for every interaction
    pub interaction: InteractionConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_level: log_level(),
            interaction: parse_interaction(option_env!("SCHOOLMGMT_INTERACTION_CONFIG")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide configuration, built on first use.
    pub fn shared() -> Rc<Self> {
        SHARED_CONFIG.with(|cell| cell.get_or_init(|| Rc::new(Self::new())).clone())
    }
}

/// Console level from `SCHOOLMGMT_LOG_LEVEL`, defaulting to `info`.
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("SCHOOLMGMT_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn parse_interaction(raw: Option<&str>) -> InteractionConfig {
    match raw {
        Some(json) => InteractionConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("ignoring SCHOOLMGMT_INTERACTION_CONFIG: {err}");
            InteractionConfig::default()
        }),
        None => InteractionConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parsing() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn interaction_override_is_merged() {
        let config = parse_interaction(Some(r#"{"login":{"submit_delay_ms":10}}"#));
        assert_eq!(config.login.submit_delay_ms, 10);
        assert_eq!(config.mobile, InteractionConfig::default().mobile);
    }

    #[test]
    fn invalid_override_falls_back_to_defaults() {
        assert_eq!(
            parse_interaction(Some(r#"{"mobile":{"breakpoint_px":0}}"#)),
            InteractionConfig::default()
        );
        assert_eq!(parse_interaction(Some("[")), InteractionConfig::default());
    }

    #[test]
    fn shared_config_is_reused() {
        let first = FrontendConfig::shared();
        let second = FrontendConfig::shared();
        assert!(Rc::ptr_eq(&first, &second));
    }
}
