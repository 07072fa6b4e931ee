use serde::{Deserialize, Serialize};

use crate::models::errors::InteractionError;

/// Top-level configuration for all page interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InteractionConfig {
    /// Navbar background switching.
    pub navbar: NavbarConfig,
    /// Mobile interaction forcer.
    pub mobile: MobileConfig,
    /// Simulated login.
    pub login: LoginConfig,
    /// Feature-card reveal animation.
    pub cards: CardConfig,
}

/// Navbar background thresholds and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Vertical offset (px) above which the navbar counts as scrolled.
    pub scroll_threshold_px: f64,
    /// Background applied while scrolled past the threshold.
    pub scrolled_background: String,
    /// Background applied at or above the threshold.
    pub default_background: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            scrolled_background: "rgba(44, 62, 80, 0.95)".to_string(),
            default_background: "#2c3e50".to_string(),
        }
    }
}

/// Timings and breakpoint for the mobile interaction forcer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
    /// Viewport widths at or below this value (logical px) count as mobile.
    pub breakpoint_px: f64,
    /// Period of the unconditional re-application timer.
    pub reapply_interval_ms: u32,
    /// Delay between a click/touchstart and the deferred re-application.
    pub deferred_delay_ms: u32,
    /// Delay between the sidebar closing and control re-enabling.
    pub sidebar_settle_ms: u32,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            reapply_interval_ms: 200,
            deferred_delay_ms: 50,
            sidebar_settle_ms: 100,
        }
    }
}

/// Simulated login behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Artificial delay before the login "succeeds".
    pub submit_delay_ms: u32,
    /// Destination reported for roles without a dashboard.
    pub fallback_destination: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            fallback_destination: "index.html".to_string(),
        }
    }
}

/// Feature-card reveal animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Duration of the opacity/transform transition in seconds.
    pub transition_secs: f64,
    /// Initial downward offset of hidden cards in px.
    pub offset_px: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            transition_secs: 0.6,
            offset_px: 20.0,
        }
    }
}

impl InteractionConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    /// Returns [`InteractionError::Config`] when the JSON is malformed or the
    /// resulting values fail [`InteractionConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, InteractionError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| InteractionError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would disable a behavior outright.
    ///
    /// # Errors
    /// Returns [`InteractionError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), InteractionError> {
        if self.mobile.breakpoint_px <= 0.0 {
            return Err(InteractionError::Config(
                "mobile.breakpoint_px must be greater than 0".to_string(),
            ));
        }
        if self.mobile.reapply_interval_ms == 0 {
            return Err(InteractionError::Config(
                "mobile.reapply_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.navbar.scroll_threshold_px < 0.0 {
            return Err(InteractionError::Config(
                "navbar.scroll_threshold_px must not be negative".to_string(),
            ));
        }
        if self.cards.transition_secs < 0.0 {
            return Err(InteractionError::Config(
                "cards.transition_secs must not be negative".to_string(),
            ));
        }
        if self.login.fallback_destination.is_empty() {
            return Err(InteractionError::Config(
                "login.fallback_destination must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
