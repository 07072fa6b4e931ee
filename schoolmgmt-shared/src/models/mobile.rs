//! Tap-target overrides applied on narrow viewports.
//!
//! Some mobile browsers stop delivering taps to controls after the sidebar
//! overlay animates away. The frontend re-applies the declarations below on a
//! timer and after user input; every value here is constant, so repeated
//! application converges.

use crate::config::MobileConfig;

use super::style::StyleDeclaration;

/// Elements that must stay tappable.
pub const INTERACTIVE_SELECTOR: &str =
    "button, select, input, a, .btn, [onclick], .profile-btn, .menu-toggle";

/// Elements re-enabled after the sidebar closes.
pub const SIDEBAR_RELEASE_SELECTOR: &str = "button, select, input, a, .btn, [onclick]";

/// Generic content containers.
pub const CONTAINER_SELECTOR: &str = ".content, .container, main";

/// The main content wrapper.
pub const MAIN_CONTENT_SELECTOR: &str = ".main-content";

/// The sidebar element.
pub const SIDEBAR_SELECTOR: &str = ".sidebar";

/// Class marking the backdrop that must never be forced.
pub const OVERLAY_CLASS: &str = "mobile-overlay";

/// Class carried by the sidebar while open.
pub const SIDEBAR_OPEN_CLASS: &str = "open";

/// Full override set for interactive elements.
pub const INTERACTIVE_OVERRIDES: [StyleDeclaration; 8] = [
    StyleDeclaration::important("pointer-events", "auto"),
    StyleDeclaration::important("touch-action", "manipulation"),
    StyleDeclaration::important("-webkit-tap-highlight-color", "rgba(0,0,0,0.3)"),
    StyleDeclaration::important("position", "relative"),
    StyleDeclaration::important("z-index", "999"),
    StyleDeclaration::important("min-height", "48px"),
    StyleDeclaration::important("min-width", "48px"),
    StyleDeclaration::important("cursor", "pointer"),
];

/// Pointer/touch subset re-applied after the sidebar closes.
pub const RELEASE_OVERRIDES: [StyleDeclaration; 2] = [
    StyleDeclaration::important("pointer-events", "auto"),
    StyleDeclaration::important("touch-action", "manipulation"),
];

/// Overrides for content containers.
pub const CONTAINER_OVERRIDES: [StyleDeclaration; 2] = [
    StyleDeclaration::important("pointer-events", "auto"),
    StyleDeclaration::important("touch-action", "auto"),
];

/// Whether the forcer is active at this viewport width.
#[must_use]
pub fn is_narrow(viewport_width: f64, config: &MobileConfig) -> bool {
    viewport_width <= config.breakpoint_px
}

/// Whether an element with these classes may be forced.
#[must_use]
pub fn is_forceable<'a>(mut classes: impl Iterator<Item = &'a str>) -> bool {
    !classes.any(|class| class == OVERLAY_CLASS)
}

/// Whether a sidebar class change should trigger the deferred release.
#[must_use]
pub fn should_release_after_sidebar_change(
    sidebar_open: bool,
    viewport_width: f64,
    config: &MobileConfig,
) -> bool {
    !sidebar_open && is_narrow(viewport_width, config)
}
