//! Page behaviors wired into the DOM.
//!
//! Each behavior exposes a plain function that does the work once against the
//! live document plus a hook that owns the listeners, observers and timers for
//! the lifetime of the calling component.

pub mod anchor_scroll;
pub mod card_reveal;
pub mod mobile_forcer;
pub mod navbar_scroll;
pub mod sidebar_watch;

pub use anchor_scroll::{scroll_to_section, use_anchor_scroll};
pub use card_reveal::use_card_reveal;
pub use mobile_forcer::use_mobile_interaction;
pub use navbar_scroll::use_navbar_background;
pub use sidebar_watch::use_sidebar_release;

use shared::models::InteractionError;

/// Log a failed interaction. Missing targets are expected on some pages.
pub(crate) fn report(context: &str, err: &InteractionError) {
    if err.is_benign() {
        log::debug!("{context}: {err}");
    } else {
        log::warn!("{context}: {err}");
    }
}
