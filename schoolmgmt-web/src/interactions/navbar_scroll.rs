use shared::{
    config::NavbarConfig,
    models::{InteractionError, NavbarBackground},
};
use yew::{hook, use_effect_with, use_state_eq};

use super::report;
use crate::{dom, events::EventListener};

/// Background for the window's current scroll offset.
pub fn current_background(config: &NavbarConfig) -> Result<NavbarBackground, InteractionError> {
    let window = dom::window()?;
    Ok(NavbarBackground::for_offset(
        dom::scroll_offset(&window),
        config,
    ))
}

/// Track the navbar background while the calling component is mounted.
///
/// Recomputed on every window scroll event; re-renders only happen when the
/// background actually flips.
#[hook]
pub fn use_navbar_background(config: NavbarConfig) -> NavbarBackground {
    let background = {
        let config = config.clone();
        use_state_eq(move || current_background(&config).unwrap_or_default())
    };

    {
        let background = background.clone();
        use_effect_with(config, move |config| {
            let config = config.clone();
            let listener = dom::window().and_then(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    match current_background(&config) {
                        Ok(next) => background.set(next),
                        Err(err) => report("navbar scroll", &err),
                    }
                })
            });
            let listener = listener.map_err(|err| report("navbar scroll", &err)).ok();
            move || drop(listener)
        });
    }

    *background
}
