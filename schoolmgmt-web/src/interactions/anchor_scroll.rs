use shared::models::InteractionError;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::{hook, use_effect_with};

use super::report;
use crate::{dom, events::EventListener};

/// Links handled by the delegated listener.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Handle one click anywhere in the document.
///
/// Returns `Ok(true)` when a smooth scroll was started. Clicks on in-page
/// links always have their default navigation cancelled, even when the
/// fragment names nothing.
pub fn handle_click(event: &Event) -> Result<bool, InteractionError> {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return Ok(false);
    };
    let anchor = target
        .closest(ANCHOR_SELECTOR)
        .map_err(|err| InteractionError::Dom(dom::js_error(&err)))?;
    let Some(anchor) = anchor else {
        return Ok(false);
    };
    event.prevent_default();

    let Some(href) = anchor.get_attribute("href") else {
        return Ok(false);
    };
    scroll_to_selector(&href, Some(ScrollLogicalPosition::Start))
}

/// Smooth-scroll to the section with this id, without block alignment.
pub fn scroll_to_section(id: &str) -> Result<bool, InteractionError> {
    scroll_to_selector(&format!("#{id}"), None)
}

fn scroll_to_selector(
    selector: &str,
    block: Option<ScrollLogicalPosition>,
) -> Result<bool, InteractionError> {
    let document = dom::document()?;
    let Some(target) = dom::query(&document, selector)? else {
        log::debug!("no scroll target for {selector}");
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(block) = block {
        options.set_block(block);
    }
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Install the delegated in-page link handler for the component's lifetime.
#[hook]
pub fn use_anchor_scroll() {
    use_effect_with((), |()| {
        let listener = dom::document().and_then(|document| {
            EventListener::new(&document, "click", |event| {
                if let Err(err) = handle_click(&event) {
                    report("anchor scroll", &err);
                }
            })
        });
        let listener = listener.map_err(|err| report("anchor scroll", &err)).ok();
        move || drop(listener)
    });
}
