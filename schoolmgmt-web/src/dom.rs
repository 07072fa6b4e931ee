//! Thin, fallible wrappers over the `web-sys` calls the interactions need.

use shared::models::{InteractionError, StyleDeclaration};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Best-effort message from a thrown JS value.
pub fn js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    err.dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}

pub fn window() -> Result<Window, InteractionError> {
    web_sys::window().ok_or_else(|| InteractionError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, InteractionError> {
    window()?
        .document()
        .ok_or_else(|| InteractionError::MissingElement("document".to_string()))
}

/// `innerWidth` in logical pixels.
pub fn viewport_width(window: &Window) -> Result<f64, InteractionError> {
    window
        .inner_width()
        .map_err(|err| InteractionError::Dom(js_error(&err)))?
        .as_f64()
        .ok_or_else(|| InteractionError::Dom("innerWidth is not a number".to_string()))
}

/// `scrollY`, treating failures as the top of the page.
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// First match for `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, InteractionError> {
    document
        .query_selector(selector)
        .map_err(|err| invalid_selector(selector, &err))
}

/// All matches for `selector` in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, InteractionError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// All matches for `selector` below `root`.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, InteractionError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Write inline style declarations onto an element.
pub fn apply_styles(
    element: &HtmlElement,
    declarations: &[StyleDeclaration],
) -> Result<(), InteractionError> {
    let style = element.style();
    for declaration in declarations {
        style
            .set_property_with_priority(
                declaration.property,
                &declaration.value,
                declaration.priority(),
            )
            .map_err(|err| InteractionError::Dom(js_error(&err)))?;
    }
    Ok(())
}

/// Class names of an element, read from the attribute so SVG nodes work too.
pub fn class_names(element: &Element) -> Vec<String> {
    element
        .get_attribute("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let result = window().and_then(|window| {
        window
            .alert_with_message(message)
            .map_err(|err| InteractionError::Dom(js_error(&err)))
    });
    if let Err(err) = result {
        log::warn!("alert failed: {err}");
    }
}

fn invalid_selector(selector: &str, err: &JsValue) -> InteractionError {
    InteractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: js_error(err),
    }
}
