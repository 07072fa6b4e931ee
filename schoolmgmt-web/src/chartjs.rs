//! Binding to the page-global Chart.js constructor.
//!
//! Chart.js is loaded by a plain `<script>` tag in `index.html`; when it is
//! absent the constructor call throws and [`mount`] reports
//! [`InteractionError::ChartUnavailable`].

use js_sys::{Array, JSON, Reflect};
use shared::models::{ChartSpec, InteractionError, Segment};
use wasm_bindgen::{JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::HtmlCanvasElement;
use yew::Callback;

use crate::dom::js_error;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance.
    #[wasm_bindgen(js_name = Chart)]
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

type ClickHandler = Closure<dyn FnMut(JsValue, Array)>;

/// A chart bound to a canvas. Dropping it destroys the chart.
pub struct MountedChart {
    chart: Chart,
    on_click_handler: Option<ClickHandler>,
}

impl std::fmt::Debug for MountedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedChart")
            .field("clickable", &self.on_click_handler.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for MountedChart {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

/// Render `spec` into `canvas`.
///
/// When `on_select` is given, clicking a segment emits it; clicks that miss
/// every segment are ignored.
pub fn mount(
    canvas: &HtmlCanvasElement,
    spec: &'static ChartSpec,
    on_select: Option<Callback<Segment>>,
) -> Result<MountedChart, InteractionError> {
    let raw = serde_json::to_string(&spec.to_config())
        .map_err(|err| InteractionError::ChartUnavailable(err.to_string()))?;
    let config = JSON::parse(&raw).map_err(|err| InteractionError::Dom(js_error(&err)))?;

    let on_click = on_select.map(|callback| {
        Closure::wrap(Box::new(move |_event: JsValue, elements: Array| {
            if let Some(segment) = first_index(&elements).and_then(|index| spec.segment(index)) {
                log::debug!("{}: selected {}", spec.mount_id, segment.label);
                callback.emit(segment);
            }
        }) as Box<dyn FnMut(JsValue, Array)>)
    });

    if let Some(handler) = &on_click {
        let options = Reflect::get(&config, &JsValue::from_str("options"))
            .map_err(|err| InteractionError::Dom(js_error(&err)))?;
        Reflect::set(&options, &JsValue::from_str("onClick"), handler.as_ref())
            .map_err(|err| InteractionError::Dom(js_error(&err)))?;
    }

    let chart = Chart::new(canvas, &config)
        .map_err(|err| InteractionError::ChartUnavailable(js_error(&err)))?;
    Ok(MountedChart {
        chart,
        on_click_handler: on_click,
    })
}

/// Index of the first active element reported by a Chart.js click.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn first_index(elements: &Array) -> Option<usize> {
    if elements.length() == 0 {
        return None;
    }
    let first = elements.get(0);
    let index = Reflect::get(&first, &JsValue::from_str("index")).ok()?;
    index
        .as_f64()
        .filter(|value| *value >= 0.0 && value.fract() == 0.0)
        .map(|value| value as usize)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use shared::models::DashboardChart;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(index: f64) -> JsValue {
        let item = Object::new();
        Reflect::set(&item, &"index".into(), &index.into()).unwrap();
        item.into()
    }

    #[wasm_bindgen_test]
    fn first_index_reads_active_element() {
        let elements = Array::new();
        assert_eq!(first_index(&elements), None);

        elements.push(&element(1.0));
        elements.push(&element(3.0));
        assert_eq!(first_index(&elements), Some(1));
    }

    #[wasm_bindgen_test]
    fn first_index_rejects_garbage() {
        let elements = Array::of1(&element(-1.0));
        assert_eq!(first_index(&elements), None);
        let elements = Array::of1(&JsValue::from_str("nope"));
        assert_eq!(first_index(&elements), None);
    }

    #[wasm_bindgen_test]
    fn missing_library_is_reported() {
        let document = crate::dom::document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        let err = mount(&canvas, DashboardChart::Gender.spec(), None).unwrap_err();
        assert!(matches!(err, InteractionError::ChartUnavailable(_)));
    }
}
