use shared::models::{CenterDisplay, ChartSpec, InteractionError, Segment};
use web_sys::HtmlCanvasElement;
use yew::{
    Callback, Html, Properties, function_component, html, use_effect_with, use_node_ref,
    use_state_eq,
};

use crate::chartjs;

#[derive(Properties, PartialEq)]
pub struct DoughnutChartProps {
    pub spec: &'static ChartSpec,
}

/// Renders any [`ChartSpec`] through Chart.js.
///
/// Inspectable charts get a center region showing the total until a segment
/// is clicked, then that segment's label and value. A missing Chart.js only
/// leaves the canvas empty.
#[function_component(DoughnutChart)]
pub fn doughnut_chart(props: &DoughnutChartProps) -> Html {
    let spec = props.spec;
    let canvas = use_node_ref();
    let center = use_state_eq(|| CenterDisplay::total(spec));

    {
        let canvas = canvas.clone();
        let center = center.clone();
        use_effect_with(spec, move |spec| {
            let spec: &'static ChartSpec = *spec;
            center.set(CenterDisplay::total(spec));
            let on_select = spec.inspectable.then(|| {
                let center = center.clone();
                Callback::from(move |segment: Segment| center.set(segment.into()))
            });
            let mounted = canvas
                .cast::<HtmlCanvasElement>()
                .ok_or_else(|| InteractionError::MissingElement(format!("#{}", spec.mount_id)))
                .and_then(|canvas| chartjs::mount(&canvas, spec, on_select));
            let mounted = match mounted {
                Ok(mounted) => Some(mounted),
                Err(err) => {
                    log::debug!("skipping chart {}: {err}", spec.mount_id);
                    None
                }
            };
            move || drop(mounted)
        });
    }

    html! {
        <div class="chart-card">
            <h3 class="chart-title">{ spec.title }</h3>
            <div class="chart-container">
                <canvas id={spec.mount_id} ref={canvas}></canvas>
                if spec.inspectable {
                    <div class="chart-center">
                        <div class="center-label">{ center.label.clone() }</div>
                        <div class="center-value">{ center.value.clone() }</div>
                    </div>
                }
            </div>
        </div>
    }
}
