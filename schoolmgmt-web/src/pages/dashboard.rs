use shared::models::DashboardChart;
use strum::IntoEnumIterator;
use yew::{Html, function_component, html};

use crate::components::DoughnutChart;

/// School overview with the four enrollment charts.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="charts-grid">
            { for DashboardChart::iter().map(|chart| html! {
                <DoughnutChart key={chart.spec().mount_id} spec={chart.spec()} />
            }) }
        </div>
    }
}
