use crate::config::FrontendConfig;
use crate::interactions::{use_anchor_scroll, use_mobile_interaction};
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Application shell. Page-wide behaviors live here so they survive route
/// changes.
#[function_component(App)]
pub fn app() -> Html {
    let config = FrontendConfig::shared();
    use_anchor_scroll();
    use_mobile_interaction(config.interaction.mobile.clone());

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
