mod app;
mod chartjs;
mod components;
mod config;
mod containers;
mod dom;
mod events;
mod interactions;
mod logging;
mod models;
mod pages;
mod routes;


use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(SchoolApp)]
fn school_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    log::info!("Starting SchoolMgmt frontend");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount into");
        return;
    };
    Renderer::<SchoolApp>::with_root(body.into()).render();
}
