use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

use crate::{
    config::FrontendConfig, interactions::use_navbar_background,
    models::app_state::LoginModalState, routes::MainRoute,
};

/// In-page sections linked from the navbar.
pub const SECTIONS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// Fixed top navigation for the landing page.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = FrontendConfig::shared();
    let navbar_config = &config.interaction.navbar;
    let background = use_navbar_background(navbar_config.clone());
    let dispatch = use_dispatch::<LoginModalState>();
    let open_login = dispatch.reduce_mut_callback(|state: &mut LoginModalState| state.open());

    html! {
        <nav class="navbar" style={format!("background: {}", background.color(navbar_config))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="w-6 h-6" />
                    <span>{ "SchoolMgmt" }</span>
                </a>
                <ul class="nav-menu">
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <li><a href={*href} class="nav-link">{ *label }</a></li>
                    }) }
                    <li>
                        <Link<MainRoute> to={MainRoute::Dashboard} classes="nav-link">
                            { "Dashboard" }
                        </Link<MainRoute>>
                    </li>
                    <li>
                        <button class="btn btn-primary login-btn" onclick={open_login}>
                            { "Login" }
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
