use shared::models::mobile::SIDEBAR_OPEN_CLASS;
use yew::{Html, classes, function_component, html, use_node_ref};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_store};

use crate::{
    config::FrontendConfig, interactions::use_sidebar_release, models::app_state::SidebarState,
    routes::MainRoute,
};

/// Dashboard sidebar plus the backdrop that closes it on small screens.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let config = FrontendConfig::shared();
    let (state, dispatch) = use_store::<SidebarState>();
    let sidebar_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    use_sidebar_release(
        sidebar_ref.clone(),
        overlay_ref.clone(),
        config.interaction.mobile.clone(),
    );

    let close = dispatch.reduce_mut_callback(|state: &mut SidebarState| state.close());

    html! {
        <>
            <aside class={classes!("sidebar", state.open.then_some(SIDEBAR_OPEN_CLASS))} ref={sidebar_ref}>
                <div class="sidebar-header">
                    <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="w-6 h-6" />
                    <span>{ "SchoolMgmt" }</span>
                </div>
                <nav class="sidebar-menu">
                    <Link<MainRoute> to={MainRoute::Dashboard} classes="menu-item active">
                        <Icon icon_id={IconId::HeroiconsOutlineChartPie} class="w-5 h-5" />
                        <span>{ "Overview" }</span>
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Home} classes="menu-item">
                        <Icon icon_id={IconId::HeroiconsOutlineHome} class="w-5 h-5" />
                        <span>{ "Back to site" }</span>
                    </Link<MainRoute>>
                </nav>
            </aside>
            <div
                class={classes!("mobile-overlay", state.open.then_some("active"))}
                ref={overlay_ref}
                onclick={close}
            ></div>
        </>
    }
}

/// Hamburger button shown in the dashboard header on small screens.
#[function_component(MenuToggle)]
pub fn menu_toggle() -> Html {
    let dispatch = use_dispatch::<SidebarState>();
    let toggle = dispatch.reduce_mut_callback(|state: &mut SidebarState| state.toggle());

    html! {
        <button type="button" class="menu-toggle" aria-label="Toggle menu" onclick={toggle}>
            <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
        </button>
    }
}
