use yew::{Children, Html, Properties, function_component, html};

use crate::components::{MenuToggle, Sidebar};

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or("Dashboard")]
    pub title: &'static str,
    pub children: Children,
}

/// Dashboard frame with the collapsible sidebar.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
    <div class="dashboard">
        <Sidebar />
        <div class="main-content">
            <header class="dashboard-header">
                <MenuToggle />
                <h1>{ props.title }</h1>
                <button type="button" class="profile-btn" aria-label="Profile">{ "A" }</button>
            </header>
            <div class="content">
                {props.children.clone()}
            </div>
        </div>
    </div>
    }
}
