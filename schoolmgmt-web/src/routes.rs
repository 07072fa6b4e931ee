use crate::{
    containers::{dashboard_layout::DashboardLayout, layout::Layout},
    pages::*,
};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("Switching to main route: {route:?}");
    match route {
        MainRoute::Home => html! {
            <Layout>
                <LandingPage />
            </Layout>
        },
        MainRoute::Dashboard => html! {
            <DashboardLayout title="School Overview">
                <DashboardPage />
            </DashboardLayout>
        },
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}
