use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="container error-page">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { "Back to home" }
            </Link<MainRoute>>
        </div>
    }
}
