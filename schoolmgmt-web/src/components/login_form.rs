use gloo_timers::callback::Timeout;
use shared::{
    config::LoginConfig,
    models::{Destination, LoginForm as LoginFields, SubmitButton, UserRole},
};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::{
    Callback, Html, NodeRef, Properties, SubmitEvent, function_component, html, use_mut_ref,
    use_node_ref, use_state_eq,
};
use yewdux::prelude::use_dispatch;

use crate::{config::FrontendConfig, dom, models::app_state::LoginModalState};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

fn configured_login() -> LoginConfig {
    FrontendConfig::shared().interaction.login.clone()
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_else(configured_login)]
    pub login: LoginConfig,
}

/// Simulated sign-in form.
///
/// Nothing is sent anywhere: after the configured delay the user is greeted
/// and the dashboard they would be sent to is logged.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let dispatch = use_dispatch::<LoginModalState>();
    let button = use_state_eq(SubmitButton::default);
    // Dropped with the component, which cancels a login still in flight.
    let pending_timer = use_mut_ref(|| None::<Timeout>);

    let user_type_ref = use_node_ref();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let button = button.clone();
        let user_type_ref = user_type_ref.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let login = props.login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let fields = LoginFields {
                user_type: select_value(&user_type_ref),
                username: input_value(&username_ref),
                password: input_value(&password_ref),
            };
            let pending = match fields.submit() {
                Ok(pending) => pending,
                Err(err) => {
                    dom::alert(&err.to_string());
                    return;
                }
            };
            log::debug!("signing in {} as {}", pending.username(), pending.user_type());
            button.set(SubmitButton::Pending);

            let fallback = login.fallback_destination.clone();
            let button = button.clone();
            let dispatch = dispatch.clone();
            let timeout = Timeout::new(login.submit_delay_ms, move || {
                button.set(SubmitButton::Idle);
                let outcome = pending.complete(&fallback);
                dom::alert(&outcome.alert);
                dispatch.reduce_mut(LoginModalState::close);
                match &outcome.destination {
                    Destination::Dashboard(_) => log::info!("Redirecting to {}", outcome.path),
                    Destination::Fallback(role) => log::warn!(
                        "unknown user role `{role}`, redirecting to {}",
                        outcome.path
                    ),
                }
            });
            pending_timer.borrow_mut().replace(timeout);
        })
    };

    html! {
        <form id="loginForm" class="login-form" {onsubmit}>
            <div class="form-group">
                <label for="userType">{ "Login as" }</label>
                <select id="userType" ref={user_type_ref}>
                    { for UserRole::iter().map(|role| html! {
                        <option value={role.as_str()}>{ role.label() }</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="username">{ "Username" }</label>
                <input id="username" type="text" autocomplete="username" ref={username_ref} />
            </div>
            <div class="form-group">
                <label for="password">{ "Password" }</label>
                <input id="password" type="password" autocomplete="current-password" ref={password_ref} />
            </div>
            <button type="submit" class="btn btn-primary btn-full" disabled={button.disabled()}>
                { button.label() }
            </button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture::{html, mount, record_alerts};
    use gloo_timers::future::TimeoutFuture;
    use shared::models::login::MISSING_FIELDS_ALERT;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Element;
    use yewdux::Dispatch;

    wasm_bindgen_test_configure!(run_in_browser);

    fn modal() -> Dispatch<LoginModalState> {
        Dispatch::global()
    }

    fn render(root: &Element) -> yew::AppHandle<LoginForm> {
        let login = LoginConfig {
            submit_delay_ms: 100,
            ..LoginConfig::default()
        };
        yew::Renderer::<LoginForm>::with_root_and_props(root.clone(), LoginFormProps { login })
            .render()
    }

    fn fill(root: &Element, selector: &str, value: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(value);
    }

    fn submit_button(root: &Element) -> web_sys::HtmlElement {
        html(root, "button[type=submit]")
    }

    #[wasm_bindgen_test]
    async fn login_disables_button_until_the_delay_elapses() {
        let (_alert, alerts) = record_alerts();
        modal().set(LoginModalState { open: true });
        let root = mount("");
        let app = render(&root);
        TimeoutFuture::new(10).await;

        fill(&root, "#username", "asha");
        fill(&root, "#password", "secret");
        submit_button(&root).click();
        TimeoutFuture::new(10).await;

        let button = submit_button(&root);
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.text_content().unwrap().trim(), "Logging in...");
        assert!(modal().get().open);
        assert_eq!(alerts.length(), 0);

        TimeoutFuture::new(150).await;

        let button = submit_button(&root);
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().unwrap().trim(), "Login");
        assert!(!modal().get().open);
        assert_eq!(alerts.length(), 1);
        assert_eq!(
            alerts.get(0).as_string().unwrap(),
            "Login successful! Welcome asha (admin)"
        );

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn empty_fields_alert_once_and_keep_the_modal_open() {
        let (_alert, alerts) = record_alerts();
        modal().set(LoginModalState { open: true });
        let root = mount("");
        let app = render(&root);
        TimeoutFuture::new(10).await;

        fill(&root, "#username", "asha");
        submit_button(&root).click();
        TimeoutFuture::new(150).await;

        assert_eq!(alerts.length(), 1);
        assert_eq!(alerts.get(0).as_string().unwrap(), MISSING_FIELDS_ALERT);
        assert!(modal().get().open);
        let button = submit_button(&root);
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().unwrap().trim(), "Login");

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmounting_cancels_a_login_in_flight() {
        let (_alert, alerts) = record_alerts();
        modal().set(LoginModalState { open: true });
        let root = mount("");
        let app = render(&root);
        TimeoutFuture::new(10).await;

        fill(&root, "#username", "asha");
        fill(&root, "#password", "secret");
        submit_button(&root).click();
        TimeoutFuture::new(10).await;
        app.destroy();
        TimeoutFuture::new(150).await;

        assert_eq!(alerts.length(), 0);
        assert!(modal().get().open);
        root.remove();
    }
}
