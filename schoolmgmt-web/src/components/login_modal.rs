use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::{Html, function_component, html, use_effect_with, use_node_ref};
use yewdux::prelude::use_store;

use super::login_form::LoginForm;
use crate::{dom, events::EventListener, interactions::report, models::app_state::LoginModalState};

/// Modal hosting the login form. Visibility follows [`LoginModalState`].
#[function_component(LoginModal)]
pub fn login_modal() -> Html {
    let (state, dispatch) = use_store::<LoginModalState>();
    let backdrop = use_node_ref();

    // Clicks that land on the backdrop itself (not the dialog) close the modal.
    {
        let backdrop = backdrop.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            let listener = dom::window().and_then(|window| {
                EventListener::new(&window, "click", move |event| {
                    let Some(backdrop) = backdrop.cast::<Node>() else {
                        return;
                    };
                    let on_backdrop = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok())
                        .is_some_and(|target| backdrop.is_same_node(Some(&target)));
                    if on_backdrop {
                        dispatch.reduce_mut(LoginModalState::close);
                    }
                })
            });
            let listener = listener.map_err(|err| report("login modal", &err)).ok();
            move || drop(listener)
        });
    }

    let close = dispatch.reduce_mut_callback(|state: &mut LoginModalState| state.close());
    let display = if state.open {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <div id="loginModal" class="modal" ref={backdrop} style={display}>
            <div class="modal-content">
                <button type="button" class="close" aria-label="Close" onclick={close}>
                    { "×" }
                </button>
                <h2>{ "Login to SchoolMgmt" }</h2>
                <LoginForm />
            </div>
        </div>
    }
}
