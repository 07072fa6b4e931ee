use js_sys::Array;
use shared::{
    config::CardConfig,
    models::{
        CardVisual, InteractionError,
        card::{CARD_SELECTOR, STATE_ATTRIBUTE, transition},
    },
};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};
use yew::{NodeRef, hook, use_effect_with};

use super::report;
use crate::dom;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fades feature cards in the first time they scroll into view.
///
/// Dropping the revealer disconnects the observer; cards keep whatever state
/// they reached.
pub struct CardRevealer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl std::fmt::Debug for CardRevealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRevealer").finish_non_exhaustive()
    }
}

impl CardRevealer {
    /// Hide `cards`, install the transition and start observing them.
    pub fn observe(cards: &[HtmlElement], config: &CardConfig) -> Result<Self, InteractionError> {
        let callback = {
            let config = config.clone();
            Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Err(err) = reveal(&entry.target(), entry.is_intersecting(), &config) {
                        report("card reveal", &err);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| InteractionError::Dom(dom::js_error(&err)))?;

        for card in cards {
            prepare(card, config)?;
            observer.observe(card);
        }
        log::debug!("observing {} feature cards", cards.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for CardRevealer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Apply the initial styles. A card revealed before a re-mount stays visible.
fn prepare(card: &HtmlElement, config: &CardConfig) -> Result<(), InteractionError> {
    let state = CardVisual::from_attribute(card.get_attribute(STATE_ATTRIBUTE).as_deref());
    dom::apply_styles(card, &state.declarations(config))?;
    dom::apply_styles(card, &[transition(config)])?;
    set_state(card, state)
}

/// Advance one card after an intersection callback and return its new state.
pub fn reveal(
    target: &Element,
    is_intersecting: bool,
    config: &CardConfig,
) -> Result<CardVisual, InteractionError> {
    let current = CardVisual::from_attribute(target.get_attribute(STATE_ATTRIBUTE).as_deref());
    let next = current.on_intersection(is_intersecting);
    if next != current {
        let card = target
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| InteractionError::Dom("feature card is not an HTML element".into()))?;
        dom::apply_styles(card, &next.declarations(config))?;
        set_state(card, next)?;
    }
    Ok(next)
}

fn set_state(card: &Element, state: CardVisual) -> Result<(), InteractionError> {
    card.set_attribute(STATE_ATTRIBUTE, state.as_str())
        .map_err(|err| InteractionError::Dom(dom::js_error(&err)))
}

/// Reveal the `.feature-card` elements under `container` as they scroll in.
#[hook]
pub fn use_card_reveal(container: NodeRef, config: CardConfig) {
    use_effect_with(config, move |config| {
        let revealer = container
            .cast::<Element>()
            .ok_or_else(|| InteractionError::MissingElement("feature card container".into()))
            .and_then(|root| {
                let cards: Vec<HtmlElement> = dom::query_all_within(&root, CARD_SELECTOR)?
                    .into_iter()
                    .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
                    .collect();
                CardRevealer::observe(&cards, config)
            })
            .map_err(|err| report("card reveal", &err))
            .ok();
        move || drop(revealer)
    });
}
