use shared::models::InteractionError;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

use crate::dom::js_error;

/// An event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `event_type` on `target`.
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> Result<Self, InteractionError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|err| InteractionError::Dom(js_error(&err)))?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, callback)
        {
            log::debug!("removing {} listener failed: {}", self.event_type, js_error(&err));
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
