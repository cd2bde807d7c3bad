//! DOM listeners tied to a Rust owner
//!
//! The listener is registered on construction and removed again when the
//! guard is dropped, so a remounted hook never leaves stale handlers behind.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

pub struct EventListener {
    target: EventTarget,
    event_type: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Listen for `event_type` on `target`, handing the handler events of type `E`.
    ///
    /// Events that are not an `E` are ignored.
    pub fn new<E, F>(target: &EventTarget, event_type: &str, mut handler: F) -> Result<Self, JsValue>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        });
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_type: event_type.to_string(),
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
        log::debug!("Removed {} listener", self.event_type);
    }
}
