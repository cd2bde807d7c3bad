//! Race track hook for the page
//!
//! Mount from a LiveView-style hook:
//!
//! ```js
//! mounted() {
//!     this.track = new RaceTrackHook(
//!         this.el,
//!         (event, payload) => this.pushEvent(event, payload),
//!         (event, callback) => this.handleEvent(event, callback),
//!     );
//! },
//! destroyed() { this.track.destroyed(); }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

use super::canvas::CanvasStage;
use super::init_logging;
use super::listener::EventListener;
use crate::controller::RaceTrack;
use crate::protocol::Transport;
use crate::settings::Settings;

/// Pushes intents through the host's `pushEvent`
pub struct HookTransport {
    push_event: js_sys::Function,
}

impl Transport for HookTransport {
    fn push(&mut self, event: &str, payload: Value) {
        let payload = match js_sys::JSON::parse(&payload.to_string()) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Could not encode {} payload: {:?}", event, e);
                return;
            }
        };
        if let Err(e) = self
            .push_event
            .call2(&JsValue::NULL, &JsValue::from_str(event), &payload)
        {
            log::warn!("pushEvent({}) threw: {:?}", event, e);
        }
    }
}

type Track = RaceTrack<HookTransport, CanvasStage>;

/// Convert a JS payload into JSON the protocol layer can decode
fn to_json(payload: &JsValue) -> Option<Value> {
    let text: String = js_sys::JSON::stringify(payload).ok()?.into();
    serde_json::from_str(&text).ok()
}

fn apply_push(track: &RefCell<Track>, event: &str, payload: &JsValue) {
    let Some(payload) = to_json(payload) else {
        log::warn!("Dropping {}: payload is not JSON", event);
        return;
    };
    if let Err(e) = track.borrow_mut().handle_push(event, payload) {
        log::warn!("Dropping {}: {}", event, e);
    }
}

#[wasm_bindgen]
pub struct RaceTrackHook {
    track: Rc<RefCell<Track>>,
    update_handler: Option<Closure<dyn FnMut(JsValue)>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl RaceTrackHook {
    /// Mount on `canvas`. Sends the ready intent before anything else.
    ///
    /// `handle_event` is optional; without it the page forwards server pushes
    /// through [`RaceTrackHook::handle_event`].
    #[wasm_bindgen(constructor)]
    pub fn mounted(
        canvas: HtmlCanvasElement,
        push_event: js_sys::Function,
        handle_event: Option<js_sys::Function>,
    ) -> Result<RaceTrackHook, JsValue> {
        let settings = Settings::from_json(canvas.get_attribute(Settings::DATA_ATTRIBUTE).as_deref());
        init_logging(settings.log_level.to_level());

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let key_event = settings.key_trigger.as_str();
        let update_event = settings.update_event.clone();

        let track = Rc::new(RefCell::new(RaceTrack::mount(
            HookTransport { push_event },
            CanvasStage::new(canvas),
            settings,
        )));

        let mut listeners = Vec::with_capacity(3);

        // Keyboard
        {
            let track = track.clone();
            listeners.push(EventListener::new(
                &window,
                key_event,
                move |event: KeyboardEvent| {
                    track.borrow_mut().key_pressed(&event.key(), &event.code());
                },
            )?);
        }

        // Touch
        {
            let track = track.clone();
            listeners.push(EventListener::new(
                &window,
                "touchstart",
                move |_event: TouchEvent| {
                    track.borrow_mut().touch_started();
                },
            )?);
        }

        // Resize
        {
            let track = track.clone();
            listeners.push(EventListener::new(
                &window,
                "resize",
                move |_event: web_sys::Event| {
                    if let Err(e) = track.borrow_mut().resized() {
                        log::error!("Render failed: {}", e);
                    }
                },
            )?);
        }

        // Server pushes
        let update_handler = match handle_event {
            Some(handle_event) => {
                let track = track.clone();
                let event = update_event.clone();
                let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
                    apply_push(&track, &event, &payload);
                });
                handle_event.call2(
                    &JsValue::NULL,
                    &JsValue::from_str(&update_event),
                    closure.as_ref().unchecked_ref(),
                )?;
                Some(closure)
            }
            None => None,
        };

        Ok(RaceTrackHook {
            track,
            update_handler,
            listeners,
        })
    }

    /// Forward a server push by hand
    pub fn handle_event(&self, event: &str, payload: JsValue) {
        apply_push(&self.track, event, &payload);
    }

    /// Remove every listener and release the canvas
    pub fn destroyed(self) {
        drop(self);
    }
}

impl Drop for RaceTrackHook {
    fn drop(&mut self) {
        self.listeners.clear();
        // The host forgets handleEvent callbacks of a destroyed hook.
        self.update_handler.take();
        log::info!("Race track hook destroyed");
    }
}
