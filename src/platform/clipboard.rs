//! Copy-link button
//!
//! Copies the element's `data-copy-link` value to the clipboard on click.
//! Without clipboard access the click simply does nothing.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlElement, MouseEvent};

use super::listener::EventListener;

/// `dataset` key holding the text to copy
const COPY_LINK_KEY: &str = "copyLink";

/// Clipboard of the current page, if the browser exposes one here
fn clipboard() -> Option<Clipboard> {
    let navigator = web_sys::window()?.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.dyn_into::<Clipboard>().ok())
}

fn copy_to_clipboard(text: String) {
    let Some(clipboard) = clipboard() else {
        log::debug!("Clipboard unavailable, not copying");
        return;
    };
    let promise = clipboard.write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::debug!("Copied link to clipboard"),
            Err(e) => log::debug!("Clipboard write rejected: {:?}", e),
        }
    });
}

#[wasm_bindgen]
pub struct CopyLinkHook {
    _click: EventListener,
}

#[wasm_bindgen]
impl CopyLinkHook {
    #[wasm_bindgen(constructor)]
    pub fn mounted(el: HtmlElement) -> Result<CopyLinkHook, JsValue> {
        let source = el.clone();
        let click = EventListener::new(&el, "click", move |_event: MouseEvent| {
            match source.dataset().get(COPY_LINK_KEY) {
                Some(link) => copy_to_clipboard(link),
                None => log::debug!("Copy button has no data-copy-link"),
            }
        })?;
        Ok(CopyLinkHook { _click: click })
    }

    pub fn destroyed(self) {}
}
