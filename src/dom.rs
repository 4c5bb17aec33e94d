use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(parent.query_selector_all(selector)?))
}

/// Logs a failed browser call. The behavior carries on either way.
pub fn warn_on_err<T>(action: &str, result: std::result::Result<T, JsValue>) {
    if let Err(e) = result {
        warn!("Failed to {}: {}", action, Error::from(e));
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// An event listener that stays attached until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Same as `new`, but tells the browser the callback never calls `preventDefault`.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        warn_on_err(
            "remove listener",
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod testing {
    use web_sys::Element;

    use super::document;

    /// Appends `html` to the body inside a fresh wrapper. Call `remove()` on it when done.
    pub fn fixture(html: &str) -> Element {
        let document = document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }
}
