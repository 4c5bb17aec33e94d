use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use crate::config::{COMMAND_SELECTOR, TYPE_INTERVAL_MS};
use crate::dom::Listener;
use crate::error::Result;

/// Retypes the hero command one character at a time after the page has loaded.
pub struct TypewriterEffect {
    _load: Option<Listener>,
}

impl TypewriterEffect {
    pub fn attach(window: &Window, document: &Document) -> Result<Option<Self>> {
        if document.ready_state() == "complete" {
            type_command(document);
            return Ok(Some(Self { _load: None }));
        }

        let doc = document.clone();
        let load = Listener::new(window, "load", move |_| type_command(&doc))?;
        Ok(Some(Self { _load: Some(load) }))
    }
}

fn type_command(document: &Document) {
    let Ok(Some(command)) = document.query_selector(COMMAND_SELECTOR) else {
        debug!("No hero command to type");
        return;
    };
    let text = command.text_content().unwrap_or_default();
    if text.is_empty() {
        return;
    }
    command.set_text_content(Some(""));

    spawn_local(async move {
        for typed in typed_prefixes(&text) {
            TimeoutFuture::new(TYPE_INTERVAL_MS).await;
            command.set_text_content(Some(typed));
        }
    });
}

/// Text shown after each tick: one more character every time.
fn typed_prefixes(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices().map(move |(i, c)| &text[..i + c.len_utf8()])
}
