use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::{ROW_HOVER_SHADOW, ROW_SELECTOR};
use crate::dom::{query_all, warn_on_err, Listener};
use crate::error::Result;

/// Faint inset outline on pip list rows while hovered.
pub struct RowHighlight {
    _listeners: Vec<Listener>,
}

impl RowHighlight {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let rows: Vec<HtmlElement> = query_all(document, ROW_SELECTOR)?
            .into_iter()
            .filter_map(|row| row.dyn_into::<HtmlElement>().ok())
            .collect();
        if rows.is_empty() {
            debug!("No pip rows on page");
            return Ok(None);
        }

        let mut listeners = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            let entered = row.clone();
            listeners.push(Listener::new(&row, "mouseenter", move |_| {
                warn_on_err("set row shadow", entered.style().set_property("box-shadow", ROW_HOVER_SHADOW));
            })?);
            let left = row.clone();
            listeners.push(Listener::new(&row, "mouseleave", move |_| {
                warn_on_err("clear row shadow", left.style().set_property("box-shadow", ""));
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
