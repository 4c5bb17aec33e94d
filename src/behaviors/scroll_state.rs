use log::debug;
use web_sys::{Document, Window};

use crate::config::{NAV_ID, NAV_SCROLLED_CLASS, NAV_SCROLL_THRESHOLD};
use crate::dom::{warn_on_err, Listener};
use crate::error::Result;

/// Marks the navigation bar once the page has scrolled away from the top.
pub struct ScrollState {
    _scroll: Listener,
}

impl ScrollState {
    pub fn attach(window: &Window, document: &Document) -> Result<Option<Self>> {
        let Some(nav) = document.get_element_by_id(NAV_ID) else {
            debug!("No #{} element, scroll state not bound", NAV_ID);
            return Ok(None);
        };

        let win = window.clone();
        let scroll = Listener::passive(window, "scroll", move |_| {
            let scrolled = win.scroll_y().map(is_scrolled).unwrap_or(false);
            warn_on_err(
                "toggle nav scroll state",
                nav.class_list().toggle_with_force(NAV_SCROLLED_CLASS, scrolled),
            );
        })?;

        Ok(Some(Self { _scroll: scroll }))
    }
}

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}
