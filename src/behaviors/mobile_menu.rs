use log::debug;
use web_sys::Document;

use crate::config::{HAMBURGER_ID, MENU_OPEN_CLASS, MOBILE_LINK_SELECTOR, MOBILE_MENU_ID};
use crate::dom::{query_all_in, warn_on_err, Listener};
use crate::error::Result;

pub struct MobileMenu {
    _listeners: Vec<Listener>,
}

impl MobileMenu {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let (Some(hamburger), Some(menu)) = (
            document.get_element_by_id(HAMBURGER_ID),
            document.get_element_by_id(MOBILE_MENU_ID),
        ) else {
            debug!("No mobile menu on page");
            return Ok(None);
        };

        let mut listeners = Vec::new();

        let toggled = menu.clone();
        listeners.push(Listener::new(&hamburger, "click", move |_| {
            warn_on_err("toggle mobile menu", toggled.class_list().toggle(MENU_OPEN_CLASS));
        })?);

        // Close on link click
        for link in query_all_in(&menu, MOBILE_LINK_SELECTOR)? {
            let menu = menu.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                warn_on_err("close mobile menu", menu.class_list().remove_1(MENU_OPEN_CLASS));
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
