use log::debug;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{nav_offset, ANCHOR_SELECTOR};
use crate::dom::{query_all, Listener};
use crate::error::Result;

/// Smooth scrolling for in-page links, stopping short of the fixed nav bar.
///
/// Links whose fragment names no element are left to the browser.
pub struct SmoothAnchorScroll {
    _listeners: Vec<Listener>,
}

impl SmoothAnchorScroll {
    pub fn attach(window: &Window, document: &Document) -> Result<Option<Self>> {
        let anchors = query_all(document, ANCHOR_SELECTOR)?;
        if anchors.is_empty() {
            debug!("No in-page anchors");
            return Ok(None);
        }

        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let window = window.clone();
            let document = document.clone();
            let link = anchor.clone();
            listeners.push(Listener::new(&anchor, "click", move |event| {
                let Some(target) = link
                    .get_attribute("href")
                    .and_then(|href| fragment_id(&href))
                    .and_then(|id| document.get_element_by_id(&id))
                else {
                    return;
                };
                event.prevent_default();

                let top = scroll_target(
                    target.get_bounding_client_rect().top(),
                    window.scroll_y().unwrap_or(0.0),
                    nav_offset(&document),
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

/// Element id named by an in-page href such as `#projects`.
fn fragment_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let id = urlencoding::decode(fragment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(id)
}

fn scroll_target(rect_top: f64, scroll_y: f64, offset: i32) -> f64 {
    rect_top + scroll_y - f64::from(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#projects").as_deref(), Some("projects"));
        assert_eq!(fragment_id("#caf%C3%A9").as_deref(), Some("café"));
        assert_eq!(fragment_id("#100%").as_deref(), Some("100%"));
    }

    #[test]
    fn test_fragment_id_rejects_non_targets() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/blog"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_scroll_target_subtracts_nav_height() {
        assert_eq!(scroll_target(500.0, 1000.0, 60), 1440.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 64), 736.0);
    }
}
