use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

use crate::config::{
    GIT_ENTRY_BASE_MS, GIT_ENTRY_HIDDEN_TRANSFORM, GIT_ENTRY_RESTING_TRANSFORM, GIT_ENTRY_SELECTOR,
    GIT_ENTRY_STEP_MS, GIT_ENTRY_TRANSITION, GIT_LOG_SELECTOR, GIT_LOG_THRESHOLD,
};
use crate::dom::{query_all, warn_on_err};
use crate::error::Result;
use crate::schedule::stagger;
use crate::visibility::{Sighting, Visibility, VisibilityWatch};

/// Slides the git log entries in one by one the first time the log is seen.
pub struct StaggeredListReveal {
    _watch: VisibilityWatch,
}

impl StaggeredListReveal {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let Some(log) = document.query_selector(GIT_LOG_SELECTOR)? else {
            debug!("No git log on page");
            return Ok(None);
        };

        let doc = document.clone();
        let watch = VisibilityWatch::new(Visibility::at(GIT_LOG_THRESHOLD), move |sightings, observer| {
            if reveal_entries(&doc, sightings).is_some() {
                observer.disconnect();
            }
        })?;
        watch.observe(&log);

        Ok(Some(Self { _watch: watch }))
    }
}

/// Hides every entry and schedules its slide-in, if the leading entry of the batch is in view.
/// Returns how many entries were scheduled, or `None` when nothing was triggered.
fn reveal_entries(document: &Document, sightings: &[Sighting]) -> Option<usize> {
    if !sightings.first().map_or(false, |s| s.is_intersecting) {
        return None;
    }

    let entries = match query_all(document, GIT_ENTRY_SELECTOR) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to collect git entries: {}", e);
            return Some(0);
        }
    };
    debug!("Revealing {} git entries", entries.len());

    let mut scheduled = 0;
    for (i, entry) in entries.into_iter().enumerate() {
        let Ok(entry) = entry.dyn_into::<HtmlElement>() else {
            continue;
        };
        let style = entry.style();
        set_style(&style, "opacity", "0");
        set_style(&style, "transform", GIT_ENTRY_HIDDEN_TRANSFORM);
        set_style(&style, "transition", GIT_ENTRY_TRANSITION);

        Timeout::new(stagger(i, GIT_ENTRY_STEP_MS, GIT_ENTRY_BASE_MS), move || {
            let style = entry.style();
            set_style(&style, "opacity", "1");
            set_style(&style, "transform", GIT_ENTRY_RESTING_TRANSFORM);
        })
        .forget();
        scheduled += 1;
    }
    Some(scheduled)
}

fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    warn_on_err("style git entry", style.set_property(property, value));
}
