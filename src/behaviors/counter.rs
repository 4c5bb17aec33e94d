use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::{
    COUNTER_DURATION_MS, COUNTER_STEPS, STATS_SELECTOR, STATS_THRESHOLD, STAT_VALUE_SELECTOR,
};
use crate::dom::query_all;
use crate::error::Result;
use crate::schedule::TickPlan;
use crate::visibility::{Sighting, Visibility, VisibilityWatch};

const PLAN: TickPlan = TickPlan::new(COUNTER_DURATION_MS, COUNTER_STEPS);

static STAT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^0-9]*)([0-9]+)([^0-9]*)$").expect("stat pattern is valid"));

/// A stat like `~42%`: an integer with optional non-digit text around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatValue {
    pub prefix: String,
    pub target: u64,
    pub suffix: String,
}

impl StatValue {
    /// `None` for times (`3:45`) and anything that is not a single integer.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.contains(':') {
            return None;
        }
        let caps = STAT_PATTERN.captures(text)?;
        let target = caps[2].parse::<u64>().ok()?;
        Some(Self {
            prefix: caps[1].to_string(),
            target,
            suffix: caps[3].to_string(),
        })
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Counts the about-section stats up from zero once, when they first come into view.
pub struct CounterAnimation {
    _watch: VisibilityWatch,
}

impl CounterAnimation {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let Some(stats) = document.query_selector(STATS_SELECTOR)? else {
            debug!("No stats block on page");
            return Ok(None);
        };

        let doc = document.clone();
        let animated = Cell::new(false);
        let watch = VisibilityWatch::new(Visibility::at(STATS_THRESHOLD), move |sightings, observer| {
            if start_counters(&doc, sightings, &animated).is_some() {
                observer.disconnect();
            }
        })?;
        watch.observe(&stats);

        Ok(Some(Self { _watch: watch }))
    }
}

/// Starts every parsable stat on the first batch whose leading entry is in view.
/// Returns how many counters started, or `None` when nothing was triggered.
fn start_counters(document: &Document, sightings: &[Sighting], animated: &Cell<bool>) -> Option<usize> {
    if !sightings.first().map_or(false, |s| s.is_intersecting) || animated.replace(true) {
        return None;
    }

    let values = match query_all(document, STAT_VALUE_SELECTOR) {
        Ok(values) => values,
        Err(e) => {
            warn!("Failed to collect stat values: {}", e);
            return Some(0);
        }
    };
    let mut started = 0;
    for element in values {
        let text = element.text_content().unwrap_or_default();
        match StatValue::parse(&text) {
            Some(value) => {
                animate(element, value);
                started += 1;
            }
            None => debug!("Leaving stat {:?} as is", text.trim()),
        }
    }
    Some(started)
}

fn animate(element: Element, value: StatValue) {
    let frames = PLAN.frames(value.target);
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();
    let mut frame = 0;

    let interval = Interval::new(PLAN.interval_ms(), move || {
        frame += 1;
        let shown = PLAN.value_at(value.target, frame);
        element.set_text_content(Some(&value.render(shown)));

        if frame >= frames {
            // Dropping the interval from inside its own tick is deferred to the next turn.
            if let Some(interval) = handle_clone.borrow_mut().take() {
                spawn_local(async move { drop(interval) });
            }
        }
    });

    *handle.borrow_mut() = Some(interval);
}
