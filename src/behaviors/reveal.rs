use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Element, IntersectionObserver};

use crate::config::{
    REVEALED_ATTR, REVEAL_DELAY_ATTR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_STAGGER_MS,
    REVEAL_THRESHOLD, VISIBLE_CLASS,
};
use crate::dom::{query_all, query_all_in, warn_on_err};
use crate::error::Result;
use crate::schedule::stagger;
use crate::visibility::{Sighting, Visibility, VisibilityWatch};

const REVEAL: Visibility = Visibility::at(REVEAL_THRESHOLD).with_margin(REVEAL_ROOT_MARGIN);

/// Fades `.reveal` elements in the first time they scroll into view.
///
/// Elements sharing a parent cascade: the Kth one waits K * 80 ms. Each target
/// is unobserved as soon as it is seen, so the class is added at most once.
pub struct RevealController {
    _watch: VisibilityWatch,
}

impl RevealController {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let targets = query_all(document, REVEAL_SELECTOR)?;
        if targets.is_empty() {
            debug!("No reveal targets on page");
            return Ok(None);
        }

        let watch = VisibilityWatch::new(REVEAL, |sightings, observer| {
            reveal_seen(sightings, observer);
        })?;

        for target in &targets {
            let delay = stagger(sibling_index(target)?, REVEAL_STAGGER_MS, 0);
            target.set_attribute(REVEAL_DELAY_ATTR, &delay.to_string())?;
            watch.observe(target);
        }
        debug!("Watching {} reveal targets", targets.len());

        Ok(Some(Self { _watch: watch }))
    }
}

/// Schedules the fade-in for every newly seen target. Returns how many were scheduled.
fn reveal_seen(sightings: &[Sighting], observer: &IntersectionObserver) -> usize {
    let mut scheduled = 0;
    for sighting in sightings.iter().filter(|s| s.is_intersecting) {
        observer.unobserve(&sighting.target);
        if sighting.target.has_attribute(REVEALED_ATTR) {
            continue;
        }
        warn_on_err("mark reveal target", sighting.target.set_attribute(REVEALED_ATTR, ""));

        let delay = parse_delay(sighting.target.get_attribute(REVEAL_DELAY_ATTR).as_deref());
        let target = sighting.target.clone();
        Timeout::new(delay, move || {
            warn_on_err("reveal element", target.class_list().add_1(VISIBLE_CLASS));
        })
        .forget();
        scheduled += 1;
    }
    scheduled
}

/// Position of `target` among the reveal targets under its parent.
fn sibling_index(target: &Element) -> Result<usize> {
    let Some(parent) = target.parent_element() else {
        return Ok(0);
    };
    let siblings = query_all_in(&parent, REVEAL_SELECTOR)?;
    Ok(siblings.iter().position(|s| s == target).unwrap_or(0))
}

fn parse_delay(attr: Option<&str>) -> u32 {
    attr.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Function;

    use super::*;
    use crate::dom;
    use crate::dom::testing::fixture;

    fn idle_observer() -> IntersectionObserver {
        IntersectionObserver::new(&Function::new_no_args("")).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_siblings_get_cascading_delays() {
        let root = fixture(
            r#"<div id="reveal-group">
                <p class="reveal"></p><p class="reveal"></p><p class="reveal"></p>
            </div>"#,
        );
        let document = dom::document().unwrap();
        let _reveal = RevealController::attach(&document).unwrap().expect("targets present");

        let delays: Vec<Option<String>> = query_all(&document, "#reveal-group .reveal")
            .unwrap()
            .iter()
            .map(|el| el.get_attribute(REVEAL_DELAY_ATTR))
            .collect();
        assert_eq!(
            delays,
            vec![Some("0".to_string()), Some("80".to_string()), Some("160".to_string())]
        );

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_repeated_sighting_reveals_once() {
        let root = fixture(r#"<p class="reveal" data-delay="80"></p>"#);
        let target = root.first_element_child().unwrap();
        let observer = idle_observer();
        let sighting = || Sighting {
            target: target.clone(),
            is_intersecting: true,
        };

        assert_eq!(reveal_seen(&[sighting()], &observer), 1);
        assert_eq!(reveal_seen(&[sighting()], &observer), 0);
        assert!(!target.class_list().contains(VISIBLE_CLASS));

        TimeoutFuture::new(150).await;
        assert!(target.class_list().contains(VISIBLE_CLASS));

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_sighting_out_of_view_is_ignored() {
        let root = fixture(r#"<p class="reveal"></p>"#);
        let target = root.first_element_child().unwrap();
        let sighting = Sighting {
            target: target.clone(),
            is_intersecting: false,
        };

        assert_eq!(reveal_seen(&[sighting], &idle_observer()), 0);
        assert!(!target.has_attribute(REVEALED_ATTR));

        root.remove();
    }
}
