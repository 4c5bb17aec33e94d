use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// How much of a target has to be on screen before it counts as seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl Visibility {
    pub const fn at(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub const fn with_margin(self, root_margin: &'static str) -> Self {
        Self {
            threshold: self.threshold,
            root_margin: Some(root_margin),
        }
    }
}

/// One entry of an intersection batch.
pub struct Sighting {
    pub target: Element,
    pub is_intersecting: bool,
}

impl From<IntersectionObserverEntry> for Sighting {
    fn from(entry: IntersectionObserverEntry) -> Self {
        Self {
            target: entry.target(),
            is_intersecting: entry.is_intersecting(),
        }
    }
}

/// Owns an `IntersectionObserver` and the closure it calls. Disconnects on drop.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    /// `on_batch` gets every entry of a callback invocation in delivery order.
    pub fn new<F>(visibility: Visibility, mut on_batch: F) -> Result<Self>
    where
        F: FnMut(&[Sighting], &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let sightings: Vec<Sighting> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(Sighting::from)
                .collect();
            on_batch(&sightings, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(visibility.threshold));
        if let Some(margin) = visibility.root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_without_margin() {
        let visibility = Visibility::at(0.4);
        assert_eq!(visibility.threshold, 0.4);
        assert_eq!(visibility.root_margin, None);
    }

    #[test]
    fn test_visibility_with_margin() {
        let visibility = Visibility::at(0.08).with_margin("0px 0px -40px 0px");
        assert_eq!(visibility.root_margin, Some("0px 0px -40px 0px"));
    }
}
