pub mod overlay;
pub mod sequence;

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::config::SECRET_SEQUENCE;
use crate::dom::Listener;
use crate::error::Result;
use sequence::KeySequence;

/// Watches document key presses and calls `on_match` each time the secret sequence is typed.
pub fn listen<F>(document: &Document, on_match: F) -> Result<Listener>
where
    F: Fn() + 'static,
{
    let mut sequence = KeySequence::new(&SECRET_SEQUENCE);
    Listener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if sequence.feed(&event.key()) {
            info!("Secret sequence entered");
            on_match();
        }
    })
}

/// Keeps at most one overlay on screen.
#[derive(Debug, Default)]
pub struct OverlayGate {
    open: bool,
}

impl OverlayGate {
    /// Returns true when the overlay should be shown. A repeat while open is logged and ignored.
    pub fn request_open(&mut self) -> bool {
        if self.open {
            info!("Overlay already open, ignoring repeated sequence");
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opens_once_until_closed() {
        let mut gate = OverlayGate::default();
        assert!(!gate.is_open());
        assert!(gate.request_open());
        assert!(!gate.request_open());
        assert!(gate.is_open());
    }

    #[test]
    fn test_gate_reopens_after_dismiss() {
        let mut gate = OverlayGate::default();
        assert!(gate.request_open());
        gate.close();
        assert!(!gate.is_open());
        assert!(gate.request_open());
    }

    #[test]
    fn test_sequence_twice_without_dismiss_shows_one_overlay() {
        let mut sequence = KeySequence::new(&SECRET_SEQUENCE);
        let mut gate = OverlayGate::default();
        let shown = SECRET_SEQUENCE
            .iter()
            .chain(SECRET_SEQUENCE.iter())
            .filter(|key| sequence.feed(key))
            .filter(|_| gate.request_open())
            .count();
        assert_eq!(shown, 1);
    }
}
