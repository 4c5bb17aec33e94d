use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Document;

use crate::config::{HERO_FIRST_DELAY_MS, HERO_LINES_SELECTOR, HERO_STEP_MS, VISIBLE_CLASS};
use crate::dom::{query_all, warn_on_err};
use crate::error::Result;
use crate::schedule::stagger;

/// Shows the terminal lines under the hero name one after another.
pub struct HeroIntro {
    _timers: Vec<Timeout>,
}

impl HeroIntro {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let lines = query_all(document, HERO_LINES_SELECTOR)?;
        if lines.is_empty() {
            debug!("No hero terminal lines on page");
            return Ok(None);
        }

        let timers = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                Timeout::new(stagger(i, HERO_STEP_MS, HERO_FIRST_DELAY_MS), move || {
                    warn_on_err("show hero line", line.class_list().add_1(VISIBLE_CLASS));
                })
            })
            .collect();

        Ok(Some(Self { _timers: timers }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_line_delays() {
        let delays: Vec<u32> = (0..3)
            .map(|i| stagger(i, HERO_STEP_MS, HERO_FIRST_DELAY_MS))
            .collect();
        assert_eq!(delays, vec![1400, 1650, 1900]);
    }
}
