use log::debug;
use web_sys::{Document, Element};

use crate::config::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR, SECTION_THRESHOLD};
use crate::dom::{query_all, warn_on_err};
use crate::error::Result;
use crate::visibility::{Sighting, Visibility, VisibilityWatch};

/// Highlights the nav link of whichever section most recently came into view.
pub struct ActiveSectionTracker {
    _watch: VisibilityWatch,
}

impl ActiveSectionTracker {
    pub fn attach(document: &Document) -> Result<Option<Self>> {
        let sections = query_all(document, SECTION_SELECTOR)?;
        if sections.is_empty() {
            debug!("No identified sections, active link tracking not bound");
            return Ok(None);
        }
        let links = query_all(document, NAV_LINK_SELECTOR)?;

        let watch = VisibilityWatch::new(Visibility::at(SECTION_THRESHOLD), move |sightings, _| {
            apply_batch(&links, sightings);
        })?;
        for section in &sections {
            watch.observe(section);
        }

        Ok(Some(Self { _watch: watch }))
    }
}

/// Later entries in the same batch win.
fn apply_batch(links: &[Element], sightings: &[Sighting]) {
    for sighting in sightings.iter().filter(|s| s.is_intersecting) {
        highlight(links, &sighting.target.id());
    }
}

fn highlight(links: &[Element], section_id: &str) {
    for link in links {
        warn_on_err("clear active link", link.class_list().remove_1(ACTIVE_CLASS));
    }
    let href = section_href(section_id);
    if let Some(active) = links
        .iter()
        .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
    {
        warn_on_err("mark active link", active.class_list().add_1(ACTIVE_CLASS));
    }
}

fn section_href(section_id: &str) -> String {
    format!("#{}", section_id)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::dom::testing::fixture;
    use crate::dom::query_all_in;

    fn active_hrefs(links: &[Element]) -> Vec<String> {
        links
            .iter()
            .filter(|link| link.class_list().contains(ACTIVE_CLASS))
            .filter_map(|link| link.get_attribute("href"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_last_section_in_batch_wins() {
        let root = fixture(
            r##"<nav>
                <a class="nav-link" href="#about">About</a>
                <a class="nav-link" href="#projects">Projects</a>
                <a class="nav-link" href="#contact">Contact</a>
            </nav>
            <section id="about"></section>
            <section id="projects"></section>
            <section id="contact"></section>"##,
        );
        let links = query_all_in(&root, NAV_LINK_SELECTOR).unwrap();
        let sections = query_all_in(&root, "section").unwrap();
        let seen = |i: usize, is_intersecting: bool| Sighting {
            target: sections[i].clone(),
            is_intersecting,
        };

        apply_batch(&links, &[seen(0, true), seen(1, true)]);
        assert_eq!(active_hrefs(&links), vec!["#projects".to_string()]);

        // Sections leaving the viewport never clear the highlight.
        apply_batch(&links, &[seen(2, true), seen(1, false)]);
        assert_eq!(active_hrefs(&links), vec!["#contact".to_string()]);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_section_without_link_clears_highlight() {
        let root = fixture(r##"<a class="nav-link active" href="#about">About</a>"##);
        let links = query_all_in(&root, NAV_LINK_SELECTOR).unwrap();

        highlight(&links, "unlisted");
        assert!(active_hrefs(&links).is_empty());

        root.remove();
    }
}
