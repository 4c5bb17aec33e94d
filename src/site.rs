use log::{debug, info, warn};
use web_sys::{Document, Window};
use yew::prelude::*;

use crate::behaviors::{
    active_section::ActiveSectionTracker, anchor_scroll::SmoothAnchorScroll,
    counter::CounterAnimation, git_log::StaggeredListReveal, hero_intro::HeroIntro,
    mobile_menu::MobileMenu, reveal::RevealController, row_highlight::RowHighlight,
    scroll_state::ScrollState, typewriter::TypewriterEffect,
};
use crate::dom;
use crate::easter_egg::{self, overlay::MatrixEgg, OverlayGate};
use crate::error::Result;

/// Every page behavior, bound once. Dropping this detaches them all.
pub struct Behaviors {
    _scroll_state: Option<ScrollState>,
    _mobile_menu: Option<MobileMenu>,
    _reveal: Option<RevealController>,
    _hero_intro: Option<HeroIntro>,
    _active_section: Option<ActiveSectionTracker>,
    _row_highlight: Option<RowHighlight>,
    _anchor_scroll: Option<SmoothAnchorScroll>,
    _git_log: Option<StaggeredListReveal>,
    _counters: Option<CounterAnimation>,
    _typewriter: Option<TypewriterEffect>,
}

impl Behaviors {
    pub fn attach(window: &Window, document: &Document) -> Self {
        Self {
            _scroll_state: bind("scroll state", ScrollState::attach(window, document)),
            _mobile_menu: bind("mobile menu", MobileMenu::attach(document)),
            _reveal: bind("scroll reveal", RevealController::attach(document)),
            _hero_intro: bind("hero intro", HeroIntro::attach(document)),
            _active_section: bind("active section", ActiveSectionTracker::attach(document)),
            _row_highlight: bind("row highlight", RowHighlight::attach(document)),
            _anchor_scroll: bind("anchor scroll", SmoothAnchorScroll::attach(window, document)),
            _git_log: bind("git log", StaggeredListReveal::attach(document)),
            _counters: bind("stat counters", CounterAnimation::attach(document)),
            _typewriter: bind("typewriter", TypewriterEffect::attach(window, document)),
        }
    }
}

fn bind<T>(name: &str, attached: Result<Option<T>>) -> Option<T> {
    match attached {
        Ok(Some(behavior)) => {
            debug!("Bound {}", name);
            Some(behavior)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to bind {}: {}", name, e);
            None
        }
    }
}

#[function_component(Site)]
pub fn site() -> Html {
    let egg_open = use_state(|| false);
    let gate = use_mut_ref(OverlayGate::default);

    // Page behaviors live as long as the component.
    use_effect_with_deps(
        move |_| {
            let attached = dom::window().and_then(|window| {
                let document = dom::document()?;
                Ok(Behaviors::attach(&window, &document))
            });
            let behaviors = match attached {
                Ok(behaviors) => Some(behaviors),
                Err(e) => {
                    warn!("Page behaviors not bound: {}", e);
                    None
                }
            };
            move || drop(behaviors)
        },
        (),
    );

    {
        let egg_open = egg_open.clone();
        let gate = gate.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().and_then(|document| {
                    easter_egg::listen(&document, move || {
                        if gate.borrow_mut().request_open() {
                            egg_open.set(true);
                        }
                    })
                });
                if let Err(e) = &listener {
                    warn!("Secret sequence listener not bound: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let on_dismiss = {
        let egg_open = egg_open.clone();
        Callback::from(move |_: ()| {
            info!("Overlay dismissed");
            gate.borrow_mut().close();
            egg_open.set(false);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .nav-link.active {
                        color: var(--py-yellow) !important;
                    }
                "#}
            </style>
            if *egg_open {
                <MatrixEgg on_dismiss={on_dismiss} />
            }
        </>
    }
}
