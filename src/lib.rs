//! Interactivity for the portfolio page: scroll effects, reveal animations,
//! the mobile menu, counters, the typing effect and a hidden easter egg.
//!
//! Everything binds to the already rendered host document. The only nodes
//! this crate renders itself live under a mount `<div>` appended to `<body>`.

pub mod config;
pub mod dom;
pub mod easter_egg;
pub mod error;
pub mod schedule;
pub mod site;
pub mod visibility;

pub mod behaviors {
    pub mod active_section;
    pub mod anchor_scroll;
    pub mod counter;
    pub mod git_log;
    pub mod hero_intro;
    pub mod mobile_menu;
    pub mod reveal;
    pub mod row_highlight;
    pub mod scroll_state;
    pub mod typewriter;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use log::info;

use config::MOUNT_ID;
use error::{Error, Result};
use site::Site;

/// Mounts the `Site` component into its own host element and binds the page behaviors.
pub fn start() -> Result<()> {
    let document = dom::document()?;
    let body = document.body().ok_or(Error::NoBody)?;

    let mount = match document.get_element_by_id(MOUNT_ID) {
        Some(existing) => existing,
        None => {
            let mount = document.create_element("div")?;
            mount.set_id(MOUNT_ID);
            body.append_child(&mount)?;
            mount
        }
    };

    info!("Mounting site interactivity");
    yew::Renderer::<Site>::with_root(mount).render();
    Ok(())
}
