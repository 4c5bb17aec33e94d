use log::Level;
use web_sys::Document;

// Navigation bar
pub const NAV_ID: &str = "nav";
pub const NAV_SCROLLED_CLASS: &str = "scrolled";
pub const NAV_SCROLL_THRESHOLD: f64 = 40.0;
pub const NAV_HEIGHT_VAR: &str = "--nav-h";
pub const NAV_HEIGHT_FALLBACK: i32 = 60;

// Mobile menu
pub const HAMBURGER_ID: &str = "nav-hamburger";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_LINK_SELECTOR: &str = ".mobile-link";
pub const MENU_OPEN_CLASS: &str = "open";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_DELAY_ATTR: &str = "data-delay";
pub const REVEALED_ATTR: &str = "data-revealed";
pub const REVEAL_THRESHOLD: f64 = 0.08;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const REVEAL_STAGGER_MS: u32 = 80;

// Hero terminal lines, revealed after the name animates in
pub const HERO_LINES_SELECTOR: &str = "#h-line2, #h-output, #h-cursor";
pub const HERO_FIRST_DELAY_MS: u32 = 1400;
pub const HERO_STEP_MS: u32 = 250;

// Active section highlight
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const SECTION_THRESHOLD: f64 = 0.4;

// Pip list rows
pub const ROW_SELECTOR: &str = ".pip-row";
pub const ROW_HOVER_SHADOW: &str = "0 0 0 1px rgba(255,212,59,0.06) inset";

// Konami code
pub const SECRET_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
    "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight",
    "b", "a",
];

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Git log
pub const GIT_LOG_SELECTOR: &str = ".git-log";
pub const GIT_ENTRY_SELECTOR: &str = ".git-entry";
pub const GIT_LOG_THRESHOLD: f64 = 0.1;
pub const GIT_ENTRY_STEP_MS: u32 = 120;
pub const GIT_ENTRY_BASE_MS: u32 = 200;
pub const GIT_ENTRY_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";
pub const GIT_ENTRY_HIDDEN_TRANSFORM: &str = "translateX(-12px)";
pub const GIT_ENTRY_RESTING_TRANSFORM: &str = "translateX(0)";

// Stat counters
pub const STATS_SELECTOR: &str = ".about-stats";
pub const STAT_VALUE_SELECTOR: &str = ".stat-val";
pub const STATS_THRESHOLD: f64 = 0.4;
pub const COUNTER_DURATION_MS: u32 = 1200;
pub const COUNTER_STEPS: u32 = 40;

// Typing effect
pub const COMMAND_SELECTOR: &str = "#h-line1 .t-cmd";
pub const TYPE_INTERVAL_MS: u32 = 80;

// Mount point for the overlay and injected styles
pub const MOUNT_ID: &str = "site-interactivity";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose binding logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Leading integer of a CSS length such as `"64px"`. Zero counts as unset.
pub fn parse_px(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let sign_len = value
        .chars()
        .next()
        .filter(|c| *c == '-' || *c == '+')
        .map_or(0, |_| 1);
    let digits = value[sign_len..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    value[..sign_len + digits]
        .parse::<i32>()
        .ok()
        .filter(|px| *px != 0)
}

/// Height to keep clear above anchor targets, read from `--nav-h` on the root element.
pub fn nav_offset(document: &Document) -> i32 {
    document
        .default_view()
        .zip(document.document_element())
        .and_then(|(window, root)| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value(NAV_HEIGHT_VAR).ok())
        .and_then(|value| parse_px(&value))
        .unwrap_or(NAV_HEIGHT_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_reads_leading_integer() {
        assert_eq!(parse_px("64px"), Some(64));
        assert_eq!(parse_px(" 72"), Some(72));
        assert_eq!(parse_px("56.5px"), Some(56));
        assert_eq!(parse_px("-8px"), Some(-8));
    }

    #[test]
    fn test_parse_px_rejects_non_numeric() {
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("-"), None);
    }

    #[test]
    fn test_parse_px_zero_falls_back() {
        assert_eq!(parse_px("0px"), None);
        assert_eq!(parse_px("0").unwrap_or(NAV_HEIGHT_FALLBACK), 60);
    }

    #[test]
    fn test_secret_sequence_shape() {
        assert_eq!(SECRET_SEQUENCE.len(), 10);
        assert_eq!(SECRET_SEQUENCE[8], "b");
        assert_eq!(SECRET_SEQUENCE[9], "a");
    }
}
