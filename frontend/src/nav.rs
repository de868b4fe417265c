use log::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::{ANCHOR_LINK_SELECTOR, NAV_ID, NAV_SCROLL_THRESHOLD, SCROLLED_CLASS};
use crate::dom::{on_click, Page};
use crate::error::{DomResultExt, SetupError};

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Selector to resolve for an in-page link, or `None` when the click should
/// be left to the browser.
pub fn anchor_selector(href: Option<&str>) -> Option<&str> {
    match href {
        Some(href) if href.starts_with('#') && href != "#" => Some(href),
        _ => None,
    }
}

pub fn init(page: &Page) -> Result<(), SetupError> {
    let nav = page.document.get_element_by_id(NAV_ID);
    if nav.is_none() {
        debug!("No #{} on this page, scroll state is a no-op", NAV_ID);
    }

    if let Some(nav) = &nav {
        apply_scroll_state(nav, page.scroll_y())?;
    }

    let scrolling = page.clone();
    page.on_scroll(move || {
        if let Some(nav) = &nav {
            if let Err(err) = apply_scroll_state(nav, scrolling.scroll_y()) {
                warn!("{}", err);
            }
        }
    })?;

    let links = page.query_all(ANCHOR_LINK_SELECTOR)?;
    for link in &links {
        let document = page.document.clone();
        let clicked = link.clone();
        on_click(link, move |event| {
            let href = clicked.get_attribute("href");
            if scroll_to_anchor(&document, href.as_deref()) {
                event.prevent_default();
            }
        })?;
    }

    debug!("Navigation attached, {} anchor links", links.len());
    Ok(())
}

pub fn apply_scroll_state(nav: &Element, scroll_y: f64) -> Result<(), SetupError> {
    let classes = nav.class_list();
    if is_scrolled(scroll_y) {
        classes.add_1(SCROLLED_CLASS).context("mark nav scrolled")
    } else {
        classes.remove_1(SCROLLED_CLASS).context("unmark nav scrolled")
    }
}

/// Smooth-scrolls to the element `href` names. Returns whether it found one.
pub fn scroll_to_anchor(document: &Document, href: Option<&str>) -> bool {
    let Some(selector) = anchor_selector(href) else {
        return false;
    };
    // Invalid selectors throw; treat them as a missing target.
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(2400.0));
    }

    #[test]
    fn bare_hash_is_left_to_the_browser() {
        assert_eq!(anchor_selector(Some("#")), None);
        assert_eq!(anchor_selector(None), None);
    }

    #[test]
    fn fragment_links_resolve_to_selectors() {
        assert_eq!(anchor_selector(Some("#library")), Some("#library"));
        assert_eq!(anchor_selector(Some("/about#team")), None);
    }
}
