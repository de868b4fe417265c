//! Staggered fade-in for `[data-animate]` blocks as they enter the viewport.
//!
//! Siblings that scroll in together are revealed one after another, each
//! `REVEAL_STAGGER_MS` behind the previous one.

use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{
    ANIMATE_ATTR, ANIMATE_SELECTOR, FADE_IN_UP_CLASS, REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS,
    REVEAL_THRESHOLD, VISIBLE_CLASS,
};
use crate::dom::Page;
use crate::error::{DomResultExt, SetupError};

pub fn init(page: &Page) -> Result<(), SetupError> {
    let targets = page.query_all(ANIMATE_SELECTOR)?;
    if targets.is_empty() {
        debug!("Nothing marked {}, skipping reveal", ANIMATE_ATTR);
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let delay = stagger_delay_ms(stagger_index(&target));
                observer.unobserve(&target);
                reveal_after(target, delay);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!(
                    "IntersectionObserver unavailable ({}), revealing everything",
                    SetupError::dom("create observer", err)
                );
                return reveal_all(&targets);
            }
        };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }

    debug!("Observing {} elements for reveal", targets.len());
    Ok(())
}

/// Position of `target` among its parent's `data-animate` children.
///
/// Detached elements, and elements somehow missing from their parent's
/// children, count as the first.
pub fn stagger_index(target: &Element) -> u32 {
    let Some(parent) = target.parent_element() else {
        return 0;
    };
    let children = parent.children();
    let mut index = 0;
    for child in (0..children.length()).filter_map(|i| children.item(i)) {
        if !child.has_attribute(ANIMATE_ATTR) {
            continue;
        }
        if &child == target {
            return index;
        }
        index += 1;
    }
    0
}

pub fn stagger_delay_ms(index: u32) -> u32 {
    index.saturating_mul(REVEAL_STAGGER_MS)
}

pub fn reveal_after(target: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        if let Err(err) = reveal(&target) {
            warn!("{}", err);
        }
    })
    .forget();
}

/// Shows everything at once, for browsers without IntersectionObserver.
pub fn reveal_all(targets: &[Element]) -> Result<(), SetupError> {
    for target in targets {
        reveal(target)?;
    }
    Ok(())
}

pub fn reveal(target: &Element) -> Result<(), SetupError> {
    target
        .class_list()
        .add_2(VISIBLE_CLASS, FADE_IN_UP_CLASS)
        .context("reveal element")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_by_stagger_step() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 150);
        assert_eq!(stagger_delay_ms(4), 600);
    }

    #[test]
    fn delay_saturates_instead_of_wrapping() {
        assert_eq!(stagger_delay_ms(u32::MAX), u32::MAX);
    }
}
