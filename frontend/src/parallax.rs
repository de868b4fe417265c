use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{HERO_IMAGE_SELECTOR, PARALLAX_RATE, PARALLAX_SCALE};
use crate::dom::Page;
use crate::error::{DomResultExt, SetupError};

/// CSS transform for the hero image at a given scroll offset.
pub fn parallax_transform(scroll_y: f64) -> String {
    format!(
        "translateY({}px) scale({})",
        scroll_y * PARALLAX_RATE,
        PARALLAX_SCALE
    )
}

pub fn init(page: &Page) -> Result<(), SetupError> {
    let Some(hero) = page.query(HERO_IMAGE_SELECTOR) else {
        debug!("No hero image, skipping parallax");
        return Ok(());
    };
    let Ok(hero) = hero.dyn_into::<HtmlElement>() else {
        debug!("{} is not an html element, skipping parallax", HERO_IMAGE_SELECTOR);
        return Ok(());
    };

    let scrolling = page.clone();
    page.on_scroll(move || {
        if let Err(err) = apply_transform(&hero, scrolling.scroll_y()) {
            warn!("{}", err);
        }
    })?;

    debug!("Parallax attached to {}", HERO_IMAGE_SELECTOR);
    Ok(())
}

pub fn apply_transform(hero: &HtmlElement, scroll_y: f64) -> Result<(), SetupError> {
    hero.style()
        .set_property("transform", &parallax_transform(scroll_y))
        .context("set hero transform")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_at_top_of_page() {
        assert_eq!(parallax_transform(0.0), "translateY(0px) scale(1.1)");
    }

    #[test]
    fn offset_is_thirty_percent_of_scroll() {
        assert_eq!(parallax_transform(100.0), "translateY(30px) scale(1.1)");
        assert_eq!(parallax_transform(1000.0), "translateY(300px) scale(1.1)");
    }

    #[test]
    fn fractional_offsets_keep_float_digits() {
        assert_eq!(
            parallax_transform(9.0),
            "translateY(2.6999999999999997px) scale(1.1)"
        );
    }
}
