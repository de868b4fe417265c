use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;

use crate::config::{HIDDEN_CLASS, INTRO_HIDE_DELAY_MS, INTRO_OVERLAY_ID};
use crate::dom::{on_click, Page};
use crate::error::{DomResultExt, SetupError};

pub fn init(page: &Page) -> Result<(), SetupError> {
    let Some(overlay) = page.document.get_element_by_id(INTRO_OVERLAY_ID) else {
        debug!("No #{} on this page, skipping intro", INTRO_OVERLAY_ID);
        return Ok(());
    };

    // Long enough to read the quote.
    let timed = overlay.clone();
    Timeout::new(INTRO_HIDE_DELAY_MS, move || {
        if let Err(err) = hide(&timed) {
            warn!("{}", err);
        }
    })
    .forget();

    let clicked = overlay.clone();
    on_click(&overlay, move |_| {
        if let Err(err) = hide(&clicked) {
            warn!("{}", err);
        }
    })?;

    debug!("Intro overlay hides in {}ms or on click", INTRO_HIDE_DELAY_MS);
    Ok(())
}

pub fn hide(overlay: &Element) -> Result<(), SetupError> {
    overlay.class_list().add_1(HIDDEN_CLASS).context("hide intro overlay")
}
