//! Page behaviors for Alexandria Sanctuary.
//!
//! Each module wires one independent effect onto markup that already exists
//! in the static page; none of them know about each other.

pub mod ambient;
pub mod config;
pub mod dom;
pub mod error;
pub mod intro;
pub mod nav;
pub mod parallax;
pub mod reveal;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentReadyState};

pub use dom::Page;
pub use error::SetupError;

use error::DomResultExt;

const BANNER: &str = "%c Alexandria Sanctuary ";
const BANNER_STYLE: &str =
    "background: #c9a227; color: #0a1628; padding: 8px 16px; font-family: Georgia; font-size: 14px;";
const TAGLINE: &str = "Where wisdom meets mortality.";

/// Runs [`init`] now, or once the DOM has finished parsing.
pub fn run() -> Result<(), SetupError> {
    let page = Page::current()?;
    when_ready(&page.document, page.document.ready_state(), init)
}

/// Calls `f` right away unless `state` says the document is still loading,
/// in which case it waits for `DOMContentLoaded`.
pub fn when_ready(
    document: &Document,
    state: DocumentReadyState,
    f: fn(),
) -> Result<(), SetupError> {
    if state == DocumentReadyState::Loading {
        let callback = Closure::once_into_js(f);
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .context("wait for DOMContentLoaded")?;
        info!("Waiting for DOMContentLoaded");
    } else {
        f();
    }
    Ok(())
}

pub fn init() {
    let page = match Page::current() {
        Ok(page) => page,
        Err(err) => {
            error!("Cannot attach page behaviors: {}", err);
            return;
        }
    };

    let steps: [(&str, fn(&Page) -> Result<(), SetupError>); 5] = [
        ("intro", intro::init),
        ("navigation", nav::init),
        ("reveal", reveal::init),
        ("parallax", parallax::init),
        ("ambient sound", ambient::init),
    ];
    for (name, step) in steps {
        if let Err(err) = step(&page) {
            error!("Failed to set up {}: {}", name, err);
        }
    }

    info!("Page behaviors attached");
    web_sys::console::log_2(&JsValue::from_str(BANNER), &JsValue::from_str(BANNER_STYLE));
    web_sys::console::log_1(&JsValue::from_str(TAGLINE));
}
