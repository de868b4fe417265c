use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, MouseEvent, Window};

use crate::error::{DomResultExt, SetupError};

/// The window and document every behavior hangs off.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        Ok(Page { window, document })
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, SetupError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .context("query_selector_all")?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// Registers a passive window scroll listener for the life of the page.
    pub fn on_scroll<F>(&self, handler: F) -> Result<(), SetupError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .context("add scroll listener")?;
        callback.forget();
        Ok(())
    }
}

pub fn on_click<F>(target: &Element, handler: F) -> Result<(), SetupError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .context("add click listener")?;
    callback.forget();
    Ok(())
}
