use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlAudioElement};

use crate::config::{AMBIENT_AUDIO_ID, AMBIENT_TOGGLE_SELECTOR};
use crate::dom::{on_click, Page};
use crate::error::{DomResultExt, SetupError};

/// Optional background audio, only ever started by a click.
pub struct AmbientSound {
    audio: Option<HtmlAudioElement>,
    is_playing: bool,
}

impl AmbientSound {
    pub fn new(audio: Option<HtmlAudioElement>) -> Self {
        AmbientSound {
            audio,
            is_playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Flips playback and returns the new state. Without an audio element
    /// nothing changes.
    pub fn toggle(&mut self) -> Result<bool, SetupError> {
        let Some(audio) = &self.audio else {
            return Ok(self.is_playing);
        };

        if self.is_playing {
            audio.pause().context("pause ambient sound")?;
        } else {
            let promise = audio.play().context("play ambient sound")?;
            spawn_local(async move {
                // Autoplay policies reject this outside a user gesture.
                if let Err(err) = JsFuture::from(promise).await {
                    debug!("Ambient sound refused to play: {:?}", err);
                }
            });
        }
        self.is_playing = !self.is_playing;
        Ok(self.is_playing)
    }
}

pub fn init(page: &Page) -> Result<(), SetupError> {
    let audio = page
        .document
        .get_element_by_id(AMBIENT_AUDIO_ID)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
    if audio.is_none() {
        debug!("No ambient audio on this page");
        return Ok(());
    }

    let sound = Rc::new(RefCell::new(AmbientSound::new(audio)));
    let toggles = Rc::new(page.query_all(AMBIENT_TOGGLE_SELECTOR)?);
    for toggle in toggles.iter() {
        let sound = sound.clone();
        let toggles = toggles.clone();
        on_click(toggle, move |_| {
            let result = sound.borrow_mut().toggle();
            match result {
                Ok(playing) => mark_pressed(&toggles, playing),
                Err(err) => warn!("{}", err),
            }
        })?;
    }

    debug!("Ambient sound ready, {} toggles", toggles.len());
    Ok(())
}

fn mark_pressed(toggles: &[Element], playing: bool) {
    let value = if playing { "true" } else { "false" };
    for toggle in toggles {
        if let Err(err) = toggle
            .set_attribute("aria-pressed", value)
            .context("mark ambient toggle")
        {
            warn!("{}", err);
        }
    }
}
