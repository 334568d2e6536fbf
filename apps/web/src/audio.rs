use std::cell::RefCell;
use std::rc::Rc;

use cs_catalog::audio::{AmbientAudio, AudioPlayer, ClickOutcome};
use cs_catalog::{AudioConfig, AudioError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AddEventListenerOptions, Document, HtmlAudioElement};

use crate::fetch::js_message;

pub struct HtmlAudioPlayer {
    element: HtmlAudioElement,
}

impl AudioPlayer for HtmlAudioPlayer {
    fn set_looping(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let promise = match self.element.play() {
            Ok(promise) => promise,
            Err(error) => {
                web_sys::console::error_2(&"Music playback failed:".into(), &error);
                return Err(AudioError::Playback(js_message(&error)));
            }
        };

        // Autoplay rejections arrive asynchronously; they only reach the console.
        spawn_local(async move {
            if let Err(error) = JsFuture::from(promise).await {
                web_sys::console::error_2(&"Music playback failed:".into(), &error);
            }
        });
        Ok(())
    }
}

/// Prepare the looping track and start it on the first click anywhere on the page.
pub fn install(document: &Document, config: &AudioConfig) -> Result<(), JsValue> {
    let element = HtmlAudioElement::new_with_src(&config.src)?;
    let audio = Rc::new(RefCell::new(AmbientAudio::prepare(
        HtmlAudioPlayer { element },
        config,
    )));

    let Some(body) = document.body() else {
        return Err(JsValue::from_str("document has no body"));
    };

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let start_music = Closure::once_into_js(move || {
        if audio.borrow_mut().on_click() == ClickOutcome::Ignored {
            web_sys::console::debug_1(&"music already started".into());
        }
    });

    body.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        start_music.unchecked_ref(),
        &options,
    )
}
