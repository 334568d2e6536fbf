mod audio;
mod dom;
mod fetch;

use std::cell::RefCell;
use std::rc::Rc;

use cs_catalog::{dispatch, ActionRegistry, CatalogConfig, DispatchOutcome, RequestTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::dom::{DomRegion, DomTriggers};
use crate::fetch::{js_message, BrowserSource};

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::error_1(&"No document to attach the catalog to".into());
        return;
    };

    if document.ready_state() == "complete" {
        start(&document);
        return;
    }

    let on_load = Closure::once_into_js(move || start(&document));
    if let Err(error) =
        window.add_event_listener_with_callback("load", on_load.unchecked_ref())
    {
        web_sys::console::error_2(&"Failed to wait for page load".into(), &error);
    }
}

fn start(document: &Document) {
    if let Err(error) = init(document) {
        web_sys::console::error_1(&format!("Catalog setup failed: {}", js_message(&error)).into());
    }
}

fn init(document: &Document) -> Result<(), JsValue> {
    let config = Rc::new(CatalogConfig::default());
    let region = Rc::new(RefCell::new(
        DomRegion::locate(document, &config.display_region_id)
            .map_err(|error| JsValue::from_str(&error.to_string()))?,
    ));
    let tracker = Rc::new(RequestTracker::new());
    let source = Rc::new(BrowserSource);

    let mut registry = ActionRegistry::standard();
    let mut triggers = DomTriggers::new(document.clone());
    {
        let config = Rc::clone(&config);
        registry
            .bind_all(&mut triggers, move |binding| {
                let config = Rc::clone(&config);
                let region = Rc::clone(&region);
                let tracker = Rc::clone(&tracker);
                let source = Rc::clone(&source);
                spawn_local(async move {
                    let outcome =
                        dispatch(&*source, &config, binding.category, &tracker, &*region).await;
                    match outcome {
                        DispatchOutcome::Failed(error) => web_sys::console::warn_1(
                            &format!("{} fetch failed: {error}", binding.endpoint).into(),
                        ),
                        DispatchOutcome::Stale => web_sys::console::debug_1(
                            &format!("{} response superseded", binding.endpoint).into(),
                        ),
                        DispatchOutcome::Rendered { .. } => {}
                    }
                });
            })
            .map_err(|error| JsValue::from_str(&error.to_string()))?;
    }

    audio::install(document, &config.audio)
}
