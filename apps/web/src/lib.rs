//! Browser entry point for the talent-matching landing page.

mod dom;
mod events;
mod logging;
mod reveal;

use std::{cell::RefCell, rc::Rc};

use client_core::{HttpTalentMatcher, TalentMatcher};
use page_controller::{PageController, Settings};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::Document;

use crate::dom::{DomPorts, MountError};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount() {
                tracing::error!("failed to mount page controller: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount().map_err(JsValue::from)
}

fn mount() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let document: Document = window.document().ok_or(MountError::NoDocument)?;

    let origin = window.location().origin()?;
    let settings = Settings::default().with_base_url(origin);
    let endpoint = settings.endpoint_url()?;
    let matcher: Rc<dyn TalentMatcher> = Rc::new(HttpTalentMatcher::new(endpoint.clone()));

    let (ports, controls) = DomPorts::resolve(window, document.clone())?;
    let page = Rc::new(RefCell::new(PageController::new(ports, settings.messages)));

    events::wire(&controls, &page, &matcher)?;
    reveal::install(&document)?;

    tracing::info!(%endpoint, "page controller mounted");
    Ok(())
}
