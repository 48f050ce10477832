//! Wires page events to the controller.

use std::{cell::RefCell, rc::Rc};

use client_core::TalentMatcher;
use page_controller::{KeyPress, PageController, Submission};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::dom::{Controls, DomPorts};

pub type SharedPage = Rc<RefCell<PageController<DomPorts>>>;

/// Runs an accepted submission. The controller is not borrowed while the request runs.
fn spawn_submission(
    page: &SharedPage,
    matcher: &Rc<dyn TalentMatcher>,
    submission: Option<Submission>,
) {
    let Some(submission) = submission else {
        return;
    };
    let page = Rc::clone(page);
    let matcher = Rc::clone(matcher);
    spawn_local(async move {
        let completed = submission.dispatch(matcher.as_ref()).await;
        page.borrow_mut().complete_submission(completed);
    });
}

fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

pub fn wire(
    controls: &Controls,
    page: &SharedPage,
    matcher: &Rc<dyn TalentMatcher>,
) -> Result<(), JsValue> {
    {
        let page = Rc::clone(page);
        let matcher = Rc::clone(matcher);
        listen::<Event, _>(&controls.submit, "click", move |_| {
            let submission = page.borrow_mut().on_submit_click();
            spawn_submission(&page, &matcher, submission);
        })?;
    }

    {
        let page = Rc::clone(page);
        let matcher = Rc::clone(matcher);
        listen::<KeyboardEvent, _>(&controls.description, "keydown", move |event| {
            let press = KeyPress {
                key: event.key(),
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };
            if press.is_submit_shortcut() {
                event.prevent_default();
            }
            let submission = page.borrow_mut().on_description_key(&press);
            spawn_submission(&page, &matcher, submission);
        })?;
    }

    if let Some(selector) = &controls.language {
        let page = Rc::clone(page);
        let select = selector.clone();
        listen::<Event, _>(selector, "change", move |_| {
            page.borrow_mut().select_language(&select.value());
        })?;
    }

    if let Some(cta) = &controls.cta {
        let page = Rc::clone(page);
        listen::<Event, _>(cta, "click", move |_| {
            page.borrow_mut().scroll_to_matcher();
        })?;
    }

    Ok(())
}
