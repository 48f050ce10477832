//! Feature-card reveal driven by an IntersectionObserver.

use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use page_controller::reveal::{RevealStyle, ScrollReveal, HIDDEN, SHOWN, TRANSITION};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom::FEATURE_CARD_SELECTOR;

const INDEX_ATTR: &str = "data-reveal-index";

fn apply_style(element: &HtmlElement, style: RevealStyle) -> Result<(), JsValue> {
    let css = element.style();
    css.set_property("opacity", style.opacity)?;
    css.set_property("transform", style.transform)?;
    Ok(())
}

fn reveal_index(element: &Element) -> Option<usize> {
    parse_index(element.get_attribute(INDEX_ATTR)?.as_str())
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Hides every feature card and observes it until its first intersection.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let cards = document.query_selector_all(FEATURE_CARD_SELECTOR)?;
    let tracker = Rc::new(RefCell::new(ScrollReveal::new(cards.length() as usize)));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let tracker = Rc::clone(&tracker);
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = reveal_index(&target) else {
                    continue;
                };
                if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    continue;
                }
                if let Ok(card) = target.clone().dyn_into::<HtmlElement>() {
                    if let Err(err) = apply_style(&card, SHOWN) {
                        tracing::warn!(index, "failed to reveal feature card: {err:?}");
                    }
                }
                observer.unobserve(&target);
            }
        }
    });
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        card.set_attribute(INDEX_ATTR, &index.to_string())?;
        apply_style(&card, HIDDEN)?;
        card.style().set_property("transition", TRANSITION)?;
        observer.observe(&card);
    }
    tracing::debug!(count = tracker.borrow().len(), "observing feature cards");
    Ok(())
}
