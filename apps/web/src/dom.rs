//! Page elements, resolved once at startup.

use std::collections::HashMap;

use page_controller::{
    CandidateCard, Region, ResultsView, TextDirection, ViewPorts,
};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

pub const DESCRIPTION_ID: &str = "projectDescription";
pub const LOADING_ID: &str = "loading";
pub const RESULTS_ID: &str = "results";
pub const TALENT_LIST_ID: &str = "talentList";
pub const LANGUAGE_ID: &str = "language";
pub const MATCHER_ID: &str = "matcher";
pub const SUBMIT_SELECTOR: &str = ".submit-button";
pub const FEATURE_CARD_SELECTOR: &str = ".feature-card";
const ERROR_COLOR: &str = "#ef4444";

pub fn region_selector(region: Region) -> &'static str {
    match region {
        Region::HeroTitle => ".hero-title",
        Region::HeroSubtitle => ".hero-subtitle",
        Region::CtaButton => ".cta-button",
        Region::SectionTitle => ".section-title",
        Region::FormTitle => ".project-form h3",
        Region::FormSubtitle => ".form-subtitle",
    }
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window or document available")]
    NoDocument,
    #[error("page is missing required element '{0}'")]
    MissingElement(&'static str),
    #[error("element '{0}' has an unexpected type")]
    WrongElementType(&'static str),
    #[error("invalid page settings: {0}")]
    Settings(#[from] page_controller::SettingsError),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MountError> for JsValue {
    fn from(value: MountError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

fn required<T: JsCast>(element: Option<Element>, name: &'static str) -> Result<T, MountError> {
    element
        .ok_or(MountError::MissingElement(name))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongElementType(name))
}

/// Handles the event wiring needs in addition to the ports.
pub struct Controls {
    pub description: HtmlTextAreaElement,
    pub submit: HtmlButtonElement,
    pub language: Option<HtmlSelectElement>,
    pub cta: Option<Element>,
}

pub struct DomPorts {
    window: Window,
    document: Document,
    body: HtmlElement,
    description: HtmlTextAreaElement,
    loading: HtmlElement,
    results: HtmlElement,
    talent_list: Element,
    submit: HtmlButtonElement,
    matcher: Option<Element>,
    regions: HashMap<Region, Element>,
}

impl DomPorts {
    pub fn resolve(window: Window, document: Document) -> Result<(Self, Controls), MountError> {
        let description: HtmlTextAreaElement =
            required(document.get_element_by_id(DESCRIPTION_ID), DESCRIPTION_ID)?;
        let submit: HtmlButtonElement =
            required(document.query_selector(SUBMIT_SELECTOR)?, SUBMIT_SELECTOR)?;
        let language = document
            .get_element_by_id(LANGUAGE_ID)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok());
        let cta = document.query_selector(region_selector(Region::CtaButton))?;

        let mut regions = HashMap::new();
        for region in Region::ALL {
            if let Some(element) = document.query_selector(region_selector(region))? {
                regions.insert(region, element);
            }
        }

        let ports = Self {
            body: document.body().ok_or(MountError::MissingElement("body"))?,
            loading: required(document.get_element_by_id(LOADING_ID), LOADING_ID)?,
            results: required(document.get_element_by_id(RESULTS_ID), RESULTS_ID)?,
            talent_list: document
                .get_element_by_id(TALENT_LIST_ID)
                .ok_or(MountError::MissingElement(TALENT_LIST_ID))?,
            matcher: document.get_element_by_id(MATCHER_ID),
            description: description.clone(),
            submit: submit.clone(),
            regions,
            window,
            document,
        };
        let controls = Controls {
            description,
            submit,
            language,
            cta,
        };
        Ok((ports, controls))
    }

    fn div(&self, class: &str, text: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.set_class_name(class);
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn card(&self, card: &CandidateCard) -> Result<Element, JsValue> {
        let root = self.div("talent-card", "")?;
        root.append_child(&self.div("talent-name", &card.name)?.into())?;
        root.append_child(&self.div("talent-skills", &card.skills_line())?.into())?;
        root.append_child(&self.div("talent-description", &card.description)?.into())?;
        root.append_child(&self.div("talent-rating", &card.rating_line())?.into())?;
        Ok(root)
    }

    fn paragraph(&self, text: &str, color: Option<&str>) -> Result<Element, JsValue> {
        let p: HtmlElement = self.document.create_element("p")?.unchecked_into();
        p.set_text_content(Some(text));
        if let Some(color) = color {
            p.style().set_property("color", color)?;
        }
        Ok(p.into())
    }

    fn fill_results(&self, view: &ResultsView) -> Result<(), JsValue> {
        self.talent_list.set_text_content(None);
        match view {
            ResultsView::Cards(cards) => {
                for card in cards {
                    self.talent_list.append_child(&self.card(card)?.into())?;
                }
            }
            ResultsView::Notice(notice) => {
                self.talent_list
                    .append_child(&self.paragraph(notice, None)?.into())?;
            }
            ResultsView::Error(message) => {
                self.talent_list
                    .append_child(&self.paragraph(message, Some(ERROR_COLOR))?.into())?;
            }
        }
        Ok(())
    }

    fn write_lines(&self, element: &Element, text: &str) -> Result<(), JsValue> {
        element.set_text_content(None);
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                element.append_child(&self.document.create_element("br")?.into())?;
            }
            element.append_child(&self.document.create_text_node(line))?;
        }
        Ok(())
    }
}

fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", value) {
        tracing::warn!("failed to toggle display: {err:?}");
    }
}

impl ViewPorts for DomPorts {
    fn project_description(&self) -> String {
        self.description.value()
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!("alert failed: {err:?}");
        }
    }

    fn set_loading_visible(&mut self, visible: bool) {
        set_display(&self.loading, visible);
    }

    fn set_results_visible(&mut self, visible: bool) {
        set_display(&self.results, visible);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit.set_text_content(Some(label));
    }

    fn render_results(&mut self, view: &ResultsView) {
        if let Err(err) = self.fill_results(view) {
            tracing::error!("failed to render results: {err:?}");
        }
    }

    fn set_region_text(&mut self, region: Region, text: &str) -> bool {
        let Some(element) = self.regions.get(&region) else {
            return false;
        };
        if let Err(err) = self.write_lines(element, text) {
            tracing::warn!(region = region.key(), "failed to write region text: {err:?}");
        }
        true
    }

    fn set_direction(&mut self, direction: TextDirection) {
        if let Err(err) = self
            .body
            .style()
            .set_property("direction", direction.as_css())
        {
            tracing::warn!("failed to set text direction: {err:?}");
        }
    }

    fn scroll_to_matcher(&mut self) {
        let Some(matcher) = &self.matcher else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        matcher.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
