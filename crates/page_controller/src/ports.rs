use crate::{
    i18n::{Region, TextDirection},
    render::ResultsView,
};

/// The page elements the controller reads and writes.
///
/// Implementations resolve their elements once, up front. The controller
/// owns its ports and never reaches for global page state.
pub trait ViewPorts {
    /// Current raw contents of the description field.
    fn project_description(&self) -> String;

    /// Blocking notification to the user.
    fn alert(&mut self, message: &str);

    fn set_loading_visible(&mut self, visible: bool);

    fn set_results_visible(&mut self, visible: bool);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn set_submit_label(&mut self, label: &str);

    /// Replaces everything inside the results list.
    fn render_results(&mut self, view: &ResultsView);

    /// Overwrites the text of `region`. Returns `false` if the page lacks it.
    fn set_region_text(&mut self, region: Region, text: &str) -> bool;

    fn set_direction(&mut self, direction: TextDirection);

    fn scroll_to_matcher(&mut self);
}
