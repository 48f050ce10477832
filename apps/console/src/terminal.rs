//! Terminal rendition of the landing page's view ports.

use std::collections::HashMap;

use page_controller::{
    i18n::ENGLISH, Region, ResultsView, TextDirection, ViewPorts,
};

pub struct TerminalPorts {
    description: String,
    regions: HashMap<Region, String>,
    direction: TextDirection,
}

impl TerminalPorts {
    pub fn new(description: String) -> Self {
        let regions = Region::ALL
            .into_iter()
            .filter_map(|region| Some((region, ENGLISH.translation(region)?.to_string())))
            .collect();
        Self {
            description,
            regions,
            direction: TextDirection::Ltr,
        }
    }

    pub fn print_header(&self) {
        for region in [Region::HeroTitle, Region::HeroSubtitle, Region::FormTitle] {
            if let Some(text) = self.regions.get(&region) {
                println!("{}", self.align(text));
            }
        }
        println!();
    }

    fn align(&self, text: &str) -> String {
        match self.direction {
            TextDirection::Ltr => text.to_string(),
            TextDirection::Rtl => text
                .lines()
                .map(|line| format!("{line:>60}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl ViewPorts for TerminalPorts {
    fn project_description(&self) -> String {
        self.description.clone()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            eprintln!("...");
        }
    }

    fn set_results_visible(&mut self, _visible: bool) {}

    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::debug!(enabled, "submit control");
    }

    fn set_submit_label(&mut self, label: &str) {
        tracing::debug!(label, "submit label");
    }

    fn render_results(&mut self, view: &ResultsView) {
        match view {
            ResultsView::Cards(cards) => {
                for card in cards {
                    println!("{}", card.name);
                    println!("  {}", card.skills_line());
                    println!("  {}", card.description);
                    println!("  {}", card.rating_line());
                }
            }
            ResultsView::Notice(notice) => println!("{notice}"),
            ResultsView::Error(message) => eprintln!("{message}"),
        }
    }

    fn set_region_text(&mut self, region: Region, text: &str) -> bool {
        self.regions.insert(region, text.to_string());
        true
    }

    fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    fn scroll_to_matcher(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_english_regions() {
        let ports = TerminalPorts::new("x".into());
        assert_eq!(
            ports.regions.get(&Region::CtaButton).map(String::as_str),
            Some("Get Started")
        );
    }

    #[test]
    fn right_to_left_pads_each_line() {
        let mut ports = TerminalPorts::new(String::new());
        ports.set_direction(TextDirection::Rtl);
        let aligned = ports.align("a\nbc");
        let lines: Vec<_> = aligned.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.chars().count() == 60));
        assert!(lines[1].ends_with("bc"));
    }
}
