use super::*;
use crate::{
    controller::events::KeyPress,
    i18n::{TextDirection, ARABIC, ENGLISH},
    render::CandidateCard,
};
use async_trait::async_trait;
use client_core::HttpTalentMatcher;
use shared::domain::{Amount, Skills};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

struct MemoryPorts {
    description: String,
    alerts: Vec<String>,
    loading_visible: bool,
    results_visible: bool,
    submit_enabled: bool,
    submit_label: String,
    results: Option<ResultsView>,
    present_regions: HashSet<Region>,
    region_text: HashMap<Region, String>,
    direction: TextDirection,
    scrolls: usize,
}

impl MemoryPorts {
    fn with_description(description: &str) -> Self {
        Self {
            description: description.to_string(),
            alerts: Vec::new(),
            loading_visible: false,
            results_visible: false,
            submit_enabled: true,
            submit_label: "Find Talent".to_string(),
            results: None,
            present_regions: Region::ALL.into_iter().collect(),
            region_text: Region::ALL
                .into_iter()
                .filter_map(|region| Some((region, ENGLISH.translation(region)?.to_string())))
                .collect(),
            direction: TextDirection::Ltr,
            scrolls: 0,
        }
    }

    fn without_region(mut self, region: Region) -> Self {
        self.present_regions.remove(&region);
        self.region_text.remove(&region);
        self
    }
}

impl ViewPorts for MemoryPorts {
    fn project_description(&self) -> String {
        self.description.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }

    fn render_results(&mut self, view: &ResultsView) {
        self.results = Some(view.clone());
    }

    fn set_region_text(&mut self, region: Region, text: &str) -> bool {
        if !self.present_regions.contains(&region) {
            return false;
        }
        self.region_text.insert(region, text.to_string());
        true
    }

    fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    fn scroll_to_matcher(&mut self) {
        self.scrolls += 1;
    }
}

enum Reply {
    Talents(Vec<TalentCandidate>),
    Status(u16),
    Malformed,
}

struct ScriptedMatcher {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl ScriptedMatcher {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl TalentMatcher for ScriptedMatcher {
    async fn match_talent(
        &self,
        project_description: &str,
    ) -> Result<Vec<TalentCandidate>, MatchError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(project_description.to_string());
        match &self.reply {
            Reply::Talents(talents) => Ok(talents.clone()),
            Reply::Status(status) => Err(MatchError::Status { status: *status }),
            Reply::Malformed => Err(MatchError::MalformedBody(
                serde_json::from_str::<serde_json::Value>("{not json")
                    .expect_err("invalid json"),
            )),
        }
    }
}

fn talent(name: &str, rating: f64, hourly_rate: f64) -> TalentCandidate {
    TalentCandidate {
        name: name.to_string(),
        skills: Skills::Text("React, Node.js".to_string()),
        description: format!("{name} builds web platforms"),
        rating: Some(rating.into()),
        hourly_rate: Some(hourly_rate.into()),
    }
}

fn controller(description: &str) -> PageController<MemoryPorts> {
    PageController::new(MemoryPorts::with_description(description), Messages::default())
}

fn assert_submit_restored(ports: &MemoryPorts) {
    assert!(ports.submit_enabled);
    assert_eq!(ports.submit_label, "Find Talent");
    assert!(!ports.loading_visible);
}

#[tokio::test]
async fn blank_description_alerts_without_requesting() {
    for blank in ["", "   ", "\n\t  \n"] {
        let matcher = ScriptedMatcher::new(Reply::Talents(vec![talent("unused", 5.0, 1.0)]));
        let mut page = controller(blank);

        let result = page.submit(&matcher).await;

        assert_eq!(result, Err(SubmitRejected::EmptyDescription));
        assert!(matcher.requests().is_empty());
        assert_eq!(page.state(), &UiState::Idle);
        let ports = page.ports();
        assert_eq!(ports.alerts, ["Please describe your project first!"]);
        assert!(ports.results.is_none());
        assert!(!ports.results_visible);
        assert_submit_restored(ports);
    }
}

#[tokio::test]
async fn sends_trimmed_description() {
    let matcher = ScriptedMatcher::new(Reply::Talents(Vec::new()));
    let mut page = controller("  mobile app for a pharmacy chain \n");

    page.submit(&matcher).await.expect("accepted");

    assert_eq!(matcher.requests(), ["mobile app for a pharmacy chain"]);
}

#[test]
fn loading_disables_submit_and_hides_previous_results() {
    let mut page = controller("logo design");
    page.ports_mut().results_visible = true;

    let submission = page.begin_submission().expect("accepted");

    assert_eq!(
        page.state(),
        &UiState::Loading {
            token: submission.token()
        }
    );
    let ports = page.ports();
    assert!(ports.loading_visible);
    assert!(!ports.results_visible);
    assert!(!ports.submit_enabled);
    assert_eq!(ports.submit_label, "Finding...");
}

#[tokio::test]
async fn renders_one_card_per_talent_with_exact_numbers() {
    let talents = vec![
        talent("Zainab", 4.85, 42.5),
        talent("Karim", 5.0, 60.0),
        talent("Rana", 3.2, 17.75),
    ];
    let matcher = ScriptedMatcher::new(Reply::Talents(talents.clone()));
    let mut page = controller("e-commerce site");

    page.submit(&matcher).await.expect("accepted");

    let ports = page.ports();
    let view = ports.results.as_ref().expect("results rendered");
    let cards = view.cards();
    assert_eq!(cards.len(), talents.len());
    for (card, talent) in cards.iter().zip(&talents) {
        assert_eq!(card, &CandidateCard::from_candidate(talent));
        assert_eq!(
            card.rating.parse::<f64>().ok(),
            talent.rating.as_ref().and_then(Amount::as_f64)
        );
        assert_eq!(
            card.hourly_rate.parse::<f64>().ok(),
            talent.hourly_rate.as_ref().and_then(Amount::as_f64)
        );
    }
    assert_eq!(cards[1].rating, "5");
    assert_eq!(cards[2].hourly_rate, "17.75");
    assert!(ports.results_visible);
    assert_submit_restored(ports);
}

#[tokio::test]
async fn empty_talent_list_shows_no_match_notice() {
    let matcher = ScriptedMatcher::new(Reply::Talents(Vec::new()));
    let mut page = controller("translator for legal documents");

    page.submit(&matcher).await.expect("accepted");

    let ports = page.ports();
    assert_eq!(
        ports.results,
        Some(ResultsView::Notice(
            "No matching professionals found. Please try a different description.".to_string()
        ))
    );
    assert!(ports.results.as_ref().is_some_and(|view| view.cards().is_empty()));
    assert_submit_restored(ports);
}

#[tokio::test]
async fn failed_requests_show_fixed_error_and_restore_submit() {
    for reply in [Reply::Status(500), Reply::Status(404), Reply::Malformed] {
        let matcher = ScriptedMatcher::new(reply);
        let mut page = controller("data pipeline");

        page.submit(&matcher).await.expect("accepted");

        let expected = "Sorry, we encountered an error while finding talent. Please try again.";
        assert_eq!(
            page.state(),
            &UiState::ErrorShown {
                message: expected.to_string()
            }
        );
        let ports = page.ports();
        assert_eq!(ports.results, Some(ResultsView::Error(expected.to_string())));
        assert!(ports.results_visible);
        assert_submit_restored(ports);
    }
}

#[tokio::test]
async fn network_rejection_shows_fixed_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let endpoint = url::Url::parse(&format!("http://{addr}/api/match-talent")).expect("url");
    let matcher = HttpTalentMatcher::new(endpoint);
    let mut page = controller("video editing");

    page.submit(&matcher).await.expect("accepted");

    let ports = page.ports();
    assert!(ports.results.as_ref().is_some_and(ResultsView::is_error));
    assert_submit_restored(ports);
}

#[test]
fn later_submission_wins_when_earlier_resolves_last() {
    let mut page = controller("double click");
    let first = page.begin_submission().expect("first");
    let second = page.begin_submission().expect("second");
    assert!(second.token() > first.token());

    page.complete_submission(CompletedSubmission {
        token: second.token(),
        outcome: Ok(vec![talent("Latest", 4.0, 30.0)]),
    });
    page.complete_submission(CompletedSubmission {
        token: first.token(),
        outcome: Ok(vec![talent("Stale", 2.0, 5.0), talent("Stale 2", 2.0, 5.0)]),
    });

    let cards = page.ports().results.as_ref().expect("results").cards().to_vec();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Latest");
}

#[test]
fn stale_completion_keeps_latest_submission_loading() {
    let mut page = controller("double click");
    let first = page.begin_submission().expect("first");
    let second = page.begin_submission().expect("second");

    page.complete_submission(CompletedSubmission {
        token: first.token(),
        outcome: Err(MatchError::Status { status: 502 }),
    });

    assert_eq!(
        page.state(),
        &UiState::Loading {
            token: second.token()
        }
    );
    assert!(page.ports().results.is_none());
    assert!(!page.ports().submit_enabled);

    page.complete_submission(CompletedSubmission {
        token: second.token(),
        outcome: Ok(Vec::new()),
    });
    assert_submit_restored(page.ports());
}

#[tokio::test]
async fn overlapping_dispatches_apply_only_latest() {
    let matcher = ScriptedMatcher::new(Reply::Talents(vec![talent("Huda", 4.4, 22.0)]));
    let mut page = controller("translation app");
    let first = page.begin_submission().expect("first");
    let second = page.begin_submission().expect("second");
    let second_token = second.token();

    let (first_done, second_done) =
        futures::join!(first.dispatch(&matcher), second.dispatch(&matcher));
    page.complete_submission(second_done);
    page.complete_submission(first_done);

    assert_eq!(matcher.requests().len(), 2);
    assert!(matches!(page.state(), UiState::ResultsShown(_)));
    assert_ne!(
        page.state(),
        &UiState::Loading {
            token: second_token
        }
    );
    assert_submit_restored(page.ports());
}

#[tokio::test]
async fn keyboard_shortcut_runs_the_same_flow_as_click() {
    let talents = vec![talent("Mustafa", 4.6, 35.0)];
    let matcher = ScriptedMatcher::new(Reply::Talents(talents));
    let mut clicked = controller("  restaurant booking system ");
    let mut keyed = controller("  restaurant booking system ");

    let click = clicked.on_submit_click().expect("click submits");
    assert_eq!(clicked.ports().submit_label, "Finding...");
    let ctrl = keyed
        .on_description_key(&KeyPress::new("Enter").with_ctrl())
        .expect("ctrl+enter submits");
    assert_eq!(keyed.state(), clicked.state());
    assert_eq!(keyed.ports().submit_label, "Finding...");
    assert!(!keyed.ports().submit_enabled);
    assert_eq!(ctrl.description(), click.description());

    let click_done = click.dispatch(&matcher).await;
    let ctrl_done = ctrl.dispatch(&matcher).await;
    clicked.complete_submission(click_done);
    keyed.complete_submission(ctrl_done);

    assert_eq!(
        matcher.requests(),
        ["restaurant booking system", "restaurant booking system"]
    );
    assert_eq!(keyed.state(), clicked.state());
    assert_eq!(keyed.ports().results, clicked.ports().results);
    assert_submit_restored(keyed.ports());
}

#[tokio::test]
async fn cmd_enter_submits_like_ctrl_enter() {
    let matcher = ScriptedMatcher::new(Reply::Talents(Vec::new()));
    let mut page = controller("podcast editing");

    let submission = page
        .on_description_key(&KeyPress::new("Enter").with_meta())
        .expect("cmd+enter submits");
    let done = submission.dispatch(&matcher).await;
    page.complete_submission(done);

    assert_eq!(matcher.requests(), ["podcast editing"]);
    assert!(matches!(page.state(), UiState::ResultsShown(_)));
}

#[test]
fn other_keys_in_description_do_nothing() {
    for description in ["some text", ""] {
        let mut page = controller(description);

        for press in [
            KeyPress::new("Enter"),
            KeyPress::new("a").with_ctrl(),
            KeyPress::new("Tab").with_meta(),
        ] {
            assert!(page.on_description_key(&press).is_none());
        }

        assert_eq!(page.state(), &UiState::Idle);
        let ports = page.ports();
        assert!(ports.alerts.is_empty());
        assert!(!ports.loading_visible);
        assert_submit_restored(ports);
    }
}

#[test]
fn shortcut_with_blank_description_alerts_like_click() {
    let mut keyed = controller("   ");
    let mut clicked = controller("   ");

    assert!(keyed
        .on_description_key(&KeyPress::new("Enter").with_ctrl())
        .is_none());
    assert!(clicked.on_submit_click().is_none());

    assert_eq!(keyed.ports().alerts, clicked.ports().alerts);
    assert_eq!(keyed.ports().alerts, ["Please describe your project first!"]);
    assert_eq!(keyed.state(), &UiState::Idle);
}

#[test]
fn arabic_translates_regions_and_sets_rtl() {
    let mut page = controller("");

    assert!(page.select_language("ar"));

    assert_eq!(page.language(), Language::Ar);
    let ports = page.ports();
    assert_eq!(ports.direction, TextDirection::Rtl);
    for region in Region::ALL {
        assert_eq!(
            ports.region_text.get(&region).map(String::as_str),
            ARABIC.translation(region)
        );
    }
}

#[test]
fn english_reverses_arabic() {
    let mut page = controller("");
    page.select_language("ar");

    assert!(page.select_language("en"));

    let ports = page.ports();
    assert_eq!(ports.direction, TextDirection::Ltr);
    assert_eq!(
        ports.region_text.get(&Region::HeroTitle).map(String::as_str),
        Some("Freelance Talent")
    );
    assert_eq!(
        ports.region_text.get(&Region::FormSubtitle).map(String::as_str),
        Some("Let our AI find the right professional\nfor you.")
    );
}

#[test]
fn unknown_language_changes_nothing() {
    let mut page = controller("");
    page.select_language("ar");
    let before = page.ports().region_text.clone();

    assert!(!page.select_language("ku"));

    assert_eq!(page.language(), Language::Ar);
    assert_eq!(page.ports().direction, TextDirection::Rtl);
    assert_eq!(page.ports().region_text, before);
}

#[test]
fn missing_region_is_skipped_silently() {
    let ports = MemoryPorts::with_description("").without_region(Region::CtaButton);
    let mut page = PageController::new(ports, Messages::default());

    assert!(page.select_language("ar"));

    let ports = page.ports();
    assert!(!ports.region_text.contains_key(&Region::CtaButton));
    assert_eq!(
        ports.region_text.get(&Region::SectionTitle).map(String::as_str),
        Some("أخبرنا بما تحتاجه")
    );
    assert_eq!(ports.direction, TextDirection::Rtl);
}

#[test]
fn call_to_action_scrolls_to_matcher() {
    let mut page = controller("");
    page.scroll_to_matcher();
    assert_eq!(page.ports().scrolls, 1);
}
