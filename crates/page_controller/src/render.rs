//! Results panel content.
//!
//! Values are interpolated as text. Ports must never interpret them as markup.

use shared::domain::{Amount, TalentCandidate};

/// Shown in place of a rating or rate the backend left out.
pub const MISSING_AMOUNT: &str = "-";

/// Display-ready fields of one talent card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCard {
    pub name: String,
    pub skills: String,
    pub description: String,
    pub rating: String,
    pub hourly_rate: String,
}

impl CandidateCard {
    pub fn from_candidate(candidate: &TalentCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            skills: candidate.skills.to_string(),
            description: candidate.description.clone(),
            rating: display_amount(candidate.rating.as_ref()),
            hourly_rate: display_amount(candidate.hourly_rate.as_ref()),
        }
    }

    pub fn skills_line(&self) -> String {
        format!("Skills: {}", self.skills)
    }

    pub fn rating_line(&self) -> String {
        format!("⭐ {}/5 | ${}/hour", self.rating, self.hourly_rate)
    }
}

/// What the results panel shows once visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Cards(Vec<CandidateCard>),
    /// Successful response without matches.
    Notice(String),
    Error(String),
}

impl ResultsView {
    /// Cards in backend order, or `no_match` when there are none.
    pub fn from_talents(talents: &[TalentCandidate], no_match: &str) -> Self {
        if talents.is_empty() {
            return Self::Notice(no_match.to_string());
        }
        Self::Cards(talents.iter().map(CandidateCard::from_candidate).collect())
    }

    pub fn cards(&self) -> &[CandidateCard] {
        match self {
            ResultsView::Cards(cards) => cards,
            ResultsView::Notice(_) | ResultsView::Error(_) => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultsView::Error(_))
    }
}

fn display_amount(amount: Option<&Amount>) -> String {
    amount.map_or_else(|| MISSING_AMOUNT.to_string(), ToString::to_string)
}
