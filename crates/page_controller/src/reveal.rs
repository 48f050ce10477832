//! One-shot reveal of feature cards as they scroll into view.

/// Inline style values applied to a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const HIDDEN: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(20px)",
};

pub const SHOWN: RevealStyle = RevealStyle {
    opacity: "1",
    transform: "translateY(0)",
};

pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Tracks which observed elements have already been revealed.
///
/// Elements are addressed by their index in document order.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    revealed: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Records an intersection report. Returns `true` exactly once per
    /// element: the first time it is seen intersecting.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        let Some(revealed) = self.revealed.get_mut(index) else {
            return false;
        };
        if !is_intersecting || *revealed {
            return false;
        }
        *revealed = true;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn style_for(&self, index: usize) -> RevealStyle {
        if self.is_revealed(index) {
            SHOWN
        } else {
            HIDDEN
        }
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }
}
