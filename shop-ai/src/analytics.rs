use std::fmt;

use serde::Serialize;

use crate::behavior::UserBehavior;

/// Summary counters over a user's behavior record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Analytics {
    /// number of distinct products viewed
    pub viewed: usize,
    /// number of products purchased
    pub purchased: usize,
    /// number of distinct categories recently viewed
    pub active_categories: usize,
}

impl Analytics {
    pub fn new(behavior: &UserBehavior) -> Self {
        Self {
            viewed: behavior.viewed().len(),
            purchased: behavior.purchased().len(),
            active_categories: behavior.recent_views().len(),
        }
    }
}

/// Confidence bucket of a total rank score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Confidence {
    VeryHigh,
    High,
    Medium,
    /// the score is carried mostly by the stochastic contextual term
    Exploratory,
}

impl Confidence {
    pub fn from_score(score: f32) -> Self {
        if score > 0.7 {
            Confidence::VeryHigh
        } else if score > 0.5 {
            Confidence::High
        } else if score > 0.3 {
            Confidence::Medium
        } else {
            Confidence::Exploratory
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::VeryHigh => "Very High",
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Exploratory => "Exploratory",
        };
        f.write_str(label)
    }
}
