use serde::Serialize;

use crate::catalog::Product;

/// The sub-scores of a candidate and their weighted combination.
///
/// Collaborative, content-based and contextual are bounded to [0, 1];
/// recency is either 0 or 0.5.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub collaborative: f32,
    pub content_based: f32,
    pub contextual: f32,
    /// weighted combination of the three sub-scores above
    pub neural: f32,
    pub recency: f32,
}

/// A catalog product annotated with its rank score.
///
/// Owned transiently by the caller and recomputed on every scoring pass;
/// never persisted.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScoredRecommendation<'a> {
    pub product: &'a Product,
    /// total rank score, combined sub-scores plus recency boost
    pub score: f32,
    pub components: ScoreComponents,
}
