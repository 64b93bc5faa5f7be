use crate::{
    behavior::UserBehavior,
    catalog::{Catalog, Product},
    engine::{
        bandit::{self, UnitSample, UnitSampler},
        config::Config,
        recommendation::{ScoreComponents, ScoredRecommendation},
        score::{self, ViewStats},
    },
    utils::nan_safe_f32_cmp_desc,
};

/// Default number of recommendations returned to the caller.
pub const DEFAULT_LIMIT: usize = 5;

/// Weight of the collaborative sub-score in the combined score.
const COLLABORATIVE_WEIGHT: f32 = 0.4;
/// Weight of the content-based sub-score in the combined score.
const CONTENT_WEIGHT: f32 = 0.35;
/// Weight of the contextual sub-score in the combined score.
const CONTEXTUAL_WEIGHT: f32 = 0.25;

/// The recommendation engine.
///
/// Stateless between scoring passes; behavior is owned by the caller and
/// the catalog is read-only, so an instance can be shared freely.
pub struct Engine<S = UnitSampler> {
    config: Config,
    sampler: S,
}

impl Engine {
    /// Creates an engine drawing from the thread-local random number
    /// generator.
    pub fn new(config: Config) -> Self {
        Self::with_sampler(config, UnitSampler)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S> Engine<S>
where
    S: UnitSample,
{
    /// Creates an engine with an injected random source.
    pub fn with_sampler(config: Config, sampler: S) -> Self {
        Self { config, sampler }
    }

    /// Ranks all unpurchased catalog products for the given behavior.
    ///
    /// Purchased products are excluded regardless of their score.
    /// Candidates with a total score of 0 are dropped, the rest is sorted
    /// descending by total score (ties keep catalog order) and truncated
    /// to `limit`. All scores are freshly computed on every call, so two
    /// passes over unchanged behavior may differ in the contextual term.
    pub fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        behavior: &UserBehavior,
        limit: usize,
    ) -> Vec<ScoredRecommendation<'a>> {
        let stats = ViewStats::new(catalog, behavior);

        let mut scored = catalog
            .iter()
            .filter(|product| !behavior.has_purchased(product.id))
            .map(|product| self.score(product, behavior, &stats))
            .filter(|recommendation| recommendation.score > 0.)
            .collect::<Vec<_>>();

        scored.sort_by(|a, b| nan_safe_f32_cmp_desc(&a.score, &b.score));
        scored.truncate(limit);
        scored
    }

    fn score<'a>(
        &self,
        product: &'a Product,
        behavior: &UserBehavior,
        stats: &ViewStats<'_>,
    ) -> ScoredRecommendation<'a> {
        let collaborative = score::collaborative(stats, product);
        let content_based = score::content_based(stats, product);
        let contextual = bandit::contextual(&self.sampler, product, self.config.exploration());

        let neural = COLLABORATIVE_WEIGHT * collaborative
            + CONTENT_WEIGHT * content_based
            + CONTEXTUAL_WEIGHT * contextual;
        let recency = score::recency_boost(behavior, product);

        ScoredRecommendation {
            product,
            score: neural + recency,
            components: ScoreComponents {
                collaborative,
                content_based,
                contextual,
                neural,
                recency,
            },
        }
    }
}
