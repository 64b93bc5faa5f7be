//! Human-readable explanations for scored recommendations.
//!
//! Pure functions over the scoring output; no randomness, so explanations
//! are stable for a given scoring pass.

use itertools::Itertools;

use crate::{
    behavior::UserBehavior,
    catalog::{Catalog, Product},
    engine::{ScoreComponents, ScoredRecommendation, ViewStats},
};

/// Collaborative sub-score above which the category clause may fire.
const CATEGORY_CLAUSE_THRESHOLD: f32 = 0.2;
/// Content-based sub-score above which the price clause may fire.
const PRICE_CLAUSE_THRESHOLD: f32 = 0.2;
/// Absolute price distance to the viewed average tolerated by the price
/// clause.
const PRICE_ALIGNMENT_WINDOW: f32 = 100.;
/// Rating from which a product counts as highly rated.
const HIGH_RATING_THRESHOLD: f32 = 4.5;
/// Contextual sub-score above which the trending clause fires.
const TRENDING_CLAUSE_THRESHOLD: f32 = 0.15;
/// Number of shared tags cited by the tag clause.
const MAX_CITED_TAGS: usize = 2;

/// Explains why a product was recommended.
///
/// Builds independent clauses in a fixed precedence order, each gated by
/// a threshold on one sub-score or a product attribute. Every clause that
/// fires ends up in the final text; if none fires a generic popularity
/// clause is emitted instead.
pub fn explain(
    catalog: &Catalog,
    behavior: &UserBehavior,
    product: &Product,
    components: &ScoreComponents,
) -> String {
    let stats = ViewStats::new(catalog, behavior);
    let mut clauses = Vec::new();

    if components.collaborative > CATEGORY_CLAUSE_THRESHOLD && stats.shares_category(product) {
        clauses.push(format!(
            "You've shown strong interest in {} products.",
            product.category.as_str().to_lowercase(),
        ));
    }

    if components.content_based > PRICE_CLAUSE_THRESHOLD
        && !stats.is_empty()
        && (product.price - stats.price_avg()).abs() < PRICE_ALIGNMENT_WINDOW
    {
        clauses.push(format!(
            "This aligns with your price preferences around ${}.",
            stats.price_avg().round(),
        ));
    }

    if product.rating >= HIGH_RATING_THRESHOLD {
        clauses.push(format!(
            "With a {}★ rating, this is highly-rated.",
            product.rating,
        ));
    }

    let mut cited_tags = stats.shared_tags(product);
    cited_tags.truncate(MAX_CITED_TAGS);
    if !cited_tags.is_empty() {
        clauses.push(format!(
            "Matches your interest in {}.",
            cited_tags.join(", "),
        ));
    }

    if components.contextual > TRENDING_CLAUSE_THRESHOLD {
        clauses.push("Currently trending among similar users.".into());
    }

    if clauses.is_empty() {
        clauses.push(format!("Popular in the {} category.", product.category));
    }

    clauses.join(" ")
}

/// Summarizes a recommendation set by its category spread.
pub fn insight(recommendations: &[ScoredRecommendation<'_>]) -> String {
    let categories = recommendations
        .iter()
        .map(|recommendation| recommendation.product.category)
        .unique()
        .collect::<Vec<_>>();

    if let [category] = categories.as_slice() {
        format!(
            "Strong affinity for {}. Specialized selection curated.",
            category.as_str().to_lowercase(),
        )
    } else {
        format!(
            "Diverse interests across {} categories. \
             Multi-dimensional recommendations using advanced neural algorithms.",
            categories.len(),
        )
    }
}
