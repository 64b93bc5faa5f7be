//! Personalized product recommendations for a fixed demo catalog.
//!
//! The scoring pipeline is a pure function from a catalog and one user's
//! behavior to a ranked, annotated list of products: four sub-scores per
//! candidate, a weighted combination, and a recency boost. The only
//! stochastic component is the contextual score, driven by an injectable
//! random source. State ownership stays with the caller; nothing is
//! persisted.

mod analytics;
mod behavior;
mod catalog;
mod demo;
mod engine;
mod explanation;
mod utils;

pub use crate::{
    analytics::{Analytics, Confidence},
    behavior::{UserBehavior, UserProfile},
    catalog::{Catalog, Category, Product, ProductId},
    demo::{find_profile, CATALOG, USER_PROFILES},
    engine::{
        Config,
        ConfigError,
        Engine,
        ScoreComponents,
        ScoredRecommendation,
        UnitSample,
        UnitSampler,
        DEFAULT_LIMIT,
    },
    explanation::{explain, insight},
};
