mod bandit;
mod config;
mod recommendation;
mod score;
mod system;

pub use self::{
    bandit::{UnitSample, UnitSampler},
    config::{Config, Error as ConfigError},
    recommendation::{ScoreComponents, ScoredRecommendation},
    system::{Engine, DEFAULT_LIMIT},
};

pub(crate) use self::score::ViewStats;
