use rand::Rng;

use crate::catalog::Product;

#[cfg(test)]
use mockall::automock;

/// Upper bound of the uniform draw returned for pure exploration.
const EXPLORATION_CEILING: f32 = 0.2;
/// Weight of the normalized popularity in the exploitation branch.
const POPULARITY_WEIGHT: f32 = 0.25;

/// Source of uniform values from `[0, 1)`.
#[cfg_attr(test, automock)]
pub trait UnitSample {
    fn sample(&self) -> f32;
}

/// Samples from the thread-local random number generator.
pub struct UnitSampler;

impl UnitSample for UnitSampler {
    fn sample(&self) -> f32 {
        rand::thread_rng().gen()
    }
}

/// Contextual score of a candidate, the only stochastic sub-score.
///
/// With probability `exploration` the candidate gets a uniform draw from
/// `[0, 0.2)` regardless of its popularity; otherwise the score is the
/// normalized popularity weighted by 0.25. Freshly sampled on every
/// scoring pass.
pub(crate) fn contextual(
    sampler: &impl UnitSample,
    product: &Product,
    exploration: f32,
) -> f32 {
    if sampler.sample() < exploration {
        sampler.sample() * EXPLORATION_CEILING
    } else {
        product.popularity / 100. * POPULARITY_WEIGHT
    }
}
