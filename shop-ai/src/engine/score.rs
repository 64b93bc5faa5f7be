use std::collections::HashSet;

use crate::{
    behavior::UserBehavior,
    catalog::{Catalog, Category, Product},
};

/// Boost for sharing a category with a viewed product.
const CATEGORY_MATCH_BOOST: f32 = 0.5;
/// Boost per tag shared with the viewed products.
const TAG_MATCH_BOOST: f32 = 0.2;
/// Cap on the accumulated tag boost.
const TAG_MATCH_CAP: f32 = 0.4;
/// Base of the price affinity term.
const PRICE_AFFINITY_CAP: f32 = 0.4;
/// Slope of the price affinity penalty per relative price deviation.
const PRICE_AFFINITY_SLOPE: f32 = 0.5;
/// Tolerated rating shortfall against the viewed average.
const RATING_TOLERANCE: f32 = 0.2;
/// Boost for matching the rating preference.
const RATING_MATCH_BOOST: f32 = 0.3;
/// Boost for candidates in a recently viewed category.
const RECENCY_BOOST: f32 = 0.5;

/// Aggregates over the products a user has viewed, computed once per
/// scoring pass.
///
/// Ids unknown to the catalog are dropped from every aggregate.
pub(crate) struct ViewStats<'a> {
    categories: HashSet<Category>,
    tags: HashSet<&'a str>,
    price_avg: f32,
    rating_avg: f32,
    len: usize,
}

impl<'a> ViewStats<'a> {
    pub(crate) fn new(catalog: &'a Catalog, behavior: &UserBehavior) -> Self {
        let products = behavior.viewed_products(catalog);
        let len = products.len();

        let categories = products.iter().map(|product| product.category).collect();
        let tags = products
            .iter()
            .flat_map(|product| product.tags.iter().map(String::as_str))
            .collect();

        let (price_sum, rating_sum) = products.iter().fold((0., 0.), |(price, rating), product| {
            (price + product.price, rating + product.rating)
        });
        let (price_avg, rating_avg) = if len == 0 {
            (0., 0.)
        } else {
            (price_sum / len as f32, rating_sum / len as f32)
        };

        Self {
            categories,
            tags,
            price_avg,
            rating_avg,
            len,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mean price over the viewed products, 0 if nothing was viewed.
    pub(crate) fn price_avg(&self) -> f32 {
        self.price_avg
    }

    pub(crate) fn shares_category(&self, product: &Product) -> bool {
        self.categories.contains(&product.category)
    }

    /// The candidate's tags also found on viewed products, in candidate
    /// tag order.
    pub(crate) fn shared_tags<'p>(&self, product: &'p Product) -> Vec<&'p str> {
        product
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| self.tags.contains(*tag))
            .collect()
    }
}

/// Collaborative sub-score: category and tag overlap with the viewed
/// products. Bounded to [0, 1].
pub(crate) fn collaborative(stats: &ViewStats<'_>, product: &Product) -> f32 {
    let mut score = 0.;

    if stats.shares_category(product) {
        score += CATEGORY_MATCH_BOOST;
    }

    let shared = stats.shared_tags(product).len() as f32;
    score += (shared * TAG_MATCH_BOOST).min(TAG_MATCH_CAP);

    score.min(1.)
}

/// Content-based sub-score: price and rating affinity with the viewed
/// products. Bounded to [0, 1]; 0 if nothing was viewed.
pub(crate) fn content_based(stats: &ViewStats<'_>, product: &Product) -> f32 {
    if stats.is_empty() {
        return 0.;
    }

    let price_deviation = (product.price - stats.price_avg).abs() / stats.price_avg;
    let mut score = (PRICE_AFFINITY_CAP - price_deviation * PRICE_AFFINITY_SLOPE).max(0.);

    if product.rating >= stats.rating_avg - RATING_TOLERANCE {
        score += RATING_MATCH_BOOST;
    }

    score.min(1.)
}

/// Recency boost: exactly 0.5 if the candidate's category was recently
/// viewed, else exactly 0.
pub(crate) fn recency_boost(behavior: &UserBehavior, product: &Product) -> f32 {
    if behavior.recent_views().contains(&product.category) {
        RECENCY_BOOST
    } else {
        0.
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::tests::{behavior, catalog_of, product};

    fn viewed_catalog() -> Catalog {
        catalog_of(&[
            product(1, Category::Electronics, 100., 4.8, &["audio", "wireless"], 50.),
            product(2, Category::Sports, 300., 4.0, &["yoga"], 70.),
        ])
    }

    #[test]
    fn test_view_stats_aggregates() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        assert!(!stats.is_empty());
        assert!(approx_eq!(f32, stats.price_avg(), 200.));
        assert!(approx_eq!(f32, stats.rating_avg, 4.4));
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.tags.len(), 3);
    }

    #[test]
    fn test_view_stats_drops_unknown_ids() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 77], &[], &[]));

        assert_eq!(stats.len, 1);
        assert!(approx_eq!(f32, stats.price_avg(), 100.));
    }

    #[test]
    fn test_collaborative_category_and_tags() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        let candidate = product(3, Category::Electronics, 80., 4.5, &["audio", "wireless"], 60.);
        // 0.5 category + 2 * 0.2 tags
        assert!(approx_eq!(f32, collaborative(&stats, &candidate), 0.9));
    }

    #[test]
    fn test_collaborative_tag_boost_is_capped() {
        let catalog = catalog_of(&[product(
            1,
            Category::Electronics,
            100.,
            4.8,
            &["a", "b", "c", "d"],
            50.,
        )]);
        let stats = ViewStats::new(&catalog, &behavior(&[1], &[], &[]));

        let candidate = product(2, Category::Sports, 80., 4.5, &["a", "b", "c", "d"], 60.);
        // 3+ shared tags saturate at 0.4, no category match
        assert!(approx_eq!(f32, collaborative(&stats, &candidate), 0.4));
    }

    #[test]
    fn test_collaborative_no_overlap() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1], &[], &[]));

        let candidate = product(3, Category::Fashion, 80., 4.5, &["travel"], 60.);
        assert!(approx_eq!(f32, collaborative(&stats, &candidate), 0.));
    }

    #[test]
    fn test_collaborative_bounded_to_unit_interval() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        for candidate in catalog.iter() {
            let score = collaborative(&stats, candidate);
            assert!((0. ..=1.).contains(&score));
        }
    }

    #[test]
    fn test_content_based_empty_views_is_zero() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[], &[], &[]));

        for candidate in catalog.iter() {
            assert!(approx_eq!(f32, content_based(&stats, candidate), 0.));
        }
    }

    #[test]
    fn test_content_based_exact_price_and_rating_match() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        // at the mean price and above the mean rating: 0.4 + 0.3
        let candidate = product(3, Category::Fashion, 200., 4.5, &[], 60.);
        assert!(approx_eq!(f32, content_based(&stats, &candidate), 0.7));
    }

    #[test]
    fn test_content_based_price_deviation_decays() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        // |100 - 200| / 200 = 0.5 deviation: 0.4 - 0.25 = 0.15 price term,
        // rating 4.8 >= 4.2 adds 0.3
        let candidate = product(3, Category::Fashion, 100., 4.8, &[], 60.);
        assert!(approx_eq!(f32, content_based(&stats, &candidate), 0.45));
    }

    #[test]
    fn test_content_based_low_rating_misses_boost() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        // rating 4.1 < 4.4 - 0.2
        let candidate = product(3, Category::Fashion, 200., 4.1, &[], 60.);
        assert!(approx_eq!(f32, content_based(&stats, &candidate), 0.4));
    }

    #[test]
    fn test_content_based_bounded_to_unit_interval() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        for price in &[1., 50., 200., 1000.] {
            let candidate = product(3, Category::Fashion, *price, 5., &[], 60.);
            let score = content_based(&stats, &candidate);
            assert!((0. ..=1.).contains(&score));
        }
    }

    #[test]
    fn test_recency_boost_is_exact() {
        let candidate = product(3, Category::Sports, 80., 4.5, &[], 60.);

        let with_match = behavior(&[], &[], &[Category::Sports]);
        assert!(approx_eq!(f32, recency_boost(&with_match, &candidate), 0.5));

        let without_match = behavior(&[], &[], &[Category::Fashion]);
        assert!(approx_eq!(f32, recency_boost(&without_match, &candidate), 0.));
    }

    #[test]
    fn test_shared_tags_keep_candidate_order() {
        let catalog = viewed_catalog();
        let stats = ViewStats::new(&catalog, &behavior(&[1, 2], &[], &[]));

        let candidate = product(3, Category::Fashion, 80., 4.5, &["yoga", "audio", "new"], 60.);
        assert_eq!(stats.shared_tags(&candidate), vec!["yoga", "audio"]);
    }
}
