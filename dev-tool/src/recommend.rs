use anyhow::{anyhow, Error};
use log::info;
use serde_json::json;
use structopt::StructOpt;

use shop_ai::{explain, find_profile, insight, Confidence, Config, Engine, ProductId, CATALOG};

use crate::exit_code::NO_ERROR;

/// Prints ranked recommendations for one of the demo users.
#[derive(StructOpt, Debug)]
pub(crate) struct RecommendCmd {
    /// Id of the demo user profile, e.g. user_tech.
    #[structopt(long)]
    profile: String,

    /// Maximum number of recommendations.
    #[structopt(long, default_value = "5")]
    limit: usize,

    /// Exploration probability of the contextual score.
    #[structopt(long, default_value = "0.1")]
    exploration: f32,

    /// Product ids to mark as viewed before scoring, repeatable.
    #[structopt(long = "view")]
    views: Vec<u32>,

    /// Emits the scored recommendations as JSON.
    #[structopt(long)]
    json: bool,
}

impl RecommendCmd {
    pub(crate) fn run(self) -> Result<i32, Error> {
        let profile = find_profile(&self.profile)
            .ok_or_else(|| anyhow!("unknown profile: {}", self.profile))?;

        let mut behavior = profile.behavior.clone();
        for id in self.views {
            behavior.mark_viewed(&CATALOG, ProductId::from(id));
        }

        let config = Config::default().with_exploration(self.exploration)?;
        let engine = Engine::new(config);
        let recommendations = engine.recommend(&CATALOG, &behavior, self.limit);
        info!(
            "scored {} recommendations for {}",
            recommendations.len(),
            profile.name,
        );

        if self.json {
            let entries = recommendations
                .iter()
                .map(|recommendation| {
                    json!({
                        "product": recommendation.product,
                        "score": recommendation.score,
                        "components": recommendation.components,
                        "confidence": Confidence::from_score(recommendation.score).to_string(),
                        "explanation": explain(
                            &CATALOG,
                            &behavior,
                            recommendation.product,
                            &recommendation.components,
                        ),
                    })
                })
                .collect::<Vec<_>>();
            let output = json!({
                "profile": profile.id,
                "insight": insight(&recommendations),
                "recommendations": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);

            return Ok(NO_ERROR);
        }

        if recommendations.is_empty() {
            println!("no recommendations for {}", profile.name);
            return Ok(NO_ERROR);
        }

        for (rank, recommendation) in recommendations.iter().enumerate() {
            let product = recommendation.product;
            println!(
                "#{} {} ({}, ${}) score {:.3} [{}]",
                rank + 1,
                product.name,
                product.category,
                product.price,
                recommendation.score,
                Confidence::from_score(recommendation.score),
            );
            println!(
                "   {}",
                explain(&CATALOG, &behavior, product, &recommendation.components),
            );
        }
        println!("{}", insight(&recommendations));

        Ok(NO_ERROR)
    }
}
