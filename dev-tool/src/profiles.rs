use anyhow::Error;
use structopt::StructOpt;

use shop_ai::{Analytics, USER_PROFILES};

use crate::exit_code::NO_ERROR;

/// Lists the demo user profiles and their behavior counters.
#[derive(StructOpt, Debug)]
pub(crate) struct ListProfilesCmd {}

impl ListProfilesCmd {
    pub(crate) fn run(self) -> Result<i32, Error> {
        for profile in USER_PROFILES.iter() {
            let analytics = Analytics::new(&profile.behavior);
            println!(
                "{:<14} {:<20} viewed: {:>2}  purchased: {:>2}  active categories: {}",
                profile.id,
                profile.name,
                analytics.viewed,
                analytics.purchased,
                analytics.active_categories,
            );
        }

        Ok(NO_ERROR)
    }
}
