use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod exit_code;
mod profiles;
mod recommend;

/// Tooling for the developers of the shop-ai demo.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    ListProfiles(profiles::ListProfilesCmd),
    Recommend(recommend::RecommendCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::ListProfiles(cmd) => cmd.run(),
            CommandArgs::Recommend(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
