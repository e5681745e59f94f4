mod replay;

use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use itertools::Itertools;
use log::info;
use replay::Scenario;
use std::env;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: basic_move <scenario.json>"))?;

    let scenario = Scenario::load(&path)
        .wrap_err_with(|| format!("failed to load scenario {}", path))?;

    info!("scenario loaded: {} cycles", scenario.cycles.len());

    let outcomes = scenario.replay();

    let recovering = outcomes.iter().filter(|outcome| outcome.recovering).count();

    for (name, count) in outcomes
        .iter()
        .map(|outcome| outcome.decision.name())
        .counts()
        .into_iter()
        .sorted()
    {
        println!("{:<14}{}", name, count);
    }

    println!("{:<14}{}", "recovering", recovering);

    Ok(())
}
