use std::rc::Rc;

use anyhow::Context;
use common::console::StdoutConsole;
use log::debug;
use observer_pattern::subject::Random;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::app::AppConfig;

mod config;
mod error;
mod scenario;

fn main() -> anyhow::Result<()> {
    let settings = AppConfig::new()?;
    config::log::init(&settings.log_filter).context("Unable to initialize logging")?;
    debug!("Running with {settings:?}");

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    scenario::run(Rc::new(StdoutConsole), &mut Random::new(&mut rng))
        .context("Observer demo failed")?;
    Ok(())
}
