use std::{
    collections::HashMap,
    env,
    sync::{Mutex, OnceLock},
};

use rand::{random, rngs::StdRng, SeedableRng};
use thiserror::Error;

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

#[derive(Error, Debug, PartialEq)]
pub enum SeedError {
    #[error("Seed registry is poisoned by a panicking test")]
    Poisoned,
    #[error("Invalid seed {value:?} in {scope}: expecting an unsigned 64 bits integer")]
    Invalid { scope: &'static str, value: String },
}

/// Seeds already handed out, by env var name.
static REGISTRY: OnceLock<Mutex<HashMap<&'static str, u64>>> = OnceLock::new();

/// A scope keeps one seed for the whole test binary so every rng built from it
/// replays the same draws. A set but unparsable env var is an error rather than
/// a silent switch to a random seed.
fn resolve_seed(scope: &'static str) -> Result<u64, SeedError> {
    let mut registry = REGISTRY
        .get_or_init(Default::default)
        .lock()
        .map_err(|_| SeedError::Poisoned)?;
    if let Some(&seed) = registry.get(scope) {
        return Ok(seed);
    }

    let seed = match env::var(scope) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| SeedError::Invalid { scope, value })?,
        Err(_) => random(),
    };
    // Shown on failure so the run can be replayed with `{scope}={seed}`.
    println!("Using seed {seed} for {scope}");
    registry.insert(scope, seed);
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, SeedError> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, SeedError> {
    resolve_seed(scope).map(StdRng::seed_from_u64)
}
