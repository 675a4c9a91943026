use feint_core::{FINAL_ROUND, GameConfig, RandomMoveSource, Round, RoundEngine};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Game settings as read from a TOML document.
///
/// ```toml
/// final_round = 10
/// seed = 1234
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub final_round: Round,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            final_round: FINAL_ROUND,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn game_config(&self) -> GameConfig {
        let config = GameConfig::new(self.final_round);
        if config.final_round != self.final_round {
            log::warn!(
                "Cannot play {} rounds, using {} instead",
                self.final_round,
                config.final_round
            );
        }
        config
    }

    /// Configured seed, or a fresh one from the thread rng.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn engine(&self) -> RoundEngine<RandomMoveSource> {
        let seed = self.seed();
        log::debug!("Seeding computer moves with {seed}");
        RoundEngine::with_seed(self.game_config(), seed)
    }
}
