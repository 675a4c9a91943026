use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Finished,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Owns the state of one game and resolves the player's moves against it.
#[derive(Clone, Debug)]
pub struct RoundEngine<S = RandomMoveSource> {
    config: GameConfig,
    source: S,
    round: RoundState,
    state: EngineState,
}

impl RoundEngine<RandomMoveSource> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomMoveSource::new(seed))
    }
}

impl<S: MoveSource> RoundEngine<S> {
    pub fn new(config: GameConfig, mut source: S) -> Self {
        if config.final_round == 0 {
            log::warn!("Cannot play 0 rounds, playing a single round instead");
        }
        let config = GameConfig::new(config.final_round);
        let round = RoundState::initialize(config, &mut source);
        log::debug!(
            "New game of {} rounds, computer opens with {}",
            config.final_round,
            round.computer_move
        );
        Self {
            config,
            source,
            round,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> &RoundState {
        &self.round
    }

    pub fn engine_state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn summary(&self) -> Option<GameSummary> {
        self.is_finished().then(|| GameSummary::from_state(&self.round))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolve_index(&mut self, index: u8) -> Result<RoundOutcome> {
        let player_move = Move::try_from(index)?;
        self.resolve_move(player_move)
    }

    /// Scores `player_move` against the current round and moves on to the next one.
    ///
    /// The final round leaves the state in place; only [`Self::restart`] starts a new game.
    pub fn resolve_move(&mut self, player_move: Move) -> Result<RoundOutcome> {
        self.check_not_finished()?;

        let RoundState {
            current_round,
            objective,
            computer_move,
            ..
        } = self.round;
        let correct_move = objective.correct_reply(computer_move);
        let score_delta: Score = if player_move == correct_move { 1 } else { -1 };
        self.round.score = self.round.score.saturating_add(score_delta);

        log::debug!(
            "Round {current_round}: objective {objective}, computer {computer_move}, player {player_move} ({score_delta:+})"
        );

        let is_game_over = self.round.is_final_round();
        if is_game_over {
            self.state = EngineState::Finished;
            log::info!("Game over with score {}", self.round.score);
        } else {
            self.advance();
        }

        Ok(RoundOutcome {
            round: current_round,
            player_move,
            computer_move,
            objective,
            score_delta,
            correct_move,
            is_game_over,
        })
    }

    pub fn restart(&mut self) -> RoundState {
        self.round = RoundState::initialize(self.config, &mut self.source);
        self.state = EngineState::Playing;
        log::info!("Restarted, computer opens with {}", self.round.computer_move);
        self.round
    }

    fn advance(&mut self) {
        self.round.current_round += 1;
        self.round.objective = self.round.objective.flipped();
        self.round.computer_move = self.source.next_move();
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
