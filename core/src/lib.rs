#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use session::*;
pub use source::*;
pub use types::*;

mod engine;
mod error;
mod session;
mod source;
mod types;

/// Number of rounds in a standard game.
pub const FINAL_ROUND: Round = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub final_round: Round,
}

impl GameConfig {
    pub const fn new_unchecked(final_round: Round) -> Self {
        Self { final_round }
    }

    pub fn new(final_round: Round) -> Self {
        Self::new_unchecked(final_round.clamp(1, Round::MAX))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(FINAL_ROUND)
    }
}

/// Everything the player sees before choosing a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub current_round: Round,
    pub final_round: Round,
    pub score: Score,
    pub objective: Objective,
    pub computer_move: Move,
}

impl RoundState {
    /// Round 1, no points, objective win, computer move drawn from `source`.
    ///
    /// A game always has at least one round, whatever `config` says.
    pub fn initialize(config: GameConfig, source: &mut impl MoveSource) -> Self {
        Self {
            current_round: 1,
            final_round: config.final_round.max(1),
            score: 0,
            objective: Objective::Win,
            computer_move: source.next_move(),
        }
    }

    pub const fn is_final_round(&self) -> bool {
        self.current_round >= self.final_round
    }

    pub const fn correct_move(&self) -> Move {
        self.objective.correct_reply(self.computer_move)
    }

    pub const fn rounds_left(&self) -> Round {
        self.final_round.saturating_sub(self.current_round)
    }
}

/// Result of resolving a single round, describing the round as it was played.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: Round,
    pub player_move: Move,
    pub computer_move: Move,
    pub objective: Objective,
    pub score_delta: Score,
    pub correct_move: Move,
    pub is_game_over: bool,
}

impl RoundOutcome {
    pub const fn is_correct(&self) -> bool {
        self.score_delta > 0
    }

    /// A wrong answer, the player should be shown `correct_move`.
    pub const fn is_wrong(&self) -> bool {
        !self.is_correct()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Congratulations,
    TryAgain,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: Score,
    pub final_round: Round,
    pub verdict: Verdict,
}

impl GameSummary {
    pub const fn from_state(state: &RoundState) -> Self {
        let verdict = if state.score > 0 {
            Verdict::Congratulations
        } else {
            Verdict::TryAgain
        };
        Self {
            score: state.score,
            final_round: state.final_round,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_to_at_least_one_round() {
        assert_eq!(GameConfig::new(0).final_round, 1);
        assert_eq!(GameConfig::new(3).final_round, 3);
        assert_eq!(GameConfig::default().final_round, FINAL_ROUND);
    }

    #[test]
    fn zero_round_config_still_plays_one_round() {
        let config: GameConfig = serde_json::from_str(r#"{"final_round":0}"#).unwrap();
        let mut engine = RoundEngine::new(config, ScriptedMoveSource::repeat(Move::Rock));

        let state = *engine.state();
        assert_eq!(state.final_round, 1);
        assert!(state.current_round <= state.final_round);
        assert_eq!(engine.config().final_round, 1);

        let outcome = engine.resolve_move(Move::Paper).unwrap();
        assert!(outcome.is_game_over);
        assert_eq!(engine.state().current_round, 1);
    }

    #[test]
    fn initialize_starts_at_round_one_with_win() {
        for seed in 0..32 {
            let state =
                RoundState::initialize(GameConfig::default(), &mut RandomMoveSource::new(seed));

            assert_eq!(state.current_round, 1);
            assert_eq!(state.final_round, 10);
            assert_eq!(state.score, 0);
            assert_eq!(state.objective, Objective::Win);
            assert_eq!(state.rounds_left(), 9);
            assert!(Move::ALL.contains(&state.computer_move));
        }
    }

    #[test]
    fn summary_verdict_needs_positive_score() {
        let mut source = ScriptedMoveSource::repeat(Move::Rock);
        let mut state = RoundState::initialize(GameConfig::default(), &mut source);

        state.score = 0;
        assert_eq!(GameSummary::from_state(&state).verdict, Verdict::TryAgain);

        state.score = 4;
        let summary = GameSummary::from_state(&state);
        assert_eq!(summary.verdict, Verdict::Congratulations);
        assert_eq!(summary.score, 4);
    }

    #[test]
    fn state_serializes_with_lowercase_moves() {
        let mut source = ScriptedMoveSource::repeat(Move::Paper);
        let state = RoundState::initialize(GameConfig::default(), &mut source);
        let json = serde_json::to_string(&state).unwrap();

        assert!(json.contains("\"computer_move\":\"paper\""));
        assert!(json.contains("\"objective\":\"win\""));
        assert_eq!(serde_json::from_str::<RoundState>(&json).unwrap(), state);
    }
}
