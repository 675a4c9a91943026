use feint_core::*;
use serde::{Deserialize, Serialize};

/// Render-ready copy of the session state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: Round,
    pub final_round: Round,
    pub score: Score,
    pub objective: Objective,
    pub computer_move: Move,
    pub awaiting_acknowledgement: bool,
    pub finished: bool,
}

impl Snapshot {
    pub fn from_session<S: MoveSource>(session: &GameSession<S>) -> Self {
        let state = session.state();
        Self {
            round: state.current_round,
            final_round: state.final_round,
            score: state.score,
            objective: state.objective,
            computer_move: state.computer_move,
            awaiting_acknowledgement: session.is_awaiting_acknowledgement(),
            finished: session.is_finished(),
        }
    }

    pub fn round_label(&self) -> String {
        format!("Round {} / {}", self.round, self.final_round)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub const fn objective_label(&self) -> &'static str {
        self.objective.label()
    }
}

/// Alert the presentation layer should show after a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    WrongMove {
        correct_move: Move,
        message: String,
    },
    GameOver {
        score: Score,
        verdict: Verdict,
        message: String,
    },
}

impl Notice {
    pub fn wrong_move(correct_move: Move) -> Self {
        Self::WrongMove {
            correct_move,
            message: format!("The right move was {correct_move}!"),
        }
    }

    pub fn game_over(summary: GameSummary) -> Self {
        let message = match summary.verdict {
            Verdict::Congratulations => {
                format!("Congratulations! You got {} point(s)!", summary.score)
            }
            Verdict::TryAgain => "Would you like to try again?".to_owned(),
        };
        Self::GameOver {
            score: summary.score,
            verdict: summary.verdict,
            message,
        }
    }

    /// Notices for `outcome`, wrong move first, game over last.
    pub fn for_outcome(outcome: &RoundOutcome, summary: Option<GameSummary>) -> Vec<Self> {
        let mut notices = Vec::new();
        if outcome.is_wrong() {
            notices.push(Self::wrong_move(outcome.correct_move));
        }
        if let Some(summary) = summary.filter(|_| outcome.is_game_over) {
            notices.push(Self::game_over(summary));
        }
        notices
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::WrongMove { .. } => "Wrong",
            Self::GameOver { .. } => "Game Over",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::WrongMove { message, .. } | Self::GameOver { message, .. } => message,
        }
    }
}
