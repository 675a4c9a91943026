use feint_core::{GameSession, MoveSource, RandomMoveSource, RoundOutcome};
use serde::{Deserialize, Serialize};

use crate::{Notice, Result, Settings, Snapshot};

/// Input from the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Play {
        #[serde(rename = "move")]
        player_move: feint_core::Move,
    },
    Acknowledge,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub snapshot: Snapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RoundOutcome>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

/// Applies [`Command`]s to a session and answers with what to render next.
#[derive(Debug)]
pub struct Dispatcher<S = RandomMoveSource> {
    session: GameSession<S>,
}

impl Dispatcher<RandomMoveSource> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(GameSession::new(settings.engine()))
    }
}

impl<S: MoveSource> Dispatcher<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(&self.session)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Reply> {
        let outcome = match command {
            Command::Play { player_move } => Some(self.session.play(player_move)?),
            Command::Acknowledge => {
                if self.session.acknowledge().is_none() {
                    log::debug!("Acknowledge with nothing pending");
                }
                None
            }
            Command::Restart => {
                self.session.restart();
                None
            }
        };

        let notices = outcome
            .map(|outcome| Notice::for_outcome(&outcome, self.session.summary()))
            .unwrap_or_default();
        Ok(Reply {
            snapshot: self.snapshot(),
            outcome,
            notices,
        })
    }

    /// JSON in, JSON out variant of [`Self::dispatch`].
    pub fn dispatch_json(&mut self, command: &str) -> Result<String> {
        let command: Command = crate::decode(command)?;
        let reply = self.dispatch(command)?;
        crate::encode(&reply)
    }
}
