use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    RoundStarted(RoundState),
    MoveResolved(RoundOutcome),
    GameOver(GameSummary),
    Restarted(RoundState),
}

/// Receives every state change of a [`GameSession`], in order.
///
/// A new subscriber is first told about the state the session is currently in.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn on_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// A [`RoundEngine`] that accepts one move at a time.
///
/// After a move is played its outcome stays pending until the presentation calls
/// [`GameSession::acknowledge`]; moves arriving in between are rejected so two inputs can
/// never resolve against the same round.
pub struct GameSession<S = RandomMoveSource> {
    engine: RoundEngine<S>,
    pending: Option<RoundOutcome>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<S: MoveSource> GameSession<S> {
    pub fn new(engine: RoundEngine<S>) -> Self {
        Self {
            engine,
            pending: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, mut observer: impl SessionObserver + 'static) {
        observer.on_event(&self.current_event());
        self.observers.push(Box::new(observer));
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    pub fn state(&self) -> &RoundState {
        self.engine.state()
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn summary(&self) -> Option<GameSummary> {
        self.engine.summary()
    }

    pub fn pending(&self) -> Option<&RoundOutcome> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_acknowledgement(&self) -> bool {
        self.pending.is_some()
    }

    pub fn play(&mut self, player_move: Move) -> Result<RoundOutcome> {
        if self.pending.is_some() {
            log::warn!("Ignoring {player_move}, previous outcome not acknowledged");
            return Err(GameError::AwaitingAcknowledgement);
        }

        let outcome = self.engine.resolve_move(player_move)?;
        self.pending = Some(outcome);

        self.emit(SessionEvent::MoveResolved(outcome));
        if let Some(summary) = self.engine.summary() {
            self.emit(SessionEvent::GameOver(summary));
        } else {
            self.emit(SessionEvent::RoundStarted(*self.engine.state()));
        }
        Ok(outcome)
    }

    pub fn play_index(&mut self, index: u8) -> Result<RoundOutcome> {
        self.play(Move::try_from(index)?)
    }

    /// Marks the pending outcome as shown, returning it.
    pub fn acknowledge(&mut self) -> Option<RoundOutcome> {
        self.pending.take()
    }

    pub fn restart(&mut self) -> RoundState {
        self.pending = None;
        let state = self.engine.restart();
        self.emit(SessionEvent::Restarted(state));
        state
    }

    fn current_event(&self) -> SessionEvent {
        match self.engine.summary() {
            Some(summary) => SessionEvent::GameOver(summary),
            None => SessionEvent::RoundStarted(*self.engine.state()),
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for GameSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("engine", &self.engine)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish()
    }
}
