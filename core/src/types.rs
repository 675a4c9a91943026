use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Round counter type, rounds are numbered from 1.
pub type Round = u8;

/// Signed score, may go below zero.
pub type Score = i32;

/// One of the three hand signs.
///
/// The discriminants follow the on-screen button order of the game: rock, scissors, paper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Scissors, Move::Paper];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Scissors),
            2 => Ok(Move::Paper),
            _ => Err(GameError::InvalidMove(index)),
        }
    }

    /// The unique move this one beats.
    pub const fn beats_which(self) -> Self {
        use Move::*;
        match self {
            Rock => Scissors,
            Scissors => Paper,
            Paper => Rock,
        }
    }

    /// The unique move that beats this one.
    pub const fn beaten_by(self) -> Self {
        use Move::*;
        match self {
            Rock => Paper,
            Scissors => Rock,
            Paper => Scissors,
        }
    }

    pub const fn beats(self, other: Self) -> bool {
        self.beats_which() as u8 == other as u8
    }

    pub const fn name(self) -> &'static str {
        use Move::*;
        match self {
            Rock => "rock",
            Scissors => "scissors",
            Paper => "paper",
        }
    }

    pub const fn glyph(self) -> &'static str {
        use Move::*;
        match self {
            Rock => "👊",
            Scissors => "✌️",
            Paper => "✋",
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl From<Move> for u8 {
    fn from(value: Move) -> Self {
        value.index()
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Move::ALL
            .into_iter()
            .find(|mv| s.eq_ignore_ascii_case(mv.name()) || s == mv.glyph())
            .ok_or(GameError::UnknownMove)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the player has to achieve against the computer move this round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Win,
    Lose,
}

impl Objective {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
        }
    }

    /// The single move that satisfies this objective against `computer`.
    pub const fn correct_reply(self, computer: Move) -> Move {
        match self {
            Self::Win => computer.beaten_by(),
            Self::Lose => computer.beats_which(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WIN  🏆",
            Self::Lose => "LOSE  💣",
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::Win
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
        })
    }
}
