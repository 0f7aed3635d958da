//! Error type shared by the ladder model, session and settings

use std::fmt;

use thiserror::Error;

/// Which roster column a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    Player,
    Result,
}

impl fmt::Display for NameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRole::Player => f.write_str("player"),
            NameRole::Result => f.write_str("result"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LadderError {
    #[error("a ladder needs at least {min} lanes, got {lane_count}")]
    TooFewLanes { lane_count: usize, min: usize },

    #[error("a ladder allows at most {max} lanes, got {lane_count}")]
    TooManyLanes { lane_count: usize, max: usize },

    #[error("a ladder needs at least one row")]
    NoRows,

    #[error("lane {lane} is outside 0..{lane_count}")]
    LaneOutOfRange { lane: usize, lane_count: usize },

    #[error("{role} name #{} is blank", .index + 1)]
    BlankName { role: NameRole, index: usize },

    #[error("{players} players but {results} results")]
    RosterMismatch { players: usize, results: usize },

    #[error("no game has been started")]
    NotStarted,

    #[error("the roster cannot change while a game is in progress")]
    GameInProgress,

    #[error("row {row}: rung {from}->{to} does not join adjacent lanes inside 0..{lane_count}")]
    InvalidRung {
        row: usize,
        from: usize,
        to: usize,
        lane_count: usize,
    },

    #[error("row {row}: lane {lane} is touched by more than one rung")]
    LaneReused { row: usize, lane: usize },

    #[error("row {row} is the terminal row and must stay empty")]
    TerminalRowNotEmpty { row: usize },

    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LadderError> = std::result::Result<T, E>;
