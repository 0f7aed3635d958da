//! Deterministic ladder model
//!
//! Everything that decides what the ladder is and where a lane leads lives
//! here. This module must be pure and deterministic:
//! - Seeded RNG only (generation and palette)
//! - No randomness at trace time
//! - No rendering dependencies

pub mod ladder;
pub mod layout;
pub mod session;
pub mod trace;

pub use ladder::{LadderGraph, RungConnection};
pub use layout::Layout;
pub use session::{Outcome, Pairing, Session, SessionPhase};
pub use trace::{PathResult, is_permutation, trace, trace_all};
