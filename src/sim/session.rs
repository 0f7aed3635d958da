//! Game session state machine
//!
//! Setup -> (start_game) -> Ready -> (select_lane) -> Revealed -> (reset) -> Setup
//!
//! The ladder, its layout and the lane colors are created together by
//! `start_game` and dropped together by `reset`. A selection can only exist
//! inside a started game, so "selected lane" and "last pairing" are always
//! both present or both absent.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ladder::LadderGraph;
use super::layout::Layout;
use super::trace::{PathResult, trace};
use crate::consts::MIN_LANES;
use crate::error::{LadderError, NameRole, Result};
use crate::palette::{Hsl, distinct_colors};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Roster is being edited, no ladder exists
    Setup,
    /// Ladder generated, nothing selected yet
    Ready,
    /// A lane has been selected and traced
    Revealed,
}

/// A start lane and the terminal lane it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub from: usize,
    pub to: usize,
}

/// The latest pairing resolved to roster names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub pairing: Pairing,
    pub player: &'a str,
    pub result: &'a str,
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.player, self.result)
    }
}

#[derive(Debug, Clone)]
struct Selection {
    pairing: Pairing,
    path: PathResult,
}

/// Everything that exists only while a game is running
#[derive(Debug, Clone)]
struct Game {
    graph: LadderGraph,
    layout: Layout,
    colors: Vec<Hsl>,
    selection: Option<Selection>,
}

/// A single-user ghost-leg session
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the session RNG was created from
    seed: u64,
    rng: Pcg32,
    settings: Settings,
    players: Vec<String>,
    results: Vec<String>,
    game: Option<Game>,
}

impl Session {
    /// New session with default settings and two blank lanes
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: Settings::default(),
            players: vec![String::new(); MIN_LANES],
            results: vec![String::new(); MIN_LANES],
            game: None,
        }
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::new(seed)
        })
    }

    /// New session with default settings and the given roster
    pub fn with_roster(seed: u64, players: Vec<String>, results: Vec<String>) -> Result<Self> {
        let mut session = Self::new(seed);
        session.set_roster(players, results)?;
        Ok(session)
    }

    // === Accessors ===

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::Setup,
            Some(Game { selection: None, .. }) => SessionPhase::Ready,
            Some(Game { selection: Some(_), .. }) => SessionPhase::Revealed,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn graph(&self) -> Option<&LadderGraph> {
        self.game.as_ref().map(|g| &g.graph)
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.game.as_ref().map(|g| &g.layout)
    }

    /// Per-lane colors (empty outside a game)
    pub fn lane_colors(&self) -> &[Hsl] {
        self.game.as_ref().map(|g| g.colors.as_slice()).unwrap_or(&[])
    }

    pub fn lane_color(&self, lane: usize) -> Option<Hsl> {
        self.lane_colors().get(lane).copied()
    }

    fn selection(&self) -> Option<&Selection> {
        self.game.as_ref().and_then(|g| g.selection.as_ref())
    }

    pub fn selected_lane(&self) -> Option<usize> {
        self.selection().map(|s| s.pairing.from)
    }

    pub fn last_path(&self) -> Option<Pairing> {
        self.selection().map(|s| s.pairing)
    }

    /// Path of the latest selection, for overlay drawing
    pub fn overlay(&self) -> Option<&PathResult> {
        self.selection().map(|s| &s.path)
    }

    /// Result lane reached by the latest selection
    pub fn highlighted_result(&self) -> Option<usize> {
        self.last_path().map(|p| p.to)
    }

    pub fn outcome(&self) -> Option<Outcome<'_>> {
        let pairing = self.last_path()?;
        Some(Outcome {
            pairing,
            player: &self.players[pairing.from],
            result: &self.results[pairing.to],
        })
    }

    // === Roster editing (Setup only) ===

    fn ensure_setup(&self) -> Result<()> {
        if self.game.is_some() {
            log::warn!("Roster edit rejected: game in progress");
            return Err(LadderError::GameInProgress);
        }
        Ok(())
    }

    fn check_lane_count(&self, lane_count: usize) -> Result<()> {
        if lane_count < MIN_LANES {
            return Err(LadderError::TooFewLanes {
                lane_count,
                min: MIN_LANES,
            });
        }
        if lane_count > self.settings.max_lanes {
            return Err(LadderError::TooManyLanes {
                lane_count,
                max: self.settings.max_lanes,
            });
        }
        Ok(())
    }

    fn check_index(&self, lane: usize) -> Result<()> {
        if lane < self.lane_count() {
            Ok(())
        } else {
            Err(LadderError::LaneOutOfRange {
                lane,
                lane_count: self.lane_count(),
            })
        }
    }

    /// Replace the whole roster
    pub fn set_roster(&mut self, players: Vec<String>, results: Vec<String>) -> Result<()> {
        self.ensure_setup()?;
        if players.len() != results.len() {
            return Err(LadderError::RosterMismatch {
                players: players.len(),
                results: results.len(),
            });
        }
        self.check_lane_count(players.len())?;
        self.players = players;
        self.results = results;
        Ok(())
    }

    /// Append a blank player/result lane
    pub fn add_lane(&mut self) -> Result<usize> {
        self.ensure_setup()?;
        self.check_lane_count(self.lane_count() + 1)?;
        self.players.push(String::new());
        self.results.push(String::new());
        Ok(self.lane_count())
    }

    /// Drop the last player/result lane
    pub fn remove_lane(&mut self) -> Result<usize> {
        self.ensure_setup()?;
        self.check_lane_count(self.lane_count().saturating_sub(1))?;
        self.players.pop();
        self.results.pop();
        Ok(self.lane_count())
    }

    pub fn set_player(&mut self, lane: usize, name: impl Into<String>) -> Result<()> {
        self.ensure_setup()?;
        self.check_index(lane)?;
        self.players[lane] = name.into();
        Ok(())
    }

    pub fn set_result(&mut self, lane: usize, name: impl Into<String>) -> Result<()> {
        self.ensure_setup()?;
        self.check_index(lane)?;
        self.results[lane] = name.into();
        Ok(())
    }

    // === Game flow ===

    fn first_blank(&self) -> Option<(NameRole, usize)> {
        let blank = |names: &[String]| names.iter().position(|n| n.trim().is_empty());
        blank(self.players.as_slice())
            .map(|i| (NameRole::Player, i))
            .or_else(|| blank(self.results.as_slice()).map(|i| (NameRole::Result, i)))
    }

    /// Generate a fresh ladder and lane colors.
    ///
    /// Rejected without any state change if a name is blank. Starting again
    /// while a game is running replaces the ladder and clears the selection.
    pub fn start_game(&mut self) -> Result<()> {
        if let Some((role, index)) = self.first_blank() {
            log::warn!("Start rejected: {} #{} is blank", role, index + 1);
            return Err(LadderError::BlankName { role, index });
        }
        self.check_lane_count(self.lane_count())?;

        let graph =
            LadderGraph::generate_with_rows(self.lane_count(), self.settings.row_count, &mut self.rng)?;
        let layout = Layout::for_graph(&graph, &self.settings.canvas);
        let colors = distinct_colors(self.lane_count(), &mut self.rng);

        log::info!(
            "Game started: {} lanes, {} rungs",
            graph.lane_count(),
            graph.rung_count()
        );
        self.game = Some(Game {
            graph,
            layout,
            colors,
            selection: None,
        });
        Ok(())
    }

    /// Trace `lane` and make it the current selection (replacing any previous one)
    pub fn select_lane(&mut self, lane: usize) -> Result<Pairing> {
        let game = self.game.as_mut().ok_or(LadderError::NotStarted)?;
        let path = trace(&game.graph, &game.layout, lane)?;
        let pairing = Pairing {
            from: lane,
            to: path.terminal_lane,
        };

        log::info!("Lane {} -> result {}", pairing.from, pairing.to);
        game.selection = Some(Selection { pairing, path });
        Ok(pairing)
    }

    /// Back to Setup. The roster is kept so names stay editable.
    pub fn reset(&mut self) {
        if self.game.take().is_some() {
            log::info!("Game reset");
        }
    }
}
