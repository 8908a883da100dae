/*
game.rs

Copyright 2025 Hervé Quatremain

This file is part of Shannon Switch.

Shannon Switch is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Shannon Switch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Shannon Switch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the game graph and the session state: which player is active, the
//! type (human or AI) of each player, and the outcome of the game.
//! Each completed turn changes one edge, swaps the active player, and recomputes the outcome:
//!
//! * if the starting and the ending vertexes are not connected anymore, the Cut player wins;
//! * if they are connected by locked edges only, the Short player wins;
//! * otherwise the game continues.
//!
//! Once a player wins, no more moves are accepted.

use clap::ValueEnum;
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;
use thiserror::Error;

use crate::ai_player;
use crate::config::GameConfig;
use crate::generator::graph::{EdgeState, Graph};
use crate::generator::{self, GenerationError};
use crate::player_input::{self, CLICK_TOLERANCE, Selection};
use crate::shortest_path::{locked_projection, shortest_path};

/// The two players.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum, FromRepr,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    /// Removes edges to disconnect the starting vertex from the ending vertex.
    #[default]
    Cut,

    /// Locks edges to build a path from the starting vertex to the ending vertex.
    Short,
}

impl Player {
    /// Return the opponent.
    pub fn other(self) -> Self {
        match self {
            Player::Cut => Player::Short,
            Player::Short => Player::Cut,
        }
    }

    /// State given to the edges that the player selects.
    pub fn edge_state(self) -> EdgeState {
        match self {
            Player::Cut => EdgeState::NoEdge,
            Player::Short => EdgeState::Locked,
        }
    }

    /// Pick a player at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Player::from_repr(rng.random_range(0..=1)).unwrap_or_default()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::Cut => write!(f, "Cut"),
            Player::Short => write!(f, "Short"),
        }
    }
}

/// Who plays for a player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    #[default]
    Human,
    Ai,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerType::Human => write!(f, "Human"),
            PlayerType::Ai => write!(f, "AI"),
        }
    }
}

/// Outcome of the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    CutWins,
    ShortWins,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Return the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::InProgress => None,
            Outcome::CutWins => Some(Player::Cut),
            Outcome::ShortWins => Some(Player::Short),
        }
    }
}

/// A completed move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.player {
            Player::Cut => write!(f, "Cut removes edge {}-{}", self.from, self.to),
            Player::Short => write!(f, "Short locks edge {}-{}", self.from, self.to),
        }
    }
}

/// Result of a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the turn was taken. If not, the same player must play again.
    pub consumed: bool,

    /// The move, when the turn was taken.
    pub played: Option<Move>,

    /// Outcome of the game after the turn.
    pub outcome: Outcome,
}

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The first player can only be chosen before the first move.
    #[error("the game has already started ({0} moves played)")]
    GameStarted(usize),
}

/// Classify the graph: ongoing game, or which player won.
pub fn evaluate_outcome(graph: &Graph) -> Outcome {
    if shortest_path(graph).is_none() {
        return Outcome::CutWins;
    }
    if shortest_path(&locked_projection(graph)).is_some() {
        return Outcome::ShortWins;
    }
    Outcome::InProgress
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game graph.
    graph: Graph,

    /// Type of the Cut and Short players, in that order.
    player_types: [PlayerType; 2],

    /// Player who must play the next turn.
    active_player: Player,

    /// Outcome after the last completed turn.
    outcome: Outcome,

    /// Maximum distance between a click and the selected edge.
    click_tolerance: f64,

    /// Completed moves, in order.
    history: Vec<Move>,
}

impl Game {
    /// Create a [`Game`] object for the given graph.
    ///
    /// Both players are human and the Cut player starts.
    pub fn new(graph: Graph) -> Self {
        let outcome: Outcome = evaluate_outcome(&graph);
        Self {
            graph,
            player_types: [PlayerType::Human; 2],
            active_player: Player::Cut,
            outcome,
            click_tolerance: CLICK_TOLERANCE,
            history: Vec::new(),
        }
    }

    /// Generate a random graph and set up the players from the configuration.
    ///
    /// When the configuration does not specify the first player, it is chosen at random.
    ///
    /// # Errors
    ///
    /// The function returns an error if the graph cannot be generated.
    pub fn from_config(config: &GameConfig) -> Result<Self, GenerationError> {
        let mut rng = config.rng();
        let graph: Graph = generator::initialize_graph_with_rng(config, &mut rng)?;
        let mut game: Game = Game::new(graph);

        game.set_player_type(Player::Cut, config.cut_player);
        game.set_player_type(Player::Short, config.short_player);
        game.active_player = match config.first_player {
            Some(p) => p,
            None => Player::random(&mut rng),
        };
        game.set_click_tolerance(config.click_tolerance);
        info!(
            "New game: {} vertexes, {} edges, {} starts",
            game.graph.num_vertexes(),
            game.graph.edges().count(),
            game.active_player
        );
        Ok(game)
    }

    /// Return the game graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Set the type of player.
    pub fn set_player_type(&mut self, player: Player, player_type: PlayerType) {
        self.player_types[player as usize] = player_type;
    }

    /// Return the type of player.
    pub fn player_type(&self, player: Player) -> PlayerType {
        self.player_types[player as usize]
    }

    /// Set the player who plays first.
    ///
    /// # Errors
    ///
    /// The method returns an error once a move has been played.
    pub fn set_active_player(&mut self, player: Player) -> Result<(), GameError> {
        if !self.history.is_empty() {
            return Err(GameError::GameStarted(self.history.len()));
        }
        self.active_player = player;
        Ok(())
    }

    /// Return the player who must play the next turn.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Change the maximum distance between a click and the selected edge.
    pub fn set_click_tolerance(&mut self, tolerance: f64) {
        self.click_tolerance = tolerance;
    }

    /// Return the outcome of the game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the active player is an AI player.
    pub fn is_ai_turn(&self) -> bool {
        self.player_type(self.active_player) == PlayerType::Ai
    }

    /// Return the completed moves.
    pub fn history(&self) -> &[Move] {
        &self.history[..]
    }

    /// Text that describes the state of the game, such as `Cut's turn (AI)`.
    pub fn status(&self) -> String {
        match self.outcome.winner() {
            Some(winner) => format!("{winner} player wins."),
            None => format!(
                "{}'s turn ({})",
                self.active_player,
                self.player_type(self.active_player)
            ),
        }
    }

    /// Play one turn for the active player.
    ///
    /// A human player needs a selection. An AI player ignores it.
    pub fn do_turn(&mut self, selection: Option<&Selection>) -> MoveResult {
        match (self.player_type(self.active_player), selection) {
            (PlayerType::Ai, _) => self.apply_ai_move(),
            (PlayerType::Human, Some(s)) => self.apply_human_move(s),
            (PlayerType::Human, None) => self.not_consumed(),
        }
    }

    /// Play the edge that the human player selected.
    ///
    /// The turn is not consumed if the selection does not designate a normal edge.
    pub fn apply_human_move(&mut self, selection: &Selection) -> MoveResult {
        if self.outcome.is_terminal() {
            debug!("Game over: move refused");
            return self.not_consumed();
        }
        match player_input::resolve(&self.graph, selection, self.click_tolerance) {
            Some((from, to)) => self.play(from, to),
            None => {
                debug!("{}: no edge selected, turn not consumed", self.active_player);
                self.not_consumed()
            }
        }
    }

    /// Play the edge that the AI strategy selects.
    pub fn apply_ai_move(&mut self) -> MoveResult {
        if self.outcome.is_terminal() {
            debug!("Game over: move refused");
            return self.not_consumed();
        }
        match ai_player::choose_edge(&self.graph) {
            Some((from, to)) => self.play(from, to),
            None => {
                warn!("{} AI: no move available", self.active_player);
                self.not_consumed()
            }
        }
    }

    fn not_consumed(&self) -> MoveResult {
        MoveResult {
            consumed: false,
            played: None,
            outcome: self.outcome,
        }
    }

    /// Change the edge for the active player, swap the players, and compute the new outcome.
    fn play(&mut self, from: usize, to: usize) -> MoveResult {
        let player: Player = self.active_player;
        let m: Move = Move { player, from, to };

        self.graph.set_edge_pair(from, to, player.edge_state());
        self.history.push(m);
        self.active_player = player.other();
        info!("{m}");

        let outcome: Outcome = evaluate_outcome(&self.graph);
        if outcome != self.outcome {
            info!("Outcome: {outcome:?}");
        }
        self.outcome = outcome;

        MoveResult {
            consumed: true,
            played: Some(m),
            outcome,
        }
    }
}
