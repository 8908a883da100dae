/*
config.rs

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

//! Game configuration.
//!
//! The default values produce a small graph of five vertexes in a 800x500 window.
//! A configuration can be loaded from a JSON file; missing fields keep their default value:
//!
//! ```json
//! {
//!     "vertexes": 8,
//!     "min_edges": 2,
//!     "max_edges": 3,
//!     "cut_player": "ai",
//!     "short_player": "human",
//!     "first_player": "short"
//! }
//! ```

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::game::{Player, PlayerType};
use crate::player_input::CLICK_TOLERANCE;

/// Seed used when the vertex locations are not randomized.
pub const DEFAULT_SEED: u64 = 220;

/// Type of errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the graph needs at least 2 vertexes, got {0}")]
    TooFewVertexes(usize),

    #[error("a {width}x{height} window leaves no room inside a {margin} pixels margin")]
    WindowTooSmall { width: i32, height: i32, margin: i32 },

    #[error("the minimum number of edges ({min}) is larger than the maximum ({max})")]
    DegreeRange { min: usize, max: usize },

    #[error("a vertex cannot have {max} edges in a graph of {vertexes} vertexes")]
    DegreeTooLarge { max: usize, vertexes: usize },

    #[error("the edge length percentage must be in ]0, 1], got {0}")]
    EdgeLengthPercent(f64),

    #[error("cannot read the configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters of a game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of vertexes in the graph.
    pub vertexes: usize,

    /// Width of the game window in pixels.
    pub window_width: i32,

    /// Height of the game window in pixels.
    pub window_height: i32,

    /// Number of pixels to keep clear along the window borders.
    pub margin: i32,

    /// Minimum distance between two vertexes.
    pub min_vertex_distance: i32,

    /// Minimum number of edges per vertex.
    pub min_edges: usize,

    /// Maximum number of edges per vertex.
    pub max_edges: usize,

    /// Edges cannot be longer than that percentage of the largest window dimension.
    ///
    /// With the other defaults, about two single generations out of five run out of tries
    /// while creating the edges. [`GameConfig::generation_attempts`] absorbs those failures.
    pub edge_length_percent: f64,

    /// If `false`, the same graph is produced every time.
    pub randomize: bool,

    /// Seed for the random number generator. Takes precedence over `randomize`.
    pub seed: Option<u64>,

    /// Number of whole-graph generations that [`crate::generator::initialize_graph`] tries
    /// before reporting the last error. `1` disables the regeneration: the vertex and edge
    /// generators then only get their own bounded tries.
    pub generation_attempts: usize,

    /// Maximum distance in pixels between a click and the selected edge.
    pub click_tolerance: f64,

    pub cut_player: PlayerType,
    pub short_player: PlayerType,

    /// Player who starts. Chosen at random if not set.
    pub first_player: Option<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vertexes: 5,
            window_width: 800,
            window_height: 500,
            margin: 30,
            min_vertex_distance: 30,
            min_edges: 3,
            max_edges: 4,
            edge_length_percent: 0.7,
            randomize: true,
            seed: None,
            generation_attempts: 20,
            click_tolerance: CLICK_TOLERANCE,
            cut_player: PlayerType::Ai,
            short_player: PlayerType::Human,
            first_player: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Configuration file: {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: GameConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Reject the parameters that can never produce a graph.
    ///
    /// Parameters that are only too tight (too many vertexes for the window, for example) are
    /// detected later, during generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertexes < 2 {
            return Err(ConfigError::TooFewVertexes(self.vertexes));
        }
        if self.window_width <= 2 * self.margin || self.window_height <= 2 * self.margin {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                margin: self.margin,
            });
        }
        if self.min_edges > self.max_edges {
            return Err(ConfigError::DegreeRange {
                min: self.min_edges,
                max: self.max_edges,
            });
        }
        if self.max_edges >= self.vertexes {
            return Err(ConfigError::DegreeTooLarge {
                max: self.max_edges,
                vertexes: self.vertexes,
            });
        }
        if !(self.edge_length_percent > 0.0 && self.edge_length_percent <= 1.0) {
            return Err(ConfigError::EdgeLengthPercent(self.edge_length_percent));
        }
        Ok(())
    }

    /// Maximum length of an edge in pixels.
    pub fn max_edge_length(&self) -> i32 {
        (f64::from(self.window_width.max(self.window_height)) * self.edge_length_percent) as i32
    }

    /// Return the random number generator for the game.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None if self.randomize => StdRng::from_os_rng(),
            None => StdRng::seed_from_u64(DEFAULT_SEED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(800, 500, 0.5, 400)]
    #[case(300, 600, 0.5, 300)]
    #[case(800, 500, 1.0, 800)]
    fn edge_length_follows_the_largest_dimension(
        #[case] window_width: i32,
        #[case] window_height: i32,
        #[case] edge_length_percent: f64,
        #[case] expected: i32,
    ) {
        let config = GameConfig {
            window_width,
            window_height,
            edge_length_percent,
            ..GameConfig::default()
        };
        assert_eq!(config.max_edge_length(), expected);
    }

    #[rstest]
    #[case(GameConfig { vertexes: 1, ..GameConfig::default() })]
    #[case(GameConfig { margin: 250, ..GameConfig::default() })]
    #[case(GameConfig { min_edges: 4, max_edges: 3, ..GameConfig::default() })]
    #[case(GameConfig { max_edges: 5, ..GameConfig::default() })]
    #[case(GameConfig { edge_length_percent: 0.0, ..GameConfig::default() })]
    #[case(GameConfig { edge_length_percent: 1.5, ..GameConfig::default() })]
    #[case(GameConfig { edge_length_percent: f64::NAN, ..GameConfig::default() })]
    fn invalid_parameters(#[case] config: GameConfig) {
        assert!(config.validate().is_err());
    }

    #[test]
    fn fixed_generator_without_randomize() {
        let config = GameConfig {
            randomize: false,
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn seed_takes_precedence() {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = StdRng::seed_from_u64(7).random();
        assert_eq!(a, b);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "vertexes": 8, "cut_player": "human", "first_player": "short" }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();

        assert_eq!(config.vertexes, 8);
        assert_eq!(config.cut_player, PlayerType::Human);
        assert_eq!(config.first_player, Some(Player::Short));
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn malformed_file_is_reported() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{ \"vertexes\": ").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = GameConfig::from_file(Path::new("/nonexistent/shannon.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
