/*
cli_options.rs

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

//! Process command-line options.
//!
//! The options override the values of the configuration file, which override the default
//! values.
//!
//! # Examples
//!
//! Print a reproducible graph without playing:
//!
//! ```
//! $ shannon-switch --no-randomize --print-graph
//! VERTEX   0:   X=  77    Y= 108  start
//! ...
//! ```
//!
//! Let the computer play both sides of a game with eight vertexes:
//!
//! ```
//! $ shannon-switch --vertexes 8 --min-edges 2 --max-edges 3 --cut ai --short ai
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use shannon_switch::config::{ConfigError, GameConfig};
use shannon_switch::game::{Player, PlayerType};

/// Play the Shannon switching game in a terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of vertexes in the graph
    #[arg(short = 'n', long)]
    vertexes: Option<usize>,

    /// Width of the game area
    #[arg(long)]
    width: Option<i32>,

    /// Height of the game area
    #[arg(long)]
    height: Option<i32>,

    /// Number of pixels to keep clear along the borders
    #[arg(long)]
    margin: Option<i32>,

    /// Minimum distance between two vertexes
    #[arg(long)]
    min_distance: Option<i32>,

    /// Minimum number of edges per vertex
    #[arg(long)]
    min_edges: Option<usize>,

    /// Maximum number of edges per vertex
    #[arg(long)]
    max_edges: Option<usize>,

    /// Maximum edge length, as a percentage of the largest dimension (0.0 to 1.0)
    #[arg(long)]
    edge_length_percent: Option<f64>,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate the same graph every time
    #[arg(long, default_value_t = false)]
    no_randomize: bool,

    /// Who plays for the Cut player
    #[arg(value_enum, long)]
    cut: Option<PlayerType>,

    /// Who plays for the Short player
    #[arg(value_enum, long)]
    short: Option<PlayerType>,

    /// Player who starts (random if not set)
    #[arg(value_enum, short, long)]
    first: Option<Player>,

    /// Print the generated graph and exit
    #[arg(short, long, default_value_t = false)]
    print_graph: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options for the application.
pub struct Options {
    pub config: GameConfig,
    pub print_graph: bool,
}

/// Parse the command-line options, initialize the logger, and build the configuration.
///
/// # Errors
///
/// The function returns an error if the configuration file cannot be read, or if the resulting
/// configuration is not valid.
pub fn parse() -> Result<Options, ConfigError> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut config: GameConfig = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(v) = args.vertexes {
        config.vertexes = v;
    }
    if let Some(v) = args.width {
        config.window_width = v;
    }
    if let Some(v) = args.height {
        config.window_height = v;
    }
    if let Some(v) = args.margin {
        config.margin = v;
    }
    if let Some(v) = args.min_distance {
        config.min_vertex_distance = v;
    }
    if let Some(v) = args.min_edges {
        config.min_edges = v;
    }
    if let Some(v) = args.max_edges {
        config.max_edges = v;
    }
    if let Some(v) = args.edge_length_percent {
        config.edge_length_percent = v;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_randomize {
        config.randomize = false;
    }
    if let Some(v) = args.cut {
        config.cut_player = v;
    }
    if let Some(v) = args.short {
        config.short_player = v;
    }
    if args.first.is_some() {
        config.first_player = args.first;
    }

    config.validate()?;
    Ok(Options {
        config,
        print_graph: args.print_graph,
    })
}
