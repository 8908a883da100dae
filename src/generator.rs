/*
generator.rs

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

//! Generate the game graph.
//!
//! A game graph is built in two steps:
//!
//! * The vertexes are placed at random locations inside the game window by a
//!   [`vertexes::VertexLayout`] object.
//!   The locations honor the window margins and a minimum distance between vertexes.
//!   The vertexes are then sorted by their distance from the origin: the closest one becomes the
//!   starting vertex and the farthest one becomes the ending vertex.
//!
//! * Random edges are added by an [`edges::EdgeBuilder`] object.
//!   Each vertex gets a random number of edges within a range, and edges cannot be longer than a
//!   percentage of the window size.
//!
//! Both steps retry a bounded number of times before giving up with a [`GenerationError`].
//! An error means that the parameters are too tight (too many vertexes for the window, too many
//! edges for the allowed edge length, ...).
//! [`initialize_graph`] regenerates the whole graph a configurable number of times before
//! reporting the error.

pub mod edges;
pub mod graph;
pub mod path;
pub mod vertexes;

use log::{Level, debug, log_enabled, warn};
use rand::Rng;
use thiserror::Error;

use crate::config::GameConfig;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The window, once the margins are removed, has no room for vertexes.
    #[error("no room for vertexes in a {width}x{height} window with a {margin} pixels margin")]
    EmptyArea { width: i32, height: i32, margin: i32 },

    /// No location far enough from the other vertexes could be found.
    #[error("cannot place vertex {vertex}: too many tries ({attempts})")]
    VertexPlacementExhausted { vertex: usize, attempts: usize },

    /// No eligible destination vertex could be found for a new edge.
    #[error("cannot create an edge for vertex {vertex}: too many tries ({attempts})")]
    EdgeCreationExhausted { vertex: usize, attempts: usize },
}

/// Generate a graph with the provided random number generator.
///
/// This is a single attempt: the graph is not regenerated when the vertex or the edge
/// generator runs out of tries.
///
/// # Errors
///
/// The function returns an error when the vertexes or the edges cannot be created within their
/// bounded number of tries.
pub fn generate_graph<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<graph::Graph, GenerationError> {
    let mut layout: vertexes::VertexLayout = vertexes::VertexLayout::new(
        config.vertexes,
        config.window_width,
        config.window_height,
        config.margin,
        config.min_vertex_distance,
    );
    let mut graph: graph::Graph = graph::Graph::with_vertexes(layout.generate(rng)?);

    let mut builder: edges::EdgeBuilder = edges::EdgeBuilder::new(
        config.min_edges,
        config.max_edges,
        config.max_edge_length(),
    );
    builder.generate(&mut graph, rng)?;

    debug!(
        "Graph generated: {} tries for the vertexes, {} tries for the edges",
        layout.iteration, builder.iteration
    );
    Ok(graph)
}

/// Build the game graph from the configuration.
///
/// The random number generator comes from [`GameConfig::rng`], so that a non-randomized
/// configuration always gives the same graph.
/// The graph is regenerated up to [`GameConfig::generation_attempts`] times.
///
/// # Errors
///
/// Return the error of the last attempt when no attempt succeeded.
pub fn initialize_graph(config: &GameConfig) -> Result<graph::Graph, GenerationError> {
    let mut rng = config.rng();
    initialize_graph_with_rng(config, &mut rng)
}

/// Same as [`initialize_graph`], but with the provided random number generator.
pub fn initialize_graph_with_rng<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<graph::Graph, GenerationError> {
    let attempts: usize = config.generation_attempts.max(1);
    let mut attempt: usize = 1;

    loop {
        match generate_graph(config, rng) {
            Ok(graph) => {
                if log_enabled!(Level::Debug) {
                    graph.debug();
                }
                return Ok(graph);
            }
            Err(e) => {
                if attempt >= attempts {
                    return Err(e);
                }
                warn!("Attempt {attempt}/{attempts} to generate the graph failed: {e}");
                attempt += 1;
            }
        }
    }
}
