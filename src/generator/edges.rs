/*
edges.rs

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

//! Random edges between the vertexes of the game graph.

use log::debug;
use rand::Rng;

use super::GenerationError;
use super::graph::{EdgeState, Graph};

/// Number of random destination vertexes to try for an edge before giving up.
pub const MAX_TRIES_TO_CREATE_EDGE: usize = 1000;

/// Add random edges to a graph.
///
/// Each vertex gets a random number of edges in the `[min_edges, max_edges]` range.
/// Because the edges added for a vertex also count for its neighbors, a vertex might end up with
/// more than `max_edges` edges.
pub struct EdgeBuilder {
    /// Minimum number of edges per vertex.
    pub min_edges: usize,

    /// Maximum number of edges per vertex.
    pub max_edges: usize,

    /// Edges cannot be longer than that.
    pub max_edge_length: i32,

    /// Total number of destination vertexes tried during the last generation.
    pub iteration: usize,
}

impl EdgeBuilder {
    /// Create the object. A maximum lower than the minimum is raised to the minimum.
    pub fn new(min_edges: usize, max_edges: usize, max_edge_length: i32) -> Self {
        Self {
            min_edges,
            max_edges: max_edges.max(min_edges),
            max_edge_length,
            iteration: 0,
        }
    }

    /// Add the edges to the graph.
    ///
    /// The vertexes are processed in order, so that a given random number generator seed always
    /// gives the same edges.
    ///
    /// # Errors
    ///
    /// The method returns an error if no eligible destination vertex is found after
    /// [`MAX_TRIES_TO_CREATE_EDGE`] tries.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        graph: &mut Graph,
        rng: &mut R,
    ) -> Result<(), GenerationError> {
        self.iteration = 0;

        for vertex in 0..graph.num_vertexes() {
            let existing_edges: usize = graph.degree(vertex);
            let desired_edges: usize = rng.random_range(self.min_edges..=self.max_edges);

            for _ in existing_edges..desired_edges {
                let to: usize = self.find_destination(graph, vertex, rng).ok_or(
                    GenerationError::EdgeCreationExhausted {
                        vertex,
                        attempts: MAX_TRIES_TO_CREATE_EDGE,
                    },
                )?;
                debug!("Edge {vertex}-{to} created");
                graph.set_edge_pair(vertex, to, EdgeState::Normal);
            }
        }
        Ok(())
    }

    /// Pick a random vertex that can be connected to the given vertex.
    fn find_destination<R: Rng + ?Sized>(
        &mut self,
        graph: &Graph,
        vertex: usize,
        rng: &mut R,
    ) -> Option<usize> {
        let from = graph.vertex(vertex).position;

        for _ in 0..MAX_TRIES_TO_CREATE_EDGE {
            self.iteration += 1;
            let to: usize = rng.random_range(0..graph.num_vertexes());
            if to == vertex || graph.get_edge(vertex, to) != EdgeState::NoEdge {
                continue;
            }
            if from.distance(&graph.vertex(to).position) <= self.max_edge_length {
                return Some(to);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vertexes::Vertex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    /// Four vertexes on a line, 100 pixels apart.
    fn line_graph() -> Graph {
        Graph::with_vertexes(vec![
            Vertex::new(0, 0),
            Vertex::new(100, 0),
            Vertex::new(200, 0),
            Vertex::new(300, 0),
        ])
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 3)]
    #[case(2, 3)]
    #[case(3, 3)]
    fn every_vertex_gets_the_minimum_degree(#[case] min_edges: usize, #[case] max_edges: usize) {
        for seed in 0..20 {
            let mut graph = line_graph();
            let mut builder = EdgeBuilder::new(min_edges, max_edges, 1000);
            builder
                .generate(&mut graph, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            assert!(graph.is_consistent());
            assert!((0..4).all(|v| graph.degree(v) >= min_edges));
        }
    }

    #[test]
    fn edges_respect_the_maximum_length() {
        // Only the direct neighbors on the line are close enough
        for seed in 0..20 {
            let mut graph = line_graph();
            let mut builder = EdgeBuilder::new(1, 2, 150);
            if builder
                .generate(&mut graph, &mut StdRng::seed_from_u64(seed))
                .is_ok()
            {
                for (v1, v2, state) in graph.edges() {
                    assert_eq!(state, EdgeState::Normal);
                    assert_eq!(v2 - v1, 1);
                }
            }
        }
    }

    #[test]
    fn end_vertex_cannot_get_two_short_edges() {
        // Vertex 0 has only one neighbor closer than 150 pixels
        let mut graph = line_graph();
        let mut builder = EdgeBuilder::new(2, 2, 150);
        assert_eq!(
            builder.generate(&mut graph, &mut StdRng::seed_from_u64(1)),
            Err(GenerationError::EdgeCreationExhausted {
                vertex: 0,
                attempts: MAX_TRIES_TO_CREATE_EDGE
            })
        );
    }

    #[test]
    fn existing_edges_count_toward_the_degree() {
        let mut graph = line_graph();
        graph.set_edge_pair(0, 1, EdgeState::Locked);
        graph.set_edge_pair(0, 2, EdgeState::Normal);
        let mut builder = EdgeBuilder::new(1, 2, 1000);
        builder
            .generate(&mut graph, &mut StdRng::seed_from_u64(8))
            .unwrap();

        // Vertex 0 already had two edges, so the builder never picked it as a source
        assert_eq!(graph.get_edge(0, 1), EdgeState::Locked);
        assert!(graph.is_consistent());
    }
}
