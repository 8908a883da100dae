/*
graph.rs

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

//! Game graph: vertexes and an adjacency matrix of edge states.

use log::debug;
use std::fmt;

use super::vertexes::Vertex;

/// State of the edge between two vertexes.
///
/// - `NoEdge`: the vertexes are not connected, or the Cut player removed the edge.
/// - `Normal`: the edge is still open; both players are fighting for it.
/// - `Locked`: the Short player claimed the edge. It cannot be removed nor locked again.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EdgeState {
    #[default]
    NoEdge,
    Normal,
    Locked,
}

impl EdgeState {
    /// Whether a path can go through the edge.
    pub fn is_open(self) -> bool {
        self != EdgeState::NoEdge
    }
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgeState::NoEdge => write!(f, "none"),
            EdgeState::Normal => write!(f, "normal"),
            EdgeState::Locked => write!(f, "locked"),
        }
    }
}

/// Graph with a fixed number of vertexes.
///
/// The edges are stored in a square matrix, flattened row by row.
/// The graph does not enforce symmetry: callers that change an edge must set both the
/// `(from, to)` and the `(to, from)` entries, which is what [`Graph::set_edge_pair`] does.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Number of vertexes, fixed at creation time.
    num_vertexes: usize,

    /// Vertex payloads (location and role).
    vertexes: Vec<Vertex>,

    /// Adjacency matrix. The state of the edge from `v1` to `v2` is at `v1 * num_vertexes + v2`.
    edges: Vec<EdgeState>,
}

impl Graph {
    /// Create a [`Graph`] object with default vertexes and no edges.
    pub fn new(num_vertexes: usize) -> Self {
        Self::with_vertexes(vec![Vertex::default(); num_vertexes])
    }

    /// Create a [`Graph`] object from a list of vertexes. The graph has no edges.
    pub fn with_vertexes(vertexes: Vec<Vertex>) -> Self {
        let num_vertexes: usize = vertexes.len();
        Self {
            num_vertexes,
            vertexes,
            edges: vec![EdgeState::NoEdge; num_vertexes * num_vertexes],
        }
    }

    /// Number of vertexes in the graph.
    pub fn num_vertexes(&self) -> usize {
        self.num_vertexes
    }

    /// The starting vertex is always the first one.
    pub fn start_vertex(&self) -> usize {
        0
    }

    /// The ending vertex is always the last one.
    pub fn ending_vertex(&self) -> usize {
        self.num_vertexes.saturating_sub(1)
    }

    /// Return the vertex payload.
    pub fn vertex(&self, vertex: usize) -> &Vertex {
        &self.vertexes[vertex]
    }

    /// Return all the vertexes.
    pub fn vertexes(&self) -> &[Vertex] {
        &self.vertexes[..]
    }

    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_vertexes + to
    }

    /// Set the state of the edge from `from` to `to`.
    ///
    /// Only this direction is updated.
    pub fn set_edge(&mut self, from: usize, to: usize, state: EdgeState) {
        debug_assert!(from != to || state == EdgeState::NoEdge, "self-loop on {from}");
        let i: usize = self.index(from, to);
        self.edges[i] = state;
    }

    /// Set the state of the edge between the two vertexes, in both directions.
    pub fn set_edge_pair(&mut self, vertex1: usize, vertex2: usize, state: EdgeState) {
        self.set_edge(vertex1, vertex2, state);
        self.set_edge(vertex2, vertex1, state);
    }

    /// Return the state of the edge from `from` to `to`.
    pub fn get_edge(&self, from: usize, to: usize) -> EdgeState {
        self.edges[self.index(from, to)]
    }

    /// Number of edges (normal or locked) leaving the given vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Iterate over the vertexes connected to the given vertex by a normal or a locked edge.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[EdgeState] =
            &self.edges[vertex * self.num_vertexes..(vertex + 1) * self.num_vertexes];
        row.iter()
            .enumerate()
            .filter(|(_, state)| state.is_open())
            .map(|(v, _)| v)
    }

    /// Iterate over the existing edges, each edge only once (`from < to`).
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, EdgeState)> + '_ {
        (0..self.num_vertexes).flat_map(move |from| {
            (from + 1..self.num_vertexes)
                .map(move |to| (from, to, self.get_edge(from, to)))
                .filter(|(_, _, state)| state.is_open())
        })
    }

    /// Whether every edge has the same state in both directions and no vertex has a loop.
    pub fn is_consistent(&self) -> bool {
        (0..self.num_vertexes).all(|v1| {
            self.get_edge(v1, v1) == EdgeState::NoEdge
                && (v1 + 1..self.num_vertexes)
                    .all(|v2| self.get_edge(v1, v2) == self.get_edge(v2, v1))
        })
    }

    /// Print the vertexes and the adjacency matrix.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (i, v) in self.vertexes.iter().enumerate() {
            debug!(
                "VERTEX {i:>3}:   X={:>4}    Y={:>4}  ROLE={}",
                v.position.x, v.position.y, v.role
            );
        }
        for from in 0..self.num_vertexes {
            s.clear();
            s.push_str(&format!("FROM {from:>3}   TO:"));
            for to in 0..self.num_vertexes {
                match self.get_edge(from, to) {
                    EdgeState::NoEdge => s.push_str("  ."),
                    EdgeState::Normal => s.push_str("  1"),
                    EdgeState::Locked => s.push_str("  L"),
                }
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_has_no_edges() {
        let graph = Graph::new(5);
        assert_eq!(graph.num_vertexes(), 5);
        assert_eq!(graph.edges().count(), 0);
        assert!((0..5).all(|v| graph.degree(v) == 0));
        assert!(graph.is_consistent());
    }

    #[test]
    fn edge_pair_is_symmetric() {
        let mut graph = Graph::new(4);
        graph.set_edge_pair(1, 3, EdgeState::Normal);
        assert_eq!(graph.get_edge(1, 3), EdgeState::Normal);
        assert_eq!(graph.get_edge(3, 1), EdgeState::Normal);

        graph.set_edge_pair(3, 1, EdgeState::Locked);
        assert_eq!(graph.get_edge(1, 3), EdgeState::Locked);
        assert!(graph.is_consistent());
    }

    #[test]
    fn single_direction_breaks_consistency() {
        let mut graph = Graph::new(3);
        graph.set_edge(0, 2, EdgeState::Normal);
        assert!(!graph.is_consistent());
    }

    #[test]
    fn degree_counts_normal_and_locked_edges() {
        let mut graph = Graph::new(4);
        graph.set_edge_pair(0, 1, EdgeState::Normal);
        graph.set_edge_pair(0, 2, EdgeState::Locked);
        graph.set_edge_pair(0, 3, EdgeState::Normal);
        graph.set_edge_pair(0, 3, EdgeState::NoEdge);

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1, EdgeState::Normal), (0, 2, EdgeState::Locked)]
        );
    }

    #[test]
    fn start_and_ending_vertexes() {
        let graph = Graph::new(5);
        assert_eq!(graph.start_vertex(), 0);
        assert_eq!(graph.ending_vertex(), 4);
    }
}
