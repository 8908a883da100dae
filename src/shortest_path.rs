/*
shortest_path.rs

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

//! Shortest path from the starting vertex.
//!
//! The game uses the shortest path between the starting and the ending vertexes twice:
//!
//! * To decide who wins.
//!   When no path remains in the graph, the Cut player wins.
//!   When a path exists in the [`locked_projection`] of the graph (only locked edges), the Short
//!   player wins.
//! * To choose the AI moves (see [`crate::ai_player`]).
//!
//! The graphs are small, so the engine scans the vertexes linearly instead of using a priority
//! queue.
//! The linear scan picks the lowest vertex index when several vertexes are at the same distance,
//! which makes the returned paths deterministic.

use crate::generator::graph::{EdgeState, Graph};
use crate::generator::path::Path;

/// Distances and predecessors from the starting vertex (vertex `0`) to all the vertexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Number of edges from the starting vertex, or [`None`] for unreachable vertexes.
    distance: Vec<Option<usize>>,

    /// Previous vertex on the shortest path from the starting vertex.
    predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Compute the shortest paths from the starting vertex.
    ///
    /// Only normal and locked edges are followed. All edges have the same weight.
    pub fn from_start(graph: &Graph) -> Self {
        let n: usize = graph.num_vertexes();
        let mut distance: Vec<Option<usize>> = vec![None; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];
        let mut visited: Vec<bool> = vec![false; n];

        if n == 0 {
            return Self {
                distance,
                predecessor,
            };
        }
        distance[graph.start_vertex()] = Some(0);

        while let Some(u) = Self::closest_unvisited(&distance, &visited) {
            visited[u] = true;
            // All the remaining vertexes are unreachable
            let Some(dist_u) = distance[u] else {
                break;
            };

            for v in graph.neighbors(u) {
                if visited[v] {
                    continue;
                }
                let alt: usize = dist_u + 1;
                if distance[v].is_none_or(|d| alt < d) {
                    distance[v] = Some(alt);
                    predecessor[v] = Some(u);
                }
            }
        }

        Self {
            distance,
            predecessor,
        }
    }

    /// Return the unvisited vertex with the smallest distance. Ties go to the lowest index.
    fn closest_unvisited(distance: &[Option<usize>], visited: &[bool]) -> Option<usize> {
        let mut closest: Option<usize> = None;

        for v in (0..distance.len()).filter(|v| !visited[*v]) {
            closest = match (closest, distance[v]) {
                (None, _) => Some(v),
                (Some(c), Some(d)) if distance[c].is_none_or(|dc| d < dc) => Some(v),
                (c, _) => c,
            };
        }
        closest
    }

    /// Number of edges between the starting vertex and the given vertex.
    pub fn distance(&self, vertex: usize) -> Option<usize> {
        self.distance.get(vertex).copied().flatten()
    }

    /// Return the path from the given vertex back to the starting vertex, or [`None`] if the
    /// vertex cannot be reached.
    pub fn path_to(&self, vertex: usize) -> Option<Path> {
        let length: usize = self.distance(vertex)?;
        let mut path: Path = Path::new(length + 1);
        let mut current: usize = vertex;

        path.push(current);
        for _ in 0..length {
            current = self.predecessor[current]?;
            path.push(current);
        }
        Some(path)
    }
}

/// Return the shortest path from the ending vertex back to the starting vertex, or [`None`] if
/// the two vertexes are not connected.
pub fn shortest_path(graph: &Graph) -> Option<Path> {
    if graph.num_vertexes() == 0 {
        return None;
    }
    ShortestPaths::from_start(graph).path_to(graph.ending_vertex())
}

/// Build a graph that only keeps the locked edges of the given graph.
///
/// In the returned graph, the locked edges become normal edges and all the other edges are
/// removed. The vertexes are copied.
pub fn locked_projection(graph: &Graph) -> Graph {
    let mut locked: Graph = Graph::with_vertexes(graph.vertexes().to_vec());

    for (v1, v2, state) in graph.edges() {
        if state == EdgeState::Locked {
            locked.set_edge_pair(v1, v2, EdgeState::Normal);
        }
    }
    locked
}
