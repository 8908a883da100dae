/*
ai_player.rs

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

//! Moves of the computer player.
//!
//! Both the Cut and the Short AI players use the same strategy: they compute the shortest path
//! between the starting and the ending vertexes, and then select the first normal edge along that
//! path, starting from the ending vertex.
//! The Short player locks that edge, so that the next turns extend the locked path or start a
//! new one if a shorter path appears.
//! The Cut player removes that edge.

use log::debug;

use crate::generator::graph::{EdgeState, Graph};
use crate::generator::path::Path;
use crate::shortest_path::shortest_path;

/// Return the first normal edge along the path, in path order.
///
/// Return [`None`] when all the edges of the path are already locked (or removed).
pub fn select_edge(graph: &Graph, path: &Path) -> Option<(usize, usize)> {
    path.edges()
        .find(|(v1, v2)| graph.get_edge(*v1, *v2) == EdgeState::Normal)
}

/// Choose the edge to play for the AI player.
///
/// Return [`None`] when no move is available: the starting and ending vertexes are not connected
/// anymore, or the shortest path is fully locked.
pub fn choose_edge(graph: &Graph) -> Option<(usize, usize)> {
    let Some(path) = shortest_path(graph) else {
        debug!("AI: no path between the starting and the ending vertexes");
        return None;
    };
    debug!("AI: shortest path {:?}", path.get());
    select_edge(graph, &path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_normal_edge_from_the_ending_vertex() {
        let mut graph = Graph::new(3);
        graph.set_edge_pair(0, 1, EdgeState::Normal);
        graph.set_edge_pair(1, 2, EdgeState::Normal);

        let path = Path::from_vec(&[2, 1, 0]);
        assert_eq!(select_edge(&graph, &path), Some((2, 1)));
        assert_eq!(choose_edge(&graph), Some((2, 1)));
    }

    #[test]
    fn locked_edges_are_skipped() {
        let mut graph = Graph::new(4);
        graph.set_edge_pair(0, 1, EdgeState::Normal);
        graph.set_edge_pair(1, 2, EdgeState::Locked);
        graph.set_edge_pair(2, 3, EdgeState::Locked);

        assert_eq!(choose_edge(&graph), Some((1, 0)));
    }

    #[test]
    fn fully_locked_path_has_no_move() {
        let mut graph = Graph::new(3);
        graph.set_edge_pair(0, 1, EdgeState::Locked);
        graph.set_edge_pair(1, 2, EdgeState::Locked);

        assert_eq!(select_edge(&graph, &Path::from_vec(&[2, 1, 0])), None);
        assert_eq!(choose_edge(&graph), None);
    }

    #[test]
    fn removed_edge_on_a_stale_path_is_skipped() {
        let mut graph = Graph::new(3);
        graph.set_edge_pair(1, 2, EdgeState::NoEdge);
        graph.set_edge_pair(0, 1, EdgeState::Normal);

        assert_eq!(select_edge(&graph, &Path::from_vec(&[2, 1, 0])), Some((1, 0)));
    }

    #[test]
    fn disconnected_graph_has_no_move() {
        let mut graph = Graph::new(3);
        graph.set_edge_pair(0, 1, EdgeState::Normal);

        assert_eq!(choose_edge(&graph), None);
        assert_eq!(select_edge(&graph, &Path::default()), None);
    }
}
