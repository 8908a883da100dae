/*
console.rs

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

//! Play the game in a terminal.
//!
//! The graph is printed as a list of vertexes and edges.
//! AI players play automatically. Human players type either the coordinates of a click (`X Y`)
//! or the two vertexes of an edge (`A-B`).

use log::debug;
use std::io::{self, BufRead, Write};

use crate::game::{Game, Outcome};
use crate::generator::graph::{EdgeState, Graph};
use crate::player_input::Selection;

const HELP: &str = "Select an edge with `X Y` (click location) or `A-B` (vertexes). \
                    `p` prints the graph, `q` quits.";

/// Print the vertexes and the edges of the graph.
pub fn print_graph<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    for (i, v) in graph.vertexes().iter().enumerate() {
        writeln!(
            out,
            "VERTEX {i:>3}:   X={:>4}    Y={:>4}  {}",
            v.position.x, v.position.y, v.role
        )?;
    }
    for (v1, v2, state) in graph.edges() {
        match state {
            EdgeState::Locked => writeln!(out, "EDGE   {v1:>3}-{v2:<3} locked")?,
            _ => writeln!(out, "EDGE   {v1:>3}-{v2:<3}")?,
        }
    }
    Ok(())
}

/// Run the game until a player wins or the input ends.
///
/// Return the outcome of the game when the loop stops.
pub fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, out: &mut W) -> io::Result<Outcome> {
    let mut line: String = String::new();

    print_graph(out, game.graph())?;
    writeln!(out, "{HELP}")?;

    loop {
        writeln!(out, "{}", game.status())?;
        if game.outcome().is_terminal() {
            break;
        }

        if game.is_ai_turn() {
            let result = game.apply_ai_move();
            match result.played {
                Some(m) => writeln!(out, "{m}")?,
                None => {
                    writeln!(out, "{} has no move left.", game.active_player())?;
                    break;
                }
            }
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        match line.trim() {
            "q" | "quit" => break,
            "p" | "print" => print_graph(out, game.graph())?,
            "h" | "help" | "?" => writeln!(out, "{HELP}")?,
            s => match s.parse::<Selection>() {
                Ok(selection) => {
                    let result = game.apply_human_move(&selection);
                    match result.played {
                        Some(m) => writeln!(out, "{m}")?,
                        None => writeln!(out, "No open edge there, try again.")?,
                    }
                }
                Err(e) => writeln!(out, "{e}. {HELP}")?,
            },
        }
    }
    Ok(game.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, PlayerType};
    use crate::generator::vertexes::Vertex;
    use std::io::Cursor;

    fn triangle_game() -> Game {
        let mut graph = Graph::with_vertexes(vec![
            Vertex::new(50, 50),
            Vertex::new(150, 50),
            Vertex::new(150, 150),
        ]);
        graph.set_edge_pair(0, 1, EdgeState::Locked);
        graph.set_edge_pair(1, 2, EdgeState::Normal);
        graph.set_edge_pair(0, 2, EdgeState::Normal);
        Game::new(graph)
    }

    fn play(game: &mut Game, input: &str) -> (Outcome, String) {
        let mut out: Vec<u8> = Vec::new();
        let outcome = run(game, Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn graph_listing() {
        let mut out: Vec<u8> = Vec::new();
        print_graph(&mut out, triangle_game().graph()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("VERTEX   0:   X=  50    Y=  50  normal"));
        assert!(text.contains("EDGE     0-1   locked"));
        assert!(text.contains("EDGE     0-2  \n"));
        assert!(!text.contains("1-0"));
    }

    #[test]
    fn human_plays_until_end_of_input() {
        let mut game = triangle_game();
        let (outcome, text) = play(&mut game, "oops\n0-1\n");

        assert_eq!(outcome, Outcome::InProgress);
        assert!(text.contains("Cut's turn (Human)"));
        assert!(text.contains("expected `X Y` for a click or `A-B` for an edge, got `oops`"));
        assert!(text.contains("No open edge there, try again."));
        assert!(game.history().is_empty());
    }

    #[test]
    fn short_wins_by_naming_an_edge() {
        let mut game = triangle_game();
        game.set_active_player(Player::Short).unwrap();
        let (outcome, text) = play(&mut game, "2-1\nq\n");
        assert_eq!(outcome, Outcome::ShortWins);
        assert!(text.contains("Short locks edge 2-1"));
        assert!(text.ends_with("Short player wins.\n"));
    }

    #[test]
    fn ai_answers_the_human() {
        let mut graph = Graph::with_vertexes(vec![
            Vertex::new(50, 50),
            Vertex::new(150, 50),
            Vertex::new(250, 50),
            Vertex::new(350, 50),
        ]);
        graph.set_edge_pair(0, 1, EdgeState::Normal);
        graph.set_edge_pair(1, 3, EdgeState::Normal);
        graph.set_edge_pair(0, 2, EdgeState::Normal);
        graph.set_edge_pair(2, 3, EdgeState::Normal);
        let mut game = Game::new(graph);
        game.set_player_type(Player::Cut, PlayerType::Ai);
        game.set_player_type(Player::Short, PlayerType::Human);

        let (outcome, text) = play(&mut game, "3-2\n1-0\nq\n");
        assert!(text.contains("Cut removes edge 3-1"));
        assert!(text.contains("Short locks edge 3-2"));
        assert_eq!(outcome, game.outcome());
    }
}
