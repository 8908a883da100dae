/*
lib.rs

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

//! Shannon switching game.
//!
//! Two players take turns on a random graph. The Cut player removes an edge at each turn, and
//! the Short player locks an edge. Short wins by connecting the starting vertex to the ending
//! vertex with locked edges; Cut wins by disconnecting them.
//!
//! * [`generator`] builds the random graph.
//! * [`shortest_path`] finds the shortest path between the starting and ending vertexes. It
//!   decides who wins and guides the AI players.
//! * [`game`] runs the turns and tracks the outcome.
//! * [`console`] is a terminal front end.

pub mod ai_player;
pub mod config;
pub mod console;
pub mod game;
pub mod generator;
pub mod player_input;
pub mod shortest_path;
