/*
main.rs

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

mod cli_options;

use log::{debug, error};
use std::io;
use std::process::ExitCode;

use shannon_switch::console;
use shannon_switch::game::Game;

fn main() -> ExitCode {
    let options: cli_options::Options = match cli_options::parse() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    // The generation gives up when the parameters are too tight (too many vertexes for the
    // window, edges too short for the requested number of edges, ...)
    let mut game: Game = match Game::from_config(&options.config) {
        Ok(g) => g,
        Err(e) => {
            error!("Cannot generate the graph: {e}");
            eprintln!("Error: cannot generate the graph: {e}");
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.print_graph {
        return match console::print_graph(&mut out, game.graph()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match console::run(&mut game, io::stdin().lock(), &mut out) {
        Ok(outcome) => {
            debug!("Final outcome: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
