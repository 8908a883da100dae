/*
player_input.rs

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

//! Resolve the input of a human player into an edge of the game graph.
//!
//! A human player selects an edge either by clicking close to it (a point in window
//! coordinates), or by naming its two vertexes.
//! Only normal edges can be selected: locked edges are permanent, and removed edges are gone.

use log::debug;
use std::str::FromStr;
use thiserror::Error;

use crate::generator::graph::{EdgeState, Graph};
use crate::generator::vertexes::Point;

/// Maximum distance in pixels between a click and the selected edge.
pub const CLICK_TOLERANCE: f64 = 5.0;

/// Input of a human player.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Selection {
    /// Click at the given location.
    Click(Point),

    /// Edge between the two given vertexes.
    Edge(usize, usize),
}

/// Type of errors when parsing a [`Selection`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("empty input")]
    Empty,

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("expected `X Y` for a click or `A-B` for an edge, got `{0}`")]
    Format(String),
}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    /// Parse `X Y` (or `X,Y`) as a click and `A-B` as an edge.
    ///
    /// Two signed numbers always make a click, so `-5 100` and `3 -4` are clicks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: &str = s.trim();
        if s.is_empty() {
            return Err(ParseSelectionError::Empty);
        }

        let fields: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        if let [x, y] = fields[..]
            && let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>())
        {
            return Ok(Selection::Click(Point::new(x, y)));
        }

        if let Some((a, b)) = s.split_once('-') {
            return Ok(Selection::Edge(parse_number(a)?, parse_number(b)?));
        }

        match fields[..] {
            [x, y] => Ok(Selection::Click(Point::new(
                parse_number(x)?,
                parse_number(y)?,
            ))),
            _ => Err(ParseSelectionError::Format(s.to_string())),
        }
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseSelectionError> {
    let s: &str = s.trim();
    s.parse()
        .map_err(|_| ParseSelectionError::NotANumber(s.to_string()))
}

/// Return the distance between the click and the segment, or [`None`] if the perpendicular
/// projection of the click falls outside the segment.
pub fn distance_to_edge(p1: Point, p2: Point, click: Point) -> Option<f64> {
    // Coordinates are widened before subtracting so far-off clicks cannot overflow
    let dx: f64 = f64::from(p2.x) - f64::from(p1.x);
    let dy: f64 = f64::from(p2.y) - f64::from(p1.y);
    let length2: f64 = dx * dx + dy * dy;
    if length2 == 0.0 {
        return None;
    }

    // Parameter of the projected point along the segment
    let cx: f64 = f64::from(click.x) - f64::from(p1.x);
    let cy: f64 = f64::from(click.y) - f64::from(p1.y);
    let t: f64 = (cx * dx + cy * dy) / length2;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let on_x: f64 = f64::from(p1.x) + dx * t;
    let on_y: f64 = f64::from(p1.y) + dy * t;
    let dx2: f64 = f64::from(click.x) - on_x;
    let dy2: f64 = f64::from(click.y) - on_y;
    Some((dx2 * dx2 + dy2 * dy2).sqrt())
}

/// Find the normal edge closest to the click, within `tolerance` pixels.
///
/// When several edges are at the same distance, the edge with the lowest vertex indexes wins.
/// The returned edge has its lowest vertex first.
pub fn find_nearest_edge(graph: &Graph, click: Point, tolerance: f64) -> Option<(usize, usize)> {
    let mut nearest: Option<(usize, usize, f64)> = None;

    for (v1, v2, state) in graph.edges() {
        if state != EdgeState::Normal {
            continue;
        }
        let Some(d) = distance_to_edge(
            graph.vertex(v1).position,
            graph.vertex(v2).position,
            click,
        ) else {
            continue;
        };
        if d <= tolerance && nearest.is_none_or(|(_, _, best)| d < best) {
            nearest = Some((v1, v2, d));
        }
    }

    match nearest {
        Some((v1, v2, d)) => {
            debug!("Click {click} selects edge {v1}-{v2} (distance {d:.2})");
            Some((v1, v2))
        }
        None => {
            debug!("Click {click}: no edge");
            None
        }
    }
}

/// Return the edge that the player selected, or [`None`] if the selection does not designate a
/// normal edge.
pub fn resolve(graph: &Graph, selection: &Selection, tolerance: f64) -> Option<(usize, usize)> {
    match *selection {
        Selection::Click(point) => find_nearest_edge(graph, point, tolerance),
        Selection::Edge(v1, v2) => {
            let n: usize = graph.num_vertexes();
            if v1 < n && v2 < n && v1 != v2 && graph.get_edge(v1, v2) == EdgeState::Normal {
                Some((v1, v2))
            } else {
                debug!("Edge {v1}-{v2} cannot be selected");
                None
            }
        }
    }
}
