/*
vertexes.rs

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

//! Vertexes of the game graph and their random layout in the game window.

use log::debug;
use rand::Rng;
use std::fmt;

use super::GenerationError;

/// Number of random locations to try for a vertex before giving up.
pub const MAX_TRIES_TO_SET_LOCATION: usize = 1000;

/// Vertexes are sorted by their distance from that point.
const ORIGIN: Point = Point { x: 0, y: 0 };

/// Location in the game window, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Distance between two points, truncated to an integer.
    pub fn distance(&self, other: &Point) -> i32 {
        let dx: f64 = f64::from(self.x) - f64::from(other.x);
        let dy: f64 = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt() as i32
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Role of a vertex in the game.
///
/// The Short player tries to connect the `Start` vertex to the `Ending` vertex.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VertexRole {
    #[default]
    Normal,
    Start,
    Ending,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VertexRole::Normal => write!(f, "normal"),
            VertexRole::Start => write!(f, "start"),
            VertexRole::Ending => write!(f, "ending"),
        }
    }
}

/// Vertex payload.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    pub position: Point,
    pub role: VertexRole,
}

impl Vertex {
    /// Create a [`Vertex`] object with the normal role.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            role: VertexRole::Normal,
        }
    }
}

/// Place vertexes at random locations in the game window.
pub struct VertexLayout {
    /// Number of vertexes to place.
    pub num_vertexes: usize,

    /// Width of the game window.
    pub width: i32,

    /// Height of the game window.
    pub height: i32,

    /// Number of pixels to keep clear along the window borders.
    pub margin: i32,

    /// Vertexes must be farther than that distance from each other.
    pub min_distance: i32,

    /// Total number of locations tried during the last generation.
    pub iteration: usize,
}

impl VertexLayout {
    /// Create the object.
    pub fn new(num_vertexes: usize, width: i32, height: i32, margin: i32, min_distance: i32) -> Self {
        Self {
            num_vertexes,
            width,
            height,
            margin,
            min_distance,
            iteration: 0,
        }
    }

    /// Generate and return the vertexes.
    ///
    /// The returned vertexes are sorted by their distance from the window origin.
    /// The first vertex is the starting vertex, and the last one is the ending vertex.
    ///
    /// # Errors
    ///
    /// The method returns an error if the margins leave no room for the vertexes, or if a vertex
    /// cannot be placed far enough from the others after [`MAX_TRIES_TO_SET_LOCATION`] tries.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Vertex>, GenerationError> {
        self.iteration = 0;
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(GenerationError::EmptyArea {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }

        let mut vertexes: Vec<Vertex> = Vec::with_capacity(self.num_vertexes);
        for i in 0..self.num_vertexes {
            let vertex: Vertex = self.place(&vertexes, rng).ok_or(
                GenerationError::VertexPlacementExhausted {
                    vertex: i,
                    attempts: MAX_TRIES_TO_SET_LOCATION,
                },
            )?;
            debug!("Vertex {i} placed at {}", vertex.position);
            vertexes.push(vertex);
        }

        vertexes.sort_by_key(|v| v.position.distance(&ORIGIN));
        if let Some(v) = vertexes.first_mut() {
            v.role = VertexRole::Start;
        }
        if vertexes.len() > 1
            && let Some(v) = vertexes.last_mut()
        {
            v.role = VertexRole::Ending;
        }
        Ok(vertexes)
    }

    /// Find a location far enough from the already placed vertexes.
    fn place<R: Rng + ?Sized>(&mut self, placed: &[Vertex], rng: &mut R) -> Option<Vertex> {
        for _ in 0..MAX_TRIES_TO_SET_LOCATION {
            self.iteration += 1;
            let vertex: Vertex = self.random_location(rng);
            if !self.too_close(&vertex, placed) {
                return Some(vertex);
            }
        }
        None
    }

    /// Random location inside the margins.
    fn random_location<R: Rng + ?Sized>(&self, rng: &mut R) -> Vertex {
        Vertex::new(
            rng.random_range(self.margin..self.width - self.margin),
            rng.random_range(self.margin..self.height - self.margin),
        )
    }

    /// Whether the vertex is at the minimum distance, or closer, from another vertex.
    fn too_close(&self, vertex: &Vertex, placed: &[Vertex]) -> bool {
        placed
            .iter()
            .any(|v| v.position.distance(&vertex.position) <= self.min_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0, 0), Point::new(3, 4), 5)]
    #[case(Point::new(10, 10), Point::new(10, 10), 0)]
    #[case(Point::new(0, 0), Point::new(1, 1), 1)]
    #[case(Point::new(-2, 0), Point::new(0, 2), 2)]
    fn distance_is_truncated(#[case] p1: Point, #[case] p2: Point, #[case] expected: i32) {
        assert_eq!(p1.distance(&p2), expected);
        assert_eq!(p2.distance(&p1), expected);
    }

    #[test]
    fn vertexes_are_sorted_from_origin() {
        let mut layout = VertexLayout::new(8, 800, 500, 30, 30);
        let vertexes = layout.generate(&mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(vertexes.len(), 8);
        assert!(
            vertexes
                .windows(2)
                .all(|w| w[0].position.distance(&ORIGIN) <= w[1].position.distance(&ORIGIN))
        );
        assert_eq!(vertexes[0].role, VertexRole::Start);
        assert_eq!(vertexes[7].role, VertexRole::Ending);
        assert!(layout.iteration >= 8);
    }

    #[rstest]
    #[case(60, 500, 30)]
    #[case(500, 60, 30)]
    #[case(40, 40, 20)]
    fn no_room_inside_margins(#[case] width: i32, #[case] height: i32, #[case] margin: i32) {
        let mut layout = VertexLayout::new(3, width, height, margin, 5);
        assert_eq!(
            layout.generate(&mut StdRng::seed_from_u64(0)),
            Err(GenerationError::EmptyArea {
                width,
                height,
                margin
            })
        );
    }

    #[test]
    fn second_vertex_cannot_fit() {
        // The placement area is 10x10 pixels, so two vertexes are never 50 pixels apart
        let mut layout = VertexLayout::new(2, 30, 30, 10, 50);
        assert_eq!(
            layout.generate(&mut StdRng::seed_from_u64(5)),
            Err(GenerationError::VertexPlacementExhausted {
                vertex: 1,
                attempts: MAX_TRIES_TO_SET_LOCATION
            })
        );
        assert_eq!(layout.iteration, 1 + MAX_TRIES_TO_SET_LOCATION);
    }
}
