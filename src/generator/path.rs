/*
path.rs

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

//! Path in the game graph.


/// Path object.
///
/// The shortest path engine builds paths by following the predecessor links from the ending
/// vertex, so the first vertex of the path is the destination and the last one is the source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    /// Path as an ordered list of vertexes.
    path: Vec<usize>,
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_vertexes),
        }
    }

    /// Create a [`Path`] object from a slice.
    pub fn from_vec(path: &[usize]) -> Self {
        Self {
            path: path.to_vec(),
        }
    }

    /// Add a vertex to the path.
    pub fn push(&mut self, vertex: usize) {
        self.path.push(vertex);
    }

    /// Return a reference to the path vertexes.
    pub fn get(&self) -> &[usize] {
        &self.path[..]
    }

    /// Iterate over the edges of the path, in path order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}
