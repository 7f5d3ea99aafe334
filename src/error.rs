/*
 * Copyright (c) 2023-2025 The mincostflow developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The error type shared by the graph container and the solvers.

use std::error;
use std::fmt;

/// Error raised by graph operations and solvers.
///
/// Low-level errors propagate upwards unchanged; the solvers never
/// catch them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation was given a handle that does not refer to a live
    /// node or arc.
    InvalidHandle { what: &'static str },
    /// `add_arc` was called with an arc id that is already bound.
    DuplicateId,
    /// Dijkstra's algorithm relaxed an admissible arc of negative
    /// weight.
    NegativeEdge,
    /// A weight or capacity vector is too short to be indexed by every
    /// arc handle of the graph.
    ShortWeights { len: usize, need: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidHandle { what } => write!(fmt, "operation on invalid {} handle", what),
            DuplicateId => write!(fmt, "arc id already exists"),
            NegativeEdge => write!(fmt, "found a negative edge"),
            ShortWeights { len, need } => {
                write!(fmt, "arc property vector too short ({} < {})", len, need)
            }
        }
    }
}

impl error::Error for Error {}

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
