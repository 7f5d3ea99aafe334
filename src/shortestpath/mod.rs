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

//! Path and distance engines over the admissible subgraph.
//!
//! All engines in this module share the same substrate: they run from
//! a source node, consider only arcs accepted by a caller supplied
//! predicate (which typically masks the residual network), and leave
//! behind a [`ParentArcs`] tree of incoming arcs from which the found
//! paths are reconstructed.
//!
//! There are two families:
//!
//! * [`PathSearch`]: unweighted source-to-sink searches returning a
//!   reached flag: [`PathBfs`](bfs::PathBfs) and
//!   [`PathLabeling`](labeling::PathLabeling). These drive the
//!   augmenting-path max-flow solvers.
//! * [`ShortestPath`]: weighted single-source engines producing a
//!   full distance/parent tree: [`SpFifo`](fifo::SpFifo),
//!   [`SpBellmanFord`](bellmanford::SpBellmanFord) and
//!   [`SpDijkstra`](dijkstra::SpDijkstra). These drive the min-cost
//!   flow solvers; only the first two tolerate the negative weights
//!   that reverse arcs carry.

pub mod bellmanford;
pub mod bfs;
pub mod dijkstra;
pub mod fifo;
pub mod labeling;

pub use self::bellmanford::SpBellmanFord;
pub use self::bfs::PathBfs;
pub use self::dijkstra::SpDijkstra;
pub use self::fifo::SpFifo;
pub use self::labeling::PathLabeling;

use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{PrimInt, Unsigned};

pub(crate) const NONE: usize = usize::max_value();

/// A tree of incoming arcs indexed by node slot.
///
/// Every engine records for each reached node the arc over which it
/// was reached; following these parent arcs from any reached node
/// leads back to the source of the search.
#[derive(Clone, Debug, Default)]
pub struct ParentArcs {
    parent: Vec<usize>,
}

impl ParentArcs {
    /// Reset the tree for a node slot space of size `n`.
    pub fn clear(&mut self, n: usize) {
        self.parent.clear();
        self.parent.resize(n, NONE);
    }

    /// Record `arc` as the incoming tree arc of node slot `u`.
    pub fn set(&mut self, u: usize, arc: usize) {
        self.parent[u] = arc;
    }

    /// The incoming tree arc of node slot `u`.
    pub fn get(&self, u: usize) -> Option<usize> {
        match self.parent.get(u) {
            Some(&arc) if arc != NONE => Some(arc),
            _ => None,
        }
    }

    /// Return `true` if node slot `u` has an incoming tree arc.
    pub fn is_reached(&self, u: usize) -> bool {
        self.get(u).is_some()
    }

    /// The arcs of the tree path ending in `last`, in order from the
    /// source of the search to `last`.
    ///
    /// Walks the parent pointers iteratively and reverses, so long
    /// paths are fine.
    pub fn path<ID, N, A>(&self, g: &DiGraph<ID, N, A>, last: Node<ID>) -> Vec<Arc<ID>>
    where
        ID: PrimInt + Unsigned,
    {
        let mut path = vec![];
        let mut last = last.index();
        while let Some(idx) = self.get(last) {
            let arc = Arc::from_index(idx);
            path.push(arc);
            last = g.arc_ends(arc).0.index();
        }
        path.reverse();
        path
    }
}

/// An unweighted source-to-sink path search.
///
/// Implementations may keep state between searches on the same
/// source/sink pair (see [`PathLabeling`]); [`reset`](PathSearch::reset)
/// drops any such state.
pub trait PathSearch: Default {
    /// Search for a path from `src` to `snk` using only arcs accepted
    /// by `valid_arc`. Returns whether `snk` was reached.
    fn find<ID, N, A, C>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        snk: Node<ID>,
        valid_arc: C,
    ) -> Result<bool>
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool;

    /// Invalidate all state kept between searches.
    fn reset(&mut self) {}

    /// The parent tree of the last search.
    fn tree(&self) -> &ParentArcs;
}

/// A weighted single-source shortest-path engine.
pub trait ShortestPath<F>: Default {
    /// Compute shortest paths from `src` over the arcs accepted by
    /// `valid_arc`, with arc weights taken from `weight`.
    ///
    /// `weight` must have at least
    /// [`max_num_arcs`](DiGraph::max_num_arcs) entries.
    fn solve<ID, N, A, C>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        weight: &[F],
        valid_arc: C,
    ) -> Result<()>
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool;

    /// The distance of `u` from the source, or `None` if unreached.
    fn distance<ID>(&self, u: Node<ID>) -> Option<F>
    where
        ID: PrimInt + Unsigned;

    /// Return `true` if `u` was reached by the last search.
    fn is_reached<ID>(&self, u: Node<ID>) -> bool
    where
        ID: PrimInt + Unsigned;

    /// The parent tree of the last search.
    fn tree(&self) -> &ParentArcs;
}
