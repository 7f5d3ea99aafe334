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

//! Breadth-first path search.
//!
//! Finds a path with the fewest arcs from source to sink in the
//! admissible subgraph. Used as the path engine of the Edmonds-Karp
//! style augmenting-path max-flow. The whole state is rebuilt on each
//! call, giving O(|V|+|E|) per search.
//!
//! # Example
//!
//! ```
//! use mincostflow::shortestpath::{PathBfs, PathSearch};
//! use mincostflow::DiGraph;
//!
//! let mut g: DiGraph = DiGraph::new();
//! g.add_arc(0, 1, 0).unwrap();
//! g.add_arc(1, 2, 1).unwrap();
//!
//! let s = g.get_node(&0).unwrap();
//! let t = g.get_node(&2).unwrap();
//!
//! let mut bfs = PathBfs::default();
//! // mask out the reverse arcs
//! let found = bfs.find(&g, s, t, |e| g.arc_id(e).is_some()).unwrap();
//! assert!(found);
//! assert_eq!(bfs.tree().path(&g, t).len(), 2);
//! ```

use super::{ParentArcs, PathSearch, NONE};
use crate::error::{Error, Result};
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{PrimInt, Unsigned};

use std::collections::VecDeque;

/// Breadth-first source-to-sink search.
#[derive(Default)]
pub struct PathBfs {
    /// Incoming tree arc per node.
    parent: ParentArcs,
    /// Number of arcs from the source, `NONE` if unreached.
    dist: Vec<usize>,
    queue: VecDeque<usize>,
}

impl PathBfs {
    pub fn new() -> Self {
        Default::default()
    }

    /// The hop count of `u` from the source, or `None` if unreached.
    pub fn distance<ID>(&self, u: Node<ID>) -> Option<usize>
    where
        ID: PrimInt + Unsigned,
    {
        match self.dist.get(u.index()) {
            Some(&d) if d != NONE => Some(d),
            _ => None,
        }
    }
}

impl PathSearch for PathBfs {
    fn find<ID, N, A, C>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        snk: Node<ID>,
        valid_arc: C,
    ) -> Result<bool>
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        if !g.contains_node(src) || !g.contains_node(snk) {
            return Err(Error::InvalidHandle { what: "node" });
        }

        let n = g.max_num_nodes();
        self.parent.clear(n);
        self.dist.clear();
        self.dist.resize(n, NONE);
        self.dist[src.index()] = 0;

        self.queue.clear();
        self.queue.push_back(src.index());

        while let Some(u) = self.queue.pop_front() {
            if u == snk.index() {
                return Ok(true);
            }
            for &e in g.out_arcs(Node::from_index(u)) {
                if !valid_arc(e) {
                    continue;
                }
                let (_, v) = g.arc_ends(e);
                if self.dist[v.index()] == NONE {
                    self.dist[v.index()] = self.dist[u] + 1;
                    self.parent.set(v.index(), e.index());
                    self.queue.push_back(v.index());
                }
            }
        }
        Ok(false)
    }

    fn tree(&self) -> &ParentArcs {
        &self.parent
    }
}
