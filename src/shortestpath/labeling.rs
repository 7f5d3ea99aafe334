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

//! Path search with distance labels.
//!
//! The engine keeps for every node a lower bound on its arc distance
//! to the sink, seeded by a reverse breadth-first search. A path is
//! grown from the source by *advance* steps along arcs satisfying
//! `label(u) == label(v) + 1`; when a node has no such arc it is
//! *relabelled* to one more than the smallest label among its
//! admissible out-arcs and the search *retreats* one step.
//!
//! The labels are memoized between searches for the same source/sink
//! pair, which is what makes repeated augmentations cheap: pushing
//! flow only ever increases distances, so the labels stay valid lower
//! bounds. [`reset`](PathSearch::reset) drops the memo; callers must
//! do so whenever the admissibility predicate changes for other
//! reasons (the scaling max-flow does this each time it halves its
//! threshold).
//!
//! A `dist_freq` histogram of the label values detects gaps: when the
//! last node of some label value is relabelled away, the sink has
//! become unreachable and the search stops immediately.

use super::{ParentArcs, PathSearch, NONE};
use crate::error::{Error, Result};
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{PrimInt, Unsigned};

use std::collections::VecDeque;

/// Goldberg style labeling path search.
#[derive(Default)]
pub struct PathLabeling {
    /// Incoming tree arc per node.
    parent: ParentArcs,
    /// Lower bound on the arc distance to the sink.
    dist: Vec<usize>,
    /// Number of nodes per label value.
    dist_freq: Vec<isize>,
    /// The memoized source/sink pair the labels belong to.
    last: Option<(usize, usize)>,
    queue: VecDeque<usize>,
}

impl PathLabeling {
    pub fn new() -> Self {
        Default::default()
    }

    /// The label (distance to the sink) of `u`, or `None` if the
    /// seeding search did not reach it.
    pub fn label<ID>(&self, u: Node<ID>) -> Option<usize>
    where
        ID: PrimInt + Unsigned,
    {
        match self.dist.get(u.index()) {
            Some(&d) if d != NONE => Some(d),
            _ => None,
        }
    }

    /// Seed the labels by a reverse BFS from the sink.
    fn initialize<ID, N, A, C>(&mut self, g: &DiGraph<ID, N, A>, snk: Node<ID>, valid_arc: &C)
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        let n = g.max_num_nodes();
        self.dist.clear();
        self.dist.resize(n, NONE);
        self.dist_freq.clear();
        self.dist_freq.resize(g.num_nodes() + 1, 0);

        self.dist[snk.index()] = 0;
        self.queue.clear();
        self.queue.push_back(snk.index());

        while let Some(u) = self.queue.pop_front() {
            let dnew = self.dist[u] + 1;
            for &e in g.in_arcs(Node::from_index(u)) {
                if !valid_arc(e) {
                    continue;
                }
                let (a, _) = g.arc_ends(e);
                if self.dist[a.index()] == NONE {
                    self.dist[a.index()] = dnew;
                    self.dist_freq[dnew] += 1;
                    self.queue.push_back(a.index());
                }
            }
        }
    }
}

impl PathSearch for PathLabeling {
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

        if self.last != Some((src.index(), snk.index())) {
            self.last = Some((src.index(), snk.index()));
            self.initialize(g, snk, &valid_arc);
        }

        let n = g.num_nodes();
        self.parent.clear(g.max_num_nodes());

        let mut current = src.index();
        while self.dist[src.index()] < n && current != snk.index() {
            // advance
            let mut advanced = false;
            for &e in g.out_arcs(Node::from_index(current)) {
                let (_, next) = g.arc_ends(e);
                let dnext = self.dist[next.index()];
                if valid_arc(e) && dnext != NONE && self.dist[current] == dnext + 1 {
                    self.parent.set(next.index(), e.index());
                    current = next.index();
                    advanced = true;
                    break;
                }
            }
            if advanced {
                continue;
            }

            // relabel
            let mut min_dist = n + 10;
            for &e in g.out_arcs(Node::from_index(current)) {
                if valid_arc(e) {
                    let (_, next) = g.arc_ends(e);
                    min_dist = min_dist.min(self.dist[next.index()]);
                }
            }
            let new_dist = min_dist + 1;
            let old_dist = self.dist[current];
            self.dist[current] = new_dist;
            if new_dist < self.dist_freq.len() {
                self.dist_freq[new_dist] += 1;
            }
            self.dist_freq[old_dist] -= 1;
            if self.dist_freq[old_dist] == 0 {
                // a label value died out, the sink is cut off
                break;
            }

            // retreat
            if let Some(e) = self.parent.get(current) {
                current = g.arc_ends(Arc::from_index(e)).0.index();
            }
        }

        Ok(self.parent.is_reached(snk.index()))
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn tree(&self) -> &ParentArcs {
        &self.parent
    }
}
