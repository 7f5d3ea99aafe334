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

//! Label-correcting shortest paths with a FIFO queue.
//!
//! Relaxes the out-arcs of queued nodes until no distance improves.
//! Unlike Dijkstra this handles the negative arc weights that reverse
//! arcs carry, at pseudo-polynomial cost. The state is rebuilt on
//! every call.

use super::{ParentArcs, ShortestPath};
use crate::error::{Error, Result};
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{Bounded, NumAssign, PrimInt, Unsigned};

use std::collections::VecDeque;

/// FIFO label-correcting shortest-path engine.
pub struct SpFifo<F> {
    /// Incoming tree arc per node.
    parent: ParentArcs,
    /// Distance from the source, `F::max_value()` if unreached.
    dist: Vec<F>,
    queue: VecDeque<usize>,
}

impl<F> Default for SpFifo<F> {
    fn default() -> Self {
        SpFifo {
            parent: ParentArcs::default(),
            dist: vec![],
            queue: VecDeque::new(),
        }
    }
}

impl<F> SpFifo<F> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<F> ShortestPath<F> for SpFifo<F>
where
    F: NumAssign + Ord + Copy + Bounded,
{
    fn solve<ID, N, A, C>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        weight: &[F],
        valid_arc: C,
    ) -> Result<()>
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        if !g.contains_node(src) {
            return Err(Error::InvalidHandle { what: "node" });
        }
        if weight.len() < g.max_num_arcs() {
            return Err(Error::ShortWeights {
                len: weight.len(),
                need: g.max_num_arcs(),
            });
        }

        let n = g.max_num_nodes();
        self.parent.clear(n);
        self.dist.clear();
        self.dist.resize(n, F::max_value());
        self.dist[src.index()] = F::zero();

        self.queue.clear();
        self.queue.push_back(src.index());

        while let Some(u) = self.queue.pop_front() {
            for &e in g.out_arcs(Node::from_index(u)) {
                if !valid_arc(e) {
                    continue;
                }
                let (a, b) = g.arc_ends(e);
                let dnew = self.dist[a.index()] + weight[e.index()];
                if self.dist[b.index()] > dnew {
                    self.dist[b.index()] = dnew;
                    self.parent.set(b.index(), e.index());
                    self.queue.push_back(b.index());
                }
            }
        }
        Ok(())
    }

    fn distance<ID>(&self, u: Node<ID>) -> Option<F>
    where
        ID: PrimInt + Unsigned,
    {
        match self.dist.get(u.index()) {
            Some(&d) if d != F::max_value() => Some(d),
            _ => None,
        }
    }

    fn is_reached<ID>(&self, u: Node<ID>) -> bool
    where
        ID: PrimInt + Unsigned,
    {
        self.parent.is_reached(u.index())
    }

    fn tree(&self) -> &ParentArcs {
        &self.parent
    }
}
