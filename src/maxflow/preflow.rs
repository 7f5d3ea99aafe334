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

//! Max flow by preflow push (Goldberg-Tarjan).
//!
//! Works with a *preflow* instead of augmenting paths: nodes may hold
//! excess inflow, which is pushed downhill along arcs `u -> v` with
//! positive residual capacity and `height(u) == height(v) + 1`. The
//! heights are seeded by a reverse breadth-first search from the sink
//! (nodes that cannot reach it keep height infinity), the source gets
//! height |V| and saturates all its admissible out-arcs, and active
//! nodes are discharged in FIFO order, relabelling whenever a node
//! runs out of admissible arcs while still holding excess. The flow
//! value is the excess accumulated at the sink.

use super::MaxFlow;
use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{Bounded, NumAssign, PrimInt, Unsigned};

use std::cmp::min;
use std::collections::VecDeque;

const DIST_NONE: usize = usize::max_value();

/// Preflow-push max-flow solver.
pub struct Preflow<F> {
    /// Excess inflow per node.
    excess: Vec<F>,
    /// Height label per node, `DIST_NONE` for nodes cut off from the
    /// sink.
    height: Vec<usize>,
    queue: VecDeque<usize>,
    /// Number of relabel operations performed by the last solve.
    pub cnt_relabel: usize,
}

impl<F> Default for Preflow<F> {
    fn default() -> Self {
        Preflow {
            excess: vec![],
            height: vec![],
            queue: VecDeque::new(),
            cnt_relabel: 0,
        }
    }
}

impl<F> Preflow<F>
where
    F: NumAssign + Ord + Copy + Bounded,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// The excess of node `u` after the last solve.
    pub fn excess<ID>(&self, u: Node<ID>) -> F
    where
        ID: PrimInt + Unsigned,
    {
        self.excess[u.index()]
    }

    /// Seed the height labels by a reverse BFS from the sink.
    fn initialize_heights<ID, N, A, C>(&mut self, g: &DiGraph<ID, N, A>, snk: Node<ID>, valid_arc: &C)
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        self.height.clear();
        self.height.resize(g.max_num_nodes(), DIST_NONE);
        self.height[snk.index()] = 0;

        self.queue.clear();
        self.queue.push_back(snk.index());

        while let Some(u) = self.queue.pop_front() {
            let hnew = self.height[u] + 1;
            for &e in g.in_arcs(Node::from_index(u)) {
                if !valid_arc(e) {
                    continue;
                }
                let (a, _) = g.arc_ends(e);
                if self.height[a.index()] == DIST_NONE {
                    self.height[a.index()] = hnew;
                    self.queue.push_back(a.index());
                }
            }
        }
    }

    /// Push as much of the excess of the arc's source as fits through
    /// the arc, activating the target if its excess turns positive.
    fn push<ID, N, A>(&mut self, g: &DiGraph<ID, N, A>, cap: &mut [F], e: Arc<ID>)
    where
        ID: PrimInt + Unsigned,
    {
        let (a, b) = g.arc_ends(e);
        let delta = min(self.excess[a.index()], cap[e.index()]);
        cap[e.index()] -= delta;
        cap[g.arc_dual(e).index()] += delta;

        self.excess[a.index()] -= delta;
        self.excess[b.index()] += delta;

        if delta > F::zero() && self.excess[b.index()] == delta {
            self.queue.push_back(b.index());
        }
    }

    /// Lift a node to one above its lowest admissible neighbor.
    fn relabel<ID, N, A, C>(&mut self, g: &DiGraph<ID, N, A>, cap: &[F], valid_arc: &C, u: usize)
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        self.cnt_relabel += 1;
        let mut hmin = DIST_NONE;
        for &e in g.out_arcs(Node::from_index(u)) {
            if valid_arc(e) && cap[e.index()] > F::zero() {
                hmin = min(hmin, self.height[g.arc_ends(e).1.index()]);
            }
        }
        if hmin < DIST_NONE {
            self.height[u] = hmin + 1;
        }
    }

    /// Push and relabel until the excess of `u` is gone.
    fn discharge<ID, N, A, C>(&mut self, g: &DiGraph<ID, N, A>, cap: &mut [F], valid_arc: &C, u: usize)
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        loop {
            for &e in g.out_arcs(Node::from_index(u)) {
                if valid_arc(e) && cap[e.index()] > F::zero() {
                    let b = g.arc_ends(e).1;
                    if self.height[b.index()] != DIST_NONE
                        && self.height[u] == self.height[b.index()] + 1
                    {
                        self.push(g, cap, e);
                    }
                }
            }
            if self.excess[u] == F::zero() {
                break;
            }
            self.relabel(g, cap, valid_arc, u);
        }
    }
}

impl<F> MaxFlow<F> for Preflow<F>
where
    F: NumAssign + Ord + Copy + Bounded,
{
    fn solve<ID, N, A, C>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        snk: Node<ID>,
        cap: &mut [F],
        valid_arc: C,
    ) -> Result<F>
    where
        ID: PrimInt + Unsigned,
        C: Fn(Arc<ID>) -> bool,
    {
        self.cnt_relabel = 0;
        self.excess.clear();
        self.excess.resize(g.max_num_nodes(), F::zero());

        self.initialize_heights(g, snk, &valid_arc);

        self.excess[src.index()] = F::max_value();
        self.height[src.index()] = g.num_nodes();

        // the queue is empty here, so pushes only collect active nodes
        for &e in g.out_arcs(src) {
            if valid_arc(e) {
                self.push(g, cap, e);
            }
        }

        while let Some(u) = self.queue.pop_front() {
            if u != src.index() && u != snk.index() {
                self.discharge(g, cap, &valid_arc, u);
            }
        }

        Ok(self.excess[snk.index()])
    }
}
