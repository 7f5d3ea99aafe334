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

//! Min-cost max-flow by the primal-dual method.
//!
//! Instead of augmenting one path at a time, each round reweights the
//! arcs with the shortest-path distances (keeping the *reduced costs*
//! non-negative) and then pushes a whole max-flow through the
//! *admissible subgraph* of zero-reduced-cost arcs. The sink becomes
//! unreachable exactly when the flow is maximum.
//!
//! On the first round the reduced costs are the original costs, so
//! the path engine must tolerate negative weights if negative arc
//! costs are present; from the second round on the reduced costs are
//! non-negative and Dijkstra is fine. With all-non-negative input
//! costs any engine works from the start, which is why the test
//! matrix also instantiates this solver with Dijkstra.

use crate::error::Result;
use crate::graph::{DiGraph, Node};
use crate::maxflow::MaxFlow;
use crate::shortestpath::ShortestPath;

use num_traits::{NumAssign, PrimInt, Signed, Unsigned};

/// Primal-dual min-cost max-flow solver, generic over the path engine
/// and the inner max-flow solver.
#[derive(Default)]
pub struct McfPrimalDual<P, M> {
    path: P,
    maxflow: M,
    /// Number of reweighting rounds of the last solve.
    pub num_rounds: usize,
}

impl<P, M> McfPrimalDual<P, M> {
    pub fn new() -> Self
    where
        P: Default,
        M: Default,
    {
        Default::default()
    }

    /// Compute the min-cost max-flow from `src` to `snk`.
    ///
    /// `weight` holds the arc costs (negated on reverse arcs), `cap`
    /// the initial capacities; `cap` is left as the residual network
    /// of the computed flow. Returns the flow value.
    pub fn solve<F, ID, N, A>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        src: Node<ID>,
        snk: Node<ID>,
        weight: &[F],
        cap: &mut [F],
    ) -> Result<F>
    where
        F: PrimInt + NumAssign + Signed,
        P: ShortestPath<F>,
        M: MaxFlow<F>,
        ID: PrimInt + Unsigned,
    {
        let mut reduced = weight.to_vec();
        let mut sent = F::zero();
        self.num_rounds = 0;

        loop {
            self.path
                .solve(g, src, &reduced, |e| cap[e.index()] > F::zero())?;
            if !self.path.is_reached(snk) {
                break;
            }

            // make the arcs on shortest paths cost zero
            for e in g.arcs() {
                let (a, b) = g.arc_ends(e);
                if let (Some(da), Some(db)) = (self.path.distance(a), self.path.distance(b)) {
                    reduced[e.index()] += da - db;
                }
            }

            let value = self
                .maxflow
                .solve(g, src, snk, cap, |e| reduced[e.index()] == F::zero())?;

            sent += value;
            self.num_rounds += 1;
        }
        Ok(sent)
    }
}
