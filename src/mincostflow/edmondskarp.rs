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

//! Min-cost max-flow by successive shortest paths.
//!
//! The Edmonds-Karp scheme: as long as the sink is reachable in the
//! residual network, augment the full bottleneck along a *cheapest*
//! residual path and repeat. Augmenting along shortest paths keeps the
//! flow cost-optimal for its value throughout, so the final maximum
//! flow has minimum cost.
//!
//! The path engine runs on the original costs, where reverse arcs
//! carry negative weights, so it must be one of the engines tolerating
//! them ([`SpFifo`](crate::shortestpath::SpFifo) or
//! [`SpBellmanFord`](crate::shortestpath::SpBellmanFord)). Dijkstra
//! would reject the first residual reverse arc it sees.
//!
//! # Example
//!
//! ```
//! use mincostflow::mincostflow::{flow_cost, McfEdmondsKarp};
//! use mincostflow::shortestpath::SpFifo;
//! use mincostflow::DiGraph;
//!
//! let mut g: DiGraph = DiGraph::new();
//! let mut cap = vec![];
//! let mut cost = vec![];
//! for (i, &(a, b, c, w)) in [(0, 2, 2, 1), (0, 1, 5, 3), (2, 1, 7, 2), (1, 3, 8, 2), (0, 3, 6, 6)]
//!     .iter()
//!     .enumerate()
//! {
//!     let (fwd, rev) = g.add_arc(a, b, i).unwrap();
//!     cap.resize(g.max_num_arcs(), 0);
//!     cost.resize(g.max_num_arcs(), 0);
//!     cap[fwd.index()] = c;
//!     cost[fwd.index()] = w;
//!     cost[rev.index()] = -w;
//! }
//! let s = g.get_node(&0).unwrap();
//! let t = g.get_node(&1).unwrap();
//!
//! let mut solver = McfEdmondsKarp::<SpFifo<i64>>::new();
//! let value = solver.solve(&g, s, t, &cost, &mut cap).unwrap();
//!
//! assert_eq!(value, 7);
//! assert_eq!(flow_cost(&g, &cost, &cap), 21);
//! ```

use crate::error::Result;
use crate::graph::{DiGraph, Node};
use crate::shortestpath::ShortestPath;

use num_traits::{NumAssign, PrimInt, Signed, Unsigned};

use std::cmp::min;

/// Successive-shortest-path min-cost max-flow solver, generic over
/// the (negative-weight tolerant) path engine.
#[derive(Default)]
pub struct McfEdmondsKarp<P> {
    path: P,
    /// Number of augmenting paths pushed by the last solve.
    pub num_augmentations: usize,
}

impl<P> McfEdmondsKarp<P> {
    pub fn new() -> Self
    where
        P: Default,
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
        ID: PrimInt + Unsigned,
    {
        let mut sent = F::zero();
        self.num_augmentations = 0;

        loop {
            self.path
                .solve(g, src, weight, |e| cap[e.index()] > F::zero())?;
            if !self.path.is_reached(snk) {
                break;
            }

            let path = self.path.tree().path(g, snk);

            let mut k = F::max_value();
            for &e in &path {
                k = min(k, cap[e.index()]);
            }

            for &e in &path {
                cap[e.index()] -= k;
                cap[g.arc_dual(e).index()] += k;
            }

            sent += k;
            self.num_augmentations += 1;
        }
        Ok(sent)
    }
}
