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

//! Min-cost max-flow by cost scaling.
//!
//! First a maximum flow of any cost is computed; the ε-scaling phases
//! then repair its cost by push-relabel moves on the reduced costs.
//! The costs are multiplied by the node count up front so that
//! 1-optimality of the scaled costs implies 0-optimality of the
//! originals, and ε starts at the largest power of two not exceeding
//! the largest scaled cost.
//!
//! In each phase every residual arc of negative reduced cost is
//! saturated, then nodes with positive excess are discharged: push
//! over an out-arc with reduced cost in `[-ε, 0)` and positive
//! residual, or lower the node potential by ε (which shifts the
//! reduced costs of all incident arcs) when no such arc exists.
//!
//! The relabel step is applied even when the node has no residual
//! out-arc at all; termination then rests on ε reaching zero rather
//! than on the usual height argument. This matches the behavior of
//! the reference implementation and is covered by the solver matrix
//! tests.

use super::capacityscaling::push_excess;
use crate::error::Result;
use crate::graph::{DiGraph, Node};
use crate::maxflow::{floor_pow2, MaxFlow};

use num_traits::{NumAssign, PrimInt, Signed, Unsigned};

use std::cmp::{max, min};
use std::collections::BTreeSet;

/// Cost-scaling min-cost max-flow solver, generic over the max-flow
/// solver used for the initial flow.
#[derive(Default)]
pub struct McfCostScaling<M> {
    maxflow: M,
    /// Number of scaling phases of the last solve.
    pub num_phases: usize,
}

impl<M> McfCostScaling<M> {
    pub fn new() -> Self
    where
        M: Default,
    {
        Default::default()
    }

    /// Compute the min-cost max-flow from `src` to `snk`.
    ///
    /// `weight` holds the arc costs (negated on reverse arcs), `cap`
    /// the initial capacities; `cap` is left as the residual network
    /// of the computed flow. Returns the flow value.
    ///
    /// The value type must accommodate `num_nodes()` times the
    /// largest cost without overflow.
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
        M: MaxFlow<F>,
        ID: PrimInt + Unsigned,
    {
        let two = F::one() + F::one();

        let value = self.maxflow.solve(g, src, snk, cap, |_| true)?;

        let mut reduced = weight.to_vec();
        let mut potential = vec![F::zero(); g.max_num_nodes()];
        let mut excess = vec![F::zero(); g.max_num_nodes()];
        self.num_phases = 0;

        let n = F::from(g.num_nodes()).unwrap();
        let mut eps = F::zero();
        for e in g.arcs() {
            reduced[e.index()] *= n;
            eps = max(eps, reduced[e.index()]);
        }
        let mut eps = floor_pow2(eps);

        while eps > F::zero() {
            self.num_phases += 1;

            // restore ε-optimality by saturating every arc of
            // negative reduced cost
            for e in g.arcs() {
                if reduced[e.index()] < F::zero() && cap[e.index()] > F::zero() {
                    let residual = cap[e.index()];
                    push_excess(g, e, residual, cap, &mut excess);
                }
            }

            let mut active: BTreeSet<usize> = g
                .nodes()
                .filter(|v| excess[v.index()] > F::zero())
                .map(|v| v.index())
                .collect();

            while let Some(&u) = active.iter().next() {
                let mut pushed = false;
                for &e in g.out_arcs(Node::from_index(u)) {
                    let rw = reduced[e.index()];
                    let rc = cap[e.index()];
                    if rw < F::zero() && rw >= -eps && rc > F::zero() {
                        pushed = true;
                        let (a, b) = g.arc_ends(e);
                        let delta = min(excess[a.index()], rc);
                        push_excess(g, e, delta, cap, &mut excess);
                        if excess[a.index()] <= F::zero() {
                            active.remove(&a.index());
                        }
                        if excess[b.index()] > F::zero() {
                            active.insert(b.index());
                        }
                        break;
                    }
                }
                if !pushed {
                    potential[u] -= eps;
                    for &e in g.out_arcs(Node::from_index(u)) {
                        reduced[e.index()] -= eps;
                    }
                    for &e in g.in_arcs(Node::from_index(u)) {
                        reduced[e.index()] += eps;
                    }
                }
            }

            eps = eps / two;
        }

        Ok(value)
    }
}
