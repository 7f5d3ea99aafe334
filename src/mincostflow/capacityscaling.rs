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

//! Min-cost max-flow by capacity scaling.
//!
//! First a maximum flow of any cost is computed; the scaling phases
//! then repair its cost Δ units at a time. In each phase every
//! residual arc of negative reduced cost with capacity at least Δ is
//! saturated, which creates excesses. Nodes with excess at least Δ
//! form the set S, nodes with deficit at least Δ the set T, and the
//! excess is routed from S to T along shortest paths (with respect to
//! the running reduced costs) carrying exactly Δ units each.
//!
//! To route from all of S at once a temporary *super source* node is
//! inserted with a zero-cost arc of capacity `excess(v)` to every
//! `v ∈ S`; the excess moves onto the super source for the duration
//! of the phase. The super source is removed again on every exit path
//! (also when the shortest-path engine fails), with the unrouted
//! excess restored from the residuals of its out-arcs, so the graph
//! handed in is returned unchanged.
//!
//! This is the only solver that mutably borrows the graph; it also
//! grows the capacity and weight vectors itself when it adds the
//! super-source arcs.

use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};
use crate::maxflow::{floor_pow2, MaxFlow};
use crate::shortestpath::ShortestPath;

use num_traits::{NumAssign, PrimInt, Signed, Unsigned};

use std::collections::BTreeSet;
use std::hash::Hash;

/// Capacity-scaling min-cost max-flow solver, generic over the path
/// engine and the max-flow solver used for the initial flow.
#[derive(Default)]
pub struct McfCapacityScaling<P, M> {
    path: P,
    maxflow: M,
    /// Number of scaling phases of the last solve.
    pub num_phases: usize,
}

impl<P, M> McfCapacityScaling<P, M> {
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
    /// of the computed flow and may come back longer than it went in.
    /// Returns the flow value.
    pub fn solve<F, ID, N, A>(
        &mut self,
        g: &mut DiGraph<ID, N, A>,
        src: Node<ID>,
        snk: Node<ID>,
        weight: &[F],
        cap: &mut Vec<F>,
    ) -> Result<F>
    where
        F: PrimInt + NumAssign + Signed,
        P: ShortestPath<F>,
        M: MaxFlow<F>,
        ID: PrimInt + Unsigned,
        N: Eq + Hash + Clone,
        A: Eq + Hash + Clone,
    {
        let two = F::one() + F::one();

        let value = self.maxflow.solve(&*g, src, snk, cap, |_| true)?;

        let mut threshold = floor_pow2(value);
        let mut excess = vec![F::zero(); g.max_num_nodes()];
        let mut weight_ex = weight.to_vec();
        self.num_phases = 0;

        while threshold > F::zero() {
            self.num_phases += 1;

            // saturate the residual arcs that are too cheap
            for e in g.arcs() {
                while cap[e.index()] >= threshold && weight_ex[e.index()] < F::zero() {
                    push_excess(g, e, threshold, cap, &mut excess);
                }
            }

            let mut sset = BTreeSet::new();
            let mut tset = BTreeSet::new();
            for v in g.nodes() {
                if excess[v.index()] >= threshold {
                    sset.insert(v.index());
                }
                if excess[v.index()] <= -threshold {
                    tset.insert(v.index());
                }
            }

            let super_src = g.new_node();
            if excess.len() < g.max_num_nodes() {
                excess.resize(g.max_num_nodes(), F::zero());
            }
            excess[super_src.index()] = F::zero();

            let routed = match attach_sources(g, super_src, &sset, &mut weight_ex, cap, &mut excess)
            {
                Ok(()) => self.route(
                    &*g,
                    super_src,
                    threshold,
                    &mut weight_ex,
                    cap,
                    &mut excess,
                    &sset,
                    &mut tset,
                ),
                Err(err) => Err(err),
            };

            // restore the unrouted excess and drop the super source,
            // also when the routing failed
            for &e in g.out_arcs(super_src) {
                let (_, dst) = g.arc_ends(e);
                excess[dst.index()] = cap[e.index()];
            }
            g.erase_node(super_src);
            routed?;

            threshold = threshold / two;
        }

        Ok(value)
    }

    /// Route Δ-units of excess from the super source into T until T
    /// drains or becomes unreachable.
    fn route<F, ID, N, A>(
        &mut self,
        g: &DiGraph<ID, N, A>,
        super_src: Node<ID>,
        threshold: F,
        weight_ex: &mut [F],
        cap: &mut [F],
        excess: &mut [F],
        sset: &BTreeSet<usize>,
        tset: &mut BTreeSet<usize>,
    ) -> Result<()>
    where
        F: PrimInt + NumAssign + Signed,
        P: ShortestPath<F>,
        ID: PrimInt + Unsigned,
    {
        while !sset.is_empty() && !tset.is_empty() {
            self.path
                .solve(g, super_src, weight_ex, |e| cap[e.index()] >= threshold)?;

            let target = tset
                .iter()
                .copied()
                .find(|&v| self.path.distance(Node::<ID>::from_index(v)).is_some());
            let target = match target {
                Some(t) => t,
                None => break,
            };

            // reweight with the distance labels, unreached nodes count
            // as potential zero
            for e in g.arcs() {
                let (a, b) = g.arc_ends(e);
                let pa = self.path.distance(a).unwrap_or_else(F::zero);
                let pb = self.path.distance(b).unwrap_or_else(F::zero);
                weight_ex[e.index()] += pa - pb;
            }

            let path = self.path.tree().path(g, Node::from_index(target));
            for &e in &path {
                push_excess(g, e, threshold, cap, excess);
            }

            if excess[target] > -threshold {
                tset.remove(&target);
            }
        }
        Ok(())
    }
}

/// Insert a zero-cost arc pair from the super source to every node of
/// S and move the excess of S onto the super source.
fn attach_sources<F, ID, N, A>(
    g: &mut DiGraph<ID, N, A>,
    super_src: Node<ID>,
    sset: &BTreeSet<usize>,
    weight_ex: &mut Vec<F>,
    cap: &mut Vec<F>,
    excess: &mut Vec<F>,
) -> Result<()>
where
    F: PrimInt + NumAssign + Signed,
    ID: PrimInt + Unsigned,
{
    for &v in sset {
        let vn = Node::from_index(v);
        let to_v = g.new_arc(super_src, vn)?;
        let from_v = g.new_arc(vn, super_src)?;
        g.set_dual(to_v, from_v)?;

        if weight_ex.len() < g.max_num_arcs() {
            weight_ex.resize(g.max_num_arcs(), F::zero());
        }
        if cap.len() < g.max_num_arcs() {
            cap.resize(g.max_num_arcs(), F::zero());
        }
        weight_ex[to_v.index()] = F::zero();
        cap[to_v.index()] = excess[v];
        weight_ex[from_v.index()] = F::zero();
        cap[from_v.index()] = F::zero();

        let excess_v = excess[v];
        excess[super_src.index()] += excess_v;
        excess[v] = F::zero();
    }
    Ok(())
}

/// Move Δ units of capacity from an arc to its dual, bookkeeping the
/// endpoint excesses.
pub(crate) fn push_excess<ID, N, A, F>(
    g: &DiGraph<ID, N, A>,
    e: Arc<ID>,
    delta: F,
    cap: &mut [F],
    excess: &mut [F],
) where
    ID: PrimInt + Unsigned,
    F: NumAssign + Copy,
{
    let (a, b) = g.arc_ends(e);
    cap[e.index()] -= delta;
    cap[g.arc_dual(e).index()] += delta;
    excess[a.index()] -= delta;
    excess[b.index()] += delta;
}
