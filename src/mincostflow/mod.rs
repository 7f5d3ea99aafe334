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

//! Minimum-cost maximum-flow algorithms.
//!
//! Every solver in this module computes a *maximum* flow from source
//! to sink that has minimum total cost among all maximum flows, and
//! returns the flow value. Arcs carry linear unit costs in a vector
//! parallel to the capacity vector; the forward arc of a dual pair
//! carries the user supplied cost and the reverse arc its negation.
//! The total cost of the computed flow is read off-line with
//! [`flow_cost`].
//!
//! The solvers are composed from the building blocks below them by
//! type parameters: a [`ShortestPath`](crate::shortestpath::ShortestPath)
//! engine and/or a [`MaxFlow`](crate::maxflow::MaxFlow) solver, the
//! same way the corresponding algorithm templates are stacked in the
//! literature. All combinations yield the same value and cost; they
//! differ in running time only.

pub mod capacityscaling;
pub mod costscaling;
pub mod edmondskarp;
pub mod primaldual;

pub use self::capacityscaling::McfCapacityScaling;
pub use self::costscaling::McfCostScaling;
pub use self::edmondskarp::McfEdmondsKarp;
pub use self::primaldual::McfPrimalDual;

use crate::graph::DiGraph;
use crate::maxflow::flow_at;

use num_traits::{NumAssign, PrimInt, Unsigned};

use std::hash::Hash;

/// The total cost of the flow recorded in the residual capacity
/// vector, summed over the arcs carrying an external id (the forward
/// arcs).
pub fn flow_cost<ID, N, A, F>(g: &DiGraph<ID, N, A>, cost: &[F], cap: &[F]) -> F
where
    ID: PrimInt + Unsigned,
    N: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    F: NumAssign + Copy,
{
    let mut total = F::zero();
    for e in g.arcs() {
        if g.arc_id(e).is_some() {
            total += cost[e.index()] * flow_at(g, e, cap);
        }
    }
    total
}
