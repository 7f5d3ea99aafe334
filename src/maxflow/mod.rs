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

//! Maximum flow algorithms.
//!
//! All solvers work on a *residual capacity vector* indexed by arc
//! slot: the caller fills in the initial capacities (the reverse arc
//! of each dual pair normally starts at zero) and the solver pushes
//! flow by moving capacity from an arc to its dual. After the solve
//! the vector holds the residual network, and the flow over a forward
//! arc can be read with [`flow_at`] as the residual capacity of its
//! dual.
//!
//! An additional arc predicate restricts every solver to an admissible
//! subgraph; the min-cost flow solvers use this to run max-flow on the
//! zero-reduced-cost arcs only. Pass `|_| true` to use all arcs.

pub mod augmenting;
pub mod preflow;
pub mod scaling;

pub use self::augmenting::AugmentingPath;
pub use self::preflow::Preflow;
pub use self::scaling::ScalingFlow;

use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{PrimInt, Unsigned};

/// A maximum-flow solver over a residual capacity vector.
pub trait MaxFlow<F>: Default {
    /// Compute a maximum flow from `src` to `snk` over the arcs
    /// accepted by `valid_arc`.
    ///
    /// `cap` is consumed as the initial residual capacities and left
    /// as the residual network of the computed flow. Returns the flow
    /// value.
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
        C: Fn(Arc<ID>) -> bool;
}

/// The flow pushed over arc `a` so far, read off the residual
/// capacity vector as the residual of the dual arc.
pub fn flow_at<ID, N, A, F>(g: &DiGraph<ID, N, A>, a: Arc<ID>, cap: &[F]) -> F
where
    ID: PrimInt + Unsigned,
    F: Copy,
{
    cap[g.arc_dual(a).index()]
}

/// The largest power of two not exceeding `n`, or zero for `n = 0`.
///
/// Clears the lowest set bit until a single bit remains. Used to seed
/// the thresholds of the scaling algorithms.
pub fn floor_pow2<F>(n: F) -> F
where
    F: PrimInt,
{
    let mut n = n;
    if n.is_zero() {
        return n;
    }
    while !(n & (n - F::one())).is_zero() {
        n = n & (n - F::one());
    }
    n
}

#[cfg(test)]
mod tests {
    use super::floor_pow2;

    #[test]
    fn floor_pow2_table() {
        for (n, want) in [
            (0i64, 0i64),
            (1, 1),
            (2, 2),
            (3, 2),
            (4, 4),
            (5, 4),
            (7, 4),
            (8, 8),
            (1023, 512),
            (1024, 1024),
        ] {
            assert_eq!(floor_pow2(n), want, "n = {}", n);
        }
    }
}
