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

//! Max flow by capacity scaling.
//!
//! Augmenting paths with a shrinking capacity threshold Δ: only arcs
//! with residual capacity at least Δ are admitted, and every found
//! path carries exactly Δ units. When no path is left Δ is halved (and
//! the path engine is reset, since the admissible subgraph changed);
//! the algorithm stops once Δ reaches zero. For integer capacities
//! bounded by U this needs O(|E| log U) augmentations per phase.

use super::{floor_pow2, MaxFlow};
use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};
use crate::shortestpath::PathSearch;

use num_traits::{NumAssign, PrimInt, Unsigned};

use std::cmp::max;

/// Capacity-scaling max-flow solver, generic over the path engine.
#[derive(Default)]
pub struct ScalingFlow<P> {
    search: P,
    /// Number of augmenting paths pushed by the last solve.
    pub num_augmentations: usize,
}

impl<P> ScalingFlow<P>
where
    P: PathSearch,
{
    pub fn new() -> Self {
        Default::default()
    }
}

impl<F, P> MaxFlow<F> for ScalingFlow<P>
where
    F: PrimInt + NumAssign,
    P: PathSearch,
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
        let two = F::one() + F::one();
        let mut sent = F::zero();
        self.num_augmentations = 0;
        self.search.reset();

        let mut threshold = F::one();
        for &e in g.out_arcs(src) {
            threshold = max(threshold, cap[e.index()]);
        }
        threshold = floor_pow2(threshold);

        while threshold > F::zero() {
            let found = self.search.find(g, src, snk, |e| {
                cap[e.index()] >= threshold && valid_arc(e)
            })?;

            if !found {
                threshold = threshold / two;
                self.search.reset();
                continue;
            }

            let path = self.search.tree().path(g, snk);
            for &e in &path {
                cap[e.index()] -= threshold;
                cap[g.arc_dual(e).index()] += threshold;
            }

            sent += threshold;
            self.num_augmentations += 1;
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::ScalingFlow;
    use crate::maxflow::{AugmentingPath, MaxFlow};
    use crate::shortestpath::{PathBfs, PathLabeling};
    use crate::DiGraph;

    #[test]
    fn matches_plain_augmenting_path() {
        let arcs = [
            (0usize, 2usize, 13u64),
            (0, 3, 10),
            (2, 3, 5),
            (3, 2, 4),
            (2, 1, 8),
            (3, 1, 12),
        ];
        let mut g: DiGraph = DiGraph::new();
        let mut cap = vec![];
        for (i, &(a, b, c)) in arcs.iter().enumerate() {
            g.add_arc(a, b, i).unwrap();
            cap.resize(g.max_num_arcs(), 0);
            cap[g.get_arc(&i).unwrap().index()] = c;
        }
        let s = g.get_node(&0).unwrap();
        let t = g.get_node(&1).unwrap();

        let mut cap2 = cap.clone();
        let reference = AugmentingPath::<PathBfs>::new()
            .solve(&g, s, t, &mut cap2, |_| true)
            .unwrap();

        let mut cap3 = cap.clone();
        let v1 = ScalingFlow::<PathBfs>::new()
            .solve(&g, s, t, &mut cap, |_| true)
            .unwrap();
        let v2 = ScalingFlow::<PathLabeling>::new()
            .solve(&g, s, t, &mut cap3, |_| true)
            .unwrap();

        assert_eq!(v1, reference);
        assert_eq!(v2, reference);
        assert_eq!(reference, 20);
    }
}
