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

//! Max flow by augmenting paths.
//!
//! Repeatedly asks a path engine for a source-to-sink path with
//! positive residual capacity, pushes the bottleneck along it, and
//! stops when no path is left. With the breadth-first engine this is
//! the algorithm of Edmonds and Karp, O(|V||E|²); with the labeling
//! engine the distance labels persist across augmentations.
//!
//! # Example
//!
//! ```
//! use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow};
//! use mincostflow::shortestpath::PathBfs;
//! use mincostflow::DiGraph;
//!
//! let mut g: DiGraph = DiGraph::new();
//! let mut cap = vec![];
//! for (i, &(a, b, c)) in [(0, 2, 1), (0, 3, 2), (3, 2, 2), (2, 1, 2), (3, 1, 2)]
//!     .iter()
//!     .enumerate()
//! {
//!     g.add_arc(a, b, i).unwrap();
//!     cap.resize(g.max_num_arcs(), 0);
//!     cap[g.get_arc(&i).unwrap().index()] = c;
//! }
//! let s = g.get_node(&0).unwrap();
//! let t = g.get_node(&1).unwrap();
//!
//! let mut solver = AugmentingPath::<PathBfs>::new();
//! let value = solver.solve(&g, s, t, &mut cap, |_| true).unwrap();
//!
//! assert_eq!(value, 3);
//! assert_eq!(flow_at(&g, g.get_arc(&1).unwrap(), &cap), 2);
//! ```

use super::MaxFlow;
use crate::error::Result;
use crate::graph::{Arc, DiGraph, Node};
use crate::shortestpath::PathSearch;

use num_traits::{Bounded, NumAssign, PrimInt, Unsigned};

use std::cmp::min;

/// Augmenting-path max-flow solver, generic over the path engine.
#[derive(Default)]
pub struct AugmentingPath<P> {
    search: P,
    /// Number of augmenting paths pushed by the last solve.
    pub num_augmentations: usize,
}

impl<P> AugmentingPath<P>
where
    P: PathSearch,
{
    pub fn new() -> Self {
        Default::default()
    }
}

impl<F, P> MaxFlow<F> for AugmentingPath<P>
where
    F: NumAssign + Ord + Copy + Bounded,
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
        let mut sent = F::zero();
        self.num_augmentations = 0;
        self.search.reset();

        loop {
            let found = self
                .search
                .find(g, src, snk, |e| cap[e.index()] > F::zero() && valid_arc(e))?;
            if !found {
                break;
            }

            let path = self.search.tree().path(g, snk);

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
