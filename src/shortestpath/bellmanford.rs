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

//! Shortest paths by Bellman-Ford.
//!
//! Up to |V| relaxation sweeps over all admissible arcs, stopping
//! early once a sweep changes nothing. Handles negative arc weights in
//! O(|V||E|). Negative cycles are not detected; with the reduced costs
//! the min-cost flow solvers feed in, none exist.

use super::{ParentArcs, ShortestPath};
use crate::error::{Error, Result};
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{Bounded, NumAssign, PrimInt, Unsigned};

/// Bellman-Ford shortest-path engine.
pub struct SpBellmanFord<F> {
    /// Incoming tree arc per node.
    parent: ParentArcs,
    /// Distance from the source, `F::max_value()` if unreached.
    dist: Vec<F>,
}

impl<F> Default for SpBellmanFord<F> {
    fn default() -> Self {
        SpBellmanFord {
            parent: ParentArcs::default(),
            dist: vec![],
        }
    }
}

impl<F> SpBellmanFord<F> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<F> ShortestPath<F> for SpBellmanFord<F>
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

        for _ in 0..g.num_nodes() {
            let mut updates = false;
            for e in g.arcs() {
                if !valid_arc(e) {
                    continue;
                }
                let (a, b) = g.arc_ends(e);
                if self.dist[a.index()] == F::max_value() {
                    continue;
                }
                let dnew = self.dist[a.index()] + weight[e.index()];
                if self.dist[b.index()] > dnew {
                    self.dist[b.index()] = dnew;
                    self.parent.set(b.index(), e.index());
                    updates = true;
                }
            }
            if !updates {
                break;
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

#[cfg(test)]
mod tests {
    use super::SpBellmanFord;
    use crate::shortestpath::ShortestPath;
    use crate::DiGraph;

    #[test]
    fn handles_negative_weights() {
        let mut g: DiGraph = DiGraph::new();
        let mut weight = vec![];
        for (i, &(a, b, w)) in [(0, 1, 4), (0, 2, 2), (1, 3, -3), (2, 3, 3), (2, 1, -1)]
            .iter()
            .enumerate()
        {
            g.add_arc(a, b, i).unwrap();
            weight.resize(g.max_num_arcs(), 0);
            let fwd = g.get_arc(&i).unwrap();
            weight[fwd.index()] = w;
        }
        let s = g.get_node(&0).unwrap();

        let mut sp = SpBellmanFord::new();
        sp.solve(&g, s, &weight, |e| g.arc_id(e).is_some()).unwrap();

        // 0 -> 2 -> 1 -> 3 costs 2 - 1 - 3 = -2
        assert_eq!(sp.distance(g.get_node(&3).unwrap()), Some(-2));
        assert_eq!(sp.distance(g.get_node(&1).unwrap()), Some(1));
        let path = sp.tree().path(&g, g.get_node(&3).unwrap());
        assert_eq!(path.len(), 3);
    }
}
