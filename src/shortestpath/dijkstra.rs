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

//! Dijkstra's shortest path algorithm.
//!
//! Runs over the admissible subgraph with a binary heap supporting
//! decrease-key, O((|V|+|E|) log |V|).
//!
//! All admissible arc weights must be non-negative; relaxing a
//! negative admissible arc raises [`Error::NegativeEdge`]. The
//! min-cost flow solvers guarantee this by reweighting arcs with node
//! potentials, with one exception: the successive-shortest-path
//! solver works on original costs and must not be instantiated with
//! this engine.

use super::{ParentArcs, ShortestPath};
use crate::collections::BinHeap;
use crate::error::{Error, Result};
use crate::graph::{Arc, DiGraph, Node};

use num_traits::{Bounded, NumAssign, PrimInt, Unsigned};

/// Heap based Dijkstra shortest-path engine.
pub struct SpDijkstra<F> {
    /// Incoming tree arc per node.
    parent: ParentArcs,
    /// Distance from the source, `F::max_value()` if unreached.
    dist: Vec<F>,
    heap: BinHeap<F>,
}

impl<F> Default for SpDijkstra<F> {
    fn default() -> Self {
        SpDijkstra {
            parent: ParentArcs::default(),
            dist: vec![],
            heap: BinHeap::default(),
        }
    }
}

impl<F> SpDijkstra<F> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<F> ShortestPath<F> for SpDijkstra<F>
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

        self.heap.clear(n);
        self.heap.push(src.index(), F::zero());

        while let Some((u, du)) = self.heap.pop_min() {
            for &e in g.out_arcs(Node::from_index(u)) {
                if !valid_arc(e) {
                    continue;
                }
                if weight[e.index()] < F::zero() {
                    return Err(Error::NegativeEdge);
                }
                let (_, b) = g.arc_ends(e);
                let dnew = du + weight[e.index()];
                if self.dist[b.index()] > dnew {
                    self.dist[b.index()] = dnew;
                    self.parent.set(b.index(), e.index());
                    if self.heap.contains(b.index()) {
                        self.heap.decrease(b.index(), dnew);
                    } else {
                        self.heap.push(b.index(), dnew);
                    }
                }
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
    use super::SpDijkstra;
    use crate::error::Error;
    use crate::shortestpath::ShortestPath;
    use crate::DiGraph;

    fn weighted(arcs: &[(usize, usize, i64)]) -> (DiGraph, Vec<i64>) {
        let mut g: DiGraph = DiGraph::new();
        let mut weight = vec![];
        for (i, &(a, b, w)) in arcs.iter().enumerate() {
            g.add_arc(a, b, i).unwrap();
            weight.resize(g.max_num_arcs(), 0);
            weight[g.get_arc(&i).unwrap().index()] = w;
        }
        (g, weight)
    }

    #[test]
    fn computes_distances() {
        let (g, weight) = weighted(&[(0, 1, 1), (0, 2, 9), (1, 3, 5), (1, 2, 1), (1, 0, 7), (3, 1, 4)]);
        let s = g.get_node(&0).unwrap();

        let mut sp = SpDijkstra::new();
        sp.solve(&g, s, &weight, |e| g.arc_id(e).is_some()).unwrap();

        for (id, want) in [(0usize, 0i64), (1, 1), (2, 2), (3, 6)] {
            assert_eq!(sp.distance(g.get_node(&id).unwrap()), Some(want));
        }
    }

    #[test]
    fn rejects_negative_admissible_arcs() {
        let (g, weight) = weighted(&[(0, 1, 3), (1, 2, -1)]);
        let s = g.get_node(&0).unwrap();

        let mut sp = SpDijkstra::new();
        let err = sp.solve(&g, s, &weight, |e| g.arc_id(e).is_some()).unwrap_err();
        assert_eq!(err, Error::NegativeEdge);
    }

    #[test]
    fn negative_arcs_outside_the_mask_are_ignored() {
        let (g, weight) = weighted(&[(0, 1, 3), (1, 2, -1)]);
        let s = g.get_node(&0).unwrap();
        let bad = g.get_arc(&1).unwrap();

        let mut sp = SpDijkstra::new();
        sp.solve(&g, s, &weight, |e| g.arc_id(e).is_some() && e != bad)
            .unwrap();
        assert_eq!(sp.distance(g.get_node(&2).unwrap()), None);
    }
}
