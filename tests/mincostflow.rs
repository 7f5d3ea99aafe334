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

//! The full solver matrix on a set of small instances with known
//! optimal flows. Every min-cost flow variant, whatever engines it is
//! composed from, must reproduce the same arc flows, flow value and
//! total cost.

use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow, Preflow, ScalingFlow};
use mincostflow::mincostflow::{
    flow_cost, McfCapacityScaling, McfCostScaling, McfEdmondsKarp, McfPrimalDual,
};
use mincostflow::shortestpath::{PathBfs, PathLabeling, ShortestPath, SpBellmanFord, SpDijkstra, SpFifo};
use mincostflow::DiGraph;

struct Case {
    arcs: &'static [(usize, usize)],
    cap: &'static [i64],
    cost: &'static [i64],
    flow: &'static [i64],
    value: i64,
    total_cost: i64,
}

const CASES: &[Case] = &[
    Case {
        arcs: &[(0, 1), (0, 2), (1, 3), (1, 2), (1, 0), (3, 1)],
        cap: &[1, 9, 5, 1, 7, 4],
        cost: &[1, 1, 1, 1, 1, 1],
        flow: &[1, 0, 0, 0, 0, 0],
        value: 1,
        total_cost: 1,
    },
    Case {
        arcs: &[(0, 2), (0, 3), (3, 2), (2, 1), (3, 1)],
        cap: &[1, 2, 2, 2, 2],
        cost: &[1, 1, 1, 1, 1],
        flow: &[1, 2, 0, 1, 2],
        value: 3,
        total_cost: 6,
    },
    Case {
        arcs: &[(0, 2), (0, 1), (2, 1), (1, 3), (0, 3)],
        cap: &[2, 5, 7, 8, 6],
        cost: &[1, 3, 2, 2, 6],
        flow: &[2, 5, 2, 0, 0],
        value: 7,
        total_cost: 21,
    },
    Case {
        arcs: &[(0, 2), (0, 1), (0, 3), (1, 3), (2, 3), (2, 1), (3, 2), (3, 0)],
        cap: &[2, 4, 3, 3, 3, 1, 1, 4],
        cost: &[2, 3, 1, 0, 2, 0, 0, 4],
        flow: &[0, 4, 1, 0, 0, 1, 1, 0],
        value: 5,
        total_cost: 13,
    },
    Case {
        arcs: &[(0, 3), (0, 2), (1, 2), (1, 0), (2, 3), (3, 1)],
        cap: &[2, 1, 1, 1, 4, 2],
        cost: &[4, 1, 0, 1, 2, 0],
        flow: &[1, 1, 0, 0, 1, 2],
        value: 2,
        total_cost: 7,
    },
];

fn build(case: &Case) -> (DiGraph, Vec<i64>, Vec<i64>) {
    let mut g: DiGraph = DiGraph::new();
    g.add_node(0);
    g.add_node(1);
    let mut res_cap = vec![];
    let mut cost = vec![];
    for (i, &(a, b)) in case.arcs.iter().enumerate() {
        let (fwd, rev) = g.add_arc(a, b, i).unwrap();
        res_cap.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);
        res_cap[fwd.index()] = case.cap[i];
        res_cap[rev.index()] = 0;
        cost[fwd.index()] = case.cost[i];
        cost[rev.index()] = -case.cost[i];
    }
    (g, cost, res_cap)
}

fn check_result(case: &Case, g: &DiGraph, cost: &[i64], res_cap: &[i64], value: i64) {
    assert_eq!(value, case.value);
    for (i, &want) in case.flow.iter().enumerate() {
        let got = flow_at(g, g.get_arc(&i).unwrap(), res_cap);
        assert_eq!(got, want, "flow on arc {}", i);
    }
    assert_eq!(flow_cost(g, cost, res_cap), case.total_cost);

    for i in 0..case.cap.len() {
        let fwd = g.get_arc(&i).unwrap();
        let rev = g.arc_dual(fwd);
        assert!(res_cap[fwd.index()] >= 0);
        assert!(res_cap[rev.index()] >= 0);
        assert_eq!(res_cap[fwd.index()] + res_cap[rev.index()], case.cap[i]);
    }
}

fn check_edmonds_karp<P>()
where
    P: ShortestPath<i64>,
{
    for case in CASES {
        let (g, cost, mut res_cap) = build(case);
        let s = g.get_node(&0).unwrap();
        let t = g.get_node(&1).unwrap();

        let mut solver = McfEdmondsKarp::<P>::new();
        let value = solver.solve(&g, s, t, &cost, &mut res_cap).unwrap();
        check_result(case, &g, &cost, &res_cap, value);
    }
}

fn check_primal_dual<P, M>()
where
    P: ShortestPath<i64>,
    M: MaxFlow<i64>,
{
    for case in CASES {
        let (g, cost, mut res_cap) = build(case);
        let s = g.get_node(&0).unwrap();
        let t = g.get_node(&1).unwrap();

        let mut solver = McfPrimalDual::<P, M>::new();
        let value = solver.solve(&g, s, t, &cost, &mut res_cap).unwrap();
        check_result(case, &g, &cost, &res_cap, value);
    }
}

fn check_capacity_scaling<P, M>()
where
    P: ShortestPath<i64>,
    M: MaxFlow<i64>,
{
    for case in CASES {
        let (mut g, cost, mut res_cap) = build(case);
        let s = g.get_node(&0).unwrap();
        let t = g.get_node(&1).unwrap();
        let max_arcs = g.max_num_arcs();

        let mut solver = McfCapacityScaling::<P, M>::new();
        let value = solver.solve(&mut g, s, t, &cost, &mut res_cap).unwrap();
        check_result(case, &g, &cost, &res_cap, value);

        // the temporary super source is gone again
        assert_eq!(g.max_num_arcs(), max_arcs);
        assert_eq!(g.num_nodes(), g.nodes().count());
    }
}

fn check_cost_scaling<M>()
where
    M: MaxFlow<i64>,
{
    for case in CASES {
        let (g, cost, mut res_cap) = build(case);
        let s = g.get_node(&0).unwrap();
        let t = g.get_node(&1).unwrap();

        let mut solver = McfCostScaling::<M>::new();
        let value = solver.solve(&g, s, t, &cost, &mut res_cap).unwrap();
        check_result(case, &g, &cost, &res_cap, value);
    }
}

#[test]
fn edmonds_karp_fifo() {
    check_edmonds_karp::<SpFifo<i64>>();
}

#[test]
fn edmonds_karp_bellmanford() {
    check_edmonds_karp::<SpBellmanFord<i64>>();
}

#[test]
fn primal_dual_fifo() {
    check_primal_dual::<SpFifo<i64>, AugmentingPath<PathBfs>>();
    check_primal_dual::<SpFifo<i64>, AugmentingPath<PathLabeling>>();
    check_primal_dual::<SpFifo<i64>, ScalingFlow<PathBfs>>();
    check_primal_dual::<SpFifo<i64>, ScalingFlow<PathLabeling>>();
    check_primal_dual::<SpFifo<i64>, Preflow<i64>>();
}

#[test]
fn primal_dual_bellmanford() {
    check_primal_dual::<SpBellmanFord<i64>, AugmentingPath<PathBfs>>();
    check_primal_dual::<SpBellmanFord<i64>, AugmentingPath<PathLabeling>>();
    check_primal_dual::<SpBellmanFord<i64>, ScalingFlow<PathBfs>>();
    check_primal_dual::<SpBellmanFord<i64>, ScalingFlow<PathLabeling>>();
    check_primal_dual::<SpBellmanFord<i64>, Preflow<i64>>();
}

#[test]
fn primal_dual_dijkstra() {
    check_primal_dual::<SpDijkstra<i64>, AugmentingPath<PathBfs>>();
    check_primal_dual::<SpDijkstra<i64>, AugmentingPath<PathLabeling>>();
    check_primal_dual::<SpDijkstra<i64>, ScalingFlow<PathBfs>>();
    check_primal_dual::<SpDijkstra<i64>, ScalingFlow<PathLabeling>>();
    check_primal_dual::<SpDijkstra<i64>, Preflow<i64>>();
}

#[test]
fn capacity_scaling_fifo() {
    check_capacity_scaling::<SpFifo<i64>, AugmentingPath<PathBfs>>();
    check_capacity_scaling::<SpFifo<i64>, AugmentingPath<PathLabeling>>();
    check_capacity_scaling::<SpFifo<i64>, ScalingFlow<PathBfs>>();
    check_capacity_scaling::<SpFifo<i64>, ScalingFlow<PathLabeling>>();
    check_capacity_scaling::<SpFifo<i64>, Preflow<i64>>();
}

#[test]
fn capacity_scaling_bellmanford() {
    check_capacity_scaling::<SpBellmanFord<i64>, AugmentingPath<PathBfs>>();
    check_capacity_scaling::<SpBellmanFord<i64>, AugmentingPath<PathLabeling>>();
    check_capacity_scaling::<SpBellmanFord<i64>, ScalingFlow<PathBfs>>();
    check_capacity_scaling::<SpBellmanFord<i64>, ScalingFlow<PathLabeling>>();
    check_capacity_scaling::<SpBellmanFord<i64>, Preflow<i64>>();
}

#[test]
fn capacity_scaling_dijkstra() {
    check_capacity_scaling::<SpDijkstra<i64>, AugmentingPath<PathBfs>>();
    check_capacity_scaling::<SpDijkstra<i64>, AugmentingPath<PathLabeling>>();
    check_capacity_scaling::<SpDijkstra<i64>, ScalingFlow<PathBfs>>();
    check_capacity_scaling::<SpDijkstra<i64>, ScalingFlow<PathLabeling>>();
    check_capacity_scaling::<SpDijkstra<i64>, Preflow<i64>>();
}

#[test]
fn cost_scaling() {
    check_cost_scaling::<AugmentingPath<PathBfs>>();
    check_cost_scaling::<AugmentingPath<PathLabeling>>();
    check_cost_scaling::<ScalingFlow<PathBfs>>();
    check_cost_scaling::<ScalingFlow<PathLabeling>>();
    check_cost_scaling::<Preflow<i64>>();
}

#[test]
fn equal_cost_alternative_paths() {
    // two shortest paths of equal cost; either split is optimal, so
    // only value and total cost are pinned down
    let mut g: DiGraph = DiGraph::new();
    g.add_node(0);
    g.add_node(1);
    let mut res_cap = vec![];
    let mut cost = vec![];
    for (i, &(a, b, c, w)) in [(0, 2, 1, 1), (2, 1, 1, 1), (0, 3, 1, 1), (3, 1, 1, 1)]
        .iter()
        .enumerate()
    {
        let (fwd, rev) = g.add_arc(a, b, i).unwrap();
        res_cap.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);
        res_cap[fwd.index()] = c;
        cost[fwd.index()] = w;
        cost[rev.index()] = -w;
    }
    let s = g.get_node(&0).unwrap();
    let t = g.get_node(&1).unwrap();

    let mut solver = McfEdmondsKarp::<SpFifo<i64>>::new();
    let value = solver.solve(&g, s, t, &cost, &mut res_cap).unwrap();
    assert_eq!(value, 2);
    assert_eq!(flow_cost(&g, &cost, &res_cap), 4);
}
