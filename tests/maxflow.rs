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

use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow, Preflow, ScalingFlow};
use mincostflow::shortestpath::{PathBfs, PathLabeling};
use mincostflow::Net;

struct Case {
    arcs: &'static [(usize, usize)],
    cap: &'static [i64],
    flow: &'static [i64],
    value: i64,
}

const CASES: &[Case] = &[
    Case {
        arcs: &[(0, 1), (0, 2), (1, 3), (1, 2), (1, 0), (3, 1)],
        cap: &[1, 9, 5, 1, 7, 4],
        flow: &[1, 0, 0, 0, 0, 0],
        value: 1,
    },
    Case {
        arcs: &[(0, 2), (0, 3), (3, 2), (2, 1), (3, 1)],
        cap: &[1, 2, 2, 2, 2],
        flow: &[1, 2, 0, 1, 2],
        value: 3,
    },
];

fn build(arcs: &[(usize, usize)], cap: &[i64]) -> (Net, Vec<i64>) {
    let mut g = Net::new();
    g.add_node(0);
    g.add_node(1);
    let mut res_cap = vec![];
    for (i, &(a, b)) in arcs.iter().enumerate() {
        let (fwd, rev) = g.add_arc(a, b, i).unwrap();
        res_cap.resize(g.max_num_arcs(), 0);
        res_cap[fwd.index()] = cap[i];
        res_cap[rev.index()] = 0;
    }
    (g, res_cap)
}

fn check_invariants(g: &Net, cap: &[i64], res_cap: &[i64], src: usize, snk: usize, value: i64) {
    // antisymmetry and non-negativity
    for i in 0..cap.len() {
        let fwd = g.get_arc(&i).unwrap();
        let rev = g.arc_dual(fwd);
        assert!(res_cap[fwd.index()] >= 0);
        assert!(res_cap[rev.index()] >= 0);
        assert_eq!(res_cap[fwd.index()] + res_cap[rev.index()], cap[i]);
    }

    // conservation and balance over the forward arcs
    let net_outflow = |id: usize| -> i64 {
        let u = g.get_node(&id).unwrap();
        let out: i64 = g
            .out_arcs(u)
            .iter()
            .filter(|&&e| g.arc_id(e).is_some())
            .map(|&e| flow_at(g, e, res_cap))
            .sum();
        let into: i64 = g
            .in_arcs(u)
            .iter()
            .filter(|&&e| g.arc_id(e).is_some())
            .map(|&e| flow_at(g, e, res_cap))
            .sum();
        out - into
    };
    for v in g.nodes().collect::<Vec<_>>() {
        let id = *g.node_id(v).unwrap();
        if id != src && id != snk {
            assert_eq!(net_outflow(id), 0, "conservation at node {}", id);
        }
    }
    assert_eq!(net_outflow(src), value);
    assert_eq!(net_outflow(snk), -value);
}

fn check_case<S>(case: &Case)
where
    S: MaxFlow<i64>,
{
    let (g, mut res_cap) = build(case.arcs, case.cap);
    let s = g.get_node(&0).unwrap();
    let t = g.get_node(&1).unwrap();

    let mut solver = S::default();
    let value = solver.solve(&g, s, t, &mut res_cap, |_| true).unwrap();

    assert_eq!(value, case.value);
    for (i, &want) in case.flow.iter().enumerate() {
        let got = flow_at(&g, g.get_arc(&i).unwrap(), &res_cap);
        assert_eq!(got, want, "flow on arc {}", i);
    }
    check_invariants(&g, case.cap, &res_cap, 0, 1, value);
}

fn check_all<S>()
where
    S: MaxFlow<i64>,
{
    for case in CASES {
        check_case::<S>(case);
    }
}

#[test]
fn augmenting_path_bfs() {
    check_all::<AugmentingPath<PathBfs>>();
}

#[test]
fn augmenting_path_labeling() {
    check_all::<AugmentingPath<PathLabeling>>();
}

#[test]
fn scaling_bfs() {
    check_all::<ScalingFlow<PathBfs>>();
}

#[test]
fn scaling_labeling() {
    check_all::<ScalingFlow<PathLabeling>>();
}

#[test]
fn preflow() {
    check_all::<Preflow<i64>>();
}

fn boundary_cases<S>()
where
    S: MaxFlow<i64>,
{
    // a single arc from source to sink
    check_case::<S>(&Case {
        arcs: &[(0, 1)],
        cap: &[5],
        flow: &[5],
        value: 5,
    });

    // source and sink in different components
    check_case::<S>(&Case {
        arcs: &[(0, 2), (3, 1)],
        cap: &[4, 4],
        flow: &[0, 0],
        value: 0,
    });

    // parallel arcs between the same endpoints
    check_case::<S>(&Case {
        arcs: &[(0, 1), (0, 1)],
        cap: &[3, 4],
        flow: &[3, 4],
        value: 7,
    });

    // a zero-capacity bottleneck
    check_case::<S>(&Case {
        arcs: &[(0, 2), (2, 1)],
        cap: &[0, 5],
        flow: &[0, 0],
        value: 0,
    });

    // a self-loop never carries flow
    check_case::<S>(&Case {
        arcs: &[(0, 2), (2, 2), (2, 1)],
        cap: &[3, 9, 2],
        flow: &[2, 0, 2],
        value: 2,
    });
}

#[test]
fn boundary_augmenting_path() {
    boundary_cases::<AugmentingPath<PathBfs>>();
    boundary_cases::<AugmentingPath<PathLabeling>>();
}

#[test]
fn boundary_scaling() {
    boundary_cases::<ScalingFlow<PathBfs>>();
    boundary_cases::<ScalingFlow<PathLabeling>>();
}

#[test]
fn boundary_preflow() {
    boundary_cases::<Preflow<i64>>();
}

#[test]
fn admissibility_predicate_masks_arcs() {
    let (g, mut res_cap) = build(&[(0, 1), (0, 2), (2, 1)], &[5, 5, 5]);
    let s = g.get_node(&0).unwrap();
    let t = g.get_node(&1).unwrap();
    let direct = g.get_arc(&0).unwrap();

    let mut solver = AugmentingPath::<PathBfs>::new();
    let value = solver
        .solve(&g, s, t, &mut res_cap, |e| e != direct)
        .unwrap();
    assert_eq!(value, 5);
    assert_eq!(flow_at(&g, direct, &res_cap), 0);
}

#[test]
fn two_runs_give_identical_results() {
    let case = &CASES[1];
    for _ in 0..2 {
        check_case::<ScalingFlow<PathLabeling>>(case);
    }
}
