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

//! Exact maximum-flow and minimum-cost-flow algorithms on directed
//! graphs with integer capacities and costs.
//!
//! The heart of the crate is a residual-network substrate: a
//! [`DiGraph`] keeps every arc paired with its reversed *dual* arc,
//! and the solvers operate on a caller owned capacity vector indexed
//! by arc handle, moving capacity between an arc and its dual as they
//! push flow. After a solve the vector holds the residual network and
//! the flow over an arc is the residual capacity of its dual.
//!
//! On top of that substrate sit three layers, each parameterized over
//! the one below it:
//!
//! * [`shortestpath`]: path and distance engines (BFS, distance
//!   labeling, FIFO label-correcting, Bellman-Ford, Dijkstra) over an
//!   arc admissibility predicate;
//! * [`maxflow`]: augmenting-path, capacity-scaling and preflow-push
//!   maximum flow;
//! * [`mincostflow`]: successive-shortest-path, primal-dual,
//!   capacity-scaling and cost-scaling minimum-cost maximum flow.
//!
//! # Example
//!
//! ```
//! use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow};
//! use mincostflow::shortestpath::PathBfs;
//! use mincostflow::DiGraph;
//!
//! // arcs (from, to, capacity), external node ids 0..=3
//! let arcs = [(0, 2, 1), (0, 3, 2), (3, 2, 2), (2, 1, 2), (3, 1, 2)];
//!
//! let mut g: DiGraph = DiGraph::new();
//! let mut cap = vec![];
//! for (i, &(a, b, c)) in arcs.iter().enumerate() {
//!     let (fwd, _) = g.add_arc(a, b, i).unwrap();
//!     cap.resize(g.max_num_arcs(), 0);
//!     cap[fwd.index()] = c;
//! }
//!
//! let s = g.get_node(&0).unwrap();
//! let t = g.get_node(&1).unwrap();
//!
//! let mut solver = AugmentingPath::<PathBfs>::new();
//! let value = solver.solve(&g, s, t, &mut cap, |_| true).unwrap();
//! assert_eq!(value, 3);
//!
//! // the flow over each input arc
//! let flow: Vec<i32> = (0..arcs.len())
//!     .map(|i| flow_at(&g, g.get_arc(&i).unwrap(), &cap))
//!     .collect();
//! assert_eq!(flow, vec![1, 2, 0, 1, 2]);
//! ```

// # Containers

pub mod arena;
pub use self::arena::Arena;

pub mod graph;
pub use self::graph::{Arc, DiGraph, Node};

pub mod collections;

// # Algorithms

pub mod maxflow;
pub mod mincostflow;
pub mod shortestpath;

pub mod error;
pub use self::error::{Error, Result};

/// The default graph type.
///
/// Handles are backed by `u32`, external node and arc ids are plain
/// indices.
pub type Net = DiGraph<u32, usize, usize>;
