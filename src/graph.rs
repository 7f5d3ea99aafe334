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

//! A directed graph with dual arcs.
//!
//! `DiGraph` stores nodes and arcs in two slotted arenas, so both are
//! identified by stable handles ([`Node`] and [`Arc`]) that double as
//! offsets into parallel property vectors (capacities, costs). Arcs
//! come in *dual pairs*: [`DiGraph::add_arc`] creates a forward arc
//! and its reversed twin and links them, which is exactly the
//! representation the residual-network solvers in this crate operate
//! on. Only the topology lives here; capacities and costs are caller
//! owned vectors indexed by [`Arc::index`].
//!
//! Nodes and arcs may additionally carry caller supplied external ids
//! (any hashable type); the graph keeps bidirectional mappings between
//! ids and handles. An arc id always refers to the forward arc of a
//! dual pair, the reverse arc stays anonymous.
//!
//! # Example
//!
//! ```
//! use mincostflow::DiGraph;
//!
//! let mut g: DiGraph = DiGraph::new();
//! let (fwd, rev) = g.add_arc(0, 1, 7).unwrap();
//!
//! assert_eq!(g.num_nodes(), 2);
//! assert_eq!(g.num_arcs(), 2);
//! assert_eq!(g.arc_dual(fwd), rev);
//! assert_eq!(g.arc_dual(rev), fwd);
//!
//! let (u, v) = g.arc_ends(fwd);
//! assert_eq!(g.arc_ends(rev), (v, u));
//! assert_eq!(g.get_arc(&7), Some(fwd));
//! ```

use crate::arena::Arena;
use crate::error::{Error, Result};

use num_traits::{PrimInt, Unsigned};

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Node handle of a [`DiGraph`].
///
/// This is a newtype of the node's arena slot.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Node<ID = u32>(ID);

impl<ID> Node<ID>
where
    ID: PrimInt + Unsigned,
{
    pub(crate) fn from_index(idx: usize) -> Self {
        Node(ID::from(idx).unwrap())
    }

    /// The slot index of this node, usable as an offset into parallel
    /// node property vectors.
    pub fn index(&self) -> usize {
        self.0.to_usize().unwrap()
    }
}

impl<ID> fmt::Display for Node<ID>
where
    ID: PrimInt + Unsigned + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Arc handle of a [`DiGraph`].
///
/// This is a newtype of the arc's arena slot.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Arc<ID = u32>(ID);

impl<ID> Arc<ID>
where
    ID: PrimInt + Unsigned,
{
    pub(crate) fn from_index(idx: usize) -> Self {
        Arc(ID::from(idx).unwrap())
    }

    /// The slot index of this arc, usable as an offset into parallel
    /// arc property vectors.
    pub fn index(&self) -> usize {
        self.0.to_usize().unwrap()
    }
}

impl<ID> fmt::Display for Arc<ID>
where
    ID: PrimInt + Unsigned + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Data for a node.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
struct NodeData<ID> {
    /// Arcs leaving this node.
    out_arcs: Vec<Arc<ID>>,
    /// Arcs entering this node.
    in_arcs: Vec<Arc<ID>>,
}

impl<ID> Default for NodeData<ID> {
    fn default() -> Self {
        NodeData {
            out_arcs: Vec::new(),
            in_arcs: Vec::new(),
        }
    }
}

/// Data for an arc.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
struct ArcData<ID> {
    /// The source node.
    src: Node<ID>,
    /// The sink node.
    snk: Node<ID>,
    /// The reversed twin arc.
    dual: Option<Arc<ID>>,
}

/// A directed graph with dual arcs and external ids.
///
/// `ID` is the integer type backing the handles, `N` the external node
/// id type and `A` the external arc id type.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "ID: serde::Serialize, N: serde::Serialize, A: serde::Serialize",
        deserialize = "ID: serde::Deserialize<'de>, \
                       N: serde::Deserialize<'de> + Eq + std::hash::Hash, \
                       A: serde::Deserialize<'de> + Eq + std::hash::Hash"
    ))
)]
#[derive(Clone, Debug)]
pub struct DiGraph<ID = u32, N = usize, A = usize> {
    /// The nodes.
    nodes: Arena<NodeData<ID>>,
    /// The arcs.
    arcs: Arena<ArcData<ID>>,
    /// External id of each node slot.
    node_ids: Vec<Option<N>>,
    /// External node id to handle.
    node_lookup: HashMap<N, Node<ID>>,
    /// External id of each arc slot (forward arcs only).
    arc_ids: Vec<Option<A>>,
    /// External arc id to handle of the forward arc.
    arc_lookup: HashMap<A, Arc<ID>>,
}

impl<ID, N, A> Default for DiGraph<ID, N, A> {
    fn default() -> Self {
        DiGraph {
            nodes: Arena::new(),
            arcs: Arena::new(),
            node_ids: vec![],
            node_lookup: HashMap::new(),
            arc_ids: vec![],
            arc_lookup: HashMap::new(),
        }
    }
}

impl<ID, N, A> DiGraph<ID, N, A>
where
    ID: PrimInt + Unsigned,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Return `true` if `u` refers to a live node.
    pub fn contains_node(&self, u: Node<ID>) -> bool {
        self.nodes.contains(u.index())
    }

    /// Return `true` if `a` refers to a live arc.
    pub fn contains_arc(&self, a: Arc<ID>) -> bool {
        self.arcs.contains(a.index())
    }

    /// Add a new anonymous node.
    pub fn new_node(&mut self) -> Node<ID> {
        let idx = self.nodes.insert(NodeData::default());
        if self.node_ids.len() < self.nodes.capacity() {
            self.node_ids.resize_with(self.nodes.capacity(), || None);
        }
        self.node_ids[idx] = None;
        Node::from_index(idx)
    }

    /// Add a new anonymous arc from `a` to `b` without a dual.
    ///
    /// Use [`set_dual`](DiGraph::set_dual) to link it with its
    /// reversed twin before handing the graph to a solver.
    pub fn new_arc(&mut self, a: Node<ID>, b: Node<ID>) -> Result<Arc<ID>> {
        if !self.contains_node(a) || !self.contains_node(b) {
            return Err(Error::InvalidHandle { what: "node" });
        }
        let idx = self.arcs.insert(ArcData {
            src: a,
            snk: b,
            dual: None,
        });
        if self.arc_ids.len() < self.arcs.capacity() {
            self.arc_ids.resize_with(self.arcs.capacity(), || None);
        }
        self.arc_ids[idx] = None;
        let arc = Arc::from_index(idx);
        self.nodes[a.index()].out_arcs.push(arc);
        self.nodes[b.index()].in_arcs.push(arc);
        Ok(arc)
    }

    /// Link two arcs as each other's dual.
    pub fn set_dual(&mut self, a1: Arc<ID>, a2: Arc<ID>) -> Result<()> {
        if !self.contains_arc(a1) || !self.contains_arc(a2) {
            return Err(Error::InvalidHandle { what: "arc" });
        }
        self.arcs[a1.index()].dual = Some(a2);
        self.arcs[a2.index()].dual = Some(a1);
        Ok(())
    }

    /// The source and sink node of an arc.
    ///
    /// Panics if `a` is not a live arc; the solvers assume well-formed
    /// input.
    pub fn arc_ends(&self, a: Arc<ID>) -> (Node<ID>, Node<ID>) {
        let data = &self.arcs[a.index()];
        (data.src, data.snk)
    }

    /// The dual of an arc.
    ///
    /// Panics if `a` is not a live arc or has no dual.
    pub fn arc_dual(&self, a: Arc<ID>) -> Arc<ID> {
        self.arcs[a.index()].dual.expect("arc without dual")
    }

    /// The arcs leaving node `u`.
    ///
    /// Panics if `u` is not a live node.
    pub fn out_arcs(&self, u: Node<ID>) -> &[Arc<ID>] {
        &self.nodes[u.index()].out_arcs
    }

    /// The arcs entering node `u`.
    ///
    /// Panics if `u` is not a live node.
    pub fn in_arcs(&self, u: Node<ID>) -> &[Arc<ID>] {
        &self.nodes[u.index()].in_arcs
    }

    /// The number of live nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of live arcs (counting both arcs of a dual pair).
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// The size of the node slot space.
    ///
    /// Parallel node property vectors must be at least this long.
    pub fn max_num_nodes(&self) -> usize {
        self.nodes.capacity()
    }

    /// The size of the arc slot space.
    ///
    /// Parallel arc property vectors must be at least this long.
    pub fn max_num_arcs(&self) -> usize {
        self.arcs.capacity()
    }

    /// Iterate over all live nodes in ascending handle order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<ID>> + '_ {
        self.nodes.indices().map(Node::from_index)
    }

    /// Iterate over all live arcs in ascending handle order.
    pub fn arcs(&self) -> impl Iterator<Item = Arc<ID>> + '_ {
        self.arcs.indices().map(Arc::from_index)
    }

    /// Remove `arc` from the incidence lists of `u`.
    fn rm_incident(&mut self, u: Node<ID>, arc: Arc<ID>) {
        let data = &mut self.nodes[u.index()];
        if let Some(pos) = data.out_arcs.iter().position(|&e| e == arc) {
            data.out_arcs.swap_remove(pos);
        }
        if let Some(pos) = data.in_arcs.iter().position(|&e| e == arc) {
            data.in_arcs.swap_remove(pos);
        }
    }
}

impl<ID, N, A> DiGraph<ID, N, A>
where
    ID: PrimInt + Unsigned,
    N: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Return `true` if node `u` carries an external id.
    pub fn has_node_id(&self, u: Node<ID>) -> bool {
        self.node_ids[u.index()].is_some()
    }

    /// Return `true` if arc `a` carries an external id.
    pub fn has_arc_id(&self, a: Arc<ID>) -> bool {
        self.arc_ids[a.index()].is_some()
    }

    /// The external id of node `u`, if it has one.
    pub fn node_id(&self, u: Node<ID>) -> Option<&N> {
        self.node_ids[u.index()].as_ref()
    }

    /// The external id of arc `a`, if it has one.
    ///
    /// Only the forward arc of a dual pair carries the id.
    pub fn arc_id(&self, a: Arc<ID>) -> Option<&A> {
        self.arc_ids[a.index()].as_ref()
    }

    /// Look up a node by its external id.
    pub fn get_node(&self, id: &N) -> Option<Node<ID>> {
        self.node_lookup.get(id).copied()
    }

    /// Look up the forward arc bound to an external id.
    pub fn get_arc(&self, id: &A) -> Option<Arc<ID>> {
        self.arc_lookup.get(id).copied()
    }

    /// Add a node with an external id.
    ///
    /// If a node with this id exists its handle is returned instead.
    pub fn add_node(&mut self, id: N) -> Node<ID> {
        if let Some(u) = self.get_node(&id) {
            return u;
        }
        let u = self.new_node();
        self.node_ids[u.index()] = Some(id.clone());
        self.node_lookup.insert(id, u);
        u
    }

    /// Add a dual pair of arcs between the nodes with external ids `a`
    /// and `b`, creating the nodes as needed.
    ///
    /// The external id `id` is bound to the forward arc. Returns the
    /// pair `(forward, reverse)`, or [`Error::DuplicateId`] if `id` is
    /// already bound.
    pub fn add_arc(&mut self, a: N, b: N, id: A) -> Result<(Arc<ID>, Arc<ID>)> {
        if self.arc_lookup.contains_key(&id) {
            return Err(Error::DuplicateId);
        }
        let na = self.add_node(a);
        let nb = self.add_node(b);
        let fwd = self.new_arc(na, nb)?;
        let rev = self.new_arc(nb, na)?;
        self.set_dual(fwd, rev)?;
        self.arc_ids[fwd.index()] = Some(id.clone());
        self.arc_lookup.insert(id, fwd);
        Ok((fwd, rev))
    }

    /// Erase a single arc.
    ///
    /// Erasing a dead handle is a no-op. The dual of the arc is left
    /// untouched; use [`remove_arc`](DiGraph::remove_arc) to drop a
    /// whole pair by id.
    pub fn erase_arc(&mut self, a: Arc<ID>) {
        if !self.contains_arc(a) {
            return;
        }
        let (u, v) = self.arc_ends(a);
        self.rm_incident(u, a);
        self.rm_incident(v, a);
        if let Some(id) = self.arc_ids[a.index()].take() {
            self.arc_lookup.remove(&id);
        }
        self.arcs.remove(a.index());
        self.arc_ids.truncate(self.arcs.capacity());
    }

    /// Erase a node together with all its incident arcs.
    ///
    /// Erasing a dead handle is a no-op.
    pub fn erase_node(&mut self, u: Node<ID>) {
        if !self.contains_node(u) {
            return;
        }
        let incident: Vec<Arc<ID>> = {
            let data = &self.nodes[u.index()];
            data.in_arcs.iter().chain(data.out_arcs.iter()).copied().collect()
        };
        for arc in incident {
            self.erase_arc(arc);
        }
        if let Some(id) = self.node_ids[u.index()].take() {
            self.node_lookup.remove(&id);
        }
        self.nodes.remove(u.index());
        self.node_ids.truncate(self.nodes.capacity());
    }

    /// Erase the node with the given external id, if any.
    pub fn remove_node(&mut self, id: &N) {
        if let Some(u) = self.get_node(id) {
            self.erase_node(u);
        }
    }

    /// Erase the dual pair whose forward arc is bound to the given
    /// external id, if any.
    pub fn remove_arc(&mut self, id: &A) {
        if let Some(a) = self.get_arc(id) {
            let dual = self.arc_dual(a);
            self.erase_arc(a);
            self.erase_arc(dual);
        }
    }
}
