// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! A graph representation of a directed, weighted flow network, and the
//! analysis methods that operate on it.

mod creation;
mod retrieval;

mod adjacency;
mod components;
mod coverage;
pub mod iterators;

pub use adjacency::Adjacency;
pub use components::ComponentLabeling;

use crate::{Flow, FlowGraphConfig, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Node`s stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any node key, so
/// that nodes in the `DiGraph` can be retrieved from their keys.  The
/// `NodeIndex` order is the canonical node order: every vector or matrix
/// derived from the graph is indexed by it.
pub(crate) type NodeIndexMap<K> = HashMap<K, NodeIndex>;

/// `Flow`s are not stored in the `DiGraph` instance, so we need to store them
/// separately.  Only the flow weight lives on the graph edge.
///
/// `FlowMap` can be used to lookup the `Flow` for any pair of source and
/// target `NodeIndex` values.
pub(crate) type FlowMap<E> = HashMap<(NodeIndex, NodeIndex), E>;

/// A graph representation of a directed, weighted flow network.
///
/// Self-loops are legal and contribute to the diagonal of the adjacency
/// matrix.  Instances are immutable once built; every analysis method returns
/// freshly allocated results.
pub struct FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    graph: DiGraph<N, f64>,
    node_indices: NodeIndexMap<N::Key>,
    flows: FlowMap<E>,
    config: FlowGraphConfig,
}
