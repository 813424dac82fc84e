// License: MIT
// Copyright © 2026 Flow Network Partition contributors

/*!
# Flow Network Partition

This is a library for representing a flow network — mobility flows between
locations, for example — as a directed weighted graph, and for scoring node
partitions (community assignments) produced by an external multiscale
clustering procedure against it.

## The `Node` and `Flow` traits

The main struct is [`FlowGraph`], instances of which can be created by
passing an iterator of nodes and the flows between them to the
[`try_new`][FlowGraph::try_new] method.

But because `flow_network_partition` is an independent library, it doesn't
know about the node and flow types of the data set at hand and instead uses
traits to interact with them.

Therefore, to be usable with this library, the node and flow types must
implement the [`Node`] and [`Flow`] traits, respectively.  Check out the
documentation for these traits for sample implementations.

The order in which nodes are passed to `try_new` is the canonical node order:
every vector and matrix this library produces is indexed by it.

## Connectivity structure

A graph decomposes into weakly and strongly connected components with
[`weakly_connected_components`][FlowGraph::weakly_connected_components] and
[`strongly_connected_components`][FlowGraph::strongly_connected_components];
components are ranked by size with rank `0` the largest, and
[`largest_components`][FlowGraph::largest_components] marks each node with
the number of largest components it belongs to.

## Partition scoring

A [`Partition`] assigns a community label to every node.  The following
methods score it against the graph's flow:

- [`coverage`][FlowGraph::coverage] — the fraction of all flow that stays
  within a community, with or without self-loops.
- [`community_coverage`][FlowGraph::community_coverage] — the same per
  community, against the flow leaving that community's nodes.
- [`nodal_containment`][FlowGraph::nodal_containment] — per node, the
  fraction of its out-flow retained by its own community.

Ratios that are undefined for degenerate input (no flow, empty community,
isolated node) are returned as `None` rather than an arbitrary number.

## Partition comparison

Two partitions over the same node order are compared with the
information-theoretic distance functions: [`entropy`],
[`variation_of_information`],
[`normalised_variation_of_information`] and
[`normalised_conditional_entropy`].
*/

mod config;
pub use config::FlowGraphConfig;

mod graph;
pub use graph::{iterators, Adjacency, ComponentLabeling, FlowGraph};

mod graph_traits;
pub use graph_traits::{Flow, Node, NodeKey};

mod partition;
pub use partition::{IndicatorMatrix, Partition};

mod comparison;
pub use comparison::{
    entropy, normalised_conditional_entropy, normalised_variation_of_information,
    normalised_variation_of_information_matrix, variation_of_information,
};

mod error;
pub use error::Error;
