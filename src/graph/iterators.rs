// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Iterators over nodes and flows in a `FlowGraph`.

use petgraph::graph::DiGraph;

use crate::{Flow, FlowGraph, Node};

/// An iterator over the nodes in a `FlowGraph`, in canonical order.
pub struct Nodes<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<N>>,
}

impl<'a, N> Iterator for Nodes<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the flows in a `FlowGraph`.
pub struct FlowValues<'a, N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    pub(crate) fg: &'a FlowGraph<N, E>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<f64>>,
}

impl<'a, N, E> Iterator for FlowValues<'a, N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .and_then(|e| self.fg.flows.get(&(e.source(), e.target())))
    }
}

/// An iterator over the neighbors of a node in a `FlowGraph`.
pub struct Neighbors<'a, N>
where
    N: Node,
{
    pub(crate) graph: &'a DiGraph<N, f64>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, f64>,
}

impl<'a, N> Iterator for Neighbors<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
