// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Connectivity structure of a [`FlowGraph`]: weakly and strongly connected
//! components, ranked by size.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::unionfind::UnionFind;

use crate::{Flow, FlowGraph, Node};

/// A labeling of the nodes of a graph by connected component.
///
/// Raw component ids are assigned in first-discovery order over the canonical
/// node order, so they are deterministic for a fixed graph.  Ranked ids
/// relabel components by descending size, with rank `0` always the largest;
/// equally sized components keep their discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentLabeling {
    raw: Vec<usize>,
    ranked: Vec<usize>,
    sizes: Vec<usize>,
}

impl ComponentLabeling {
    /// Builds a labeling from an arbitrary per-node component membership,
    /// renumbering ids by first appearance in canonical order.
    fn from_membership(membership: &[usize]) -> Self {
        let mut raw = vec![0; membership.len()];
        let mut discovery: HashMap<usize, usize> = HashMap::new();
        for (position, &member) in membership.iter().enumerate() {
            let next = discovery.len();
            raw[position] = *discovery.entry(member).or_insert(next);
        }

        let mut counts = vec![0; discovery.len()];
        for &id in &raw {
            counts[id] += 1;
        }

        // Stable sort on descending size; first-discovered wins ties.
        let mut order: Vec<usize> = (0..counts.len()).collect();
        order.sort_by_key(|&id| std::cmp::Reverse(counts[id]));

        let mut rank = vec![0; counts.len()];
        for (r, &id) in order.iter().enumerate() {
            rank[id] = r;
        }

        Self {
            ranked: raw.iter().map(|&id| rank[id]).collect(),
            sizes: order.iter().map(|&id| counts[id]).collect(),
            raw,
        }
    }

    /// Returns the component id of every node, in first-discovery order.
    pub fn raw(&self) -> &[usize] {
        &self.raw
    }

    /// Returns the component rank of every node; rank `0` is the largest
    /// component.
    pub fn ranked(&self) -> &[usize] {
        &self.ranked
    }

    /// Returns the component sizes by rank.  Non-increasing by construction.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of components.
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns, for every node, `1` if it belongs to the largest component
    /// and `0` otherwise.
    pub fn largest_indicator(&self) -> Vec<u8> {
        self.ranked.iter().map(|&r| u8::from(r == 0)).collect()
    }
}

/// Component decomposition.
impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Computes the weakly connected components of the graph.
    pub fn weakly_connected_components(&self) -> ComponentLabeling {
        let mut vertex_sets = UnionFind::new(self.graph.node_count());
        for edge in self.graph.raw_edges() {
            vertex_sets.union(edge.source().index(), edge.target().index());
        }

        let membership: Vec<usize> = (0..self.graph.node_count())
            .map(|i| vertex_sets.find(i))
            .collect();
        ComponentLabeling::from_membership(&membership)
    }

    /// Computes the strongly connected components of the graph.
    pub fn strongly_connected_components(&self) -> ComponentLabeling {
        let mut membership = vec![0; self.graph.node_count()];
        for (id, component) in tarjan_scc(&self.graph).into_iter().enumerate() {
            for index in component {
                membership[index.index()] = id;
            }
        }
        ComponentLabeling::from_membership(&membership)
    }

    /// Returns, for every node, the number of largest components it belongs
    /// to: `2` if it is in both the largest weakly and the largest strongly
    /// connected component, `1` if in exactly one, `0` if in neither.
    pub fn largest_components(&self) -> Vec<u8> {
        let wcc = self.weakly_connected_components();
        let scc = self.strongly_connected_components();
        tracing::debug!(
            wcc = wcc.component_count(),
            scc = scc.component_count(),
            "decomposed graph into connected components"
        );

        wcc.largest_indicator()
            .iter()
            .zip(scc.largest_indicator())
            .map(|(w, s)| w + s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestFlow, TestNode};
    use crate::FlowGraphConfig;

    fn graph(
        nodes: &[&'static str],
        flows: &[(&'static str, &'static str)],
    ) -> FlowGraph<TestNode, TestFlow> {
        FlowGraph::try_new(
            nodes.iter().map(|&k| TestNode(k)).collect::<Vec<_>>(),
            flows
                .iter()
                .map(|&(s, t)| TestFlow(s, t, 1.0))
                .collect::<Vec<_>>(),
            FlowGraphConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_node() {
        let graph = graph(&["a"], &[]);

        assert_eq!(graph.weakly_connected_components().sizes(), &[1]);
        assert_eq!(graph.strongly_connected_components().sizes(), &[1]);
        assert_eq!(graph.largest_components(), vec![2]);
    }

    #[test]
    fn test_reciprocal_pairs() {
        // Two disjoint reciprocal pairs; equally sized components.
        let graph = graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")],
        );

        let wcc = graph.weakly_connected_components();
        assert_eq!(wcc.sizes(), &[2, 2]);
        // The first-discovered pair takes rank 0.
        assert_eq!(wcc.ranked(), &[0, 0, 1, 1]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.sizes(), &[2, 2]);
        assert_eq!(scc.ranked(), &[0, 0, 1, 1]);

        assert_eq!(graph.largest_components(), vec![2, 2, 0, 0]);
    }

    #[test]
    fn test_directed_chain() {
        // One weak component, but every node is its own strong component.
        let graph = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        let wcc = graph.weakly_connected_components();
        assert_eq!(wcc.sizes(), &[3]);
        assert_eq!(wcc.ranked(), &[0, 0, 0]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.sizes(), &[1, 1, 1]);
        assert_eq!(scc.component_count(), 3);
        // Singleton ties keep canonical discovery order.
        assert_eq!(scc.ranked(), &[0, 1, 2]);

        assert_eq!(graph.largest_components(), vec![2, 1, 1]);
    }

    #[test]
    fn test_ranking_by_size() {
        // A small cycle and a larger cycle; the larger one must take rank 0
        // even though it is discovered later.
        let graph = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "e"), ("e", "c")],
        );

        let wcc = graph.weakly_connected_components();
        assert_eq!(wcc.sizes(), &[3, 2]);
        assert_eq!(wcc.ranked(), &[1, 1, 0, 0, 0]);
        assert_eq!(wcc.raw(), &[0, 0, 1, 1, 1]);
        assert_eq!(wcc.largest_indicator(), vec![0, 0, 1, 1, 1]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.sizes(), &[3, 2]);
        assert_eq!(scc.ranked(), &[1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_determinism() {
        let graph = graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")],
        );

        assert_eq!(
            graph.weakly_connected_components(),
            graph.weakly_connected_components()
        );
        assert_eq!(
            graph.strongly_connected_components(),
            graph.strongly_connected_components()
        );
    }
}
