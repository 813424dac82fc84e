// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Methods for retrieving nodes and flows from a [`FlowGraph`].

use petgraph::graph::NodeIndex;

use crate::iterators::{FlowValues, Neighbors, Nodes};
use crate::{Error, Flow, FlowGraph, Node};

/// `Node` and `Flow` retrieval.
impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Returns the node with the given key, if it exists.
    pub fn node(&self, key: N::Key) -> Result<&N, Error> {
        self.index_of(&key).map(|i| &self.graph[i])
    }

    /// Returns the position of the node with the given key in the canonical
    /// node order.
    pub fn node_position(&self, key: N::Key) -> Result<usize, Error> {
        self.index_of(&key).map(|i| i.index())
    }

    /// Returns the node keys in canonical order.
    pub fn node_keys(&self) -> Vec<N::Key> {
        self.graph.raw_nodes().iter().map(|n| n.weight.key()).collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of flows in the graph.
    pub fn flow_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over the nodes in the graph, in canonical order.
    pub fn nodes(&self) -> Nodes<N> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the flows in the graph.
    pub fn flows(&self) -> FlowValues<N, E> {
        FlowValues {
            fg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns the flow between the given pair of nodes, or `None` if the
    /// pair is not connected.
    ///
    /// When parallel flows were merged at construction time, this is the
    /// first flow seen for the pair; the merged weight is available through
    /// [`flow_weight`][FlowGraph::flow_weight].
    pub fn flow(&self, source: N::Key, target: N::Key) -> Result<Option<&E>, Error> {
        let source_index = self.index_of(&source)?;
        let target_index = self.index_of(&target)?;

        Ok(self.flows.get(&(source_index, target_index)))
    }

    /// Returns the total flow weight between the given pair of nodes.
    ///
    /// An unconnected pair has weight `0.0`.  A pair `(k, k)` addresses the
    /// self-loop weight of node `k`.
    pub fn flow_weight(&self, source: N::Key, target: N::Key) -> Result<f64, Error> {
        let source_index = self.index_of(&source)?;
        let target_index = self.index_of(&target)?;

        Ok(self
            .graph
            .find_edge(source_index, target_index)
            .map_or(0.0, |e| self.graph[e]))
    }

    /// Returns an iterator over the *predecessors* of the node with the given
    /// key.
    ///
    /// Returns an error if the given key does not exist.
    pub fn predecessors(&self, key: N::Key) -> Result<Neighbors<N>, Error> {
        self.index_of(&key).map(|index| Neighbors {
            graph: &self.graph,
            iter: self
                .graph
                .neighbors_directed(index, petgraph::Direction::Incoming),
        })
    }

    /// Returns an iterator over the *successors* of the node with the given
    /// key.
    ///
    /// Returns an error if the given key does not exist.
    pub fn successors(&self, key: N::Key) -> Result<Neighbors<N>, Error> {
        self.index_of(&key).map(|index| Neighbors {
            graph: &self.graph,
            iter: self
                .graph
                .neighbors_directed(index, petgraph::Direction::Outgoing),
        })
    }

    pub(crate) fn index_of(&self, key: &N::Key) -> Result<NodeIndex, Error> {
        self.node_indices
            .get(key)
            .copied()
            .ok_or_else(|| Error::node_not_found(format!("Node with key {} not found.", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestFlow, TestNode};
    use crate::FlowGraphConfig;

    fn nodes_and_flows() -> (Vec<TestNode>, Vec<TestFlow>) {
        let nodes = vec![
            TestNode("ber"),
            TestNode("ham"),
            TestNode("muc"),
            TestNode("cgn"),
        ];
        let flows = vec![
            TestFlow("ber", "ham", 4.0),
            TestFlow("ham", "ber", 2.0),
            TestFlow("ber", "muc", 1.5),
            TestFlow("muc", "cgn", 3.0),
            TestFlow("cgn", "cgn", 0.5),
        ];

        (nodes, flows)
    }

    #[test]
    fn test_node() -> Result<(), Error> {
        let (nodes, flows) = nodes_and_flows();
        let graph = FlowGraph::try_new(nodes, flows, FlowGraphConfig::default())?;

        assert_eq!(graph.node("ber"), Ok(&TestNode("ber")));
        assert_eq!(graph.node("cgn"), Ok(&TestNode("cgn")));
        assert_eq!(
            graph.node("sxf"),
            Err(Error::node_not_found("Node with key sxf not found."))
        );

        Ok(())
    }

    #[test]
    fn test_canonical_order() -> Result<(), Error> {
        let (nodes, flows) = nodes_and_flows();
        let graph = FlowGraph::try_new(nodes.clone(), flows, FlowGraphConfig::default())?;

        assert_eq!(graph.node_keys(), vec!["ber", "ham", "muc", "cgn"]);
        assert_eq!(graph.node_position("ber"), Ok(0));
        assert_eq!(graph.node_position("cgn"), Ok(3));
        assert!(graph.nodes().eq(&nodes));

        Ok(())
    }

    #[test]
    fn test_flows() -> Result<(), Error> {
        let (nodes, flows) = nodes_and_flows();
        let graph = FlowGraph::try_new(nodes, flows.clone(), FlowGraphConfig::default())?;

        assert!(graph.flows().eq(&flows));
        assert_eq!(graph.flow_count(), 5);

        assert_eq!(graph.flow("ber", "ham"), Ok(Some(&TestFlow("ber", "ham", 4.0))));
        assert_eq!(graph.flow("ham", "muc"), Ok(None));
        assert_eq!(graph.flow_weight("ber", "ham"), Ok(4.0));
        assert_eq!(graph.flow_weight("ham", "muc"), Ok(0.0));
        assert_eq!(graph.flow_weight("cgn", "cgn"), Ok(0.5));
        assert_eq!(
            graph.flow_weight("ber", "sxf"),
            Err(Error::node_not_found("Node with key sxf not found."))
        );

        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<(), Error> {
        let (nodes, flows) = nodes_and_flows();
        let graph = FlowGraph::try_new(nodes, flows, FlowGraphConfig::default())?;

        assert!(graph
            .successors("ber")
            .is_ok_and(|x| x.eq(&[TestNode("muc"), TestNode("ham")])));

        assert!(graph
            .predecessors("cgn")
            .is_ok_and(|x| x.eq(&[TestNode("cgn"), TestNode("muc")])));

        assert!(graph
            .predecessors("sxf")
            .is_err_and(|e| e == Error::node_not_found("Node with key sxf not found.")));

        Ok(())
    }
}
